use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "director_token")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub director_index: i32,
    #[sea_orm(column_type = "Text")]
    pub access_token: String,
    #[sea_orm(column_type = "Text")]
    pub refresh_token: String,
    pub expires_at: Option<DateTime>,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::director_character::Entity",
        from = "Column::DirectorIndex",
        to = "super::director_character::Column::DirectorIndex",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    DirectorCharacter,
}

impl Related<super::director_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DirectorCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
