use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "director_character")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub director_index: i32,
    pub character_id: i64,
    pub character_name: String,
    pub corporation_id: i64,
    pub corporation_name: String,
    pub corporation_ticker: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::director_token::Entity")]
    DirectorToken,
}

impl Related<super::director_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DirectorToken.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
