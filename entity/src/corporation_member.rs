use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "corporation_member")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub character_id: i64,
    pub corporation_id: i32,
    pub eve_character_id: Option<i32>,
    pub name: Option<String>,
    pub location_id: Option<i64>,
    pub ship_type_id: Option<i64>,
    pub logon_at: Option<DateTime>,
    pub logoff_at: Option<DateTime>,
    pub start_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::eve_corporation::Entity",
        from = "Column::CorporationId",
        to = "super::eve_corporation::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    EveCorporation,
    #[sea_orm(
        belongs_to = "super::eve_character::Entity",
        from = "Column::EveCharacterId",
        to = "super::eve_character::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    EveCharacter,
}

impl Related<super::eve_corporation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCorporation.def()
    }
}

impl Related<super::eve_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
