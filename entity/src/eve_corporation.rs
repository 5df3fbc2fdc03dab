use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "eve_corporation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub corporation_id: i64,
    pub alliance_id: Option<i64>,
    pub name: String,
    pub ticker: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::corporation_member::Entity")]
    CorporationMember,
    #[sea_orm(has_many = "super::eve_character::Entity")]
    EveCharacter,
}

impl Related<super::corporation_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CorporationMember.def()
    }
}

impl Related<super::eve_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
