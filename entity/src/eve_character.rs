use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "eve_character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub character_id: i64,
    pub corporation_id: i32,
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::eve_corporation::Entity",
        from = "Column::CorporationId",
        to = "super::eve_corporation::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    EveCorporation,
    #[sea_orm(has_one = "super::eve_character_token::Entity")]
    EveCharacterToken,
    #[sea_orm(has_many = "super::corporation_member::Entity")]
    CorporationMember,
}

impl Related<super::eve_corporation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCorporation.def()
    }
}

impl Related<super::eve_character_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCharacterToken.def()
    }
}

impl Related<super::corporation_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CorporationMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
