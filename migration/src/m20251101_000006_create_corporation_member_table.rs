use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_create_eve_corporation_table::EveCorporation,
    m20251101_000002_create_eve_character_table::EveCharacter,
};

static IDX_CORPORATION_MEMBER_CORPORATION_ID: &str = "idx_corporation_member_corporation_id";
static FK_CORPORATION_MEMBER_CORPORATION_ID: &str = "fk_corporation_member_corporation_id";
static FK_CORPORATION_MEMBER_EVE_CHARACTER_ID: &str = "fk_corporation_member_eve_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CorporationMember::Table)
                    .if_not_exists()
                    .col(big_integer(CorporationMember::CharacterId).primary_key())
                    .col(integer(CorporationMember::CorporationId))
                    .col(integer_null(CorporationMember::EveCharacterId))
                    .col(string_null(CorporationMember::Name))
                    .col(big_integer_null(CorporationMember::LocationId))
                    .col(big_integer_null(CorporationMember::ShipTypeId))
                    .col(timestamp_null(CorporationMember::LogonAt))
                    .col(timestamp_null(CorporationMember::LogoffAt))
                    .col(timestamp_null(CorporationMember::StartAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CORPORATION_MEMBER_CORPORATION_ID)
                    .table(CorporationMember::Table)
                    .col(CorporationMember::CorporationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CORPORATION_MEMBER_CORPORATION_ID)
                    .from_tbl(CorporationMember::Table)
                    .from_col(CorporationMember::CorporationId)
                    .to_tbl(EveCorporation::Table)
                    .to_col(EveCorporation::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CORPORATION_MEMBER_EVE_CHARACTER_ID)
                    .from_tbl(CorporationMember::Table)
                    .from_col(CorporationMember::EveCharacterId)
                    .to_tbl(EveCharacter::Table)
                    .to_col(EveCharacter::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CORPORATION_MEMBER_EVE_CHARACTER_ID)
                    .table(CorporationMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CORPORATION_MEMBER_CORPORATION_ID)
                    .table(CorporationMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CORPORATION_MEMBER_CORPORATION_ID)
                    .table(CorporationMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CorporationMember::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CorporationMember {
    Table,
    CharacterId,
    CorporationId,
    EveCharacterId,
    Name,
    LocationId,
    ShipTypeId,
    LogonAt,
    LogoffAt,
    StartAt,
}
