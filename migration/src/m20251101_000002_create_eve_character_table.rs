use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_create_eve_corporation_table::EveCorporation;

static IDX_EVE_CHARACTER_CORPORATION_ID: &str = "idx_eve_character_corporation_id";
static FK_EVE_CHARACTER_CORPORATION_ID: &str = "fk_eve_character_corporation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(EveCharacter::Id))
                    .col(big_integer_uniq(EveCharacter::CharacterId))
                    .col(integer(EveCharacter::CorporationId))
                    .col(string(EveCharacter::Name))
                    .col(timestamp(EveCharacter::CreatedAt))
                    .col(timestamp(EveCharacter::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVE_CHARACTER_CORPORATION_ID)
                    .table(EveCharacter::Table)
                    .col(EveCharacter::CorporationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVE_CHARACTER_CORPORATION_ID)
                    .from_tbl(EveCharacter::Table)
                    .from_col(EveCharacter::CorporationId)
                    .to_tbl(EveCorporation::Table)
                    .to_col(EveCorporation::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EVE_CHARACTER_CORPORATION_ID)
                    .table(EveCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVE_CHARACTER_CORPORATION_ID)
                    .table(EveCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EveCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EveCharacter {
    Table,
    Id,
    CharacterId,
    CorporationId,
    Name,
    CreatedAt,
    UpdatedAt,
}
