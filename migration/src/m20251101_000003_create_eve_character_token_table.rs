use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_create_eve_character_table::EveCharacter;

static FK_EVE_CHARACTER_TOKEN_CHARACTER_ID: &str = "fk_eve_character_token_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveCharacterToken::Table)
                    .if_not_exists()
                    .col(pk_auto(EveCharacterToken::Id))
                    .col(integer_uniq(EveCharacterToken::CharacterId))
                    .col(text(EveCharacterToken::AccessToken))
                    .col(text(EveCharacterToken::RefreshToken))
                    .col(timestamp_null(EveCharacterToken::ExpiresAt))
                    .col(timestamp(EveCharacterToken::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVE_CHARACTER_TOKEN_CHARACTER_ID)
                    .from_tbl(EveCharacterToken::Table)
                    .from_col(EveCharacterToken::CharacterId)
                    .to_tbl(EveCharacter::Table)
                    .to_col(EveCharacter::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EVE_CHARACTER_TOKEN_CHARACTER_ID)
                    .table(EveCharacterToken::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EveCharacterToken::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EveCharacterToken {
    Table,
    Id,
    CharacterId,
    AccessToken,
    RefreshToken,
    ExpiresAt,
    UpdatedAt,
}
