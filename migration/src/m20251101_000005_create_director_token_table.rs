use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000004_create_director_character_table::DirectorCharacter;

static FK_DIRECTOR_TOKEN_DIRECTOR_INDEX: &str = "fk_director_token_director_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DirectorToken::Table)
                    .if_not_exists()
                    .col(integer(DirectorToken::DirectorIndex).primary_key())
                    .col(text(DirectorToken::AccessToken))
                    .col(text(DirectorToken::RefreshToken))
                    .col(timestamp_null(DirectorToken::ExpiresAt))
                    .col(timestamp(DirectorToken::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DIRECTOR_TOKEN_DIRECTOR_INDEX)
                    .from_tbl(DirectorToken::Table)
                    .from_col(DirectorToken::DirectorIndex)
                    .to_tbl(DirectorCharacter::Table)
                    .to_col(DirectorCharacter::DirectorIndex)
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
                    .name(FK_DIRECTOR_TOKEN_DIRECTOR_INDEX)
                    .table(DirectorToken::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DirectorToken::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DirectorToken {
    Table,
    DirectorIndex,
    AccessToken,
    RefreshToken,
    ExpiresAt,
    UpdatedAt,
}
