use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DirectorCharacter::Table)
                    .if_not_exists()
                    .col(integer(DirectorCharacter::DirectorIndex).primary_key())
                    .col(big_integer(DirectorCharacter::CharacterId))
                    .col(string(DirectorCharacter::CharacterName))
                    .col(big_integer(DirectorCharacter::CorporationId))
                    .col(string(DirectorCharacter::CorporationName))
                    .col(string(DirectorCharacter::CorporationTicker))
                    .col(timestamp(DirectorCharacter::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DirectorCharacter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DirectorCharacter {
    Table,
    DirectorIndex,
    CharacterId,
    CharacterName,
    CorporationId,
    CorporationName,
    CorporationTicker,
    CreatedAt,
}
