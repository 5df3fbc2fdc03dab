use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveCorporation::Table)
                    .if_not_exists()
                    .col(pk_auto(EveCorporation::Id))
                    .col(big_integer_uniq(EveCorporation::CorporationId))
                    .col(big_integer_null(EveCorporation::AllianceId))
                    .col(string(EveCorporation::Name))
                    .col(string(EveCorporation::Ticker))
                    .col(timestamp(EveCorporation::CreatedAt))
                    .col(timestamp(EveCorporation::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EveCorporation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EveCorporation {
    Table,
    Id,
    CorporationId,
    AllianceId,
    Name,
    Ticker,
    CreatedAt,
    UpdatedAt,
}
