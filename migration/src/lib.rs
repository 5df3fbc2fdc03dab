pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_eve_corporation_table;
mod m20251101_000002_create_eve_character_table;
mod m20251101_000003_create_eve_character_token_table;
mod m20251101_000004_create_director_character_table;
mod m20251101_000005_create_director_token_table;
mod m20251101_000006_create_corporation_member_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_eve_corporation_table::Migration),
            Box::new(m20251101_000002_create_eve_character_table::Migration),
            Box::new(m20251101_000003_create_eve_character_token_table::Migration),
            Box::new(m20251101_000004_create_director_character_table::Migration),
            Box::new(m20251101_000005_create_director_token_table::Migration),
            Box::new(m20251101_000006_create_corporation_member_table::Migration),
        ]
    }
}
