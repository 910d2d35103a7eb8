use sea_orm_migration::prelude::*;

use fuelpoint_chatlink_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
