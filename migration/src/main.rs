use crate::{
    domain::{migration::migration_steps, persistence::Persistence, workflow_tables},
    infrastructure::{persistence::PersistenceAdapter, settings::Settings},
};
use copydesk_common::database;

pub mod domain;
pub mod infrastructure;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    let database = database::connect(&settings.database).await?;
    println!("Connected to DB");
    let persistence = PersistenceAdapter::new(database);

    // bring the database schema in line with the workflow tables
    let steps = migration_steps(workflow_tables(), &persistence).await?;
    persistence.apply_migration_steps(steps).await?;
    println!("Schema migrated");

    Ok(())
}
