//! Seeds the student table at startup.
//!
//! Run with:
//! ```
//! cargo run -p student-seed --bin seed
//! ```
//!
//! Pick the record set with `STUDENT_SEED_VARIANT=a|b` or point
//! `STUDENT_SEED_FILE` at a JSON array of records.

use student_seed::config::SeedConfig;
use student_seed::db::Seeder;
use students::database::{self, PgStudentRepository};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env()?;
    let records = config.records()?;

    let pool = database::connect(&config.database_url, config.max_connections).await?;

    tracing::info!("Connected to database");

    if config.run_migrations {
        database::migrate(&pool).await?;
        tracing::info!("Migrations applied");
    }

    tracing::info!("Seed source: {:?}", config.source);

    Seeder::new(PgStudentRepository::new(pool))
        .with_records(records)
        .seed()
        .await?;

    tracing::info!("Seed completed!");

    Ok(())
}
