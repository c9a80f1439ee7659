use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use lookbook_jobs::cli::{Command, JobConfig};
use lookbook_jobs::migrate::Migrator;
use lookbook_jobs::{roster, seed};
use lookbook_storage::{ObjectStore, StorageGateway};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loaded before parsing so clap's env fallbacks see `.env` values.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lookbook_jobs=info,lookbook_storage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = JobConfig::parse();
    let storage: Arc<dyn ObjectStore> = Arc::new(StorageGateway::from_env());
    let mut out = std::io::stdout();

    match &config.command {
        Command::Migrate(args) => {
            // Checked before connecting so a misconfigured run touches nothing.
            if !storage.is_enabled() {
                return Err(lookbook_jobs::JobError::StorageDisabled.into());
            }
            let pool = connect(&config).await?;
            let migrator =
                Migrator::new(&pool, storage.as_ref(), &config.media_root, args.options())?;
            let report = migrator.run(args.scope(), &mut out).await?;
            if report.total().errors > 0 {
                tracing::warn!(errors = report.total().errors, "Migration finished with errors");
            }
        }
        Command::SeedMedia => {
            let pool = connect(&config).await?;
            seed::seed_media(&pool, &config.media_root, &mut out).await?;
        }
        Command::SeedMembers { roster: roster_path } => {
            let roster = match roster_path {
                Some(path) => roster::load_roster(path)?,
                None => roster::default_roster(),
            };
            let pool = connect(&config).await?;
            seed::seed_members(&pool, &config.media_root, &roster, &mut out).await?;
        }
        Command::DeleteObject { url } => {
            lookbook_jobs::delete_object(storage.as_ref(), url, &mut out).await?;
        }
    }

    Ok(())
}

async fn connect(config: &JobConfig) -> anyhow::Result<lookbook_db::DbPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let pool = lookbook_db::create_pool(database_url)
        .await
        .context("Failed to connect to database")?;
    lookbook_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database ready");
    Ok(pool)
}
