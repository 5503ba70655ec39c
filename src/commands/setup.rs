//! Setup command - Feature table plus sample data in one pass.

use crate::cli::args::SetupArgs;
use crate::commands::migrate::step_mode;
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::db::seeds::{setup, teardown};
use crate::infra::{Database, Direction, ScriptRunner};

/// Execute the setup command
pub async fn execute(args: SetupArgs, config: Config) -> AppResult<()> {
    let feature = args.feature;
    let (scripts, direction) = if args.revert {
        tracing::warn!(%feature, "Reverting feature setup...");
        (teardown(feature), Direction::Revert)
    } else {
        tracing::info!(%feature, "Setting up feature...");
        (setup(feature), Direction::Apply)
    };
    let mode = step_mode(args.transactional);

    let executed = Database::scoped(&config.database, |db| {
        Box::pin(async move {
            ScriptRunner::new(db)
                .direction(direction)
                .mode(mode)
                .run(&scripts)
                .await
        })
    })
    .await?;

    tracing::info!(%feature, executed, "Setup finished");
    Ok(())
}
