//! Admin command - Create or reset the admin account.

use sea_orm_migration::MigrationTrait;
use validator::Validate;

use crate::cli::args::AdminArgs;
use crate::config::Config;
use crate::domain::{NewUser, Password, UserRole};
use crate::errors::AppResult;
use crate::infra::db::seeds::{bootstrap, AdminUpsert};
use crate::infra::{Database, ScriptRunner};

/// Execute the admin command
pub async fn execute(args: AdminArgs, config: Config) -> AppResult<()> {
    let user = admin_user(&args)?;
    let email = user.email.clone();

    // The users table must exist before the upsert
    let mut scripts: Vec<Box<dyn MigrationTrait>> = bootstrap();
    scripts.push(Box::new(AdminUpsert::new(user)));

    Database::scoped(&config.database, |db| {
        Box::pin(async move { ScriptRunner::new(db).run(&scripts).await })
    })
    .await?;

    tracing::info!(email = %email, "Admin bootstrap complete");
    Ok(())
}

/// Validate input and hash the password. Nothing here touches the database.
fn admin_user(args: &AdminArgs) -> AppResult<NewUser> {
    let user = NewUser::new(args.email.trim(), args.name.trim(), UserRole::Admin);
    user.validate()?;

    let password = Password::new(&args.password)?;
    Ok(user.with_password(password))
}
