//! Bootstrap CLI for seeding an admin account.
//!
//! Admins cannot be created through the public register action, so the first
//! one is inserted directly. Re-running with an existing email fails on the
//! unique constraint rather than overwriting the account.

use anyhow::{bail, Context, Result};
use clap::Parser;
use sqlx::postgres::PgPoolOptions;

use campus_core::common::validate;
use campus_core::config::Config;
use campus_core::domains::auth::Argon2PasswordHasher;
use campus_core::domains::users::User;
use campus_core::kernel::BasePasswordHasher;

#[derive(Parser)]
#[command(name = "create_admin")]
#[command(about = "Seed an admin account for the CampusConnect API")]
struct Cli {
    /// Display name for the admin account
    #[arg(long)]
    name: String,

    /// Login email (must be unused)
    #[arg(long)]
    email: String,

    /// Login password
    #[arg(long)]
    password: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let name = validate::require_text("Name", &cli.name, 100)?;
    let email = validate::require_email(&cli.email)?;
    validate::require_password(&cli.password)?;

    let config = Config::from_env().context("Failed to load configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    if User::find_by_email(&email, &pool).await?.is_some() {
        bail!("An account with email {email} already exists");
    }

    let password_hash = Argon2PasswordHasher::default().hash(&cli.password)?;

    let admin = User::create_admin(&name, &email, &password_hash, &pool)
        .await
        .context("Failed to insert admin account")?;

    println!("Created admin {} ({})", admin.name, admin.email);
    println!("id: {}", admin.id);

    Ok(())
}
