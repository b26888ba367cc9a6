use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::auth::password;
use crate::photos::service::PhotoDraft;
use crate::state::AppState;
use crate::users::service::UserDraft;

#[derive(Parser)]
#[command(name = "lens-gallery")]
#[command(about = "Gallery API server and admin tooling", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Database administration
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage photos
    Photo {
        #[command(subcommand)]
        action: PhotoAction,
    },
}

#[derive(Subcommand)]
pub enum DbAction {
    /// Create all tables
    CreateAll,
    /// Drop all tables
    DropAll,
    /// Drop and recreate all tables
    Reset,
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Add a user
    Add {
        email: String,
        #[arg(long, short)]
        name: Option<String>,
        #[arg(long)]
        password: String,
    },
    /// List all users
    List,
}

#[derive(Subcommand)]
pub enum PhotoAction {
    /// Add a photo owned by an existing user
    Add {
        title: String,
        #[arg(long)]
        url: String,
        #[arg(long)]
        user_id: i64,
    },
}

pub async fn execute(state: AppState, command: Command) -> Result<()> {
    match command {
        // Serve is dispatched in main before we get here.
        Command::Serve => unreachable!("serve is handled by main"),
        Command::Db { action } => execute_db(state, action).await,
        Command::User { action } => execute_user(state, action).await,
        Command::Photo { action } => execute_photo(state, action).await,
    }
}

async fn execute_db(state: AppState, action: DbAction) -> Result<()> {
    match action {
        DbAction::CreateAll => create_all(&state).await,
        DbAction::DropAll => drop_all(&state).await,
        DbAction::Reset => {
            drop_all(&state).await?;
            create_all(&state).await
        }
    }
}

async fn create_all(state: &AppState) -> Result<()> {
    info!("creating database tables");
    sqlx::migrate!("./migrations").run(&state.db).await?;
    Ok(())
}

async fn drop_all(state: &AppState) -> Result<()> {
    info!("dropping database tables");
    // photos first, it carries the foreign key
    sqlx::query("DROP TABLE IF EXISTS photos")
        .execute(&state.db)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS users")
        .execute(&state.db)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
        .execute(&state.db)
        .await?;
    Ok(())
}

async fn execute_user(state: AppState, action: UserAction) -> Result<()> {
    match action {
        UserAction::Add {
            email,
            name,
            password,
        } => {
            let password_hash = password::hash_password(&password)?;
            let user = state
                .users
                .save(UserDraft {
                    id: None,
                    name,
                    email: email.trim().to_lowercase(),
                    password_hash,
                })
                .await?;
            println!("{}, {}", user.id, user.email);
            Ok(())
        }
        UserAction::List => {
            for user in state.users.list().await? {
                println!("{}, {}", user.id, user.email);
            }
            Ok(())
        }
    }
}

async fn execute_photo(state: AppState, action: PhotoAction) -> Result<()> {
    match action {
        PhotoAction::Add {
            title,
            url,
            user_id,
        } => {
            let photo = state
                .photos
                .save(PhotoDraft {
                    id: None,
                    title: Some(title),
                    url,
                    description: None,
                    user_id,
                })
                .await?;
            println!("{}, {}", photo.id, photo.url);
            Ok(())
        }
    }
}
