// apps/backcli/src/main.rs

mod review;
mod token;

use clap::{Args, Parser, Subcommand};
use secrecy::Secret;
use sqlx::migrate::Migrator;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use secrets::{SecretsClient, SecretsConfig};
use workflows_api::constants::{DATABASE_URL, JWT_SECRET_KEY};
use workflows_lib::repository::UserRepository;
use workflows_lib::user_service::UserService;
use workflows_lib::util::connect_with_retry;

use crate::review::ReviewCommand;

#[derive(Debug, Parser)]
#[command(name = "backcli", about = "Backoffice workflows CLI utility")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Execute database migrations
    Migrate {
        #[arg(long, default_value = "./libs/workflows-lib/migrations")]
        path: PathBuf,
    },
    /// Create an operator account that can sign in to the API
    CreateOperator {
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        /// Role name; repeat for several roles
        #[arg(long = "role")]
        roles: Vec<String>,
    },
    /// Sign an access token for an operator (development use)
    IssueToken {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, default_value_t = 3600)]
        ttl_secs: u64,
    },
    /// Approve an end user and show the next one in the queue
    Approve {
        end_user_id: String,
        #[command(flatten)]
        api: ApiArgs,
    },
    /// Reject an end user and show the next one in the queue
    Reject {
        end_user_id: String,
        #[command(flatten)]
        api: ApiArgs,
    },
    /// Show the next end user pending review
    Next {
        #[arg(long)]
        after: Option<String>,
        #[command(flatten)]
        api: ApiArgs,
    },
}

#[derive(Debug, Args)]
struct ApiArgs {
    #[arg(long, env = "WORKFLOWS_API_URL", default_value = "http://127.0.0.1:3333")]
    api_url: String,
    #[arg(long, env = "WORKFLOWS_API_TOKEN", hide_env_values = true)]
    token: String,
}

impl ApiArgs {
    fn token(&self) -> Secret<String> {
        Secret::new(self.token.clone())
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Migrate { path } => run_migrations(path).await,
        Command::CreateOperator {
            email,
            first_name,
            last_name,
            roles,
        } => {
            let pool = connect_with_retry(&database_url()?, 3).await?;
            let user_service = UserService::new(UserRepository::new(pool));
            let user = user_service
                .create_user(&email, &first_name, &last_name, &roles)
                .await?;
            println!("Created operator {} ({}) with roles {}", user.id, user.email, user.roles);
            Ok(())
        }
        Command::IssueToken {
            user_id,
            email,
            ttl_secs,
        } => {
            let secrets = SecretsClient::new(SecretsConfig::from_env());
            let secret = secrets.require_secret(JWT_SECRET_KEY).await?;
            println!("{}", token::issue_token(&secret, &user_id, email, ttl_secs)?);
            Ok(())
        }
        Command::Approve { end_user_id, api } => {
            review::decide(&api.api_url, api.token(), &end_user_id, ReviewCommand::Approve).await?;
            Ok(())
        }
        Command::Reject { end_user_id, api } => {
            review::decide(&api.api_url, api.token(), &end_user_id, ReviewCommand::Reject).await?;
            Ok(())
        }
        Command::Next { after, api } => {
            review::next(&api.api_url, api.token(), after.as_deref()).await?;
            Ok(())
        }
    }
}

fn database_url() -> Result<String, String> {
    std::env::var(DATABASE_URL).map_err(|_| format!("{} must be set", DATABASE_URL))
}

async fn run_migrations(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let pool = connect_with_retry(&database_url()?, 3).await?;
    let migrator = Migrator::new(path.as_path()).await?;

    tracing::info!(path = %path.display(), "running workflows-lib migrations");
    migrator.run(&pool).await?;
    println!("Migrations applied successfully.");
    Ok(())
}
