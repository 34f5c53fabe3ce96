use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use client::types::AccessRole;
use client::{ApiClient, ApiError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(
        "missing credentials; pass --username/--password or set STICKYBOARD_USERNAME/STICKYBOARD_PASSWORD"
    )]
    MissingCredentials,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("rendering output failed: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "stickyboard", about = "Stickyboard REST API CLI")]
struct Cli {
    #[arg(long, env = "STICKYBOARD_BASE_URL", default_value = "http://127.0.0.1:8000/api")]
    base_url: String,

    #[arg(long, env = "STICKYBOARD_USERNAME")]
    username: Option<String>,

    #[arg(long, env = "STICKYBOARD_PASSWORD")]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Probe the backend by priming a CSRF cookie.
    Ping,
    Auth(AuthCommand),
    Whiteboard(WhiteboardCommand),
    Access(AccessCommand),
    User(UserCommand),
}

#[derive(Args, Debug)]
struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
enum AuthSubcommand {
    /// Establish a session and print the authenticated account.
    Login,
    /// Establish a session, then invalidate it.
    Logout,
}

#[derive(Args, Debug)]
struct WhiteboardCommand {
    #[command(subcommand)]
    command: WhiteboardSubcommand,
}

#[derive(Subcommand, Debug)]
enum WhiteboardSubcommand {
    List,
    Read {
        id: i64,
    },
    Create {
        #[arg(long, default_value = "Untitled whiteboard")]
        name: String,
    },
    Rename {
        id: i64,
        #[arg(long)]
        name: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct AccessCommand {
    #[command(subcommand)]
    command: AccessSubcommand,
}

#[derive(Subcommand, Debug)]
enum AccessSubcommand {
    Grant {
        whiteboard_id: i64,
        username: String,
        #[arg(long, value_enum, default_value = "view")]
        role: RoleArg,
    },
    Remove {
        whiteboard_id: i64,
        username: String,
    },
}

#[derive(Args, Debug)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
enum UserSubcommand {
    List,
    Search { query: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RoleArg {
    View,
    Edit,
    Admin,
}

impl From<RoleArg> for AccessRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::View => Self::View,
            RoleArg::Edit => Self::Edit,
            RoleArg::Admin => Self::Admin,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Ping => run_ping(&cli).await,
        Command::Auth(auth) => run_auth(&cli, auth).await,
        Command::Whiteboard(board) => run_whiteboard(&cli, board).await,
        Command::Access(access) => run_access(&cli, access).await,
        Command::User(user) => run_user(&cli, user).await,
    }
}

fn open_client(cli: &Cli) -> Result<ApiClient, CliError> {
    Ok(ApiClient::new(&cli.base_url)?)
}

/// Establish a session the way the browser does: prime the CSRF cookie,
/// then log in. One process, one session.
async fn signed_in_client(cli: &Cli) -> Result<ApiClient, CliError> {
    let (Some(username), Some(password)) = (cli.username.as_deref(), cli.password.as_deref())
    else {
        return Err(CliError::MissingCredentials);
    };

    let api = open_client(cli)?;
    api.get_csrf_token().await?;
    api.login(username, password).await?;
    Ok(api)
}

async fn run_ping(cli: &Cli) -> Result<(), CliError> {
    let api = open_client(cli)?;
    api.get_csrf_token().await?;
    println!("ok");
    Ok(())
}

async fn run_auth(cli: &Cli, auth: &AuthCommand) -> Result<(), CliError> {
    match auth.command {
        AuthSubcommand::Login => {
            let (Some(username), Some(password)) =
                (cli.username.as_deref(), cli.password.as_deref())
            else {
                return Err(CliError::MissingCredentials);
            };
            let api = open_client(cli)?;
            api.get_csrf_token().await?;
            let user = api.login(username, password).await?;
            print_json(&user)
        }
        AuthSubcommand::Logout => {
            let api = signed_in_client(cli).await?;
            api.logout().await?;
            println!("logged out");
            Ok(())
        }
    }
}

async fn run_whiteboard(cli: &Cli, board: &WhiteboardCommand) -> Result<(), CliError> {
    let api = signed_in_client(cli).await?;
    match &board.command {
        WhiteboardSubcommand::List => print_json(&api.list_whiteboards().await?),
        WhiteboardSubcommand::Read { id } => print_json(&api.get_whiteboard(*id).await?),
        WhiteboardSubcommand::Create { name } => print_json(&api.create_whiteboard(name).await?),
        WhiteboardSubcommand::Rename { id, name } => {
            print_json(&api.update_whiteboard(*id, name).await?)
        }
        WhiteboardSubcommand::Delete { id } => {
            api.delete_whiteboard(*id).await?;
            println!("deleted {id}");
            Ok(())
        }
    }
}

async fn run_access(cli: &Cli, access: &AccessCommand) -> Result<(), CliError> {
    let api = signed_in_client(cli).await?;
    match &access.command {
        AccessSubcommand::Grant {
            whiteboard_id,
            username,
            role,
        } => print_json(&api.grant_access(*whiteboard_id, username, (*role).into()).await?),
        AccessSubcommand::Remove {
            whiteboard_id,
            username,
        } => {
            api.remove_access(*whiteboard_id, username).await?;
            println!("removed {username} from whiteboard {whiteboard_id}");
            Ok(())
        }
    }
}

async fn run_user(cli: &Cli, user: &UserCommand) -> Result<(), CliError> {
    let api = signed_in_client(cli).await?;
    match &user.command {
        UserSubcommand::List => print_json(&api.list_users().await?),
        UserSubcommand::Search { query } => print_json(&api.search_users(query).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
