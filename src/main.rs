//! Attendance Admin Console
//!
//! Terminal console for the master admin of the attendance tracker. Every
//! subcommand binds one screen of the original console to one backend
//! endpoint: authentication, HOD and faculty management, and review of
//! pending change requests. All business logic lives in the remote backend;
//! this binary is presentation and orchestration only.

mod api;
mod auth;
mod config;
mod console;
mod errors;
mod models;
mod session;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::{AddFacultyForm, AddHodForm, ApiClient, UpdateFacultyForm, UpdateHodForm};
use config::Config;
use errors::AppError;
use models::{DecisionAction, UpdateAction};
use session::{Session, SessionStore};

#[derive(Parser)]
#[command(
    name = "attendance-admin",
    version,
    about = "Master admin console for the attendance tracker"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new master admin account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the stored session
    Logout,
    /// Reset a master admin password
    ForgotPassword {
        #[arg(long)]
        username: String,
        #[arg(long)]
        new_password: String,
    },
    /// Show the authenticated admin's profile
    Profile,
    /// Manage Head-of-Department records
    #[command(subcommand)]
    Hod(HodCommand),
    /// Manage faculty records
    #[command(subcommand)]
    Faculty(FacultyCommand),
    /// Review new-faculty requests
    #[command(subcommand)]
    Requests(RequestCommand),
    /// Review faculty update/removal requests
    #[command(subcommand)]
    UpdateRequests(UpdateRequestCommand),
}

#[derive(Subcommand)]
enum HodCommand {
    /// Add a HOD under the logged-in master admin
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        branch: String,
    },
    /// List this master admin's HODs
    List,
    /// Update a HOD record
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        branch: String,
        /// New password; omit to keep the current one
        #[arg(long)]
        password: Option<String>,
    },
    /// Remove a HOD record
    Remove { id: String },
}

#[derive(Subcommand)]
enum FacultyCommand {
    /// Add a faculty record
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        branch: String,
        #[arg(long)]
        subject: String,
    },
    /// List this master admin's faculty
    List,
    /// Update a faculty record
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        branch: String,
        #[arg(long)]
        subject: String,
    },
    /// Remove a faculty record
    Remove { id: String },
}

#[derive(Subcommand)]
enum RequestCommand {
    /// List new-faculty requests
    List {
        /// Filter by faculty username substring
        #[arg(long)]
        username: Option<String>,
    },
    /// Approve a pending request
    Approve { id: String },
    /// Reject a pending request
    Reject { id: String },
}

#[derive(Subcommand)]
enum UpdateRequestCommand {
    /// List faculty update/removal requests
    List {
        /// Filter by faculty username substring
        #[arg(long)]
        username: Option<String>,
    },
    /// Approve a pending request
    Approve { id: String },
    /// Reject a pending request
    Reject { id: String },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = Config::from_env();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // Logs go to stderr so tables stay clean on stdout.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Backend: {}", config.api_base_url);
    tracing::debug!("Session path: {:?}", config.session_path);

    if let Err(err) = run(cli, config).await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: Config) -> Result<(), AppError> {
    let client = ApiClient::new(&config)?;
    let store = SessionStore::new(&config.session_path);

    match cli.command {
        Command::Login { username, password } => {
            require("username", &username)?;
            require("password", &password)?;
            let resp = client.login(&username, &password).await?;
            store.save(&resp.token)?;
            println!("{}", or_default(resp.message, "Login successful."));
        }
        Command::Register {
            name,
            username,
            password,
        } => {
            require("name", &name)?;
            require("username", &username)?;
            require("password", &password)?;
            let resp = client.register(&name, &username, &password).await?;
            println!("{}", or_default(resp.message, "Registered successfully."));
        }
        Command::Logout => {
            store.clear()?;
            println!("Logged out.");
        }
        Command::ForgotPassword {
            username,
            new_password,
        } => {
            require("username", &username)?;
            require("new password", &new_password)?;
            let resp = client.forgot_password(&username, &new_password).await?;
            println!("{}", or_default(resp.message, "Password updated successfully."));
        }
        Command::Profile => {
            let session = require_session(&store)?;
            let profile = client.profile(&session.bearer()).await?;
            print!("{}", console::profile_card(&profile));
        }
        Command::Hod(cmd) => run_hod(cmd, &client, &store).await?,
        Command::Faculty(cmd) => run_faculty(cmd, &client, &store).await?,
        Command::Requests(cmd) => run_requests(cmd, &client, &store).await?,
        Command::UpdateRequests(cmd) => run_update_requests(cmd, &client, &store).await?,
    }

    Ok(())
}

async fn run_hod(cmd: HodCommand, client: &ApiClient, store: &SessionStore) -> Result<(), AppError> {
    let session = require_session(store)?;
    let bearer = session.bearer();

    match cmd {
        HodCommand::Add {
            name,
            username,
            password,
            branch,
        } => {
            require("name", &name)?;
            require("username", &username)?;
            require("password", &password)?;
            require("branch", &branch)?;
            let admin_id = auth::master_admin_id(&session.token)?;
            let form = AddHodForm {
                name,
                username,
                password,
                branch,
            };
            let resp = client.add_hod(&bearer, &admin_id, form).await?;
            println!("{}", or_default(resp.message, "HOD added successfully."));
        }
        HodCommand::List => {
            let admin_id = auth::master_admin_id(&session.token)?;
            match client.list_hods(&bearer, &admin_id).await {
                Ok(hods) => print!("{}", console::hod_table(&hods)),
                // The backend answers 404 when this admin has no HODs yet
                Err(AppError::NotFound(_)) => println!("No HODs found."),
                Err(e) => return Err(e),
            }
        }
        HodCommand::Update {
            id,
            name,
            username,
            branch,
            password,
        } => {
            require("name", &name)?;
            require("username", &username)?;
            require("branch", &branch)?;
            let form = UpdateHodForm {
                name,
                username,
                branch,
                password,
            };
            let resp = client.update_hod(&bearer, &id, form).await?;
            println!("{}", or_default(resp.message, "HOD updated successfully."));
        }
        HodCommand::Remove { id } => {
            let resp = client.remove_hod(&bearer, &id).await?;
            println!("{}", or_default(resp.message, "HOD removed successfully."));
        }
    }

    Ok(())
}

async fn run_faculty(
    cmd: FacultyCommand,
    client: &ApiClient,
    store: &SessionStore,
) -> Result<(), AppError> {
    let session = require_session(store)?;
    let bearer = session.bearer();

    match cmd {
        FacultyCommand::Add {
            name,
            username,
            password,
            branch,
            subject,
        } => {
            require("name", &name)?;
            require("username", &username)?;
            require("password", &password)?;
            require("branch", &branch)?;
            require("subject", &subject)?;
            let form = AddFacultyForm {
                name,
                faculty_username: username,
                password,
                branch,
                subject,
            };
            let resp = client.add_faculty(&bearer, form).await?;
            println!("{}", or_default(resp.message, "Faculty added successfully."));
        }
        FacultyCommand::List => {
            let admin_id = auth::master_admin_id(&session.token)?;
            let faculty = client.list_faculty(&bearer, &admin_id).await?;
            print!("{}", console::faculty_table(&faculty));
        }
        FacultyCommand::Update {
            id,
            name,
            username,
            branch,
            subject,
        } => {
            require("name", &name)?;
            require("username", &username)?;
            require("branch", &branch)?;
            require("subject", &subject)?;
            let form = UpdateFacultyForm {
                name,
                faculty_username: username,
                branch,
                subject,
            };
            let resp = client.update_faculty(&bearer, &id, form).await?;
            println!("{}", or_default(resp.message, "Faculty updated successfully."));
        }
        FacultyCommand::Remove { id } => {
            let resp = client.remove_faculty(&bearer, &id).await?;
            println!("{}", or_default(resp.message, "Faculty removed successfully."));
        }
    }

    Ok(())
}

async fn run_requests(
    cmd: RequestCommand,
    client: &ApiClient,
    store: &SessionStore,
) -> Result<(), AppError> {
    let session = require_session(store)?;
    let bearer = session.bearer();

    match cmd {
        RequestCommand::List { username } => {
            let requests = client.list_requests(&bearer).await?;
            let requests = console::filter_requests(requests, username.as_deref());
            print!("{}", console::request_table(&requests));
        }
        RequestCommand::Approve { id } => {
            decide(client, &bearer, &id, DecisionAction::Approve).await?;
        }
        RequestCommand::Reject { id } => {
            decide(client, &bearer, &id, DecisionAction::Reject).await?;
        }
    }

    Ok(())
}

async fn run_update_requests(
    cmd: UpdateRequestCommand,
    client: &ApiClient,
    store: &SessionStore,
) -> Result<(), AppError> {
    let session = require_session(store)?;
    let bearer = session.bearer();

    match cmd {
        UpdateRequestCommand::List { username } => {
            let requests = client.list_update_requests(&bearer).await?;
            let requests = console::filter_update_requests(requests, username.as_deref());
            print!("{}", console::update_request_table(&requests));
        }
        UpdateRequestCommand::Approve { id } => {
            decide_update(client, &bearer, &id, DecisionAction::Approve).await?;
        }
        UpdateRequestCommand::Reject { id } => {
            decide_update(client, &bearer, &id, DecisionAction::Reject).await?;
        }
    }

    Ok(())
}

async fn decide(
    client: &ApiClient,
    bearer: &str,
    id: &str,
    action: DecisionAction,
) -> Result<(), AppError> {
    let resp = client.decide_request(bearer, id, action).await?;
    println!("{}", decision_notice(resp, action));
    Ok(())
}

/// Update and removal requests are decided on different endpoints; the
/// request's own action, fetched from the listing, picks which one.
async fn decide_update(
    client: &ApiClient,
    bearer: &str,
    id: &str,
    action: DecisionAction,
) -> Result<(), AppError> {
    let requests = client.list_update_requests(bearer).await?;
    let request = requests
        .iter()
        .find(|r| r.request_id == id)
        .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))?;

    let resp = match request.action {
        UpdateAction::Update => client.decide_update_request(bearer, id, action).await?,
        UpdateAction::Remove => client.decide_remove_request(bearer, id, action).await?,
    };

    println!("{}", decision_notice(resp, action));
    Ok(())
}

/// Prefer the backend's own message; fall back to the screen's stock notice.
fn decision_notice(resp: models::DecisionResponse, action: DecisionAction) -> String {
    if !resp.success {
        tracing::warn!("Backend reported an unsuccessful decision");
    }
    resp.message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            let decided = match action {
                DecisionAction::Approve => "approved",
                DecisionAction::Reject => "rejected",
            };
            format!("Request has been {} successfully.", decided)
        })
}

fn require_session(store: &SessionStore) -> Result<Session, AppError> {
    store
        .load()?
        .ok_or_else(|| AppError::Unauthorized("Please login to make operations".to_string()))
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn or_default(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
