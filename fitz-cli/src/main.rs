//! Main entry point for the Fitz CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use shared::config::ClientConfig;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt};

mod commands;
mod store;

use commands::{
    Context,
    exercises::ExercisesArgs,
    routines::RoutineCommand,
    session::{LoginArgs, MeArgs, RegisterArgs},
    workouts::WorkoutCommand,
};

/// Fitz CLI
#[derive(Parser)]
#[command(name = "fitz")]
#[command(about = "Command-line client for the Fitz fitness tracker", long_about = None)]
struct Cli {
    /// Path to a configuration file (config.yaml or config.json)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the Fitz API, e.g. `http://localhost:5000/api`
    #[arg(long, short, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in, register, log out, or show the current user
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },
    /// List the exercise catalogue
    Exercises(ExercisesArgs),
    /// List, show, or create routines
    Routines {
        #[command(subcommand)]
        command: RoutineCommand,
    },
    /// List or log workouts
    Workouts {
        #[command(subcommand)]
        command: WorkoutCommand,
    },
    /// Show training volume and muscle group insights
    Dashboard,
    /// Generate a configuration file
    Config {
        /// Format of the configuration file to generate (yaml or json). Defaults to yaml.
        #[arg(long, short)]
        format: Option<String>,
    },
    /// Generate shell completion scripts for the CLI
    Completion {
        /// The shell type for which to generate the completion script (e.g., bash, zsh, fish, powershell)
        #[arg(long)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum SessionCommand {
    /// Log in with email and password
    Login(LoginArgs),
    /// Create an account and log in
    Register(RegisterArgs),
    /// Forget the stored session
    Logout,
    /// Show the logged in user
    Me(MeArgs),
}

fn initialize_tracing(config: &ClientConfig) {
    let default_level = config
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy()
    });

    fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    // These two never touch the network or the configured session.
    let command = match cli.command {
        Commands::Config { format } => {
            let format = format.unwrap_or_else(|| "yaml".to_string());
            return commands::config::generate_config(&format);
        }
        Commands::Completion { shell } => {
            commands::completion::generate_completion(shell);
            return Ok(());
        }
        command => command,
    };

    let config = ClientConfig::load_config(cli.config, cli.server)?;
    initialize_tracing(&config);
    let context = Context::new(config);

    match command {
        Commands::Session { command } => match command {
            SessionCommand::Login(args) => commands::session::login(&context, args).await?,
            SessionCommand::Register(args) => commands::session::register(&context, args).await?,
            SessionCommand::Logout => commands::session::logout(&context),
            SessionCommand::Me(args) => commands::session::me(&context, args).await?,
        },
        Commands::Exercises(args) => commands::exercises::list(&context, args).await?,
        Commands::Routines { command } => commands::routines::run(&context, command).await?,
        Commands::Workouts { command } => commands::workouts::run(&context, command).await?,
        Commands::Dashboard => commands::dashboard::show(&context).await?,
        Commands::Config { .. } | Commands::Completion { .. } => {}
    }

    Ok(())
}
