//! Lookupkit CLI - command-line presentation layer for resource lookups
//!
//! The core client only returns classified outcomes; printing and exit
//! codes live here.

use clap::{Parser, Subcommand, ValueEnum};
use lookupkit::{LookupClient, LookupOutcome, LookupRequest, ResourceKind};
use serde_json::json;

/// Output format for lookup results
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Human-readable field lines
    #[default]
    Text,
    /// JSON-serialized outcome
    Json,
}

/// Lookupkit - remote resource lookup tool
#[derive(Parser, Debug)]
#[command(name = "lookupkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, short, global = true, default_value = "text")]
    output: OutputFormat,

    /// Custom User-Agent
    #[arg(long, global = true)]
    user_agent: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a GitHub user profile
    Github {
        /// GitHub username
        username: String,
    },
    /// Look up a country record by common name
    Country {
        /// Country name
        name: String,
    },
    /// Submit a contact form and report the server's echo
    Contact {
        /// Sender name
        #[arg(long)]
        name: String,

        /// Sender email
        #[arg(long)]
        email: String,

        /// Message body
        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut builder = LookupClient::builder();
    if let Some(ua) = cli.user_agent {
        builder = builder.user_agent(ua);
    }
    let client = builder.build();

    let request = match cli.command {
        Commands::Github { username } => LookupRequest::new(username, ResourceKind::GithubUser),
        Commands::Country { name } => LookupRequest::new(name, ResourceKind::CountryInfo),
        Commands::Contact {
            name,
            email,
            message,
        } => LookupRequest::new(name.clone(), ResourceKind::ContactForm).payload(json!({
            "name": name,
            "email": email,
            "message": message,
        })),
    };

    let outcome = client.lookup(&request).await;

    match cli.output {
        OutputFormat::Text => print_text(&outcome),
        OutputFormat::Json => print_json(&outcome),
    }

    if !outcome.is_success() {
        std::process::exit(1);
    }
}

fn print_text(outcome: &LookupOutcome) {
    match outcome {
        LookupOutcome::Success { report } => {
            for (name, value) in report.iter() {
                println!("{}: {}", name, value);
            }
        }
        LookupOutcome::NotFound { identifier } => {
            eprintln!("not found: {}", identifier);
        }
        LookupOutcome::TransportError { message } => {
            eprintln!("transport error: {}", message);
        }
        LookupOutcome::UnexpectedError { message } => {
            eprintln!("error: {}", message);
        }
    }
}

fn print_json(outcome: &LookupOutcome) {
    match serde_json::to_string_pretty(outcome) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("error serializing outcome: {}", e);
            std::process::exit(1);
        }
    }
}
