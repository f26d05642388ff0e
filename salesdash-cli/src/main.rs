use clap::{Parser, Subcommand};
use colored::Colorize;
use salesdash_core::{CliErrorDisplay, DashboardConfig, SalesDashError};
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

use commands::{handle_ask_command, handle_reps_command, OutputFormat};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Parser)]
#[command(name = "salesdash")]
#[command(version = VERSION)]
#[command(about = "Salesdash - Sales representatives, their deals, and an AI question box")]
#[command(long_about = r#"
Salesdash fetches the sales team from the sales backend, renders one card per
representative with their deals, and forwards free-text questions to the AI
endpoint.

Use 'salesdash reps' to render the team once, 'salesdash ask' to ask a
question, and 'salesdash-tui' for the interactive dashboard.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Fetch and render sales representatives with their deals")]
    Reps {
        #[arg(
            short,
            long,
            value_enum,
            default_value_t = OutputFormat::Text,
            help = "Output format (text, json)"
        )]
        format: OutputFormat,
    },

    #[command(about = "Ask the AI endpoint a question")]
    Ask {
        #[arg(help = "Question text")]
        question: String,
    },

    #[command(about = "Show the effective configuration")]
    Config {
        #[arg(
            short,
            long,
            value_enum,
            default_value_t = OutputFormat::Text,
            help = "Output format (text, json)"
        )]
        format: OutputFormat,
    },

    #[command(about = "Show version information")]
    Version {
        #[arg(short, long)]
        detailed: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<SalesDashError>() {
                Some(err) => eprint!("{}: {}", "Error".red().bold(), CliErrorDisplay::new(err)),
                None => eprintln!("{}: {}", "Error".red().bold(), e),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Reps { format } => handle_reps_command(format).await,
        Commands::Ask { question } => handle_ask_command(&question).await,
        Commands::Config { format } => cmd_config(format),
        Commands::Version { detailed } => cmd_version(detailed),
    }
}

fn cmd_config(format: OutputFormat) -> anyhow::Result<()> {
    let config = DashboardConfig::load()?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Effective Configuration".cyan().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();
    print!("{}", toml::to_string_pretty(&config)?);
    println!();
    println!("  {}", "Resolved Endpoints".yellow().bold());
    println!("    Sales reps:  {}", config.api.sales_reps_url()?);
    println!("    AI:          {}", config.api.ai_url()?);

    Ok(())
}

fn cmd_version(detailed: bool) -> anyhow::Result<()> {
    if detailed {
        println!("{}", "Salesdash Version Information".cyan().bold());
        println!("{}", "═".repeat(40).dimmed());
        println!("  {:<15} {}", "Version:".bold(), VERSION);
        println!("  {:<15} {}", "Name:".bold(), NAME);
        println!("  {:<15} Apache-2.0", "License:".bold());
        println!();
        println!("  {}", "Front Ends:".bold());
        println!("    salesdash      one-shot commands");
        println!("    salesdash-tui  interactive dashboard");
        println!();
        println!("  {}", "Build Information:".bold());
        println!("    Rust Edition: 2021");
        #[cfg(debug_assertions)]
        println!("    Build:        Debug");
        #[cfg(not(debug_assertions))]
        println!("    Build:        Release");
    } else {
        println!("salesdash {}", VERSION);
    }

    Ok(())
}
