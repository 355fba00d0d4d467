//! GTM Checkout CLI - Preview data layer pushes for checkout steps.
//!
//! # Usage
//!
//! ```bash
//! # Show what GA4 pushes for the payment step of an order fixture
//! gtm-checkout preview --order order.json --step 4
//!
//! # Both implementations, rendered as the page script
//! gtm-checkout preview --order order.yaml --step 2 --ua true --ga4 true --format script
//!
//! # List which events each step produces
//! gtm-checkout steps
//! ```
//!
//! # Commands
//!
//! - `preview` - Run the step tracker against an order fixture
//! - `steps` - Print the step to event table
//!
//! Flags not given on the command line come from the `GTM_*` environment
//! variables (see `gtm_checkout::config`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gtm_checkout_core::CheckoutStep;

mod commands;

use commands::preview::{OutputFormat, PreviewOptions};

#[derive(Parser)]
#[command(name = "gtm-checkout")]
#[command(author, version, about = "GTM checkout tracking tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the step tracker against an order fixture and print the pushes
    Preview {
        /// Order fixture (`.json`, `.yaml` or `.yml`)
        #[arg(short, long)]
        order: PathBuf,

        /// Checkout step (1 = cart, 2 = address, 3 = shipping, 4 = payment, 5 = confirm)
        #[arg(short, long, value_parser = parse_step)]
        step: CheckoutStep,

        /// Override `GTM_UA_ENABLED`
        #[arg(long)]
        ua: Option<bool>,

        /// Override `GTM_GA4_ENABLED`
        #[arg(long)]
        ga4: Option<bool>,

        /// Active currency code
        #[arg(long, default_value = "USD")]
        currency: String,

        /// Sales channel code
        #[arg(long, default_value = "web")]
        channel_code: String,

        /// Sales channel name (reported as item affiliation)
        #[arg(long, default_value = "Web Store")]
        channel_name: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print which UA and GA4 events each checkout step produces
    Steps,
}

fn parse_step(value: &str) -> Result<CheckoutStep, String> {
    let number: i64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    CheckoutStep::try_from(number).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays pipeable
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gtm_checkout=info,gtm_checkout_cli=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Preview {
            order,
            step,
            ua,
            ga4,
            currency,
            channel_code,
            channel_name,
            format,
        } => {
            let options = PreviewOptions {
                order,
                step,
                ua,
                ga4,
                currency,
                channel_code,
                channel_name,
                format,
            };
            commands::preview::run(&options).await?;
        }
        Commands::Steps => commands::steps::print(),
    }
    Ok(())
}
