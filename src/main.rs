use chrono::Utc;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use dev_tier::github::{create_client, GraphqlClient};
use dev_tier::output::{format_summary, should_use_colors};
use dev_tier::scoring::{validate_tiers, validate_weights, TIERS, WEIGHTS};
use dev_tier::window::TimeWindow;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "dev-tier")]
#[command(
    about = "Score a GitHub account's last 365 days of activity and write a tier badge",
    long_about = "Reads GH_LOGIN and GH_TOKEN from the environment, queries the GitHub \
                  GraphQL API, and writes tier.json and tier-metrics.json."
)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory to write tier.json and tier-metrics.json into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

/// Help and version requests succeed; every usage error shares the exit
/// status of the other fatal conditions.
fn parse_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
        _ => EXIT_FAILURE,
    }
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        eprintln!("Failed to install rustls crypto provider");
        std::process::exit(EXIT_FAILURE);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_exit_code(e.kind()));
        }
    };
    let start_time = Instant::now();

    let credentials = match dev_tier::config::load_credentials() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    // Table problems are reported but not fatal: classification falls back
    // to the last tier when nothing matches.
    for errors in [validate_weights(&WEIGHTS), validate_tiers(TIERS)]
        .into_iter()
        .filter_map(Result::err)
    {
        eprintln!("Scoring table warnings:");
        for error in errors {
            eprintln!("  - {}", error);
        }
    }

    let window = TimeWindow::trailing(Utc::now());

    let http = match create_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };
    let client = GraphqlClient::new(http, &credentials.token);

    if cli.verbose {
        eprintln!("Scoring GitHub account {}", credentials.login);
    }

    let outcome = match dev_tier::fetch::run(
        &client,
        &credentials.login,
        &window,
        &WEIGHTS,
        TIERS,
        &cli.output_dir,
        cli.verbose,
    )
    .await
    {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    println!(
        "{}",
        format_summary(&credentials.login, &outcome.result, should_use_colors())
    );

    if cli.verbose {
        eprintln!("Done in {:?}", start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}
