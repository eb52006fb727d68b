mod reports;
mod simulation;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use simulation::{SimulationConfig, run_simulation};

#[derive(Debug, Parser)]
#[command(name = "cinemogul-tester", version = "0.3.0")]
#[command(about = "Headless economy simulation for the CineMogul game")]
struct Args {
    /// Number of productions to attempt
    #[arg(long, default_value_t = 25)]
    productions: usize,

    /// Seed for fallback scoring
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Fixed quality score for every production; omit to simulate an
    /// offline scoring service (every production takes the fallback path)
    #[arg(long)]
    score: Option<f64>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json"])]
    report: String,

    /// Print every production as it resolves
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    announce_banner(&args);

    let report = run_simulation(SimulationConfig {
        productions: args.productions,
        seed: args.seed,
        fixed_score: args.score,
        verbose: args.verbose,
    })
    .await;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&report)?,
        _ => reports::generate_console_report(&report),
    }

    Ok(())
}

fn announce_banner(args: &Args) {
    println!("{}", "🎬 CineMogul Economy Tester".bright_cyan().bold());
    println!("{}", "===========================".cyan());
    match args.score {
        Some(score) => println!("Scoring: fixed at {score}"),
        None => println!("Scoring: offline (fallback path, seed {})", args.seed),
    }
}
