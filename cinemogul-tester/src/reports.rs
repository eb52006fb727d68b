//! Report rendering for simulated sessions.
use anyhow::Result;
use colored::Colorize;

use crate::simulation::SimReport;

pub fn generate_console_report(report: &SimReport) {
    println!();
    println!("{}", "📊 Economy Simulation Summary".bright_cyan().bold());
    println!("{}", "=============================".cyan());

    println!(
        "Productions: {} completed / {} attempted",
        report.productions_completed, report.productions_attempted
    );
    println!(
        "Profitable: {}",
        report.profitable.to_string().green()
    );
    println!(
        "Fallback-scored: {}",
        report.fallback_scored.to_string().yellow()
    );
    println!(
        "Rejected for funds: {}",
        report.rejected_for_funds.to_string().red()
    );
    println!();

    let funds = if report.final_funds >= cinemogul_game::STARTING_FUNDS {
        report.final_funds.to_string().green()
    } else {
        report.final_funds.to_string().red()
    };
    println!("Final funds: ${funds}");
    println!(
        "Funds range: ${} .. ${}",
        report.lowest_funds, report.peak_funds
    );
    println!(
        "Level: {}  ({} XP)",
        report.final_level.to_string().bold(),
        report.final_xp
    );

    if report.levels_reached.len() > 1 {
        let path: Vec<String> = report
            .levels_reached
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("Level path: {}", path.join(" > "));
    }
}

pub fn generate_json_report(report: &SimReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
