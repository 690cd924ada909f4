//! Command-line form for the Prop 22 guarantee calculator.
//!
//! Accepts the same raw text inputs as the on-page form, drives the form
//! layer, and prints the summary card (or the full result as JSON).

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::debug;

use prop22_engine::config::ConfigLoader;
use prop22_engine::error::EngineResult;
use prop22_engine::form::{FormState, FormSummary};

/// Estimate the Prop 22 earnings top-up for a two-week pay period.
///
/// Inputs are taken as raw text, exactly as they would be typed into the
/// form: empty or unparsable values count as zero.
#[derive(Parser)]
#[command(name = "prop22")]
#[command(version, about = "Prop 22 earnings top-up calculator", long_about = None)]
struct Cli {
    /// Week 1 engaged hours
    #[arg(long, default_value = "0", value_name = "HOURS")]
    week1_hours: String,

    /// Week 1 engaged minutes (0-59)
    #[arg(long, default_value = "0", value_name = "MINUTES")]
    week1_minutes: String,

    /// Week 2 engaged hours
    #[arg(long, default_value = "0", value_name = "HOURS")]
    week2_hours: String,

    /// Week 2 engaged minutes (0-59)
    #[arg(long, default_value = "0", value_name = "MINUTES")]
    week2_minutes: String,

    /// Total engaged miles over the two-week period
    #[arg(long, default_value = "0", value_name = "MILES")]
    miles: String,

    /// Jurisdiction code used to pre-fill the minimum wage
    /// (see --list-jurisdictions)
    #[arg(long, value_name = "CODE")]
    jurisdiction: Option<String>,

    /// Local minimum wage in $/hour (overrides the jurisdiction rate)
    #[arg(long, value_name = "RATE")]
    min_wage: Option<String>,

    /// Per-engaged-mile rate in $/mile
    #[arg(long, value_name = "RATE")]
    per_mile: Option<String>,

    /// Base earnings received (excluding tips, tolls, and promotions)
    #[arg(long, default_value = "0", value_name = "AMOUNT")]
    base_earnings: String,

    /// Top-up amount already received for the period
    #[arg(long, default_value = "0", value_name = "AMOUNT")]
    already_paid: String,

    /// Path to the configuration directory
    #[arg(long, default_value = "./config/prop22", value_name = "DIR")]
    config: PathBuf,

    /// List the known jurisdictions and their minimum wages, then exit
    #[arg(long)]
    list_jurisdictions: bool,

    /// Print the full calculation result as JSON instead of the summary
    #[arg(long)]
    json: bool,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> EngineResult<()> {
    let loader = ConfigLoader::load(&cli.config)?;
    debug!(statute = %loader.statute().name, "Configuration loaded");

    if cli.list_jurisdictions {
        print_jurisdictions(&loader);
        return Ok(());
    }

    let mut state = FormState::new(loader);

    if let Some(code) = &cli.jurisdiction {
        state.select_jurisdiction(code)?;
    }

    let input = state.input_mut();
    input.week_one_hours = cli.week1_hours;
    input.week_one_minutes = cli.week1_minutes;
    input.week_two_hours = cli.week2_hours;
    input.week_two_minutes = cli.week2_minutes;
    input.engaged_miles = cli.miles;
    input.base_earnings = cli.base_earnings;
    input.already_paid = cli.already_paid;
    if let Some(wage) = cli.min_wage {
        input.minimum_wage = wage;
    }
    if let Some(rate) = cli.per_mile {
        input.per_mile_rate = rate;
    }

    let result = state.recompute();

    if cli.json {
        let rendered = serde_json::to_string_pretty(&result)
            .expect("calculation result serializes to JSON");
        println!("{rendered}");
        return Ok(());
    }

    let summary = FormSummary::from(&result);
    for warning in &result.audit_trace.warnings {
        eprintln!("warning: {}", warning.message);
    }

    println!("Prop 22 Earnings Top-Up (two-week pay period)");
    println!();
    println!("  Engaged time:         {} hours", summary.engaged_hours);
    println!("  120% of MW x hours:   {}", summary.time_component);
    println!("  Per-mile x miles:     {}", summary.mileage_component);
    println!("  Guaranteed floor:     {}", summary.guaranteed_floor);
    println!();
    println!("  Base earnings:        {}", summary.base_earnings);
    println!("  Top-up owed:          {}", summary.top_up_owed);
    println!("  Already paid:         {}", summary.already_paid);
    println!(
        "  Difference vs. paid:  {} ({})",
        summary.difference_vs_paid, summary.standing
    );

    Ok(())
}

fn print_jurisdictions(loader: &ConfigLoader) {
    println!("Known jurisdictions (minimum wage, {}):", loader.statute().version);
    for code in loader.jurisdiction_codes() {
        if let Ok(jurisdiction) = loader.get_jurisdiction(code) {
            println!(
                "  {:<22} {:<24} ${}/h",
                code, jurisdiction.name, jurisdiction.minimum_wage
            );
        }
    }
}
