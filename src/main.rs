//! Risk Profiler CLI
//!
//! Command-line interface for computing investor risk profiles.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber;

use risk_profiler::risk::{score, RiskInput};
use risk_profiler::utils::{load_config, Config};

#[derive(Parser)]
#[command(name = "risk-profiler")]
#[command(about = "Investment-risk profiling from capacity, tolerance, and exposure inputs")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a risk assessment from the six profiling inputs
    Score {
        /// Investment time horizon in years
        #[arg(long, required_unless_present = "input")]
        time_horizon_years: Option<i64>,

        /// Months of expenses covered by emergency funds
        #[arg(long, required_unless_present = "input")]
        emergency_fund_months: Option<i64>,

        /// Income stability rating, 1 (unstable) to 5 (highly stable)
        #[arg(long, required_unless_present = "input")]
        income_stability_rating: Option<i64>,

        /// Reaction to a 20% market drop (A/sell, B/hold steady, C/invest more)
        #[arg(long, required_unless_present = "input")]
        volatility_choice: Option<String>,

        /// User has financial dependents
        #[arg(long)]
        has_dependents: bool,

        /// Debt exceeds assets
        #[arg(long)]
        debt_exceeds_assets: bool,

        /// Read the input record as JSON from a file ("-" for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Output format (text or json), overrides the config file
        #[arg(short, long)]
        format: Option<String>,

        /// Enforce the advisory input ranges before scoring
        #[arg(long)]
        validate: bool,
    },

    /// Generate sample configuration file
    Config {
        /// Output path
        #[arg(short, long, default_value = "config.toml")]
        output: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    // Load configuration
    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Score {
            time_horizon_years,
            emergency_fund_months,
            income_stability_rating,
            volatility_choice,
            has_dependents,
            debt_exceeds_assets,
            input,
            format,
            validate,
        } => {
            let record = match input {
                Some(path) => read_input_record(&path)?,
                None => RiskInput {
                    time_horizon_years: time_horizon_years
                        .context("time_horizon_years is required")?,
                    emergency_fund_months: emergency_fund_months
                        .context("emergency_fund_months is required")?,
                    income_stability_rating: income_stability_rating
                        .context("income_stability_rating is required")?,
                    volatility_choice: volatility_choice
                        .context("volatility_choice is required")?,
                    has_dependents,
                    debt_exceeds_assets,
                },
            };

            score_profile(&config, &record, format.as_deref(), validate)?;
        }
        Commands::Config { output } => {
            generate_config(&output)?;
        }
    }

    Ok(())
}

/// Read a JSON input record from a file, or stdin when the path is "-".
fn read_input_record(path: &str) -> Result<RiskInput> {
    let content = if path == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read input from stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path))?
    };

    serde_json::from_str(&content).context("Failed to parse input record JSON")
}

fn score_profile(
    config: &Config,
    record: &RiskInput,
    format: Option<&str>,
    validate: bool,
) -> Result<()> {
    if validate {
        record.validate()?;
    }

    info!("Scoring risk profile");
    let assessment = score(record);

    let format = format.unwrap_or(&config.output.format);
    match format {
        "json" => {
            let nested = assessment.nested_under(&config.output.state_key);
            let rendered = if config.output.pretty {
                serde_json::to_string_pretty(&nested)?
            } else {
                serde_json::to_string(&nested)?
            };
            println!("{}", rendered);
        }
        _ => {
            println!("\n{}", assessment);
        }
    }

    Ok(())
}

fn generate_config(output: &str) -> Result<()> {
    info!("Generating sample configuration at {}", output);

    Config::create_sample_config(output)?;

    println!("Sample configuration saved to {}", output);
    println!("\nEdit the file to configure:");
    println!("  - Output format (text, json)");
    println!("  - The state-object key JSON output is nested under");

    Ok(())
}
