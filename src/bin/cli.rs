//! Launchboard CLI
//!
//! Command-line interface over the launch dataset, no server needed:
//! - Summarize the dataset
//! - Print the pie and scatter charts as tables or JSON
//! - Generate a default config file

use clap::{Parser, Subcommand, ValueEnum};
use launchboard::charts::{
    aggregate, correlate, ChartSpec, PayloadRange, PieChart, ScatterChart, SiteSelection,
};
use launchboard::dataset::{load_dataset, Dataset};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "launchboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect launch records and dashboard charts from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Launch CSV path
    #[arg(short, long, default_value = "spacex_launch_dash.csv", global = true)]
    pub dataset: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show sites, record count and payload bounds
    Summary,

    /// Success pie chart
    Pie {
        /// "ALL" or a launch site name
        #[arg(short, long, default_value = "ALL")]
        site: SiteSelection,
    },

    /// Payload vs. outcome scatter chart
    Scatter {
        /// "ALL" or a launch site name
        #[arg(short, long, default_value = "ALL")]
        site: SiteSelection,
        /// Lower payload bound in kg (default: dataset minimum)
        #[arg(long)]
        low: Option<f64>,
        /// Upper payload bound in kg (default: dataset maximum)
        #[arg(long)]
        high: Option<f64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary => {
            let dataset = load_dataset(&cli.dataset)?;
            print_summary(&dataset, cli.format)?;
        }

        Commands::Pie { site } => {
            let dataset = load_dataset(&cli.dataset)?;
            print_chart(&aggregate(&dataset, &site), cli.format)?;
        }

        Commands::Scatter { site, low, high } => {
            let dataset = load_dataset(&cli.dataset)?;
            let range = match dataset.payload_bounds() {
                Some(bounds) => {
                    PayloadRange::new(low.unwrap_or(bounds.min), high.unwrap_or(bounds.max))
                }
                None => PayloadRange::new(low.unwrap_or(0.0), high.unwrap_or(0.0)),
            };
            print_chart(&correlate(&dataset, &site, range), cli.format)?;
        }

        Commands::Config { output } => {
            let config = launchboard::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn print_summary(dataset: &Dataset, format: OutputFormat) -> anyhow::Result<()> {
    let sites = dataset.sites();
    let bounds = dataset.payload_bounds();

    if format == OutputFormat::Json {
        let summary = serde_json::json!({
            "records": dataset.len(),
            "successes": dataset.success_count(),
            "sites": sites,
            "payload_bounds": bounds,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Records:   {}", dataset.len());
    println!("Successes: {}", dataset.success_count());
    match bounds {
        Some(b) => println!("Payload:   {:.1} - {:.1} kg", b.min, b.max),
        None => println!("Payload:   -"),
    }
    println!();
    println!("{:<24} {:>8} {:>10}", "Site", "Launches", "Successes");
    println!("{}", "-".repeat(44));
    for site in &sites {
        let launches = dataset.iter().filter(|r| &r.launch_site == site).count();
        let successes = dataset
            .iter()
            .filter(|r| &r.launch_site == site && r.outcome.is_success())
            .count();
        println!("{:<24} {:>8} {:>10}", site, launches, successes);
    }

    Ok(())
}

fn print_chart(chart: &ChartSpec, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(chart)?);
        return Ok(());
    }

    println!("{}", chart.title());
    println!();

    if chart.is_empty() {
        println!("No data for the selected filters");
        return Ok(());
    }

    match chart {
        ChartSpec::Pie(pie) => print_pie(pie),
        ChartSpec::Scatter(scatter) => print_scatter(scatter),
    }

    Ok(())
}

fn print_pie(pie: &PieChart) {
    println!("{:<24} {:>6} {:>8}", "Slice", "Count", "Percent");
    println!("{}", "-".repeat(40));
    for slice in &pie.slices {
        println!(
            "{:<24} {:>6} {:>7.1}%",
            slice.label, slice.value, slice.percent
        );
    }
}

fn print_scatter(scatter: &ScatterChart) {
    println!(
        "{:>12} {:<8} {:<10} {:<20} {}",
        "Payload (kg)", "Outcome", "Category", "Site", "Booster"
    );
    println!("{}", "-".repeat(72));
    for point in &scatter.points {
        let outcome = if point.y >= 1.0 { "Success" } else { "Failure" };
        println!(
            "{:>12.1} {:<8} {:<10} {:<20} {}",
            point.x, outcome, point.category, point.launch_site, point.hover_text
        );
    }
}
