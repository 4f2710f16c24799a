// File: crates/demo/src/main.rs
// Summary: bizchart CLI: record store CRUD, CSV import/export, and dashboard rendering to PNGs.

mod config;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bizchart_data::csv_io::{read_csv, write_csv};
use bizchart_data::{
    seed_records, Dashboard, DashboardContext, Filters, JsonFileStore, Metric, Month, NewRecord, RecordStore, Region,
};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(author, version, about = "Business charts from a local record store", long_about = None)]
struct Cli {
    /// JSON file holding the records (created on first write)
    #[arg(long, global = true, default_value = "bizchart.json")]
    store: PathBuf,

    /// TOML configuration (output size, default filters, colors)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the six charts for the filtered records to PNG files
    Render(RenderArgs),
    /// Insert 48 synthetic records (every month x region) for one year
    Seed {
        #[arg(long, default_value_t = 2026)]
        year: i32,
        /// Fixed RNG seed for reproducible data
        #[arg(long)]
        rng_seed: Option<u64>,
    },
    /// Insert one record
    Add(AddArgs),
    /// Print the filtered records as a table
    List(FilterArgs),
    /// Delete one record by id
    Delete { id: u64 },
    /// Delete every record
    Clear {
        /// Required confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Insert the rows of a CSV file
    Import { path: PathBuf },
    /// Write every record to a CSV file (`-` for stdout)
    Export { path: PathBuf },
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    #[arg(long)]
    year: Option<i32>,
    #[arg(long)]
    region: Option<Region>,
    /// Case-insensitive match against "<month> <region>"
    #[arg(long)]
    search: Option<String>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    filters: FilterArgs,
    /// ventas | costes | tickets | satisfaccion
    #[arg(long)]
    metric: Option<Metric>,
    /// Output directory
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long)]
    width: Option<i32>,
    #[arg(long)]
    height: Option<i32>,
    /// Skip labels and values
    #[arg(long)]
    no_text: bool,
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long)]
    month: Month,
    #[arg(long)]
    year: i32,
    #[arg(long)]
    region: Region,
    #[arg(long, default_value_t = 0.0)]
    ventas: f64,
    #[arg(long, default_value_t = 0.0)]
    costes: f64,
    #[arg(long, default_value_t = 0.0)]
    tickets: f64,
    #[arg(long, default_value_t = 0.0)]
    satisfaccion: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let mut store = JsonFileStore::open(&cli.store)
        .with_context(|| format!("opening store {}", cli.store.display()))?;

    match cli.command {
        Command::Render(args) => render(&cfg, &store, args),
        Command::Seed { year, rng_seed } => {
            let mut rng = match rng_seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            let ids = store.insert_many(seed_records(&mut rng, year, Utc::now()))?;
            println!("Inserted {} records into {}", ids.len(), store.path().display());
            Ok(())
        }
        Command::Add(a) => {
            let record = NewRecord::new(a.month, a.year, a.region)
                .with_metric(Metric::Ventas, a.ventas)
                .with_metric(Metric::Costes, a.costes)
                .with_metric(Metric::Tickets, a.tickets)
                .with_metric(Metric::Satisfaccion, a.satisfaccion);
            let id = store.insert(record)?;
            println!("Inserted record {id}");
            Ok(())
        }
        Command::List(f) => list(&cfg, &store, f),
        Command::Delete { id } => {
            if store.delete(id)? {
                println!("Deleted record {id}");
            } else {
                log::warn!("no record with id {id}");
            }
            Ok(())
        }
        Command::Clear { yes } => {
            if !yes {
                anyhow::bail!("refusing to empty {} without --yes", store.path().display());
            }
            store.clear()?;
            println!("Cleared {}", store.path().display());
            Ok(())
        }
        Command::Import { path } => {
            let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
            let rows = read_csv(BufReader::new(file)).with_context(|| format!("reading CSV {}", path.display()))?;
            let ids = store.insert_many(rows)?;
            println!("Imported {} records from {}", ids.len(), path.display());
            Ok(())
        }
        Command::Export { path } => {
            let records = store.list()?;
            if path.as_os_str() == "-" {
                write_csv(io::stdout().lock(), &records)?;
            } else {
                let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
                write_csv(file, &records)?;
                println!("Exported {} records to {}", records.len(), path.display());
            }
            Ok(())
        }
    }
}

/// Config-file filters overridden by whatever was given on the command line.
fn merged_filters(cfg: &Config, args: FilterArgs) -> Filters {
    let base = &cfg.filters.filters;
    Filters {
        year: args.year.or(base.year),
        region: args.region.or(base.region),
        search: args.search.unwrap_or_else(|| base.search.clone()),
    }
}

fn render(cfg: &Config, store: &dyn RecordStore, args: RenderArgs) -> Result<()> {
    let metric = args.metric.unwrap_or(cfg.filters.metric);
    let mut ctx = DashboardContext::new(merged_filters(cfg, args.filters), metric);
    ctx.refresh(store)?;
    log::info!("{}", ctx.summary());

    let width = args.width.unwrap_or(cfg.output.width);
    let height = args.height.unwrap_or(cfg.output.height);
    let out_dir = args.out.unwrap_or_else(|| cfg.output.dir.clone());
    let draw_text = cfg.output.text && !args.no_text;

    let opts = cfg.dashboard_options()?;
    let mut dash = Dashboard::new(width, height, draw_text)?;
    dash.render(&ctx.chart_data(), &opts);
    for path in dash.write_pngs(&out_dir)? {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn list(cfg: &Config, store: &dyn RecordStore, args: FilterArgs) -> Result<()> {
    let mut ctx = DashboardContext::new(merged_filters(cfg, args), cfg.filters.metric);
    ctx.refresh(store)?;
    let rows = ctx.filtered();
    if rows.is_empty() {
        println!("No data for the current filters.");
        return Ok(());
    }
    println!(
        "{:>5}  {:<4} {:>5}  {:<6} {:>8} {:>8} {:>8} {:>6}",
        "id", "mes", "año", "región", "ventas", "costes", "tickets", "satisf"
    );
    for r in &rows {
        println!(
            "{:>5}  {:<4} {:>5}  {:<6} {:>8} {:>8} {:>8} {:>6}",
            r.id, r.month, r.year, r.region, r.ventas, r.costes, r.tickets, r.satisfaccion
        );
    }
    println!("{}", ctx.summary());
    Ok(())
}
