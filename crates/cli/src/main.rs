use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use pipeline::{FilterControl, FilterState, SortDirection, filter_records};
use records::Dataset;
use std::path::PathBuf;

/// Labdesk - lab records console
#[derive(Parser)]
#[command(name = "labdesk")]
#[command(about = "Browse, filter and sort lab orders and payments", long_about = None)]
struct Cli {
    /// Path to the record data directory (orders.json, payments.json)
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List lab orders
    Orders {
        /// Case-insensitive text search over code, patient and tests
        #[arg(long)]
        search: Option<String>,

        /// Status values to include (repeatable); none means all
        #[arg(long)]
        status: Vec<String>,

        /// Earliest order date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest order date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Field to sort by (code, patient, status, ordered_at, total)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },

    /// List payments
    Payments {
        /// Case-insensitive text search over reference and patient
        #[arg(long)]
        search: Option<String>,

        /// Status values to include (repeatable); none means all
        #[arg(long)]
        status: Vec<String>,

        /// Method values to include (repeatable); none means all
        #[arg(long)]
        method: Vec<String>,

        /// Earliest payment date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest payment date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Field to sort by (reference, patient, status, method, paid_at, amount)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },

    /// Show the available filter controls and their options
    Filters,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Orders {
            search,
            status,
            from,
            to,
            sort,
            desc,
        } => {
            let dataset = load_dataset(&cli.data_dir)?;
            let state = build_state(search, &[("status", status)], "ordered_at", from, to, sort, desc);
            handle_orders(dataset, &state)?
        }
        Commands::Payments {
            search,
            status,
            method,
            from,
            to,
            sort,
            desc,
        } => {
            let dataset = load_dataset(&cli.data_dir)?;
            let state = build_state(
                search,
                &[("status", status), ("method", method)],
                "paid_at",
                from,
                to,
                sort,
                desc,
            );
            handle_payments(dataset, &state)?
        }
        Commands::Filters => handle_filters()?,
    }

    Ok(())
}

fn load_dataset(data_dir: &PathBuf) -> Result<Dataset> {
    Dataset::load_from_dir(data_dir)
        .with_context(|| format!("Failed to load records from {}", data_dir.display()))
}

/// Map CLI flags onto a FilterState.
fn build_state(
    search: Option<String>,
    set_filters: &[(&str, Vec<String>)],
    date_field: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    sort: Option<String>,
    desc: bool,
) -> FilterState {
    let mut state = FilterState::new();

    if let Some(query) = search {
        state.set_search(query);
    }
    for (field, values) in set_filters {
        for value in values {
            state.toggle_value(*field, value.clone());
        }
    }
    if from.is_some() || to.is_some() {
        state.set_date_range(
            date_field,
            from.unwrap_or(NaiveDate::MIN),
            to.unwrap_or(NaiveDate::MAX),
        );
    }
    if let Some(field) = sort {
        let direction = if desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        state.set_sort(field, direction);
    }

    state
}

/// Handle the 'orders' command
fn handle_orders(dataset: Dataset, state: &FilterState) -> Result<()> {
    let total = dataset.orders.len();
    let filtered = filter_records(dataset.orders, state).context("Invalid order filter")?;

    println!(
        "{}",
        format!("Orders ({} of {}):", filtered.len(), total).bold().blue()
    );
    for order in &filtered {
        println!(
            "{}  {:<24} {:<18} {:<12} {:>9.2}",
            order.code.bold(),
            order.patient,
            paint(order.status.label(), order.status.color()),
            order.ordered_at,
            order.total
        );
        if !order.tests.is_empty() {
            println!("    tests: {}", order.tests.join(", ").dimmed());
        }
    }
    Ok(())
}

/// Handle the 'payments' command
fn handle_payments(dataset: Dataset, state: &FilterState) -> Result<()> {
    let total = dataset.payments.len();
    let filtered = filter_records(dataset.payments, state).context("Invalid payment filter")?;

    println!(
        "{}",
        format!("Payments ({} of {}):", filtered.len(), total).bold().blue()
    );
    for payment in &filtered {
        println!(
            "{}  {:<24} {:<14} {:<12} {:<12} {:>9.2}",
            payment.reference.bold(),
            payment.patient,
            payment.method.label(),
            paint(payment.status.label(), payment.status.color()),
            payment.paid_at,
            payment.amount
        );
    }
    Ok(())
}

/// Handle the 'filters' command
fn handle_filters() -> Result<()> {
    println!("{}", "Order filters:".bold().blue());
    print_controls(&records::order_filter_controls()?);

    println!("{}", "Payment filters:".bold().blue());
    print_controls(&records::payment_filter_controls()?);

    Ok(())
}

fn print_controls(controls: &[FilterControl]) {
    for control in controls {
        match control {
            FilterControl::Search { placeholder } => {
                println!("{}search: {}", "• ".green(), placeholder);
            }
            FilterControl::DateRange { field, label } => {
                println!("{}date range on '{}': {}", "• ".green(), field, label);
            }
            FilterControl::MultiSelect { field, label, options } => {
                println!("{}multi-select on '{}': {}", "• ".green(), field, label);
                for option in options {
                    let label = match &option.color {
                        Some(color) => paint(&option.label, color),
                        None => option.label.normal(),
                    };
                    println!("    {:<14} {}", option.id, label);
                }
            }
        }
    }
}

/// Render a label in its display color token.
fn paint(text: &str, color: &str) -> ColoredString {
    match color {
        "amber" => text.yellow(),
        "green" => text.green(),
        "blue" => text.blue(),
        "violet" => text.magenta(),
        "red" => text.red(),
        _ => text.normal(),
    }
}
