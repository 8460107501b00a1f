use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use inventory_utils::utils::get_config_path;
use inventory_utils::{
    check_file_exists, days_to_expire, file_matches_hash, get_file_hash, get_stock_status,
    is_expired, money_format, read_config, Clock, FixedClock, InventoryConfig, SystemClock,
};
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Inventory helpers - money formatting, expiry dates, stock levels and file hashes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON config file (defaults to ./inventory.json)
    #[arg(short, long, env = "INVENTORY_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format an amount of money
    Money {
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Locale tag, e.g. de-DE
        #[arg(short, long, env = "INVENTORY_LOCALE")]
        locale: Option<String>,
    },

    /// Days left until a YYYY-MM-DD due date (0 if due or past)
    DaysToExpire {
        date: String,

        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Check whether a due date is today or earlier
    Expired {
        date: String,

        /// chrono format of the date, overrides the config file
        #[arg(short, long)]
        format: Option<String>,

        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Classify a stock level: 0 = out of stock, -1 = low, 1 = normal
    Stock {
        #[arg(allow_negative_numbers = true)]
        current: String,

        #[arg(allow_negative_numbers = true)]
        minimum: String,
    },

    /// Print the SHA-256 digest of a file
    Hash { path: PathBuf },

    /// Check whether a file is accessible
    Exists { path: PathBuf },

    /// Compare a file against a stored SHA-256 digest
    Verify { path: PathBuf, digest: String },
}

fn load_config(path: Option<PathBuf>) -> Result<InventoryConfig, Box<dyn std::error::Error>> {
    let path = match path {
        Some(p) => p,
        None => get_config_path(&std::env::current_dir()?),
    };
    let config = read_config(&path)?;
    debug!(path = %path.display(), found = config.is_some(), "Loaded config");
    Ok(config.unwrap_or_default())
}

fn clock_for(today: Option<NaiveDate>) -> Box<dyn Clock> {
    match today {
        Some(date) => {
            info!(%date, "Using fixed clock");
            Box::new(FixedClock::on_date(date))
        }
        None => Box::new(SystemClock),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse CLI arguments
    let args = Args::parse();
    let output = run(args.command, args.config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", plain(&output));
    }
    Ok(())
}

/// Execute one subcommand. The config file is only read by commands that use it.
fn run(
    command: Command,
    config_path: Option<PathBuf>,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let output = match command {
        Command::Money { amount, locale } => {
            let locale = match locale {
                Some(l) => Some(l),
                None => load_config(config_path)?.locale,
            };
            let formatted = money_format(amount, locale.as_deref());
            json!({ "amount": amount, "formatted": formatted })
        }
        Command::DaysToExpire { date, today } => {
            let clock = clock_for(today);
            let days = days_to_expire(&date, clock.as_ref())?;
            json!({ "dueDate": date, "daysToExpire": days })
        }
        Command::Expired {
            date,
            format,
            today,
        } => {
            let clock = clock_for(today);
            let format = match format {
                Some(f) => f,
                None => load_config(config_path)?.date_format,
            };
            let expired = is_expired(&date, &format, clock.as_ref())?;
            json!({ "dueDate": date, "expired": expired })
        }
        Command::Stock { current, minimum } => {
            let status = get_stock_status(&current, &minimum)?;
            json!({ "status": status, "code": status.code() })
        }
        Command::Hash { path } => {
            let hash = get_file_hash(&path)?;
            json!({ "path": path, "sha256": hash })
        }
        Command::Exists { path } => {
            let exists = check_file_exists(&path);
            json!({ "path": path, "exists": exists })
        }
        Command::Verify { path, digest } => {
            let matches = file_matches_hash(&path, &digest)?;
            json!({ "path": path, "matches": matches })
        }
    };
    Ok(output)
}

/// Render the primary value of a result for plain-text output.
fn plain(output: &serde_json::Value) -> String {
    let primary = ["formatted", "daysToExpire", "expired", "code", "sha256", "exists", "matches"]
        .iter()
        .find_map(|key| output.get(*key));

    match primary {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => output.to_string(),
    }
}
