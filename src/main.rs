use anyhow::{Context, Result, ensure};
use bigdecimal::BigDecimal;
use clap::{Args, Parser, Subcommand};
use parking_fee::parking_session::read_sessions;
use parking_fee::{Amount, ParkingSession, RateTable, VehicleType};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Exit status of a quote rejected by validation.
const VALIDATION_FAILURE: u8 = 2;

/// Parking lot fee calculator.
/// Bills every started hour at the vehicle category's hourly rate; electric vehicles
/// pay half the rate.
#[derive(Parser, Debug)]
#[command(version, long_about)]
struct ParkingFee {
    #[command(flatten)]
    rates: RateArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate the fee for a single vehicle.
    Quote(QuoteArgs),
    /// Calculate the fees for every session in a CSV file.
    /// The file must have the header `PLATE,VEHICLE TYPE,ELECTRIC,ENTRY,EXIT`.
    Batch { sessions_csv: PathBuf },
    /// Print the hourly rate of each vehicle category.
    Rates {
        /// Show the discounted electric rates.
        #[arg(long)]
        electric: bool,
    },
}

#[derive(Args, Debug)]
struct QuoteArgs {
    /// Vehicle type exactly as shown in the form: `Sub-compacto`, `Compacto`,
    /// `Hatch/SUV/Sedan` or `Pickup`. Anything else is billed at a zero rate.
    #[arg(short = 't', long, default_value = "")]
    vehicle_type: String,
    /// The vehicle is electric.
    #[arg(short, long)]
    electric: bool,
    /// Entry time, `HH:mm`.
    #[arg(long, default_value = "")]
    entry: String,
    /// Exit time, `HH:mm`, on the same day as the entry.
    #[arg(long, default_value = "")]
    exit: String,
    #[arg(short, long)]
    plate: Option<String>,
}

#[derive(Args, Debug, Default)]
struct RateArgs {
    #[arg(
        long,
        global = true,
        env = "PARKING_RATE_SUB_COMPACT",
        long_help = rate_help("sub-compact")
    )]
    sub_compact_rate: Option<BigDecimal>,
    #[arg(long, global = true, env = "PARKING_RATE_COMPACT", long_help = rate_help("compact"))]
    compact_rate: Option<BigDecimal>,
    #[arg(
        long,
        global = true,
        env = "PARKING_RATE_HATCH_SUV_SEDAN",
        long_help = rate_help("hatch, SUV and sedan")
    )]
    hatch_suv_sedan_rate: Option<BigDecimal>,
    #[arg(long, global = true, env = "PARKING_RATE_PICKUP", long_help = rate_help("pickup"))]
    pickup_rate: Option<BigDecimal>,
}

fn rate_help(category: &str) -> String {
    format!(
        "Hourly rate for {} vehicles, in reais. \
         Overrides the built-in rate table.",
        category
    )
}

impl RateArgs {
    fn to_rate_table(&self) -> Result<RateTable> {
        let defaults = RateTable::default();
        let rates = RateTable {
            sub_compact: self.sub_compact_rate.clone().unwrap_or(defaults.sub_compact),
            compact: self.compact_rate.clone().unwrap_or(defaults.compact),
            hatch_suv_sedan: self
                .hatch_suv_sedan_rate
                .clone()
                .unwrap_or(defaults.hatch_suv_sedan),
            pickup: self.pickup_rate.clone().unwrap_or(defaults.pickup),
        };
        let zero = BigDecimal::from(0);
        for vehicle_type in VehicleType::BILLABLE {
            ensure!(
                rates.base_rate(vehicle_type) >= zero,
                "the {vehicle_type} rate must not be negative"
            );
        }
        Ok(rates)
    }
}

/// Message to show for a single quote and the process exit status.
fn quote(session: &ParkingSession, rates: &RateTable) -> (String, u8) {
    match session.fee(rates) {
        Ok(fee) => {
            info!(plate = session.plate_or_placeholder(), %fee, "quoted");
            (format!("Total amount due: R$ {fee}"), 0)
        }
        Err(error) => (error.to_string(), VALIDATION_FAILURE),
    }
}

#[derive(Debug)]
struct BatchSummary {
    lines: Vec<String>,
    total: Amount,
    n_rejected: usize,
}

/// One line per session; rejected sessions are listed with their message and left out
/// of the total.
fn summarize_batch(sessions: &[ParkingSession], rates: &RateTable) -> BatchSummary {
    let mut summary = BatchSummary {
        lines: Vec::with_capacity(sessions.len()),
        total: Amount::zero(),
        n_rejected: 0,
    };
    for session in sessions {
        let plate = session.plate_or_placeholder();
        match session.fee(rates) {
            Ok(fee) => {
                summary.lines.push(format!("{plate}\t{}\tR$ {fee}", session.vehicle_type));
                summary.total += fee;
            }
            Err(error) => {
                warn!(plate, %error, "rejected session");
                summary.lines.push(format!("{plate}\t{}\t{error}", session.vehicle_type));
                summary.n_rejected += 1;
            }
        }
    }
    summary
}

fn rate_lines(rates: &RateTable, electric: bool) -> Vec<String> {
    VehicleType::BILLABLE
        .into_iter()
        .map(|vehicle_type| {
            let rate = Amount::from(rates.effective_rate(vehicle_type, electric));
            format!("{vehicle_type}\tR$ {rate}/h")
        })
        .collect()
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = ParkingFee::parse();
    let rates = args.rates.to_rate_table()?;

    match args.command {
        Command::Quote(args) => {
            let session = ParkingSession {
                plate: args.plate,
                vehicle_type: VehicleType::from_label_or_unselected(&args.vehicle_type),
                is_electric: args.electric,
                entry_time: args.entry,
                exit_time: args.exit,
            };
            let (message, status) = quote(&session, &rates);
            println!("{message}");
            Ok(ExitCode::from(status))
        }
        Command::Batch { sessions_csv } => {
            let file = File::open(&sessions_csv)
                .with_context(|| format!("failed to open {}", sessions_csv.display()))?;
            let sessions = read_sessions(BufReader::new(file))?;
            info!(n_sessions = sessions.len(), "loaded sessions");

            let summary = summarize_batch(&sessions, &rates);
            for line in &summary.lines {
                println!("{line}");
            }
            println!("Total: R$ {}", summary.total);
            info!(n_rejected = summary.n_rejected, "batch finished");
            Ok(ExitCode::SUCCESS)
        }
        Command::Rates { electric } => {
            for line in rate_lines(&rates, electric) {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
