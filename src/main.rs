//! Trade Clock
//!
//! Command-line front end for the market session clock and the trade PnL
//! calculator.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tradeclock::ids::generate_trade_id;
use tradeclock::pricing::round_to_tick;
use tradeclock::session::{
    HolidayCalendar, HolidayFile, HolidaySet, SessionClock, SystemClock, WaitOutcome,
    DATE_TIME_FORMAT,
};
use tradeclock::{Direction, PositionValuator, SessionConfig, TradeSnapshot, TradeState};

/// Market session clock and trade PnL CLI.
#[derive(Parser)]
#[command(name = "tradeclock")]
#[command(about = "Market session checks and trade PnL valuation", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// JSON file listing holiday dates (overrides HOLIDAYS_FILE)
    #[arg(long)]
    holidays: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's session window and whether the market is open
    Status,

    /// Block until today's session opens (Ctrl+C to abort)
    Wait {
        /// Label attached to the wait log line
        #[arg(short, long, default_value = "main")]
        context: String,
    },

    /// Compute PnL for a single trade
    Pnl {
        /// Trade state (active, completed, cancelled, disabled, created)
        #[arg(short, long, default_value = "active")]
        state: String,

        /// Trade direction (long, short)
        #[arg(short, long, default_value = "long")]
        direction: String,

        /// Entry price
        #[arg(short, long)]
        entry: Decimal,

        /// Filled quantity
        #[arg(short, long)]
        qty: i64,

        /// Current market price (active trades)
        #[arg(long, default_value = "0")]
        cmp: Decimal,

        /// Exit price (closed trades)
        #[arg(long, default_value = "0")]
        exit: Decimal,
    },

    /// Round a price up to the exchange tick size
    Tick {
        /// Raw price
        price: Decimal,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = SessionConfig::from_env()?;
    if cli.holidays.is_some() {
        config.holidays_file = cli.holidays.clone();
    }

    match cli.command {
        Commands::Status => {
            let session = session_clock(&config);
            let window = session.session_window();

            println!("\n=== Market Session ===");
            println!("Open:             {}", window.open.format(DATE_TIME_FORMAT));
            println!("Close:            {}", window.close.format(DATE_TIME_FORMAT));
            println!("Holiday:          {}", yes_no(session.is_today_holiday()?));
            println!("Open now:         {}", yes_no(session.is_open()?));
            println!("Closed for day:   {}", yes_no(session.is_closed_for_day()?));
        }

        Commands::Wait { context } => {
            let session = session_clock(&config);
            if session.is_today_holiday()? {
                println!("Market is closed today.");
                return Ok(());
            }

            let shutdown = Arc::new(AtomicBool::new(false));
            let flag = shutdown.clone();
            tokio::spawn(async move {
                tokio::signal::ctrl_c().await.ok();
                info!("Shutdown signal received");
                flag.store(true, Ordering::SeqCst);
            });

            let poll = Duration::from_secs(config.poll_interval_secs);
            match session
                .wait_until_open_or_shutdown(&context, &shutdown, poll)
                .await
            {
                WaitOutcome::Opened => println!("Market is open."),
                WaitOutcome::Shutdown => println!("Wait aborted."),
            }
        }

        Commands::Pnl {
            state,
            direction,
            entry,
            qty,
            cmp,
            exit,
        } => {
            let state = TradeState::from_str(&state)
                .ok_or_else(|| anyhow!("Unknown trade state: {}", state))?;
            let direction = Direction::from_str(&direction)
                .ok_or_else(|| anyhow!("Unknown direction: {}", direction))?;

            let mut trade = TradeSnapshot::new(state, direction, entry, qty);
            trade.trade_id = generate_trade_id();
            trade.current_market_price = cmp;
            trade.exit_price = exit;
            PositionValuator::valuate(&mut trade);

            println!("\n=== Trade {} ===", trade.trade_id);
            println!("State:      {}", trade.trade_state.as_str());
            println!("Direction:  {}", trade.direction.as_str());
            match trade.trade_value() {
                Some(value) => println!("Value:      {:.2}", value),
                None => println!("Value:      out of range"),
            }
            println!("P&L:        {:.2}", trade.pnl);
            println!("P&L %:      {:.2}%", trade.pnl_percentage);
        }

        Commands::Tick { price } => {
            println!("{}", round_to_tick(price));
        }
    }

    Ok(())
}

/// Session clock over the local wall clock and the configured holiday source.
fn session_clock(config: &SessionConfig) -> SessionClock<SystemClock, Arc<dyn HolidayCalendar>> {
    let calendar: Arc<dyn HolidayCalendar> = match &config.holidays_file {
        Some(path) => Arc::new(HolidayFile::new(path.clone())),
        None => Arc::new(HolidaySet::default()),
    };
    SessionClock::new(SystemClock, calendar, config.hours)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
