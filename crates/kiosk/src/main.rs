// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod console;
mod session;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use seatbook::{BookingStore, StoreConfig};
use seatbook_domain::{Show, ShowDate, validate_layout};
use session::Session;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Seatbook kiosk - operator console for the cinema booking store
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Date to start on. Defaults to today's date (UTC).
    #[arg(short, long)]
    date: Option<String>,

    /// Show to start on
    #[arg(short, long, default_value = "Evening")]
    show: String,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn store_config(&self) -> StoreConfig {
        let config: StoreConfig = StoreConfig::default().with_show(Show::new(&self.show));
        match &self.date {
            Some(date) => config.with_date(ShowDate::new(date)),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // Logs go to stderr so stdout carries only command output
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    info!("Starting seatbook kiosk");

    let store: BookingStore = BookingStore::with_config(args.store_config());
    validate_layout(&store.state().sections)?;
    if !store.selected_show().is_standard() {
        warn!(show = %store.selected_show(), "Starting on a show that is not a standard slot");
    }
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(store, stdout.lock()).run(stdin.lock())?;

    info!("Kiosk session ended");
    Ok(())
}
