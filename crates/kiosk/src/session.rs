// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! An operator session: reads console lines and drives the booking store.

use crate::console::{ConsoleCommand, HELP};
use seatbook::{BookingSnapshot, BookingStore, Clock, NoOpReason, TransitionOutcome};
use seatbook_domain::{BookingStats, SeatId, SeatStatus, Show, ShowDate, theatre_template};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, warn};

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One saved booking as printed by `history`.
#[derive(Debug, Serialize)]
struct HistoryEntry<'a> {
    date: &'a ShowDate,
    show: &'a Show,
    #[serde(with = "time::serde::rfc3339")]
    saved_at: OffsetDateTime,
    stats: BookingStats,
}

impl<'a> From<&'a BookingSnapshot> for HistoryEntry<'a> {
    fn from(snapshot: &'a BookingSnapshot) -> Self {
        Self {
            date: &snapshot.date,
            show: &snapshot.show,
            saved_at: snapshot.timestamp,
            stats: snapshot.stats(),
        }
    }
}

pub struct Session<C: Clock, W: Write> {
    store: BookingStore<C>,
    out: W,
}

impl<C: Clock, W: Write> Session<C, W> {
    pub const fn new(store: BookingStore<C>, out: W) -> Self {
        Self { store, out }
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Bad lines are reported and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            let line: String = line?;
            let line: &str = line.trim();
            if line.is_empty() {
                continue;
            }

            match line.parse::<ConsoleCommand>() {
                Ok(command) => {
                    debug!(?command, "Console command");
                    if self.execute(command)? == Flow::Quit {
                        break;
                    }
                }
                Err(err) => {
                    warn!(input = line, "Rejected console input: {err}");
                    writeln!(self.out, "error: {err}")?;
                }
            }
        }

        self.out.flush()
    }

    /// Executes one command against the store and prints the result.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute(&mut self, command: ConsoleCommand) -> io::Result<Flow> {
        match command {
            ConsoleCommand::Date(date) => {
                self.store.set_selected_date(date);
                self.print_selection()?;
            }
            ConsoleCommand::Show(show) => {
                warn_if_unusual(&show);
                self.store.set_selected_show(show);
                self.print_selection()?;
            }
            ConsoleCommand::Toggle(seat_id) => {
                let outcome: TransitionOutcome = self.store.toggle_seat_status(&seat_id);
                self.print_toggle(&seat_id, outcome)?;
            }
            ConsoleCommand::Save => {
                self.store.save_booking();
                writeln!(
                    self.out,
                    "saved booking for {} {} ({} in history)",
                    self.store.selected_date(),
                    self.store.selected_show(),
                    self.store.history().len()
                )?;
            }
            ConsoleCommand::Load { date, show } => {
                warn_if_unusual(&show);
                let outcome: TransitionOutcome = self.store.load_booking_for_date(date, show);
                self.print_load(outcome)?;
            }
            ConsoleCommand::Reset => {
                self.store.initialize_seats();
                writeln!(self.out, "seat map reset to the default layout")?;
            }
            ConsoleCommand::Stats => {
                serde_json::to_writer(&mut self.out, &self.store.booking_stats())?;
                writeln!(self.out)?;
            }
            ConsoleCommand::Seat(seat_id) => match self.store.find_seat(&seat_id) {
                Some(seat) => {
                    serde_json::to_writer(&mut self.out, seat)?;
                    writeln!(self.out)?;
                }
                None => writeln!(self.out, "{seat_id}: no such seat")?,
            },
            ConsoleCommand::History => {
                let entries: Vec<HistoryEntry<'_>> = self
                    .store
                    .history()
                    .iter()
                    .map(|snapshot| HistoryEntry::from(snapshot.as_ref()))
                    .collect();
                serde_json::to_writer(&mut self.out, &entries)?;
                writeln!(self.out)?;
            }
            ConsoleCommand::Help => self.print_help()?,
            ConsoleCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.out, "{HELP}")?;

        writeln!(self.out, "sections:")?;
        for section in theatre_template() {
            writeln!(self.out, "  {:<8} {}", section.code, section.name)?;
        }

        writeln!(self.out, "legend:")?;
        for status in SeatStatus::CYCLE.into_iter().chain([SeatStatus::Disabled]) {
            writeln!(self.out, "  {:<10} {}", status.as_str(), status.label())?;
        }

        Ok(())
    }

    fn print_selection(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "selected {} {}",
            self.store.selected_date(),
            self.store.selected_show()
        )
    }

    fn print_toggle(&mut self, seat_id: &SeatId, outcome: TransitionOutcome) -> io::Result<()> {
        match (outcome, self.store.find_seat(seat_id)) {
            (TransitionOutcome::Unchanged(NoOpReason::SeatNotFound), _) | (_, None) => {
                writeln!(self.out, "{seat_id}: no such seat")
            }
            (TransitionOutcome::Unchanged(NoOpReason::SeatNotToggleable), Some(seat)) => {
                writeln!(self.out, "{seat_id}: {} and cannot be changed", seat.status)
            }
            (_, Some(seat)) => writeln!(self.out, "{seat_id} -> {}", seat.status),
        }
    }

    fn print_load(&mut self, outcome: TransitionOutcome) -> io::Result<()> {
        let date: &ShowDate = self.store.selected_date();
        let show: &Show = self.store.selected_show();

        if let TransitionOutcome::Restored { saved_at } = outcome {
            let saved_at: String = saved_at.format(&Rfc3339).map_err(io::Error::other)?;
            writeln!(
                self.out,
                "restored booking for {date} {show} saved at {saved_at}"
            )
        } else {
            writeln!(
                self.out,
                "no booking saved for {date} {show}; starting from the default layout"
            )
        }
    }
}

fn warn_if_unusual(show: &Show) {
    if !show.is_standard() {
        warn!(%show, standard = ?Show::STANDARD, "Show is not a standard slot");
    }
}
