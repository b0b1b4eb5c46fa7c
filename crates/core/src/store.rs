// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking store: owner of the live `BookingState`.
//!
//! Every named operation builds a `Command`, runs it through `apply` and swaps
//! in the resulting state. Callers never write state fields directly.

use crate::apply::apply;
use crate::clock::{Clock, SystemClock};
use crate::command::Command;
use crate::config::StoreConfig;
use crate::state::{BookingSnapshot, BookingState, TransitionOutcome, TransitionResult};
use seatbook_domain::{BookingStats, Seat, SeatId, Show, ShowDate};
use std::sync::Arc;
use tracing::{debug, info};

/// The booking state store.
#[derive(Debug)]
pub struct BookingStore<C: Clock = SystemClock> {
    state: BookingState,
    clock: C,
}

impl BookingStore<SystemClock> {
    /// Creates a store on today's date and the default show.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates a store from explicit start-up settings.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for BookingStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BookingStore<C> {
    /// Creates a store that reads time from `clock`.
    ///
    /// # Arguments
    ///
    /// * `config` - Start-up date and show
    /// * `clock` - Time source for snapshot timestamps and the default date
    #[must_use]
    pub fn with_clock(config: StoreConfig, clock: C) -> Self {
        let selected_date: ShowDate = config
            .initial_date
            .unwrap_or_else(|| ShowDate::from_date(clock.now().date()));
        let state: BookingState = BookingState::new(selected_date, config.initial_show);

        info!(
            date = %state.selected_date,
            show = %state.selected_show,
            "Initialized booking store"
        );

        Self { state, clock }
    }

    /// Applies a command and swaps in the resulting state.
    ///
    /// This is the only path by which the live state changes.
    pub fn dispatch(&mut self, command: Command) -> TransitionOutcome {
        let name: &'static str = command.name();
        let result: TransitionResult = apply(&self.state, command, self.clock.now());
        debug!(command = name, outcome = ?result.outcome, "Applied command");

        self.state = result.new_state;
        result.outcome
    }

    /// Selects the date to work on. Any string is accepted.
    pub fn set_selected_date(&mut self, date: ShowDate) {
        self.dispatch(Command::SetSelectedDate { date });
    }

    /// Selects the show to work on. Any string is accepted.
    pub fn set_selected_show(&mut self, show: Show) {
        self.dispatch(Command::SetSelectedShow { show });
    }

    /// Advances a seat one step along the status cycle.
    ///
    /// `available → booked → blocked → bms-booked → available`. Disabled seats,
    /// aisle placeholders and unknown ids are left alone.
    pub fn toggle_seat_status(&mut self, seat_id: &SeatId) -> TransitionOutcome {
        let outcome: TransitionOutcome = self.dispatch(Command::ToggleSeat {
            seat_id: seat_id.clone(),
        });
        if let TransitionOutcome::Unchanged(reason) = outcome {
            debug!(seat_id = %seat_id, ?reason, "Seat toggle ignored");
        }
        outcome
    }

    /// Saves the live seat map as a booking for the selected date and show.
    ///
    /// Repeated saves for the same date and show are all kept.
    pub fn save_booking(&mut self) {
        self.dispatch(Command::SaveBooking);
        info!(
            date = %self.state.selected_date,
            show = %self.state.selected_show,
            history_len = self.state.history.len(),
            "Saved booking"
        );
    }

    /// Loads the latest booking saved for a date and show.
    ///
    /// Selects the requested date and show. If nothing was saved for them the
    /// seat map is reset to the default layout.
    pub fn load_booking_for_date(&mut self, date: ShowDate, show: Show) -> TransitionOutcome {
        let outcome: TransitionOutcome = self.dispatch(Command::LoadBooking { date, show });
        info!(
            date = %self.state.selected_date,
            show = %self.state.selected_show,
            restored = matches!(outcome, TransitionOutcome::Restored { .. }),
            "Loaded booking"
        );
        outcome
    }

    /// Resets the seat map to the default layout. History is kept.
    pub fn initialize_seats(&mut self) {
        self.dispatch(Command::InitializeSeats);
    }

    /// Booking statistics for the live seat map.
    #[must_use]
    pub fn booking_stats(&self) -> BookingStats {
        self.state.stats()
    }

    /// The live state.
    #[must_use]
    pub const fn state(&self) -> &BookingState {
        &self.state
    }

    /// The selected date.
    #[must_use]
    pub const fn selected_date(&self) -> &ShowDate {
        &self.state.selected_date
    }

    /// The selected show.
    #[must_use]
    pub const fn selected_show(&self) -> &Show {
        &self.state.selected_show
    }

    /// Looks up a seat in the live seat map.
    #[must_use]
    pub fn find_seat(&self, seat_id: &SeatId) -> Option<&Seat> {
        self.state.find_seat(seat_id)
    }

    /// Saved bookings in save order.
    #[must_use]
    pub fn history(&self) -> &[Arc<BookingSnapshot>] {
        &self.state.history
    }

    /// Every booking saved for a date and show, oldest first.
    #[must_use]
    pub fn snapshots_for(&self, date: &ShowDate, show: &Show) -> Vec<&BookingSnapshot> {
        self.state.snapshots_for(date, show).collect()
    }
}
