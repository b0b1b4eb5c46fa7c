// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use seatbook_domain::{
    BookingStats, Seat, SeatId, SeatSection, Show, ShowDate, compute_booking_stats,
    generate_layout,
};
use serde::Serialize;
use std::sync::Arc;
use time::OffsetDateTime;

/// A saved booking: the full seat map for one date and show.
///
/// Snapshots own their sections outright. Once recorded they are never
/// modified, so live seat changes cannot reach them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSnapshot {
    /// The date the booking was saved for.
    pub date: ShowDate,
    /// The show the booking was saved for.
    pub show: Show,
    /// Copy of the seat map at save time.
    pub sections: Vec<SeatSection>,
    /// When the booking was saved.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl BookingSnapshot {
    /// Returns true if this snapshot was saved for the given date and show.
    #[must_use]
    pub fn matches(&self, date: &ShowDate, show: &Show) -> bool {
        self.date == *date && self.show == *show
    }

    /// Booking statistics for the saved seat map.
    #[must_use]
    pub fn stats(&self) -> BookingStats {
        compute_booking_stats(&self.sections)
    }
}

/// The complete booking state.
///
/// State values are replaced wholesale by `apply`; nothing mutates a state
/// another holder can observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingState {
    /// The date currently being worked on.
    pub selected_date: ShowDate,
    /// The show currently being worked on.
    pub selected_show: Show,
    /// The live seat map.
    pub sections: Vec<SeatSection>,
    /// Saved bookings in save order.
    ///
    /// Snapshots are immutable, so successive states share them.
    pub history: Vec<Arc<BookingSnapshot>>,
}

impl BookingState {
    /// Creates a state with the default layout and an empty history.
    ///
    /// # Arguments
    ///
    /// * `selected_date` - The date to start on
    /// * `selected_show` - The show to start on
    #[must_use]
    pub fn new(selected_date: ShowDate, selected_show: Show) -> Self {
        Self {
            selected_date,
            selected_show,
            sections: generate_layout(),
            history: Vec::new(),
        }
    }

    /// Iterates over every seat, section by section and row by row.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.sections.iter().flat_map(SeatSection::seats)
    }

    /// Looks up a seat by id.
    #[must_use]
    pub fn find_seat(&self, seat_id: &SeatId) -> Option<&Seat> {
        self.seats().find(|seat| seat.id == *seat_id)
    }

    pub(crate) fn find_seat_mut(&mut self, seat_id: &SeatId) -> Option<&mut Seat> {
        self.sections
            .iter_mut()
            .flat_map(SeatSection::seats_mut)
            .find(|seat| seat.id == *seat_id)
    }

    /// Booking statistics for the live seat map.
    #[must_use]
    pub fn stats(&self) -> BookingStats {
        compute_booking_stats(&self.sections)
    }

    /// Returns the most recently saved snapshot for a date and show.
    ///
    /// When several saves share the same key, the last one wins.
    #[must_use]
    pub fn latest_snapshot_for(&self, date: &ShowDate, show: &Show) -> Option<&BookingSnapshot> {
        self.history
            .iter()
            .rev()
            .map(Arc::as_ref)
            .find(|snapshot| snapshot.matches(date, show))
    }

    /// Iterates over every snapshot saved for a date and show, oldest first.
    ///
    /// Yielded snapshots borrow from the state only, so they outlive the keys.
    pub fn snapshots_for<'a, 'k>(
        &'a self,
        date: &'k ShowDate,
        show: &'k Show,
    ) -> impl Iterator<Item = &'a BookingSnapshot> + use<'a, 'k> {
        self.history
            .iter()
            .map(Arc::as_ref)
            .filter(move |snapshot| snapshot.matches(date, show))
    }
}

/// Why a command left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// No seat has the requested id.
    SeatNotFound,
    /// The seat is disabled or an aisle placeholder.
    SeatNotToggleable,
}

/// What a command did to the state.
///
/// An unchanged outcome is not an error; lookups that miss are silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The command took effect.
    Applied,
    /// The seat map was restored from a saved booking.
    Restored {
        /// When the restored booking was saved.
        saved_at: OffsetDateTime,
    },
    /// The command had no effect.
    Unchanged(NoOpReason),
}

impl TransitionOutcome {
    /// Returns true if the command changed the state.
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged(_))
    }
}

/// The result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: BookingState,
    /// What the transition did.
    pub outcome: TransitionOutcome,
}
