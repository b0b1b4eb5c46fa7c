// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use seatbook_domain::{SeatId, Show, ShowDate};

/// A command represents operator intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Change the date being worked on.
    SetSelectedDate {
        /// The new date.
        date: ShowDate,
    },
    /// Change the show being worked on.
    SetSelectedShow {
        /// The new show.
        show: Show,
    },
    /// Advance a seat one step along the status cycle.
    ToggleSeat {
        /// The seat to advance.
        seat_id: SeatId,
    },
    /// Record the current seat map as a booking for the selected date and show.
    SaveBooking,
    /// Replace the seat map with the latest booking saved for a date and show.
    LoadBooking {
        /// The date to load.
        date: ShowDate,
        /// The show to load.
        show: Show,
    },
    /// Reset the seat map to the default layout.
    InitializeSeats,
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetSelectedDate { .. } => "SetSelectedDate",
            Self::SetSelectedShow { .. } => "SetSelectedShow",
            Self::ToggleSeat { .. } => "ToggleSeat",
            Self::SaveBooking => "SaveBooking",
            Self::LoadBooking { .. } => "LoadBooking",
            Self::InitializeSeats => "InitializeSeats",
        }
    }
}
