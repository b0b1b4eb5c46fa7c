// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::state::{BookingSnapshot, BookingState, NoOpReason, TransitionOutcome, TransitionResult};
use seatbook_domain::{SeatSection, generate_layout};
use std::sync::Arc;
use time::OffsetDateTime;

/// Applies a command to the current state, producing a new state.
///
/// The input state is never modified. Every command is total: a command that
/// cannot take effect returns an unchanged copy with the reason attached.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `now` - Capture time for any snapshot the command records
///
/// # Returns
///
/// The new state and what the command did to it.
#[must_use]
pub fn apply(state: &BookingState, command: Command, now: OffsetDateTime) -> TransitionResult {
    match command {
        Command::SetSelectedDate { date } => {
            let mut new_state: BookingState = state.clone();
            new_state.selected_date = date;
            applied(new_state)
        }
        Command::SetSelectedShow { show } => {
            let mut new_state: BookingState = state.clone();
            new_state.selected_show = show;
            applied(new_state)
        }
        Command::ToggleSeat { seat_id } => {
            let Some(seat) = state.find_seat(&seat_id) else {
                return unchanged(state, NoOpReason::SeatNotFound);
            };
            // Disabled seats and aisles are outside the cycle
            if !seat.is_bookable() {
                return unchanged(state, NoOpReason::SeatNotToggleable);
            }

            let mut new_state: BookingState = state.clone();
            if let Some(seat) = new_state.find_seat_mut(&seat_id) {
                seat.status = seat.status.next_in_cycle();
            }
            applied(new_state)
        }
        Command::SaveBooking => {
            let snapshot: BookingSnapshot = BookingSnapshot {
                date: state.selected_date.clone(),
                show: state.selected_show.clone(),
                sections: state.sections.clone(),
                timestamp: now,
            };

            let mut new_state: BookingState = state.clone();
            new_state.history.push(Arc::new(snapshot));
            applied(new_state)
        }
        Command::LoadBooking { date, show } => {
            let restored: Option<(Vec<SeatSection>, OffsetDateTime)> = state
                .latest_snapshot_for(&date, &show)
                .map(|snapshot| (snapshot.sections.clone(), snapshot.timestamp));

            let mut new_state: BookingState = state.clone();
            new_state.selected_date = date;
            new_state.selected_show = show;

            match restored {
                Some((sections, saved_at)) => {
                    new_state.sections = sections;
                    TransitionResult {
                        new_state,
                        outcome: TransitionOutcome::Restored { saved_at },
                    }
                }
                None => {
                    new_state.sections = generate_layout();
                    applied(new_state)
                }
            }
        }
        Command::InitializeSeats => {
            let mut new_state: BookingState = state.clone();
            new_state.sections = generate_layout();
            applied(new_state)
        }
    }
}

const fn applied(new_state: BookingState) -> TransitionResult {
    TransitionResult {
        new_state,
        outcome: TransitionOutcome::Applied,
    }
}

fn unchanged(state: &BookingState, reason: NoOpReason) -> TransitionResult {
    TransitionResult {
        new_state: state.clone(),
        outcome: TransitionOutcome::Unchanged(reason),
    }
}
