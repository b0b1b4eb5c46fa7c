// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_state, create_test_time, seat, status_of};
use crate::{BookingState, Command, NoOpReason, TransitionOutcome, TransitionResult, apply};
use seatbook_domain::{SeatStatus, Show, ShowDate, generate_layout};

#[test]
fn test_toggle_returns_new_state_and_leaves_input_alone() {
    let state: BookingState = create_test_state();
    let command: Command = Command::ToggleSeat {
        seat_id: seat("STAR-A1"),
    };

    let result: TransitionResult = apply(&state, command, create_test_time());

    assert_eq!(result.outcome, TransitionOutcome::Applied);
    assert_eq!(status_of(&result.new_state, "STAR-A1"), SeatStatus::Booked);
    assert_eq!(status_of(&state, "STAR-A1"), SeatStatus::Available);
}

#[test]
fn test_toggle_changes_only_the_target_seat() {
    let state: BookingState = create_test_state();
    let result = apply(
        &state,
        Command::ToggleSeat {
            seat_id: seat("STAR-B5"),
        },
        create_test_time(),
    );

    let changed: Vec<&str> = state
        .seats()
        .zip(result.new_state.seats())
        .filter(|(before, after)| before.status != after.status)
        .map(|(before, _)| before.id.as_str())
        .collect();
    assert_eq!(changed, vec!["STAR-B5"]);
}

#[test]
fn test_toggle_disabled_seat_is_unchanged() {
    let state: BookingState = create_test_state();
    let result = apply(
        &state,
        Command::ToggleSeat {
            seat_id: seat("BOX-A1"),
        },
        create_test_time(),
    );

    assert_eq!(
        result.outcome,
        TransitionOutcome::Unchanged(NoOpReason::SeatNotToggleable)
    );
    assert_eq!(result.new_state, state);
}

#[test]
fn test_toggle_aisle_is_unchanged() {
    let state: BookingState = create_test_state();
    let result = apply(
        &state,
        Command::ToggleSeat {
            seat_id: seat("BALCONY-C0"),
        },
        create_test_time(),
    );

    assert_eq!(
        result.outcome,
        TransitionOutcome::Unchanged(NoOpReason::SeatNotToggleable)
    );
    assert_eq!(status_of(&result.new_state, "BALCONY-C0"), SeatStatus::Disabled);
}

#[test]
fn test_toggle_unknown_seat_is_a_silent_no_op() {
    let state: BookingState = create_test_state();
    let result = apply(
        &state,
        Command::ToggleSeat {
            seat_id: seat("STAR-Z99"),
        },
        create_test_time(),
    );

    assert_eq!(
        result.outcome,
        TransitionOutcome::Unchanged(NoOpReason::SeatNotFound)
    );
    assert!(!result.outcome.is_change());
    assert_eq!(result.new_state, state);
}

#[test]
fn test_set_selected_date_and_show() {
    let state: BookingState = create_test_state();

    let result = apply(
        &state,
        Command::SetSelectedDate {
            date: ShowDate::new("whenever"),
        },
        create_test_time(),
    );
    assert_eq!(result.new_state.selected_date.value(), "whenever");
    assert_eq!(result.new_state.sections, state.sections);

    let result = apply(
        &result.new_state,
        Command::SetSelectedShow {
            show: Show::new("Night"),
        },
        create_test_time(),
    );
    assert_eq!(result.new_state.selected_show.value(), "Night");
    assert_eq!(result.new_state.selected_date.value(), "whenever");
}

#[test]
fn test_save_booking_appends_snapshot() {
    let state: BookingState = create_test_state();
    let result = apply(&state, Command::SaveBooking, create_test_time());

    assert_eq!(result.outcome, TransitionOutcome::Applied);
    assert!(state.history.is_empty());
    assert_eq!(result.new_state.history.len(), 1);

    let snapshot = &result.new_state.history[0];
    assert_eq!(snapshot.date.value(), "2024-01-01");
    assert_eq!(snapshot.show.value(), "Evening");
    assert_eq!(snapshot.timestamp, create_test_time());
    assert_eq!(snapshot.sections, state.sections);
}

#[test]
fn test_load_without_snapshot_resets_layout_and_selects_key() {
    let state: BookingState = create_test_state();
    let toggled = apply(
        &state,
        Command::ToggleSeat {
            seat_id: seat("STAR-A1"),
        },
        create_test_time(),
    )
    .new_state;

    let result = apply(
        &toggled,
        Command::LoadBooking {
            date: ShowDate::new("2024-02-02"),
            show: Show::new("Morning"),
        },
        create_test_time(),
    );

    assert_eq!(result.outcome, TransitionOutcome::Applied);
    assert_eq!(result.new_state.sections, generate_layout());
    assert_eq!(result.new_state.selected_date.value(), "2024-02-02");
    assert_eq!(result.new_state.selected_show.value(), "Morning");
}

#[test]
fn test_load_with_snapshot_reports_save_time() {
    let state: BookingState = create_test_state();
    let saved = apply(&state, Command::SaveBooking, create_test_time()).new_state;

    let result = apply(
        &saved,
        Command::LoadBooking {
            date: ShowDate::new("2024-01-01"),
            show: Show::new("Evening"),
        },
        create_test_time(),
    );

    assert_eq!(
        result.outcome,
        TransitionOutcome::Restored {
            saved_at: create_test_time()
        }
    );
}

#[test]
fn test_initialize_seats_keeps_history_and_selection() {
    let state: BookingState = create_test_state();
    let mut current = apply(
        &state,
        Command::ToggleSeat {
            seat_id: seat("STAR-A1"),
        },
        create_test_time(),
    )
    .new_state;
    current = apply(&current, Command::SaveBooking, create_test_time()).new_state;

    let result = apply(&current, Command::InitializeSeats, create_test_time());

    assert_eq!(result.new_state.sections, generate_layout());
    assert_eq!(result.new_state.history, current.history);
    assert_eq!(result.new_state.selected_date, current.selected_date);
    assert_eq!(result.new_state.selected_show, current.selected_show);
}

#[test]
fn test_command_names() {
    assert_eq!(Command::SaveBooking.name(), "SaveBooking");
    assert_eq!(Command::InitializeSeats.name(), "InitializeSeats");
    assert_eq!(
        Command::ToggleSeat {
            seat_id: seat("STAR-A1")
        }
        .name(),
        "ToggleSeat"
    );
}
