// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingState, BookingStore, FixedClock, StoreConfig};
use seatbook_domain::{SeatId, SeatStatus, Show, ShowDate};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_time() -> OffsetDateTime {
    datetime!(2024-01-01 18:30:00 UTC)
}

pub fn create_test_clock() -> FixedClock {
    FixedClock::new(create_test_time())
}

pub fn create_test_state() -> BookingState {
    BookingState::new(ShowDate::new("2024-01-01"), Show::new("Evening"))
}

pub fn create_test_store(clock: &FixedClock) -> BookingStore<&FixedClock> {
    let config: StoreConfig = StoreConfig::default()
        .with_date(ShowDate::new("2024-01-01"))
        .with_show(Show::new("Evening"));
    BookingStore::with_clock(config, clock)
}

pub fn seat(id: &str) -> SeatId {
    id.parse().unwrap()
}

pub fn status_of(state: &BookingState, id: &str) -> SeatStatus {
    state.find_seat(&seat(id)).unwrap().status
}
