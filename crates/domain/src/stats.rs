// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::seat_status::SeatStatus;
use crate::types::SeatSection;
use serde::{Deserialize, Serialize};

/// Seat counts over the bookable part of a layout.
///
/// Aisle placeholders and `Disabled` seats are excluded from every count,
/// so the four status counts always sum to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    /// Bookable seats.
    pub total: usize,
    /// Seats still free to sell.
    pub available: usize,
    /// Seats sold at the counter.
    pub booked: usize,
    /// Seats held back by the house.
    pub blocked: usize,
    /// Seats sold through the online partner.
    pub bms_booked: usize,
}

/// Computes booking statistics for a layout.
#[must_use]
pub fn compute_booking_stats(sections: &[SeatSection]) -> BookingStats {
    let mut stats: BookingStats = BookingStats::default();

    for seat in sections.iter().flat_map(SeatSection::seats) {
        if !seat.is_bookable() {
            continue;
        }
        stats.total += 1;
        match seat.status {
            SeatStatus::Available => stats.available += 1,
            SeatStatus::Booked => stats.booked += 1,
            SeatStatus::Blocked => stats.blocked += 1,
            SeatStatus::BmsBooked => stats.bms_booked += 1,
            SeatStatus::Disabled => {}
        }
    }

    stats
}
