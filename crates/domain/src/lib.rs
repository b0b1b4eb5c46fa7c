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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod layout;
mod seat_status;
mod stats;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use layout::{RowTemplate, SectionTemplate, generate_layout, theatre_template};
pub use seat_status::SeatStatus;
pub use stats::{BookingStats, compute_booking_stats};
pub use types::{Seat, SeatId, SeatRow, SeatSection, Show, ShowDate};
pub use validation::validate_layout;
