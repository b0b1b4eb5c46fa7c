// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while parsing or validating seat-map data.
///
/// Store operations never produce these; they are raised only at the
/// boundaries where free-form text becomes a domain value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The string is not one of the known seat statuses.
    InvalidSeatStatus(String),
    /// The string is not shaped like `SECTION-ROWNUMBER`.
    InvalidSeatId {
        /// The rejected input.
        input: String,
        /// Which part of the id was malformed.
        reason: &'static str,
    },
    /// Two seats in one layout share an id.
    DuplicateSeatId(String),
    /// A seat is filed under a section or row it does not belong to.
    MisplacedSeat {
        /// The seat id.
        seat_id: String,
        /// The section code the seat was found under.
        section: String,
        /// The row label the seat was found under.
        row: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSeatStatus(status) => write!(f, "Invalid seat status: '{status}'"),
            Self::InvalidSeatId { input, reason } => {
                write!(f, "Invalid seat id '{input}': {reason}")
            }
            Self::DuplicateSeatId(id) => write!(f, "Seat id '{id}' appears more than once"),
            Self::MisplacedSeat {
                seat_id,
                section,
                row,
            } => {
                write!(
                    f,
                    "Seat '{seat_id}' does not belong to section '{section}' row '{row}'"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
