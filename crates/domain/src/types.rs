// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::seat_status::SeatStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique key for a seat across the whole layout.
///
/// The id is derived from the section code, row label and seat number,
/// e.g. `STAR-A1`. Aisle placeholders use number 0 (`BALCONY-A0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(String);

impl SeatId {
    /// Builds the id for a seat position.
    ///
    /// # Arguments
    ///
    /// * `section_code` - The short section code (e.g. `STAR`)
    /// * `row` - The row label (e.g. `A`)
    /// * `number` - The seat number, 0 for an aisle placeholder
    #[must_use]
    pub fn new(section_code: &str, row: &str, number: u16) -> Self {
        Self(format!("{section_code}-{row}{number}"))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SeatId {
    type Err = DomainError;

    /// Parses and normalizes an operator-entered id such as `star-a12`.
    ///
    /// Only the shape is checked; the seat need not exist in any layout.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.trim().to_uppercase();
        let invalid = |reason: &'static str| DomainError::InvalidSeatId {
            input: s.to_string(),
            reason,
        };

        let Some((code, position)) = normalized.rsplit_once('-') else {
            return Err(invalid("missing '-' between section and position"));
        };
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid("section code must be alphanumeric"));
        }

        let digits_at: usize = position
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| invalid("missing seat number"))?;
        let (row, number) = position.split_at(digits_at);
        if row.is_empty() || !row.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid("row label must be letters"));
        }
        let number: u16 = number
            .parse()
            .map_err(|_| invalid("seat number must be a non-negative integer"))?;

        Ok(Self::new(code, row, number))
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The calendar date a booking applies to.
///
/// Treated as an opaque key; no format validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowDate(String);

impl ShowDate {
    /// Creates a new `ShowDate` from any string.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Creates a `ShowDate` in `YYYY-MM-DD` form from a calendar date.
    #[must_use]
    pub fn from_date(date: time::Date) -> Self {
        Self(date.to_string())
    }

    /// Returns the date value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShowDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The show slot a booking applies to (e.g. `Evening`).
///
/// Treated as an opaque key; any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Show(String);

impl Show {
    /// The standard daily show slots, in screening order.
    pub const STANDARD: [&'static str; 4] = ["Morning", "Matinee", "Evening", "Night"];

    /// Creates a new `Show` from any string.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the show value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns true if this is one of the standard daily slots.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        Self::STANDARD.contains(&self.0.as_str())
    }
}

impl Default for Show {
    fn default() -> Self {
        Self::new("Evening")
    }
}

impl std::fmt::Display for Show {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single seat slot in the theatre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Unique id across the layout.
    pub id: SeatId,
    /// The row label this seat sits in.
    pub row: String,
    /// The seat number within the row. 0 marks an aisle placeholder.
    pub number: u16,
    /// The current status.
    pub status: SeatStatus,
    /// The code of the section this seat belongs to.
    pub section: String,
}

impl Seat {
    /// Creates a bookable seat.
    #[must_use]
    pub fn new(section: &str, row: &str, number: u16, status: SeatStatus) -> Self {
        Self {
            id: SeatId::new(section, row, number),
            row: row.to_string(),
            number,
            status,
            section: section.to_string(),
        }
    }

    /// Creates the aisle placeholder for a row.
    ///
    /// Aisles are always `Disabled` so they can never be toggled.
    #[must_use]
    pub fn aisle(section: &str, row: &str) -> Self {
        Self::new(section, row, 0, SeatStatus::Disabled)
    }

    /// Returns true if this slot is an aisle placeholder.
    #[must_use]
    pub const fn is_aisle(&self) -> bool {
        self.number == 0
    }

    /// Returns true if this seat counts towards booking statistics.
    #[must_use]
    pub const fn is_bookable(&self) -> bool {
        !self.is_aisle() && self.status.is_toggleable()
    }
}

/// An ordered row of seats, aisle placeholders included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRow {
    /// The row label (e.g. `A`).
    pub label: String,
    /// Seats in left-to-right order.
    pub seats: Vec<Seat>,
}

/// A named pricing or location tier of the theatre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSection {
    /// Short code used as the seat id prefix (e.g. `STAR`).
    pub code: String,
    /// Display name (e.g. `Rs. 150 STAR CLASS`).
    pub name: String,
    /// Price label, if the section is priced.
    pub price: Option<String>,
    /// Rows in front-to-back order.
    pub rows: Vec<SeatRow>,
}

impl SeatSection {
    /// Iterates over every seat in the section, row by row.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flat_map(|row| row.seats.iter())
    }

    /// Iterates mutably over every seat in the section, row by row.
    pub fn seats_mut(&mut self) -> impl Iterator<Item = &mut Seat> {
        self.rows.iter_mut().flat_map(|row| row.seats.iter_mut())
    }
}
