// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed theatre template and the layout generator built on it.
//!
//! The generator is a pure function of the static template: every call
//! yields a value-equal layout.

use crate::seat_status::SeatStatus;
use crate::types::{Seat, SeatRow, SeatSection};

/// Template for one row of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowTemplate {
    /// The row label.
    pub label: &'static str,
    /// Number of real seats in the row.
    pub seats: u16,
    /// An aisle placeholder is inserted after this seat number.
    pub aisle_after: Option<u16>,
    /// Seats `1..=disabled_through` start `Disabled` regardless of the section default.
    pub disabled_through: u16,
}

impl RowTemplate {
    /// A plain row with no aisle and no overrides.
    #[must_use]
    pub const fn new(label: &'static str, seats: u16) -> Self {
        Self {
            label,
            seats,
            aisle_after: None,
            disabled_through: 0,
        }
    }

    /// Splits the row with an aisle placeholder after `seat`.
    #[must_use]
    pub const fn with_aisle_after(self, seat: u16) -> Self {
        Self {
            aisle_after: Some(seat),
            ..self
        }
    }

    /// Starts the first `count` seats of the row `Disabled`.
    #[must_use]
    pub const fn with_disabled_through(self, count: u16) -> Self {
        Self {
            disabled_through: count,
            ..self
        }
    }

    fn build(&self, section_code: &str, default_status: SeatStatus) -> SeatRow {
        let mut seats: Vec<Seat> = Vec::with_capacity(usize::from(self.seats) + 1);
        for number in 1..=self.seats {
            let status: SeatStatus = if number <= self.disabled_through {
                SeatStatus::Disabled
            } else {
                default_status
            };
            seats.push(Seat::new(section_code, self.label, number, status));

            if self.aisle_after == Some(number) && number < self.seats {
                seats.push(Seat::aisle(section_code, self.label));
            }
        }

        SeatRow {
            label: self.label.to_string(),
            seats,
        }
    }
}

/// Template for one section of the theatre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTemplate {
    /// Short code used as the seat id prefix.
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Price label, if any.
    pub price: Option<&'static str>,
    /// Rows in front-to-back order.
    pub rows: &'static [RowTemplate],
    /// Status every seat starts in unless a row override applies.
    pub default_status: SeatStatus,
}

impl SectionTemplate {
    /// Builds the live section with every seat in its initial status.
    #[must_use]
    pub fn build(&self) -> SeatSection {
        SeatSection {
            code: self.code.to_string(),
            name: self.name.to_string(),
            price: self.price.map(str::to_string),
            rows: self
                .rows
                .iter()
                .map(|row| row.build(self.code, self.default_status))
                .collect(),
        }
    }
}

const BALCONY_SPLIT: u16 = 12;

static THEATRE: [SectionTemplate; 5] = [
    SectionTemplate {
        code: "BOX",
        name: "BOX",
        price: None,
        rows: &[
            RowTemplate::new("A", 6),
            RowTemplate::new("B", 6),
            RowTemplate::new("C", 6),
        ],
        default_status: SeatStatus::Disabled,
    },
    SectionTemplate {
        code: "STAR",
        name: "Rs. 150 STAR CLASS",
        price: Some("Rs. 150"),
        rows: &[
            RowTemplate::new("A", 26),
            RowTemplate::new("B", 26),
            RowTemplate::new("C", 26),
            RowTemplate::new("D", 18),
        ],
        default_status: SeatStatus::Available,
    },
    SectionTemplate {
        code: "BALCONY",
        name: "Rs. 120 CLASSIC BALCONY",
        price: Some("Rs. 120"),
        rows: &[
            RowTemplate::new("A", 24)
                .with_aisle_after(BALCONY_SPLIT)
                .with_disabled_through(BALCONY_SPLIT),
            RowTemplate::new("B", 24)
                .with_aisle_after(BALCONY_SPLIT)
                .with_disabled_through(BALCONY_SPLIT),
            RowTemplate::new("C", 24).with_aisle_after(BALCONY_SPLIT),
            RowTemplate::new("D", 24).with_aisle_after(BALCONY_SPLIT),
            RowTemplate::new("E", 24).with_aisle_after(BALCONY_SPLIT),
            RowTemplate::new("F", 24).with_aisle_after(BALCONY_SPLIT),
            RowTemplate::new("G", 24).with_aisle_after(BALCONY_SPLIT),
            RowTemplate::new("H", 24).with_aisle_after(BALCONY_SPLIT),
        ],
        default_status: SeatStatus::Available,
    },
    SectionTemplate {
        code: "FIRST",
        name: "FIRST CLASS",
        price: None,
        rows: &[
            RowTemplate::new("A", 24),
            RowTemplate::new("B", 24),
            RowTemplate::new("C", 24),
            RowTemplate::new("D", 24),
            RowTemplate::new("E", 24),
            RowTemplate::new("F", 24),
            RowTemplate::new("G", 24),
        ],
        default_status: SeatStatus::Disabled,
    },
    SectionTemplate {
        code: "SECOND",
        name: "SECOND CLASS",
        price: None,
        rows: &[RowTemplate::new("A", 30), RowTemplate::new("B", 30)],
        default_status: SeatStatus::Disabled,
    },
];

/// Returns the static theatre template, in screen-to-back order.
#[must_use]
pub fn theatre_template() -> &'static [SectionTemplate] {
    &THEATRE
}

/// Generates the default seat layout from the theatre template.
///
/// This is a pure function: it has no inputs, no side effects and cannot fail.
/// Two calls always produce value-equal layouts.
#[must_use]
pub fn generate_layout() -> Vec<SeatSection> {
    THEATRE.iter().map(SectionTemplate::build).collect()
}
