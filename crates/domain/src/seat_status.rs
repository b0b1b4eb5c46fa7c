// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seat status states and the operator toggle cycle.
//!
//! Operators advance a seat through a fixed cycle one click at a time.
//! `Disabled` sits outside the cycle and can never be left by operator action.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The booking status of a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeatStatus {
    /// Free to sell.
    Available,
    /// Sold at the counter.
    Booked,
    /// Held back by the house.
    Blocked,
    /// Sold through the online booking partner.
    BmsBooked,
    /// Not part of the sellable map for this theatre.
    Disabled,
}

impl SeatStatus {
    /// The operator toggle cycle, in advance order.
    pub const CYCLE: [Self; 4] = [Self::Available, Self::Booked, Self::Blocked, Self::BmsBooked];

    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Blocked => "blocked",
            Self::BmsBooked => "bms-booked",
            Self::Disabled => "disabled",
        }
    }

    /// Human-readable legend label for the status.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Booked => "Booked",
            Self::Blocked => "VIP/Blocked",
            Self::BmsBooked => "BMS Online",
            Self::Disabled => "Reserved",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSeatStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "available" => Ok(Self::Available),
            "booked" => Ok(Self::Booked),
            "blocked" => Ok(Self::Blocked),
            "bms-booked" => Ok(Self::BmsBooked),
            "disabled" => Ok(Self::Disabled),
            _ => Err(DomainError::InvalidSeatStatus(s.to_string())),
        }
    }

    /// Returns true if an operator may change this status.
    #[must_use]
    pub const fn is_toggleable(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Returns the status one click further along the toggle cycle.
    ///
    /// `Disabled` maps to itself.
    #[must_use]
    pub const fn next_in_cycle(&self) -> Self {
        match self {
            Self::Available => Self::Booked,
            Self::Booked => Self::Blocked,
            Self::Blocked => Self::BmsBooked,
            Self::BmsBooked => Self::Available,
            Self::Disabled => Self::Disabled,
        }
    }
}

impl FromStr for SeatStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ALL: [SeatStatus; 5] = [
        SeatStatus::Available,
        SeatStatus::Booked,
        SeatStatus::Blocked,
        SeatStatus::BmsBooked,
        SeatStatus::Disabled,
    ];

    #[test]
    fn test_status_string_forms_parse_back() {
        for status in ALL {
            let s = status.as_str();
            match SeatStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = SeatStatus::parse_str("reserved");
        assert_eq!(
            result,
            Err(DomainError::InvalidSeatStatus(String::from("reserved")))
        );
    }

    #[test]
    fn test_legend_labels() {
        let labels = ALL.map(|status| status.label());
        assert_eq!(
            labels,
            ["Available", "Booked", "VIP/Blocked", "BMS Online", "Reserved"]
        );
    }

    #[test]
    fn test_status_parsing_is_case_sensitive() {
        assert!("Booked".parse::<SeatStatus>().is_err());
        assert!("bms_booked".parse::<SeatStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&SeatStatus::BmsBooked).unwrap();
        assert_eq!(json, "\"bms-booked\"");

        let parsed: SeatStatus = serde_json::from_str("\"bms-booked\"").unwrap();
        assert_eq!(parsed, SeatStatus::BmsBooked);
    }

    #[test]
    fn test_cycle_order() {
        assert_eq!(SeatStatus::Available.next_in_cycle(), SeatStatus::Booked);
        assert_eq!(SeatStatus::Booked.next_in_cycle(), SeatStatus::Blocked);
        assert_eq!(SeatStatus::Blocked.next_in_cycle(), SeatStatus::BmsBooked);
        assert_eq!(SeatStatus::BmsBooked.next_in_cycle(), SeatStatus::Available);
    }

    #[test]
    fn test_four_advances_return_to_start() {
        for start in SeatStatus::CYCLE {
            let mut status = start;
            for _ in 0..4 {
                status = status.next_in_cycle();
            }
            assert_eq!(status, start);
        }
    }

    #[test]
    fn test_disabled_is_a_sink() {
        assert!(!SeatStatus::Disabled.is_toggleable());
        assert_eq!(SeatStatus::Disabled.next_in_cycle(), SeatStatus::Disabled);
    }

    #[test]
    fn test_every_cycle_status_reaches_every_other() {
        for from in SeatStatus::CYCLE {
            assert!(from.is_toggleable());
            let mut reached = vec![from];
            let mut status = from;
            for _ in 0..3 {
                status = status.next_in_cycle();
                reached.push(status);
            }
            for to in SeatStatus::CYCLE {
                assert!(reached.contains(&to), "{from} cannot reach {to}");
            }
        }
    }
}
