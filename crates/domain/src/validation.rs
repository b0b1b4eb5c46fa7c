// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{SeatId, SeatSection};
use std::collections::HashSet;

/// Validates the structural invariants of a layout.
///
/// # Arguments
///
/// * `sections` - The layout to check
///
/// # Returns
///
/// * `Ok(())` if the layout is well formed
/// * `Err(DomainError)` describing the first violation found
///
/// # Errors
///
/// Returns an error if:
/// - Two seats share an id
/// - A seat's section code or row label disagrees with where it is filed
pub fn validate_layout(sections: &[SeatSection]) -> Result<(), DomainError> {
    let mut seen: HashSet<&SeatId> = HashSet::new();

    for section in sections {
        for row in &section.rows {
            for seat in &row.seats {
                if seat.section != section.code || seat.row != row.label {
                    return Err(DomainError::MisplacedSeat {
                        seat_id: seat.id.to_string(),
                        section: section.code.clone(),
                        row: row.label.clone(),
                    });
                }

                // Rule: ids are unique across the whole layout
                if !seen.insert(&seat.id) {
                    return Err(DomainError::DuplicateSeatId(seat.id.to_string()));
                }
            }
        }
    }

    Ok(())
}
