// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidSeatStatus(String::from("sold"));
    assert_eq!(format!("{err}"), "Invalid seat status: 'sold'");

    let err: DomainError = DomainError::InvalidSeatId {
        input: String::from("A1"),
        reason: "missing '-' between section and position",
    };
    assert_eq!(
        format!("{err}"),
        "Invalid seat id 'A1': missing '-' between section and position"
    );

    let err: DomainError = DomainError::DuplicateSeatId(String::from("STAR-A1"));
    assert_eq!(
        format!("{err}"),
        "Seat id 'STAR-A1' appears more than once"
    );

    let err: DomainError = DomainError::MisplacedSeat {
        seat_id: String::from("STAR-A1"),
        section: String::from("BOX"),
        row: String::from("A"),
    };
    assert_eq!(
        format!("{err}"),
        "Seat 'STAR-A1' does not belong to section 'BOX' row 'A'"
    );
}
