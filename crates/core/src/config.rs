// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use seatbook_domain::{Show, ShowDate};

/// Start-up settings for a `BookingStore`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// The date selected at start-up. `None` selects today's date from the store clock.
    pub initial_date: Option<ShowDate>,
    /// The show selected at start-up.
    pub initial_show: Show,
}

impl StoreConfig {
    /// Sets the start-up date.
    #[must_use]
    pub fn with_date(mut self, date: ShowDate) -> Self {
        self.initial_date = Some(date);
        self
    }

    /// Sets the start-up show.
    #[must_use]
    pub fn with_show(mut self, show: Show) -> Self {
        self.initial_show = show;
        self
    }
}
