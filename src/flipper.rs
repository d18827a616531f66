// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy field flipper
//!
//! A proxy for any `EnergyField` that maps the width to the original
//! height, and vice versa, as well as every x to y and vice versa.
//!
//! A horizontal seam is a vertical seam of the transposed image.  By
//! virtually "flipping" the energy field 90°, the one seam search in
//! `seamfinder` serves both orientations, and the two can never drift
//! apart.

use crate::energy::EnergyField;

pub struct Flipper<'a, F: EnergyField> {
    pub field: &'a F,
}

impl<'a, F: EnergyField> Flipper<'a, F> {
    pub fn new(field: &'a F) -> Self {
        Flipper { field }
    }
}

impl<'a, F: EnergyField> EnergyField for Flipper<'a, F> {
    fn dimensions(&self) -> (u32, u32) {
        let (x, y) = self.field.dimensions();
        (y, x)
    }

    fn energy_at(&self, x: u32, y: u32) -> f64 {
        self.field.energy_at(y, x)
    }
}
