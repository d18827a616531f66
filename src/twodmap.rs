// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

/// Defines the basic energy map: An addressable two-dimensional field
/// containing an object that represents one of several possible
/// objects during processing: a basic f64 for the energy map, or an
/// energy + parent address, for the cumulative cost table.
///
/// These are scratch structures.  They are rebuilt from the pixel grid
/// on every seam search and never outlive it.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    pub(crate) energy: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new (abstract) energy map.  The content type must
    /// implement the Default trait.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            energy: vec![P::default(); width as usize * height as usize],
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// All values in row-major order.
    pub fn values(&self) -> &[P] {
        &self.energy
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.energy[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.energy[index]
    }
}

/// One cell of the cumulative cost table: the cheapest total energy of
/// any seam ending here, and the index of the predecessor (in the
/// previous row) that seam came through.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub(crate) struct EnergyAndBackPointer<P: Default + Copy> {
    pub energy: P,
    pub parent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_are_column_row() {
        let mut map: TwoDimensionalMap<f64> = TwoDimensionalMap::new(3, 2);
        map[(2, 0)] = 1.5;
        map[(0, 1)] = 2.5;
        assert_eq!(map.values(), &[0.0, 0.0, 1.5, 2.5, 0.0, 0.0]);
        assert_eq!(map[(2, 0)], 1.5);
    }
}
