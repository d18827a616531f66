// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam
//!
//! Builds the cumulative cost table over an energy field, top to
//! bottom, and walks the stored back-pointers from the cheapest cell
//! of the last row.  There is exactly one implementation of the
//! search: horizontal seams are the vertical seams of a `Flipper`.

use crate::cq;
use crate::energy::{calculate_energy, EnergyField};
use crate::flipper::Flipper;
use crate::pixelgrid::PixelGrid;
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};
use log::debug;

/// One index per row (vertical seam) or per column (horizontal seam),
/// in order.  Adjacent entries never differ by more than one.
pub type Seam = Vec<u32>;

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Orientation {
    /// Top to bottom; removing it narrows the image.
    Vertical,
    /// Left to right; removing it shortens the image.
    Horizontal,
}

/// A seam together with its total energy.
#[derive(Debug, Clone, PartialEq)]
pub struct SeamPath {
    pub seam: Seam,
    pub cost: f64,
}

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// carvers as well as caching.
pub trait SeamFinder {
    /// Once a SeamFinder has an image (or whatever it needs to make a
    /// rational decision), request the cheapest seam in one direction,
    /// along with its total energy.
    fn find_seam_path(&self, orientation: Orientation) -> SeamPath;

    /// Request a horizontal seam.
    fn find_horizontal_seam(&self) -> Seam {
        self.find_seam_path(Orientation::Horizontal).seam
    }

    /// Request a vertical seam.
    fn find_vertical_seam(&self) -> Seam {
        self.find_seam_path(Orientation::Vertical).seam
    }
}

/// Given an energy field, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates of the
/// cheapest top-to-bottom seam, along with that seam's total energy.
///
/// Each cell takes the cheapest of its (up to) three upper neighbors.
/// Candidates are considered straight up first, then up-left, then
/// up-right, and only a strictly cheaper one displaces the incumbent,
/// so ties always go straight.  The parent chosen is stored with the
/// cost, and the backtrace never compares floats again.
///
/// # Panics
///
/// Panics if the field has a zero dimension.  Fields built from a
/// `PixelGrid` never do.
pub(crate) fn cheapest_seam<F: EnergyField>(field: &F) -> SeamPath {
    let (width, height) = field.dimensions();
    let mut target: TwoDimensionalMap<EnergyAndBackPointer<f64>> =
        TwoDimensionalMap::new(width, height);

    // Populate the first row with their native energies.
    for x in 0..width {
        target[(x, 0)] = EnergyAndBackPointer {
            energy: field.energy_at(x, 0),
            parent: x,
        };
    }

    let maxwidth = width - 1;
    for y in 1..height {
        for x in 0..width {
            let left = cq!(x == 0, None, Some(x - 1));
            let right = cq!(x == maxwidth, None, Some(x + 1));
            let mut parent_x = x;
            let mut parent_energy = target[(x, y - 1)].energy;
            for candidate in left.into_iter().chain(right) {
                let candidate_energy = target[(candidate, y - 1)].energy;
                if candidate_energy < parent_energy {
                    parent_x = candidate;
                    parent_energy = candidate_energy;
                }
            }
            target[(x, y)] = EnergyAndBackPointer {
                energy: field.energy_at(x, y) + parent_energy,
                parent: parent_x,
            };
        }
    }

    // Scan the bottom row left to right; the first minimum wins.
    let last = height - 1;
    let mut seam_col = 0;
    for x in 1..width {
        if target[(x, last)].energy < target[(seam_col, last)].energy {
            seam_col = x;
        }
    }
    let cost = target[(seam_col, last)].energy;

    // Working backwards, generate a vec of x coordinates that that map to
    // the seam, reverse and return.
    let seam = (0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = target[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect();

    SeamPath { seam, cost }
}

/// The cheapest seam of the grid in the given orientation, with its
/// total energy.
pub fn find_seam_path(grid: &PixelGrid, orientation: Orientation) -> SeamPath {
    let energy = calculate_energy(grid);
    let path = match orientation {
        Orientation::Vertical => cheapest_seam(&energy),
        Orientation::Horizontal => cheapest_seam(&Flipper::new(&energy)),
    };
    debug!(
        "{:?} seam on {}x{} grid, cost {}: {:?}",
        orientation,
        grid.width(),
        grid.height(),
        path.cost,
        path.seam
    );
    path
}

pub fn find_seam(grid: &PixelGrid, orientation: Orientation) -> Seam {
    find_seam_path(grid, orientation).seam
}

/// A seam of length `height`, each entry a column in `0..width`.
pub fn find_vertical_seam(grid: &PixelGrid) -> Seam {
    find_seam(grid, Orientation::Vertical)
}

/// A seam of length `width`, each entry a row in `0..height`.
pub fn find_horizontal_seam(grid: &PixelGrid) -> Seam {
    find_seam(grid, Orientation::Horizontal)
}

/// The basic seam engine: just a simple grid reference holder, using
/// the dual-gradient energy with no forward energy term.
pub struct DualGradient<'a> {
    grid: &'a PixelGrid,
}

impl<'a> DualGradient<'a> {
    /// Takes a reference to a grid, and holds onto it.
    pub fn new(grid: &'a PixelGrid) -> Self {
        DualGradient { grid }
    }
}

impl<'a> SeamFinder for DualGradient<'a> {
    fn find_seam_path(&self, orientation: Orientation) -> SeamPath {
        find_seam_path(self.grid, orientation)
    }
}
