// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the dual-gradient magnitude: the color
//! distance between its left and right neighbors, plus the color
//! distance between its up and down neighbors, square-rooted.
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = √(|Δx|²+|Δy|²)
//! ```
//!
//! Neighbors wrap around the edges of the image, so the left neighbor
//! of column 0 is the last column.  Many seam carving references pad
//! the border instead, or copy the edge pixel in place of the missing
//! neighbor.  Wrapping is intentional here, and it means a strong
//! contrast between opposite edges raises the energy of both.

use crate::pixelgrid::{Pixel, PixelGrid};
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;
use log::trace;

/// A read-only two-dimensional field of energies.  The seam search is
/// written against this rather than against a concrete map so that it
/// can run over a transposed view just as well.
pub trait EnergyField {
    /// (width, height), in that order.
    fn dimensions(&self) -> (u32, u32);

    fn energy_at(&self, x: u32, y: u32) -> f64;
}

impl EnergyField for TwoDimensionalMap<f64> {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn energy_at(&self, x: u32, y: u32) -> f64 {
        self[(x, y)]
    }
}

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.
fn energy_of_pair(p1: &Pixel, p2: &Pixel) -> f64 {
    p1.channels()
        .iter()
        .zip(p2.channels().iter())
        .map(|(c1, c2)| {
            let d = f64::from(*c1) - f64::from(*c2);
            d * d
        })
        .sum()
}

/// (Grid, x, y) -> Energy
///
/// Never negative; zero exactly when both neighbor pairs are identical.
pub fn energy(grid: &PixelGrid, x: u32, y: u32) -> f64 {
    let n = grid.neighbors(x, y);
    (energy_of_pair(&n.left, &n.right) + energy_of_pair(&n.up, &n.down)).sqrt()
}

/// Compute the energy of every pixel in the grid.
pub fn calculate_energy(grid: &PixelGrid) -> TwoDimensionalMap<f64> {
    let (width, height) = grid.dimensions();
    trace!("building {}x{} energy map", width, height);
    let mut emap = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = energy(grid, x, y);
    }
    emap
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey(v: u8) -> Pixel {
        Pixel::new(v, v, v)
    }

    #[test]
    fn dual_gradient_of_a_known_pixel() {
        // Horizontal neighbors differ by (2, 4, 6), vertical by (0, 0, 3).
        let rows = vec![
            vec![grey(0), Pixel::new(0, 0, 0), grey(0)],
            vec![Pixel::new(1, 2, 3), grey(50), Pixel::new(3, 6, 9)],
            vec![grey(0), Pixel::new(0, 0, 3), grey(0)],
        ];
        let grid = PixelGrid::from_rows(rows).unwrap();
        let expected = (4.0f64 + 16.0 + 36.0 + 9.0).sqrt();
        assert_eq!(energy(&grid, 1, 1), expected);
    }

    #[test]
    fn energy_is_non_negative_and_zero_only_on_flat_neighborhoods() {
        let rows: Vec<Vec<Pixel>> = (0..4u8)
            .map(|y| (0..5u8).map(|x| grey(x * 37 ^ y * 11)).collect())
            .collect();
        let grid = PixelGrid::from_rows(rows).unwrap();
        for (y, x) in iproduct!(0..4, 0..5) {
            let e = energy(&grid, x, y);
            let n = grid.neighbors(x, y);
            assert!(e >= 0.0);
            assert_eq!(e == 0.0, n.left == n.right && n.up == n.down);
        }
    }

    #[test]
    fn flat_grid_has_no_energy() {
        let grid = PixelGrid::new(4, 3, grey(128)).unwrap();
        assert!(calculate_energy(&grid).values().iter().all(|e| *e == 0.0));
    }

    #[test]
    fn wraps_horizontally_on_a_single_row() {
        // 5 wide, 1 high: up and down are the pixel itself.
        let grid = PixelGrid::from_rows(vec![vec![
            grey(10),
            grey(20),
            grey(30),
            grey(40),
            grey(50),
        ]])
        .unwrap();
        // Column 0 sees column 4 on its left.
        assert_eq!(energy(&grid, 0, 0), (3.0f64 * 30.0 * 30.0).sqrt());
        // The last column sees column 0 on its right.
        assert_eq!(energy(&grid, 4, 0), (3.0f64 * 30.0 * 30.0).sqrt());
        assert_eq!(energy(&grid, 2, 0), (3.0f64 * 20.0 * 20.0).sqrt());
    }

    #[test]
    fn wraps_vertically_on_a_single_column() {
        let grid = PixelGrid::from_rows(vec![
            vec![grey(10)],
            vec![grey(20)],
            vec![grey(30)],
            vec![grey(40)],
            vec![grey(50)],
        ])
        .unwrap();
        assert_eq!(energy(&grid, 0, 0), (3.0f64 * 30.0 * 30.0).sqrt());
        assert_eq!(energy(&grid, 0, 4), (3.0f64 * 30.0 * 30.0).sqrt());
        assert_eq!(energy(&grid, 0, 1), (3.0f64 * 20.0 * 20.0).sqrt());
    }

    #[test]
    fn map_matches_pointwise_energy() {
        let rows: Vec<Vec<Pixel>> = (0..3u8)
            .map(|y| (0..4u8).map(|x| Pixel::new(x * 60, y * 90, x + y)).collect())
            .collect();
        let grid = PixelGrid::from_rows(rows).unwrap();
        let emap = calculate_energy(&grid);
        assert_eq!(emap.dimensions(), (4, 3));
        for (y, x) in iproduct!(0..3, 0..4) {
            assert_eq!(emap.energy_at(x, y), energy(&grid, x, y));
        }
    }
}
