// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam carving for Rust
//!
//! Shrinks an image one row or column at a time by finding the
//! connected path of pixels with the least total dual-gradient energy
//! and cutting it out.
//!
//! ```
//! use seamcarve::{Pixel, PixelGrid, SeamCarver};
//!
//! let (w, k) = (Pixel::new(255, 255, 255), Pixel::new(0, 0, 0));
//! let grid = PixelGrid::from_rows(vec![vec![w, k, w]; 3]).unwrap();
//! let mut carver = SeamCarver::new(grid);
//! assert_eq!(carver.find_vertical_seam(), vec![1, 1, 1]);
//! carver.carve(2, 3).unwrap();
//! assert_eq!(carver.grid(), &PixelGrid::new(2, 3, w).unwrap());
//! ```

pub mod ternary;

pub mod error;
pub use error::{CarveError, Result};

pub mod pixelgrid;
pub use pixelgrid::{Neighbors, Pixel, PixelGrid};

pub mod twodmap;

pub mod energy;
pub use energy::{calculate_energy, energy, EnergyField};

pub mod flipper;

pub mod seamfinder;
pub use seamfinder::{
    find_horizontal_seam, find_seam, find_vertical_seam, DualGradient, Orientation, Seam,
    SeamFinder, SeamPath,
};

pub mod seamcarver;
pub use seamcarver::{remove_horizontal_seam, remove_seam, remove_vertical_seam, SeamCarver};

pub mod imageio;
pub use imageio::energy_to_image;
