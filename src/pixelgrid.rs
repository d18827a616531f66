// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid
//!
//! An owned, rectangular, row-major field of RGB pixels.  This is the
//! only thing the carver ever mutates.  A grid can never be empty:
//! every constructor rejects a zero dimension, and the seam removers
//! refuse to shrink a dimension to zero.

use crate::cq;
use crate::error::{CarveError, Result};
use std::ops::{Index, IndexMut};

/// Three eight-bit channels.  That's all the energy function needs.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Pixel { red, green, blue }
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

/// The four wrap-around neighbors of a pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Neighbors {
    pub left: Pixel,
    pub right: Pixel,
    pub up: Pixel,
    pub down: Pixel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) pixels: Vec<Pixel>,
}

pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(CarveError::InvalidDimension { width, height });
    }
    Ok(())
}

impl PixelGrid {
    /// A grid of the given size with every pixel set to `fill`.
    pub fn new(width: u32, height: u32, fill: Pixel) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(PixelGrid {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        })
    }

    /// Wrap a row-major vector of pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(CarveError::PixelCountMismatch {
                width,
                height,
                expected,
                found: pixels.len(),
            });
        }
        Ok(PixelGrid {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid out of a list of rows, which must all be the same
    /// length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions(width as u32, height as u32)?;
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != width)
        {
            return Err(CarveError::RaggedRows {
                row,
                expected: width,
                found,
            });
        }
        Ok(PixelGrid {
            width: width as u32,
            height: height as u32,
            pixels: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Same rule as the energy maps: the index math lives here and
    // nowhere else.
    pub(crate) fn get_index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) is outside a {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is not inside the grid.
    pub fn get_pixel(&self, x: u32, y: u32) -> Pixel {
        self.pixels[self.get_index(x, y)]
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is not inside the grid.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        let index = self.get_index(x, y);
        self.pixels[index] = pixel;
    }

    /// The neighbors of `(x, y)`, wrapping around at every edge: the
    /// left neighbor of column 0 is the last column, the pixel below
    /// the last row is in row 0.  On a one-pixel-wide grid the pixel
    /// is its own left and right neighbor.
    pub fn neighbors(&self, x: u32, y: u32) -> Neighbors {
        let (mw, mh) = (self.width - 1, self.height - 1);
        Neighbors {
            left: self.get_pixel(cq!(x == 0, mw, x - 1), y),
            right: self.get_pixel(cq!(x >= mw, 0, x + 1), y),
            up: self.get_pixel(x, cq!(y == 0, mh, y - 1)),
            down: self.get_pixel(x, cq!(y >= mh, 0, y + 1)),
        }
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks(self.width as usize)
    }
}

impl Index<(u32, u32)> for PixelGrid {
    type Output = Pixel;

    fn index(&self, (x, y): (u32, u32)) -> &Pixel {
        let index = self.get_index(x, y);
        &self.pixels[index]
    }
}

impl IndexMut<(u32, u32)> for PixelGrid {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut Pixel {
        let index = self.get_index(x, y);
        &mut self.pixels[index]
    }
}
