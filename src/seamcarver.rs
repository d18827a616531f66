// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main routines
//!
//! Seam removal, in both directions, and the carver that repeatedly
//! finds and removes seams until the grid reaches a target size.
//!
//! Removal works on the grid in place.  Every check happens before the
//! first pixel moves, so a rejected seam leaves the grid exactly as it
//! was, and the grid is only shrunk once every shift has been done.

use crate::error::{CarveError, Result};
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::{DualGradient, Orientation, Seam, SeamFinder, SeamPath};
use log::{debug, info};

// `length` is the run the seam crosses (rows for a vertical seam),
// `limit` the run it indexes into (columns for a vertical seam).
fn validate_seam(seam: &[u32], length: u32, limit: u32) -> Result<()> {
    if seam.len() != length as usize {
        return Err(CarveError::SeamLengthMismatch {
            expected: length as usize,
            found: seam.len(),
        });
    }
    if let Some((position, value)) = seam.iter().enumerate().find(|(_, v)| **v >= limit) {
        return Err(CarveError::SeamOutOfBounds {
            position,
            value: *value,
            limit,
        });
    }
    Ok(())
}

/// Delete one pixel from every row, at the column the seam names, and
/// shift the rest of the row left.  The grid loses one column.
pub fn remove_vertical_seam(grid: &mut PixelGrid, seam: &[u32]) -> Result<()> {
    let (width, height) = grid.dimensions();
    if width == 1 {
        return Err(CarveError::InvalidDimension {
            width: 0,
            height,
        });
    }
    validate_seam(seam, height, width)?;

    // Rows are compacted front to back.  Row y moves from y*width to
    // y*(width-1), which is never later than where it came from, so
    // nothing is overwritten before it has been moved.
    let (w, nw) = (width as usize, width as usize - 1);
    for (y, col) in seam.iter().enumerate() {
        let col = *col as usize;
        let (src, dst) = (y * w, y * nw);
        grid.pixels.copy_within(src..src + col, dst);
        grid.pixels.copy_within(src + col + 1..src + w, dst + col);
    }
    grid.pixels.truncate(nw * height as usize);
    grid.width -= 1;
    Ok(())
}

/// Delete one pixel from every column, at the row the seam names, and
/// shift the rest of the column up.  The grid loses its last row.
pub fn remove_horizontal_seam(grid: &mut PixelGrid, seam: &[u32]) -> Result<()> {
    let (width, height) = grid.dimensions();
    if height == 1 {
        return Err(CarveError::InvalidDimension { width, height: 0 });
    }
    validate_seam(seam, width, height)?;

    let w = width as usize;
    for (x, row) in seam.iter().enumerate() {
        for y in (*row as usize)..(height as usize - 1) {
            grid.pixels[y * w + x] = grid.pixels[(y + 1) * w + x];
        }
    }
    grid.pixels.truncate(w * (height as usize - 1));
    grid.height -= 1;
    Ok(())
}

pub fn remove_seam(grid: &mut PixelGrid, seam: &[u32], orientation: Orientation) -> Result<()> {
    match orientation {
        Orientation::Vertical => remove_vertical_seam(grid, seam),
        Orientation::Horizontal => remove_horizontal_seam(grid, seam),
    }
}

// Which way the carver cuts next.  When both dimensions need to
// shrink the carver alternates, so neither axis is carved out in
// one long streak.
trait Turn {
    fn turn(self) -> Self;
}

impl Turn for Orientation {
    fn turn(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

// This is absurdly inefficient, as the entire energy map and cost
// table are recalculated for every seam.  Only the span of columns or
// rows touched by the last seam actually changes.

/// Holds the grid being carved.  The carver owns it outright; callers
/// can look at it between operations, and take it back when done.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    grid: PixelGrid,
}

impl SeamCarver {
    /// Creates a new SeamCarver with a grid to be carved.
    pub fn new(grid: PixelGrid) -> Self {
        SeamCarver { grid }
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn find_vertical_seam(&self) -> Seam {
        DualGradient::new(&self.grid).find_vertical_seam()
    }

    pub fn find_horizontal_seam(&self) -> Seam {
        DualGradient::new(&self.grid).find_horizontal_seam()
    }

    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        remove_vertical_seam(&mut self.grid, seam)
    }

    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        remove_horizontal_seam(&mut self.grid, seam)
    }

    /// Find the cheapest seam in one direction and cut it out.
    pub fn carve_once(&mut self, orientation: Orientation) -> Result<SeamPath> {
        let path = DualGradient::new(&self.grid).find_seam_path(orientation);
        remove_seam(&mut self.grid, &path.seam, orientation)?;
        debug!(
            "removed {:?} seam, now {}x{}",
            orientation,
            self.grid.width(),
            self.grid.height()
        );
        Ok(path)
    }

    /// Given a desired new width and height, repeatedly carve seams
    /// out of the grid.  Returns the number of seams removed.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<usize> {
        let (width, height) = self.grid.dimensions();
        if new_width == 0 || new_height == 0 {
            return Err(CarveError::InvalidDimension {
                width: new_width,
                height: new_height,
            });
        }
        if width < new_width || height < new_height {
            return Err(CarveError::CannotUpscale {
                width,
                height,
                new_width,
                new_height,
            });
        }
        info!(
            "carving {}x{} down to {}x{}",
            width, height, new_width, new_height
        );

        let mut removed = 0;
        let mut direction = Orientation::Vertical;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
            removed += 1;
        }
        while self.width() > new_width {
            self.carve_once(Orientation::Vertical)?;
            removed += 1;
        }
        while self.height() > new_height {
            self.carve_once(Orientation::Horizontal)?;
            removed += 1;
        }
        info!("carved {} seams", removed);
        Ok(removed)
    }
}
