// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Carving errors
//!
//! Every failure in this crate is a caller-input problem, detected
//! before anything is mutated.  Nothing here is transient, so nothing
//! is ever retried.

use failure::Fail;

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum CarveError {
    /// A grid of the given dimensions was requested or would have
    /// been produced.  Both dimensions must be at least 1.
    #[fail(
        display = "invalid grid dimensions {}x{}: both must be at least 1",
        width, height
    )]
    InvalidDimension { width: u32, height: u32 },

    /// The seam does not have one entry per row (vertical) or per
    /// column (horizontal).
    #[fail(display = "seam has {} entries, expected {}", found, expected)]
    SeamLengthMismatch { expected: usize, found: usize },

    /// A seam entry points outside the grid.
    #[fail(
        display = "seam entry {} at position {} is outside 0..{}",
        value, position, limit
    )]
    SeamOutOfBounds {
        position: usize,
        value: u32,
        limit: u32,
    },

    #[fail(
        display = "a {}x{} grid needs {} pixels, got {}",
        width, height, expected, found
    )]
    PixelCountMismatch {
        width: u32,
        height: u32,
        expected: usize,
        found: usize,
    },

    #[fail(display = "row {} has {} pixels, expected {}", row, found, expected)]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[fail(
        display = "seamcarve cannot upscale a {}x{} image to {}x{}",
        width, height, new_width, new_height
    )]
    CannotUpscale {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },
}

pub type Result<T> = std::result::Result<T, CarveError>;
