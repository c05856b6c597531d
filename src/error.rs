// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors surfaced by the renderer.  Points that fall outside the
//! plotted region are not errors; they are filtered by the sampler.

use failure::Fail;
use std::io;
use std::result;

/// Everything that can go wrong between opening the output file and
/// writing the last row of the image.
#[derive(Debug, Fail)]
pub enum NebulabrotError {
    /// The output file could not be opened or created.
    #[fail(display = "Could not open image file for writing: {}", _0)]
    Resource(#[cause] io::Error),

    /// Writing the image failed after it was opened.
    #[fail(display = "Could not write image: {}", _0)]
    Io(#[cause] io::Error),

    /// The complex rectangle or the pixel grid is unusable.
    #[fail(display = "Invalid plane: {}", _0)]
    InvalidPlane(String),

    /// The three channel heatmaps do not share the same dimensions.
    #[fail(
        display = "Channel dimensions differ: expected {}x{}, found {}x{}",
        width, height, found_width, found_height
    )]
    DimensionMismatch {
        /// Width of the red channel.
        width: usize,
        /// Height of the red channel.
        height: usize,
        /// Width of the offending channel.
        found_width: usize,
        /// Height of the offending channel.
        found_height: usize,
    },
}

impl From<io::Error> for NebulabrotError {
    fn from(err: io::Error) -> Self {
        NebulabrotError::Io(err)
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = result::Result<T, NebulabrotError>;
