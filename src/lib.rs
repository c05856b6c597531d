#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Nebulabrot renderer
//!
//! The Buddhabrot is a variant of the Mandelbrot set that plots where
//! orbits go rather than how fast they leave.  Pick a random point c
//! in the complex plane and iterate z -> z² + c from zero.  If the
//! orbit escapes, every point it visited on the way out is mapped to
//! a pixel, and that pixel's counter goes up by one.  Orbits that
//! never escape belong to the Mandelbrot set and are thrown away.
//! After enough samples the counters form a density map.
//!
//! The Nebulabrot runs that process three times with three different
//! iteration caps and uses the three density maps as the red, green
//! and blue channels of one image.  All three channels are scaled
//! against a single maximum shared between them, and the result is
//! written as a plain-text PPM.

extern crate itertools;
extern crate failure;
#[macro_use]
extern crate log;
extern crate num;
extern crate rand;

pub mod config;
pub mod error;
pub mod heatmap;
pub mod normalize;
pub mod orbit;
pub mod planes;
pub mod ppm;
pub mod progress;
pub mod render;
pub mod sampler;

pub use config::Settings;
pub use error::{NebulabrotError, Result};
pub use heatmap::{Heatmap, SharedMaximum};
pub use planes::{Cell, PlaneMapper};
pub use ppm::Rgb;
pub use render::{entropy_seeds, render, Nebulabrot};
