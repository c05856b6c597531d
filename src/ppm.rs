// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Plain-text (P3) PPM output.  Rows are normalized one at a time as
//! they are written, so no rescaled copy of a whole channel is ever
//! held in memory.

use error::{NebulabrotError, Result};
use heatmap::Heatmap;
use itertools::izip;
use normalize::Normalizer;
use std::io::{BufWriter, Write};

/// One value per colour channel.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rgb<T> {
    /// Red channel.
    pub red: T,
    /// Green channel.
    pub green: T,
    /// Blue channel.
    pub blue: T,
}

impl<T> Rgb<T> {
    /// Borrow every channel.
    pub fn by_ref(&self) -> Rgb<&T> {
        Rgb {
            red: &self.red,
            green: &self.green,
            blue: &self.blue,
        }
    }
}

fn check_dimensions(channels: &Rgb<&Heatmap>) -> Result<()> {
    let (width, height) = (channels.red.width(), channels.red.height());
    for other in &[channels.green, channels.blue] {
        if other.width() != width || other.height() != height {
            return Err(NebulabrotError::DimensionMismatch {
                width,
                height,
                found_width: other.width(),
                found_height: other.height(),
            });
        }
    }
    Ok(())
}

/// Writes the three channels as a P3 image: the tag, "width height",
/// the maximum value, then one line per row of "r g b   " triplets.
pub fn write_ppm<W: Write>(
    out: W,
    channels: &Rgb<&Heatmap>,
    normalizer: &Normalizer,
) -> Result<()> {
    check_dimensions(channels)?;
    let (width, height) = (channels.red.width(), channels.red.height());
    let mut out = BufWriter::new(out);

    write!(out, "P3\n{} {}\n{}\n", width, height, normalizer.max_value())?;

    let mut scaled: Rgb<Vec<u32>> = Rgb::default();
    for (red, green, blue) in izip!(
        channels.red.rows(),
        channels.green.rows(),
        channels.blue.rows()
    ) {
        normalizer.normalize_row(red, &mut scaled.red);
        normalizer.normalize_row(green, &mut scaled.green);
        normalizer.normalize_row(blue, &mut scaled.blue);
        for (r, g, b) in izip!(&scaled.red, &scaled.green, &scaled.blue) {
            write!(out, "{} {} {}   ", r, g, b)?;
        }
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
