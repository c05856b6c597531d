// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The fixed parameters of a run.

use error::Result;
use num::Complex;
use planes::PlaneMapper;
use ppm::Rgb;
use sampler::Pass;
use std::path::PathBuf;

/// Everything a render needs to know.  `Default` is the full-size
/// image the binary produces.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Minimum corner of the sampled and plotted rectangle.
    pub minimum: Complex<f64>,
    /// Maximum corner of the sampled and plotted rectangle.
    pub maximum: Complex<f64>,
    /// Iteration cap of each colour channel.
    pub iterations: Rgb<usize>,
    /// Seeds drawn per pixel of the image, per channel.
    pub samples_per_pixel: u64,
    /// Top of the output colour range.
    pub max_value: u32,
    /// Where the image is written.
    pub output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            width: 7000,
            height: 7000,
            minimum: Complex::new(-2.0, -2.0),
            maximum: Complex::new(1.0, 2.0),
            iterations: Rgb {
                red: 5,
                green: 500,
                blue: 500_000,
            },
            samples_per_pixel: 350,
            max_value: 255,
            output: PathBuf::from("out.ppm"),
        }
    }
}

impl Settings {
    /// Seeds drawn by each channel's pass.
    pub fn sample_count(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.samples_per_pixel
    }

    /// The mapper between the rectangle and the image grid.
    pub fn plane(&self) -> Result<PlaneMapper> {
        PlaneMapper::new(self.width, self.height, self.minimum, self.maximum)
    }

    /// One pass per channel, labelled for progress reports.
    pub fn passes(&self) -> Rgb<Pass> {
        let samples = self.sample_count();
        let pass = |label: &str, iterations: usize| Pass {
            label: label.to_string(),
            iterations,
            samples,
        };
        Rgb {
            red: pass("Red Channel", self.iterations.red),
            green: pass("Green Channel", self.iterations.green),
            blue: pass("Blue Channel", self.iterations.blue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sample_budget_is_350_per_pixel() {
        let settings = Settings::default();
        assert_eq!(settings.sample_count(), 7000 * 7000 * 350);
        assert!(settings.plane().is_ok());
    }

    #[test]
    fn passes_share_the_budget_but_not_the_cap() {
        let passes = Settings::default().passes();
        assert_eq!(passes.red.iterations, 5);
        assert_eq!(passes.green.iterations, 500);
        assert_eq!(passes.blue.iterations, 500_000);
        assert_eq!(passes.red.samples, passes.blue.samples);
        assert_eq!(passes.green.label, "Green Channel");
    }
}
