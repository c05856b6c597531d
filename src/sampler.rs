// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Monte-Carlo half of the renderer.  A pass draws random seeds
//! from the plotted rectangle, follows each seed's orbit, and counts
//! every escaping orbit's visits to the cells of a heatmap.

use heatmap::{Heatmap, SharedMaximum};
use num::Complex;
use orbit;
use planes::PlaneMapper;
use progress::Progress;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Where the seeds of a pass come from.
pub trait SeedSource {
    /// The next value of c.
    fn next_seed(&mut self) -> Complex<f64>;
}

/// Seeds drawn uniformly from a rectangle of the complex plane.
pub struct UniformSeeds<R: Rng> {
    real: Uniform<f64>,
    imag: Uniform<f64>,
    rng: R,
}

impl<R: Rng> UniformSeeds<R> {
    /// Draws from the mapper's rectangle using `rng`.  Give each pass
    /// its own, independently seeded generator.
    pub fn new(plane: &PlaneMapper, rng: R) -> Self {
        let (min, max) = (plane.minimum(), plane.maximum());
        UniformSeeds {
            real: Uniform::new(min.re, max.re),
            imag: Uniform::new(min.im, max.im),
            rng,
        }
    }
}

impl<R: Rng> SeedSource for UniformSeeds<R> {
    fn next_seed(&mut self) -> Complex<f64> {
        let re = self.real.sample(&mut self.rng);
        let im = self.imag.sample(&mut self.rng);
        Complex::new(re, im)
    }
}

/// One channel's worth of sampling.
#[derive(Clone, Debug, PartialEq)]
pub struct Pass {
    /// Shown in progress reports.
    pub label: String,
    /// Iteration cap for every orbit of the pass.
    pub iterations: usize,
    /// How many seeds to draw.
    pub samples: u64,
}

/// Runs `pass` into `heatmap`, raising `maximum` as cells fill up.
/// Orbit points outside the rectangle are skipped.  Returns how many
/// points were counted.
pub fn sample_channel<S, P>(
    heatmap: &mut Heatmap,
    maximum: &mut SharedMaximum,
    plane: &PlaneMapper,
    pass: &Pass,
    seeds: &mut S,
    progress: &mut P,
) -> u64
where
    S: SeedSource,
    P: Progress,
{
    debug!(
        "{}: sampling {} seeds at {} iterations",
        pass.label, pass.samples, pass.iterations
    );
    progress.begin(&pass.label, pass.samples);
    let mut points = Vec::with_capacity(pass.iterations.min(1 << 16));
    let mut plotted = 0_u64;
    for taken in 0..pass.samples {
        progress.sampled(&pass.label, taken, pass.samples);
        let c = seeds.next_seed();
        if !orbit::escape_into(c, pass.iterations, &mut points) {
            continue;
        }
        for z in &points {
            if let Some(cell) = plane.point_to_cell(z) {
                heatmap.increment(cell, maximum);
                plotted += 1;
            }
        }
    }
    debug!(
        "{}: plotted {} points, shared maximum now {}",
        pass.label,
        plotted,
        maximum.get()
    );
    plotted
}
