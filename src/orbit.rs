// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Orbits of the quadratic map z -> z² + c.
//!
//! Only orbits that escape are interesting to a Buddhabrot, and every
//! point such an orbit visits gets plotted, not merely the last one.
//! An orbit that is still bounded when the iteration cap runs out is
//! presumed to belong to the Mandelbrot set and contributes nothing.

use num::Complex;
use std::vec;

/// Squared magnitude past which an orbit has escaped.
pub const ESCAPE: f64 = 2.0;

/// Iterates from zero, pushing every iterate into `points`, until one
/// of them has a squared magnitude above `ESCAPE` or `cap` iterations
/// have been performed.  Returns true if the orbit escaped.  On a
/// bounded orbit the buffer is left empty.
pub fn escape_into(c: Complex<f64>, cap: usize, points: &mut Vec<Complex<f64>>) -> bool {
    points.clear();
    let mut z = Complex::new(0.0_f64, 0.0_f64);
    for _ in 0..cap {
        z = z * z + c;
        points.push(z);
        if z.norm_sqr() > ESCAPE {
            return true;
        }
    }
    points.clear();
    false
}

/// The escaping orbit of a single sample.  It can be walked exactly
/// once: iterating consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory(Vec<Complex<f64>>);

impl Trajectory {
    /// Number of iterates in the orbit; zero for a bounded orbit.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the seed never escaped.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Trajectory {
    type Item = Complex<f64>;
    type IntoIter = vec::IntoIter<Complex<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Runs the map for seed `c` with at most `cap` iterations.
pub fn trajectory(c: Complex<f64>, cap: usize) -> Trajectory {
    let mut points = Vec::with_capacity(cap.min(1024));
    escape_into(c, cap, &mut points);
    Trajectory(points)
}
