// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Rescales raw visit counts into display values.
//!
//! Every channel is divided by the *shared* maximum, not its own, so a
//! channel whose orbits are sparse stays dim next to a dense one.

use heatmap::SharedMaximum;

/// Linear map from `[0, shared maximum]` onto `[0, max_value]`.
#[derive(Copy, Clone, Debug)]
pub struct Normalizer {
    shared_max: u32,
    max_value: u32,
}

impl Normalizer {
    /// Build from the maximum accumulated across all channels.
    pub fn new(shared_max: SharedMaximum, max_value: u32) -> Self {
        let shared_max = shared_max.get();
        if shared_max == 0 {
            warn!("no orbit landed inside the plotted region; the image will be black");
        }
        Normalizer {
            shared_max,
            max_value,
        }
    }

    /// True when nothing was ever counted.  Every output is then zero.
    pub fn is_degenerate(&self) -> bool {
        self.shared_max == 0
    }

    /// The top of the output range.
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// `floor(count * max_value / shared_max)`.
    #[inline]
    pub fn scale(&self, count: u32) -> u32 {
        if self.shared_max == 0 {
            return 0;
        }
        (u64::from(count) * u64::from(self.max_value) / u64::from(self.shared_max)) as u32
    }

    /// Rescales one heatmap row into `out`, replacing its contents.
    pub fn normalize_row(&self, row: &[u32], out: &mut Vec<u32>) {
        out.clear();
        out.extend(row.iter().map(|&count| self.scale(count)));
    }
}
