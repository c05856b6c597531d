// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The whole pipeline: three sampling passes into three heatmaps that
//! share one running maximum, then normalization and output.

use config::Settings;
use error::Result;
use heatmap::{Heatmap, SharedMaximum};
use normalize::Normalizer;
use planes::PlaneMapper;
use ppm::{self, Rgb};
use progress::Progress;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sampler::{self, Pass, SeedSource, UniformSeeds};
use std::io::Write;

/// The state of a render in progress.  Once set, the plane does not
/// change; the heatmaps and the shared maximum only grow.
pub struct Nebulabrot {
    plane: PlaneMapper,
    channels: Rgb<Heatmap>,
    maximum: SharedMaximum,
}

impl Nebulabrot {
    /// Three empty heatmaps sized to the plane.
    pub fn new(plane: PlaneMapper) -> Self {
        let (width, height) = (plane.width(), plane.height());
        Nebulabrot {
            plane,
            channels: Rgb {
                red: Heatmap::new(width, height),
                green: Heatmap::new(width, height),
                blue: Heatmap::new(width, height),
            },
            maximum: SharedMaximum::new(),
        }
    }

    /// The heatmaps accumulated so far.
    pub fn channels(&self) -> &Rgb<Heatmap> {
        &self.channels
    }

    /// The largest count across all three heatmaps.
    pub fn maximum(&self) -> SharedMaximum {
        self.maximum
    }

    /// Runs the red, green and blue passes in that order.
    pub fn accumulate<S, P>(&mut self, passes: &Rgb<Pass>, seeds: Rgb<S>, progress: &mut P)
    where
        S: SeedSource,
        P: Progress,
    {
        let Rgb {
            mut red,
            mut green,
            mut blue,
        } = seeds;
        sampler::sample_channel(
            &mut self.channels.red,
            &mut self.maximum,
            &self.plane,
            &passes.red,
            &mut red,
            progress,
        );
        sampler::sample_channel(
            &mut self.channels.green,
            &mut self.maximum,
            &self.plane,
            &passes.green,
            &mut green,
            progress,
        );
        sampler::sample_channel(
            &mut self.channels.blue,
            &mut self.maximum,
            &self.plane,
            &passes.blue,
            &mut blue,
            progress,
        );
        info!("Shared maximum: {}", self.maximum.get());
    }

    /// Normalizes against the shared maximum and writes the image.
    pub fn write<W: Write>(&self, out: W, max_value: u32) -> Result<()> {
        let normalizer = Normalizer::new(self.maximum, max_value);
        ppm::write_ppm(out, &self.channels.by_ref(), &normalizer)
    }
}

/// An independently seeded uniform source for each channel.
pub fn entropy_seeds(plane: &PlaneMapper) -> Rgb<UniformSeeds<StdRng>> {
    Rgb {
        red: UniformSeeds::new(plane, StdRng::from_entropy()),
        green: UniformSeeds::new(plane, StdRng::from_entropy()),
        blue: UniformSeeds::new(plane, StdRng::from_entropy()),
    }
}

/// Renders `settings` into `out` and returns the shared maximum.
pub fn render<S, P, W>(
    settings: &Settings,
    seeds: Rgb<S>,
    progress: &mut P,
    out: W,
) -> Result<SharedMaximum>
where
    S: SeedSource,
    P: Progress,
    W: Write,
{
    let mut brot = Nebulabrot::new(settings.plane()?);
    brot.accumulate(&settings.passes(), seeds, progress);
    brot.write(out, settings.max_value)?;
    Ok(brot.maximum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;
    use progress::Quiet;

    fn small() -> Settings {
        Settings {
            width: 24,
            height: 16,
            samples_per_pixel: 4,
            iterations: Rgb {
                red: 5,
                green: 50,
                blue: 200,
            },
            ..Settings::default()
        }
    }

    #[test]
    fn maximum_covers_every_channel() {
        let settings = small();
        let plane = settings.plane().unwrap();
        let seeds = Rgb {
            red: UniformSeeds::new(&plane, StdRng::seed_from_u64(1)),
            green: UniformSeeds::new(&plane, StdRng::seed_from_u64(2)),
            blue: UniformSeeds::new(&plane, StdRng::seed_from_u64(3)),
        };
        let mut brot = Nebulabrot::new(plane);
        brot.accumulate(&settings.passes(), seeds, &mut Quiet);
        let channels = brot.channels();
        let peaks = [
            channels.red.peak(),
            channels.green.peak(),
            channels.blue.peak(),
        ];
        assert!(peaks.iter().all(|&p| p <= brot.maximum().get()));
        assert_eq!(peaks.iter().cloned().max(), Some(brot.maximum().get()));
    }

    #[test]
    fn same_seeds_same_image() {
        let settings = small();
        let plane = settings.plane().unwrap();
        let image = |seed: u64| {
            let seeds = Rgb {
                red: UniformSeeds::new(&plane, StdRng::seed_from_u64(seed)),
                green: UniformSeeds::new(&plane, StdRng::seed_from_u64(seed + 1)),
                blue: UniformSeeds::new(&plane, StdRng::seed_from_u64(seed + 2)),
            };
            let mut bytes = vec![];
            render(&settings, seeds, &mut Quiet, &mut bytes).unwrap();
            bytes
        };
        assert_eq!(image(40), image(40));
    }

    #[test]
    fn entropy_seeds_draw_inside_the_plane() {
        let plane = small().plane().unwrap();
        let mut seeds = entropy_seeds(&plane);
        for _ in 0..100 {
            assert!(plane.contains(&seeds.red.next_seed()));
            assert!(plane.contains(&seeds.blue.next_seed()));
        }
    }

    #[test]
    fn empty_run_writes_black_image() {
        struct Origin;
        impl SeedSource for Origin {
            fn next_seed(&mut self) -> Complex<f64> {
                Complex::new(0.0, 0.0)
            }
        }
        let settings = Settings {
            width: 3,
            height: 2,
            samples_per_pixel: 1,
            ..Settings::default()
        };
        let seeds = Rgb {
            red: Origin,
            green: Origin,
            blue: Origin,
        };
        let mut bytes = vec![];
        let max = render(&settings, seeds, &mut Quiet, &mut bytes).unwrap();
        assert_eq!(max.get(), 0);
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "P3\n3 2\n255\n0 0 0   0 0 0   0 0 0   \n0 0 0   0 0 0   0 0 0   \n"
        );
    }
}
