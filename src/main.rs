// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate env_logger;
#[macro_use]
extern crate log;
extern crate nebulabrot;

use nebulabrot::progress::{format_elapsed, TimedProgress};
use nebulabrot::{entropy_seeds, NebulabrotError, Settings};
use std::fs::File;
use std::time::Instant;

fn run(settings: &Settings) -> nebulabrot::Result<()> {
    // Fail before any sampling if the image cannot be written.
    let output = File::create(&settings.output).map_err(NebulabrotError::Resource)?;

    let plane = settings.plane()?;
    info!(
        "Rendering {}x{} with {} samples per channel into {}",
        settings.width,
        settings.height,
        settings.sample_count(),
        settings.output.display()
    );
    let seeds = entropy_seeds(&plane);
    nebulabrot::render(settings, seeds, &mut TimedProgress::default(), output)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start = Instant::now();
    let settings = Settings::default();

    if let Err(e) = run(&settings) {
        match e {
            NebulabrotError::Resource(_) => eprintln!("Could not open image file for writing!"),
            _ => eprintln!("Render failure!"),
        }
        error!("{}", e);
        std::process::exit(1);
    }

    info!("Time elapsed: {}", format_elapsed(start.elapsed()));
    info!(
        "Finished generating image. Open {} to view.",
        settings.output.display()
    );
}
