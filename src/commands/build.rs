//! Build the static site

use anyhow::Result;

use crate::generator::Generator;
use crate::Site;

/// Run a full build: reset the output directory, render every content file,
/// write the index, copy static assets
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let generator = Generator::new(site)?;
    generator.generate()?;

    let duration = start.elapsed();
    tracing::info!("Built in {:.2}s", duration.as_secs_f64());

    Ok(())
}
