//! Example simulating a task that reports progress in uneven batches

use std::thread;
use std::time::Duration;

use color_eyre::Result;
use headway::ProgressDisplayBuilder;
use rand::Rng;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let total: u64 = 500;
    let mut progress = ProgressDisplayBuilder::new().build(total)?;

    // Batch sizes are uneven on purpose: the display accepts whatever the
    // task reports and clamps any overshoot at render time.
    let mut rng = rand::rng();
    let mut done = 0;
    while done < total {
        let batch = rng.random_range(1..=25);
        done += batch;
        progress.advance(batch);
        progress.render()?;
        thread::sleep(Duration::from_millis(40));
    }
    progress.finish()?;

    println!("Processed {} units.", total);

    Ok(())
}
