//! Example showing the block style with truecolor output

use std::thread;
use std::time::Duration;

use color_eyre::Result;
use console::style;
use headway::ProgressDisplayBuilder;

fn main() -> Result<()> {
    color_eyre::install()?;

    println!("{}", style("Crunching 120 units...").bold());

    let mut progress = ProgressDisplayBuilder::block_style().build(120)?;
    for _ in 0..120 {
        progress.advance(1);
        progress.render()?;
        thread::sleep(Duration::from_millis(25));
    }
    progress.finish()?;

    println!("{}", style("Done.").green());

    Ok(())
}
