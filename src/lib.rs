pub mod entity;
pub mod error;
pub mod model;
pub mod parser;
pub mod rss;
pub mod util;
pub mod writer;

use error::Result;
use std::path::Path;

pub type EpisodeCount = usize;

// load -> map -> write; nothing is written unless loading succeeded
pub fn generate(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<EpisodeCount> {
    let (input, output) = (input.as_ref(), output.as_ref());
    log::info!("reading {}", input.display());
    let feed = parser::load(input)?;

    let doc = rss::build(&feed);
    writer::write(&doc, output)?;

    log::info!(
        "wrote {} episodes of \"{}\" to {}",
        feed.items.len(),
        feed.title,
        output.display()
    );
    Ok(feed.items.len())
}
