use podcast_feed::util::{self, FEED_FILE, PODCAST_FILE};
use std::process;

fn main() {
    let logger = match util::init_log() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("logger init failed: {}", e);
            None
        }
    };

    if let Err(e) = podcast_feed::generate(FEED_FILE, PODCAST_FILE) {
        log::error!("{}", e);
        if logger.is_none() {
            eprintln!("{}", e);
        }
        drop(logger);
        process::exit(1);
    }
}
