use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

pub const FEED_FILE: &str = "feed.yaml";
pub const PODCAST_FILE: &str = "podcast.xml";

pub const LOG_SPEC: &str = "debug";

// level from RUST_LOG, LOG_SPEC otherwise; keep the handle alive while logging
pub fn init_log() -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(LOG_SPEC)?.log_to_stdout().start()
}

#[cfg(test)]
pub const SAMPLE_FEED: &str = r#"
title: Rusty Waves
format: audio
subtitle: Weekly notes
author: Jane Doe
description: A show about systems
image: /images/art.png
language: en-us
category: Technology
link: https://example.com
item:
  - title: Episode 1
    description: Pilot
    duration: "00:30:12"
    published: Thu, 12 Jan 2023 18:00:00 GMT
    file: /audio/ep1.mp3
    length: "34216300"
  - title: Episode 2
    description: Follow up
    duration: "00:41:00"
    published: Thu, 19 Jan 2023 18:00:00 GMT
    file: /audio/ep2.mp3
    length: 41000000
"#;

#[cfg(test)]
pub fn test_log() {
    // a second logger in the same test binary is refused, which is fine
    let _ = Logger::try_with_str(LOG_SPEC).and_then(|l| l.log_to_stdout().start());
}
