//! Maps a [`Feed`] onto the RSS 2.0 / iTunes element tree.

use crate::entity::Element;
use crate::model::{Feed, Item};

pub const RSS_VERSION: &str = "2.0";
pub const ITUNES_NS: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";
pub const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";
pub const ENCLOSURE_TYPE: &str = "audio/mpeg";

/// Base link and relative path joined verbatim, no separator added.
pub fn absolute_url(link: &str, path: &str) -> String {
    format!("{}{}", link, path)
}

pub fn build(feed: &Feed) -> Element {
    let channel = feed
        .items
        .iter()
        .fold(channel(feed), |ch, item| ch.with_child(episode(feed, item)));

    Element::new("rss")
        .with_attr("version", RSS_VERSION)
        .with_attr("xmlns:itunes", ITUNES_NS)
        .with_attr("xmlns:content", CONTENT_NS)
        .with_child(channel)
}

fn channel(feed: &Feed) -> Element {
    Element::new("channel")
        .with_child(Element::text_node("title", &feed.title))
        .with_child(Element::text_node("format", &feed.format))
        .with_child(Element::text_node("subtitle", &feed.subtitle))
        .with_child(Element::text_node("itunes:author", &feed.author))
        .with_child(Element::text_node("description", &feed.description))
        .with_child(
            Element::new("itunes:image").with_attr("href", &absolute_url(&feed.link, &feed.image)),
        )
        .with_child(Element::text_node("language", &feed.language))
        .with_child(Element::text_node("link", &feed.link))
        .with_child(Element::new("itunes:category").with_attr("text", &feed.category))
}

fn episode(feed: &Feed, item: &Item) -> Element {
    log::debug!("episode {}", item.title);
    Element::new("item")
        .with_child(Element::text_node("title", &item.title))
        .with_child(Element::text_node("itunes:author", &feed.author))
        .with_child(Element::text_node("description", &item.description))
        .with_child(Element::text_node("itunes:duration", &item.duration))
        .with_child(Element::text_node("pubDate", &item.published))
        .with_child(
            Element::new("enclosure")
                .with_attr("url", &absolute_url(&feed.link, &item.file))
                .with_attr("type", ENCLOSURE_TYPE)
                .with_attr("length", &item.length),
        )
}
