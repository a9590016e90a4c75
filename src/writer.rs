use crate::entity::Element;
use crate::error::{FeedError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fmt::Display;
use std::fs;
use std::path::Path;

type XmlWriter = Writer<Vec<u8>>;

pub fn render(doc: &Element) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(render_err)?;
    write_element(&mut writer, doc)?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(render_err)?;
    xml.push('\n');
    Ok(xml)
}

/// Renders the whole document before touching `path`, then overwrites it.
pub fn write(doc: &Element, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let xml = render(doc)?;
    fs::write(path, &xml).map_err(|source| FeedError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} bytes to {}", xml.len(), path.display());
    Ok(())
}

fn write_element(w: &mut XmlWriter, el: &Element) -> Result<()> {
    let mut start = BytesStart::new(el.name.as_str());
    for (key, value) in &el.attrs {
        xml_chars(value)?;
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if el.is_empty() {
        return w.write_event(Event::Empty(start)).map_err(render_err);
    }

    w.write_event(Event::Start(start)).map_err(render_err)?;
    if let Some(text) = &el.text {
        xml_chars(text)?;
        w.write_event(Event::Text(BytesText::new(text)))
            .map_err(render_err)?;
    }
    for child in &el.children {
        write_element(w, child)?;
    }
    w.write_event(Event::End(BytesEnd::new(el.name.as_str())))
        .map_err(render_err)
}

// escaping cannot represent characters outside XML 1.0's Char production
fn xml_chars(s: &str) -> Result<()> {
    match s.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(FeedError::Render(format!(
            "character U+{:04X} is not allowed in xml",
            c as u32
        ))),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{fffd}' | '\u{10000}'..='\u{10ffff}')
}

fn render_err(e: impl Display) -> FeedError {
    FeedError::Render(e.to_string())
}
