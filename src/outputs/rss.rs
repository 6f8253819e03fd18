//! RSS 2.0 feed serialization.
//!
//! The feed is written with quick-xml's event writer rather than string
//! templates, so titles and descriptions pulled out of arbitrary pages are
//! escaped correctly no matter what they contain. Layout is two-space
//! indented with a leading XML declaration.
//!
//! # Document Shape
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <rss version="2.0">
//!   <channel>
//!     <title>…</title> <link>…</link> <description>…</description>
//!     <item>
//!       <title/> <link/> <description/> <pubDate/> <guid/>
//!       <enclosure url="…" type="image/jpeg"/>   (only with an image)
//!     </item>
//!   </channel>
//! </rss>
//! ```
//!
//! Items appear in exactly the order the pipeline produced them; nothing
//! is dropped, merged or deduplicated at this stage.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::error::Error;
use tokio::fs;
use tracing::{debug, info, instrument};

use crate::models::{Article, Feed};

/// Serialize the feed as an RSS 2.0 document.
pub fn render(feed: &Feed) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    writer.write_event(Event::Start(rss))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    write_text_element(&mut writer, "title", &feed.title)?;
    write_text_element(&mut writer, "link", &feed.link)?;
    write_text_element(&mut writer, "description", &feed.description)?;

    for article in &feed.articles {
        write_item(&mut writer, article)?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    Ok(writer.into_inner())
}

/// Render the feed and write it to `path`.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn write_feed(feed: &Feed, path: &str) -> Result<(), Box<dyn Error>> {
    let xml = render(feed)?;
    fs::write(path, &xml).await?;
    info!(
        count = feed.articles.len(),
        bytes = xml.len(),
        "Wrote RSS feed"
    );
    Ok(())
}

/// Write the feed only when it has articles.
///
/// Returns whether a file was written. An empty aggregate leaves the
/// output path untouched, including any feed a previous run put there.
pub async fn write_feed_if_any(feed: &Feed, path: &str) -> Result<bool, Box<dyn Error>> {
    if feed.articles.is_empty() {
        debug!(path, "Feed has no articles; skipping write");
        return Ok(false);
    }
    write_feed(feed, path).await?;
    Ok(true)
}

fn write_item(writer: &mut Writer<Vec<u8>>, article: &Article) -> Result<(), Box<dyn Error>> {
    writer.write_event(Event::Start(BytesStart::new("item")))?;

    write_text_element(writer, "title", &article.title)?;
    write_text_element(writer, "link", &article.link)?;
    write_text_element(writer, "description", &article.description)?;
    write_text_element(writer, "pubDate", &article.published_at)?;
    write_text_element(writer, "guid", &article.guid)?;

    if let Some(image_url) = &article.image_url {
        let mut enclosure = BytesStart::new("enclosure");
        enclosure.push_attribute(("url", image_url.as_str()));
        enclosure.push_attribute(("type", "image/jpeg"));
        writer.write_event(Event::Empty(enclosure))?;
    }

    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), Box<dyn Error>> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
