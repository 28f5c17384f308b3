use std::io::Cursor;

use chrono::{NaiveDate, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::config::SiteConfig;
use crate::content::{self, Post};
use crate::error::{BlogError, Result};

const ROOT_PRIORITY: &str = "1.0";
const BLOG_INDEX_PRIORITY: &str = "0.8";
const POST_PRIORITY: &str = "0.6";

/// Sitemap for the site root, the blog index and every post, dated today (UTC).
pub fn generate_sitemap(config: &SiteConfig, posts: &[Post]) -> Result<String> {
    generate_sitemap_on(config, posts, Utc::now().date_naive())
}

/// Same as [`generate_sitemap`] with an explicit "today" for the blog index
/// and for undated posts.
pub fn generate_sitemap_on(config: &SiteConfig, posts: &[Post], today: NaiveDate) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    let base = config.base_url();
    let today = today.format("%Y-%m-%d").to_string();

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", "http://www.sitemaps.org/schemas/sitemap/0.9"));
    write(&mut writer, Event::Start(urlset))?;

    write_url(
        &mut writer,
        &format!("{base}/"),
        &config.site.root_lastmod,
        ROOT_PRIORITY,
    )?;
    write_url(&mut writer, &format!("{base}/blog/"), &today, BLOG_INDEX_PRIORITY)?;

    for post in posts {
        let loc = format!("{base}/{}", post.page_path());
        let lastmod = content::format_iso_date(post.published_at.as_deref())?
            .unwrap_or_else(|| today.clone());
        write_url(&mut writer, &loc, &lastmod, POST_PRIORITY)?;
    }

    write(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    let bytes = writer.into_inner().into_inner();
    let mut xml = String::from_utf8(bytes)
        .map_err(|e| BlogError::Sitemap(format!("encoding error: {e}")))?;
    xml.push('\n');
    Ok(xml)
}

fn write(writer: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| BlogError::Sitemap(format!("write error: {e}")))
}

fn write_text_element(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> Result<()> {
    write(writer, Event::Start(BytesStart::new(tag)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(tag)))
}

fn write_url(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    loc: &str,
    lastmod: &str,
    priority: &str,
) -> Result<()> {
    write(writer, Event::Start(BytesStart::new("url")))?;
    write_text_element(writer, "loc", loc)?;
    write_text_element(writer, "lastmod", lastmod)?;
    write_text_element(writer, "priority", priority)?;
    write(writer, Event::End(BytesEnd::new("url")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample_post;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fixed_entries() {
        let xml = generate_sitemap_on(&SiteConfig::default(), &[], day(2026, 10, 19)).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert!(xml.contains(
            "<loc>https://vantage-cto.com/</loc>\n    <lastmod>2026-02-19</lastmod>\n    <priority>1.0</priority>"
        ));
        assert!(xml.contains(
            "<loc>https://vantage-cto.com/blog/</loc>\n    <lastmod>2026-10-19</lastmod>\n    <priority>0.8</priority>"
        ));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_post_lastmod_from_publish_date() {
        let posts = vec![sample_post("launch", Some("2026-03-10T12:00:00Z"))];
        let xml = generate_sitemap_on(&SiteConfig::default(), &posts, day(2026, 10, 19)).unwrap();
        assert!(xml.contains(
            "<loc>https://vantage-cto.com/blog/launch.html</loc>\n    <lastmod>2026-03-10</lastmod>\n    <priority>0.6</priority>"
        ));
    }

    #[test]
    fn test_undated_post_uses_today() {
        let posts = vec![sample_post("draft", None)];
        let xml = generate_sitemap_on(&SiteConfig::default(), &posts, day(2026, 10, 19)).unwrap();
        assert!(xml.contains(
            "<loc>https://vantage-cto.com/blog/draft.html</loc>\n    <lastmod>2026-10-19</lastmod>"
        ));
    }

    #[test]
    fn test_undated_post_uses_current_utc_date() {
        let posts = vec![sample_post("draft", None)];
        let before = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        let xml = generate_sitemap(&SiteConfig::default(), &posts).unwrap();
        let after = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        let found_before = xml.contains(&format!("draft.html</loc>\n    <lastmod>{before}</lastmod>"));
        let found_after = xml.contains(&format!("draft.html</loc>\n    <lastmod>{after}</lastmod>"));
        assert!(found_before || found_after, "got: {xml}");
    }

    #[test]
    fn test_posts_keep_given_order() {
        let posts = vec![
            sample_post("older", Some("2026-01-01T00:00:00Z")),
            sample_post("newer", Some("2026-02-01T00:00:00Z")),
        ];
        let xml = generate_sitemap_on(&SiteConfig::default(), &posts, day(2026, 10, 19)).unwrap();
        let older = xml.find("older.html").unwrap();
        let newer = xml.find("newer.html").unwrap();
        assert!(older < newer);
    }

    #[test]
    fn test_custom_base_url() {
        let mut config = SiteConfig::default();
        config.site.base_url = "https://staging.example.com/".into();
        let posts = vec![sample_post("a", Some("2026-01-01T00:00:00Z"))];
        let xml = generate_sitemap_on(&config, &posts, day(2026, 10, 19)).unwrap();
        assert!(xml.contains("<loc>https://staging.example.com/</loc>"));
        assert!(xml.contains("<loc>https://staging.example.com/blog/a.html</loc>"));
    }

    #[test]
    fn test_loc_is_xml_escaped() {
        let posts = vec![sample_post("q&a", None)];
        let xml = generate_sitemap_on(&SiteConfig::default(), &posts, day(2026, 10, 19)).unwrap();
        assert!(xml.contains("/blog/q&amp;a.html</loc>"));
    }

    #[test]
    fn test_invalid_publish_date_is_error() {
        let posts = vec![sample_post("bad", Some("not-a-date"))];
        let err = generate_sitemap_on(&SiteConfig::default(), &posts, day(2026, 10, 19)).unwrap_err();
        assert!(matches!(err, BlogError::Date { .. }));
    }
}
