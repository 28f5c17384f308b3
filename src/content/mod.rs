use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::error::{BlogError, Result};

/// One blog entry as returned by the content API.
///
/// Listing entries may omit the body; only the post page renders it.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub content_markdown: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl Post {
    pub fn excerpt_or_empty(&self) -> &str {
        self.excerpt.as_deref().unwrap_or("")
    }

    /// Key used to order posts; unpublished posts sort as the empty string.
    pub fn sort_key(&self) -> &str {
        self.published_at.as_deref().unwrap_or("")
    }

    /// Relative path of the rendered page, e.g. `blog/hello-world.html`.
    pub fn page_path(&self) -> String {
        format!("blog/{}.html", self.slug)
    }
}

/// Sort posts newest first. The sort is stable, so posts sharing a publish
/// timestamp (or all lacking one) keep their API order, and undated posts
/// end up last.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.sort_key().cmp(a.sort_key()));
}

/// Parse an API timestamp into the calendar date it names.
///
/// A trailing `Z` is rewritten to `+00:00` first. The date is read in the
/// timestamp's own offset, not converted to UTC.
pub fn parse_published(value: &str) -> Result<NaiveDate> {
    let normalized = value.replace('Z', "+00:00");

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"] {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, fmt) {
            return Ok(dt.date_naive());
        }
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Ok(dt.date());
        }
    }
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").map_err(|source| BlogError::Date {
        value: value.to_string(),
        source,
    })
}

/// Long-form date such as `February 19, 2026`. Absent or empty input gives
/// an empty string.
pub fn format_long_date(value: Option<&str>) -> Result<String> {
    match value {
        None | Some("") => Ok(String::new()),
        Some(v) => Ok(parse_published(v)?.format("%B %d, %Y").to_string()),
    }
}

/// `YYYY-MM-DD` form used by the sitemap, or `None` when the post is undated.
pub fn format_iso_date(value: Option<&str>) -> Result<Option<String>> {
    match value {
        None | Some("") => Ok(None),
        Some(v) => Ok(Some(parse_published(v)?.format("%Y-%m-%d").to_string())),
    }
}

#[cfg(test)]
pub(crate) fn sample_post(slug: &str, published_at: Option<&str>) -> Post {
    Post {
        slug: slug.into(),
        title: format!("Title {slug}"),
        author: "Jane Founder".into(),
        content_markdown: format!("Body of {slug}."),
        excerpt: None,
        published_at: published_at.map(String::from),
    }
}
