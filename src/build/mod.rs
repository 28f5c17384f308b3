pub mod markdown;
pub mod sitemap;

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::api::PostSource;
use crate::config::{RunConfig, SiteConfig};
use crate::content::{self, Post};
use crate::error::{BlogError, Result};
use crate::output::{human, CommandOutput};
use crate::templates;

pub struct GenerateOptions {
    /// Print a line for every file written.
    pub report_progress: bool,
}

/// What a run wrote, relative to the output directory.
#[derive(Debug, Serialize)]
pub struct GenerateStats {
    pub post_page: String,
    pub index_page: String,
    pub sitemap: String,
    pub post_count: usize,
    pub duration_ms: u64,
}

impl CommandOutput for GenerateStats {
    fn human_display(&self) -> String {
        format!(
            "Generated {}, {} and {} ({} post{}) in {:.1}s",
            self.post_page,
            self.index_page,
            self.sitemap,
            self.post_count,
            if self.post_count == 1 { "" } else { "s" },
            self.duration_ms as f64 / 1000.0
        )
    }
}

/// Render one post into a complete HTML page.
///
/// Title, author and excerpt are inserted without escaping; the API is the
/// same trusted source that authored them.
pub fn render_post(config: &SiteConfig, post: &Post) -> Result<String> {
    let content_html = markdown::markdown_to_html(&post.content_markdown);
    let date = content::format_long_date(post.published_at.as_deref())?;

    Ok(templates::substitute(
        templates::POST_TEMPLATE,
        &[
            ("{{TITLE}}", post.title.as_str()),
            ("{{AUTHOR}}", post.author.as_str()),
            ("{{DATE}}", date.as_str()),
            ("{{CONTENT}}", content_html.as_str()),
            ("{{SLUG}}", post.slug.as_str()),
            ("{{EXCERPT}}", post.excerpt_or_empty()),
            ("{{SITE_URL}}", config.base_url()),
        ],
    ))
}

/// Render the blog index. `posts` is sorted newest first in place.
pub fn render_index(config: &SiteConfig, posts: &mut [Post]) -> Result<String> {
    content::sort_newest_first(posts);

    let listing = if posts.is_empty() {
        templates::EMPTY_LISTING.to_string()
    } else {
        let mut html = String::new();
        for post in posts.iter() {
            let date = content::format_long_date(post.published_at.as_deref())?;
            html.push_str(&templates::post_card(
                &post.slug,
                &post.title,
                &post.author,
                &date,
                post.excerpt_or_empty(),
            ));
        }
        html
    };
    let count = posts.len().to_string();

    Ok(templates::substitute(
        templates::INDEX_TEMPLATE,
        &[
            ("{{POSTS}}", listing.as_str()),
            ("{{POST_COUNT}}", count.as_str()),
            ("{{SITE_URL}}", config.base_url()),
        ],
    ))
}

/// Fetch the configured post and the full listing, then write the post page,
/// the blog index and the sitemap. Stops at the first error; files already
/// written stay in place.
pub fn generate(
    config: &RunConfig,
    source: &dyn PostSource,
    opts: &GenerateOptions,
) -> Result<GenerateStats> {
    let start = Instant::now();
    let site = &config.site;

    tracing::info!("Fetching post {}", config.slug);
    let post = source.fetch_post(&config.slug)?;

    let blog_dir = config.blog_dir();
    fs::create_dir_all(&blog_dir).map_err(|source| BlogError::Write {
        path: blog_dir.clone(),
        source,
    })?;

    let post_page = post.page_path();
    write_file(&config.output_dir.join(&post_page), &render_post(site, &post)?)?;
    if opts.report_progress {
        human::success(&format!("Generated {post_page}"));
    }

    tracing::info!("Fetching post listing");
    let mut posts = source.fetch_posts()?;

    let index_page = "blog/index.html".to_string();
    write_file(
        &config.output_dir.join(&index_page),
        &render_index(site, &mut posts)?,
    )?;
    if opts.report_progress {
        human::success(&format!(
            "Updated {index_page} with {} posts",
            posts.len()
        ));
    }

    let sitemap_path = "sitemap.xml".to_string();
    write_file(
        &config.output_dir.join(&sitemap_path),
        &sitemap::generate_sitemap(site, &posts)?,
    )?;
    if opts.report_progress {
        human::success(&format!(
            "Updated {sitemap_path} with {} blog posts",
            posts.len()
        ));
    }

    Ok(GenerateStats {
        post_page,
        index_page,
        sitemap: sitemap_path,
        post_count: posts.len(),
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    tracing::debug!("Writing {}", path.display());
    fs::write(path, contents).map_err(|source| BlogError::Write {
        path: path.to_path_buf(),
        source,
    })
}
