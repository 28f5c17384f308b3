pub mod generate;

use std::path::PathBuf;

use clap::Parser;

use crate::config::defaults;

/// Command-line surface. The two required values normally arrive through
/// the environment of the publishing workflow.
#[derive(Parser, Debug)]
#[command(
    name = "vantage-blog",
    about = "Render blog pages, the blog index and the sitemap from the content API",
    version
)]
pub struct Cli {
    /// Base URL of the content API
    #[arg(long, env = "API_URL")]
    pub api_url: String,

    /// Slug of the post that was just published
    #[arg(long = "slug", env = "POST_SLUG")]
    pub slug: String,

    /// Directory that receives `blog/` and `sitemap.xml`
    #[arg(short, long, env = "OUTPUT_DIR", default_value_t = defaults::output_dir())]
    pub output_dir: String,

    /// Path to a TOML file with a `[site]` section
    #[arg(short, long, env = "BLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}
