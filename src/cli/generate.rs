use crate::api::ApiClient;
use crate::build::{self, GenerateOptions};
use crate::config::{RunConfig, SiteConfig};
use crate::output::{self, OutputFormat};

use super::Cli;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let format = OutputFormat::from_json_flag(cli.json);

    if cli.api_url.trim().is_empty() {
        anyhow::bail!("API_URL is set but empty");
    }
    if cli.slug.trim().is_empty() {
        anyhow::bail!("POST_SLUG is set but empty");
    }

    let site = SiteConfig::load_or_default(cli.config.as_deref())?;
    let config = RunConfig::new(&cli.api_url, &cli.slug, &cli.output_dir, site);
    let client = ApiClient::new(&config.api_url, config.site.user_agent());

    let opts = GenerateOptions {
        report_progress: format == OutputFormat::Human,
    };
    let stats = build::generate(&config, &client, &opts)?;

    output::print_output(&stats, format)?;
    Ok(())
}
