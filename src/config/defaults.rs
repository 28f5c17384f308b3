pub fn base_url() -> String {
    "https://vantage-cto.com".to_string()
}

/// Last modification date advertised for the site root in the sitemap.
pub fn root_lastmod() -> String {
    "2026-02-19".to_string()
}

pub fn user_agent() -> String {
    format!("vantage-blog/{}", env!("CARGO_PKG_VERSION"))
}

pub fn output_dir() -> String {
    ".".to_string()
}
