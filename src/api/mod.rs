//! Client for the content API.
//!
//! Both endpoints are fetched once per run with no retries. Any transport
//! failure, non-2xx status or unexpected body is returned as an error.

use serde::de::DeserializeOwned;

use crate::content::Post;
use crate::error::{BlogError, Result};

/// Where post records come from.
pub trait PostSource {
    /// `GET {API}/blog/{slug}`
    fn fetch_post(&self, slug: &str) -> Result<Post>;

    /// `GET {API}/blog/`
    fn fetch_posts(&self) -> Result<Vec<Post>>;
}

pub struct ApiClient {
    agent: ureq::Agent,
    base_url: String,
    user_agent: String,
}

impl ApiClient {
    pub fn new(base_url: &str, user_agent: &str) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/blog/{slug}", self.base_url)
    }

    pub fn listing_url(&self) -> String {
        format!("{}/blog/", self.base_url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {url}");
        let mut response = self
            .agent
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| request_error(url, e))?;

        response
            .body_mut()
            .read_json::<T>()
            .map_err(|e| BlogError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            })
    }
}

impl PostSource for ApiClient {
    fn fetch_post(&self, slug: &str) -> Result<Post> {
        self.get_json(&self.post_url(slug))
    }

    fn fetch_posts(&self) -> Result<Vec<Post>> {
        let posts: Vec<Post> = self.get_json(&self.listing_url())?;
        tracing::debug!("Fetched {} posts", posts.len());
        Ok(posts)
    }
}

fn request_error(url: &str, err: ureq::Error) -> BlogError {
    match err {
        ureq::Error::StatusCode(status) => BlogError::Status {
            url: url.to_string(),
            status,
        },
        other => BlogError::Http {
            url: url.to_string(),
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_trim_trailing_slash() {
        let client = ApiClient::new("https://api.example.com/", "test-agent");
        assert_eq!(client.post_url("hello"), "https://api.example.com/blog/hello");
        assert_eq!(client.listing_url(), "https://api.example.com/blog/");
    }

    #[test]
    fn test_status_error_mapping() {
        let err = request_error("http://x/blog/a", ureq::Error::StatusCode(404));
        assert!(matches!(err, BlogError::Status { status: 404, .. }));
        assert_eq!(err.to_string(), "Request to http://x/blog/a returned HTTP 404");
    }

    #[test]
    fn test_unreachable_host_is_an_error() {
        let client = ApiClient::new("http://127.0.0.1:1", "test-agent");
        let err = client.fetch_post("hello").unwrap_err();
        assert!(!matches!(err, BlogError::Decode { .. }), "got: {err}");
        assert!(err.to_string().contains("http://127.0.0.1:1/blog/hello"));
    }
}
