//! Retrieval of remote AGENTS.md files from GitHub raw content.

use crate::config::Settings;
use crate::domain::AGENTS_FILE_NAME;
use crate::error::{AgmdError, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Branch every remote AGENTS.md is read from.
const BRANCH_REF: &str = "refs/heads/main";

/// Source of remote AGENTS.md content, keyed by GitHub slug.
pub trait AgentsSource {
    /// Fetch the raw bytes of the AGENTS.md addressed by `slug`.
    fn fetch_agents_file(&self, slug: &str) -> Result<Vec<u8>>;
}

/// Owner, repository and optional sub-directory parsed from `owner/repo[/sub/path]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubSlug {
    pub owner: String,
    pub repo: String,
    pub subpath: Option<String>,
}

impl GithubSlug {
    pub fn parse(slug: &str) -> Result<Self> {
        let cleaned = slug.trim().trim_end_matches('/');
        let parts: Vec<&str> = cleaned.split('/').filter(|part| !part.is_empty()).collect();
        let [owner, repo, rest @ ..] = parts.as_slice() else {
            return Err(AgmdError::InvalidSlug { slug: slug.to_string() });
        };
        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            subpath: if rest.is_empty() { None } else { Some(rest.join("/")) },
        })
    }

    /// Path of AGENTS.md inside the repository.
    pub fn agents_path(&self) -> String {
        match &self.subpath {
            Some(prefix) => format!("{prefix}/{AGENTS_FILE_NAME}"),
            None => AGENTS_FILE_NAME.to_string(),
        }
    }

    /// Raw-content URL of AGENTS.md under `base_url`.
    pub fn raw_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/{}/{BRANCH_REF}/{}",
            base_url.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.agents_path()
        )
    }
}

/// Blocking HTTP fetcher. One GET per call, no retries.
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self { client, base_url: settings.raw_base_url.clone() })
    }
}

impl AgentsSource for HttpFetcher {
    fn fetch_agents_file(&self, slug: &str) -> Result<Vec<u8>> {
        let url = GithubSlug::parse(slug)?.raw_url(&self.base_url);
        info!(%slug, %url, "Fetching remote AGENTS.md");

        let fetch_error = |source: reqwest::Error| AgmdError::Fetch {
            slug: slug.to_string(),
            url: url.clone(),
            source: Box::new(source),
        };

        let response =
            self.client.get(&url).send().and_then(|r| r.error_for_status()).map_err(fetch_error)?;
        let body = response.bytes().map_err(fetch_error)?;
        debug!(%url, bytes = body.len(), "Fetched remote AGENTS.md");
        Ok(body.to_vec())
    }
}
