use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;

pub mod error;
pub mod responses;

// --- Public API ---
pub use error::ProfileError;
pub use responses::{ProfileInfo, RawProfile};

const GITHUB_API_BASE: &str = "https://api.github.com";

/// The generic, abstract interface to the external user-account API.
/// This trait is the contract the web layer programs against, allowing the
/// underlying implementation (live or stub) to be swapped out.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetches and normalizes the profile of the token's owner.
    async fn get_user_info(&self, token: &str) -> Result<ProfileInfo, ProfileError>;

    /// Collapses the same call to a boolean: true only on HTTP success.
    ///
    /// This is the one sanctioned swallow-everything boundary in the
    /// service; transport errors and upstream failures all degrade to
    /// `false` instead of surfacing.
    async fn validate_token(&self, token: &str) -> bool;
}

/// A concrete implementation of `ProfileApi` for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Result<Self, ProfileError> {
        Self::with_base_url(GITHUB_API_BASE)
    }

    /// Builds a client against a non-default endpoint. Used by tests.
    pub fn with_base_url(base_url: &str) -> Result<Self, ProfileError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("depot"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ProfileError::Unreachable)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issues the `/user` request. The token travels as `token <value>`,
    /// which GitHub accepts for both classic and fine-grained credentials.
    async fn fetch_user(&self, token: &str) -> Result<reqwest::Response, ProfileError> {
        self.client
            .get(format!("{}/user", self.base_url))
            .header(AUTHORIZATION, format!("token {token}"))
            .send()
            .await
            .map_err(ProfileError::Unreachable)
    }
}

#[async_trait]
impl ProfileApi for GitHubClient {
    async fn get_user_info(&self, token: &str) -> Result<ProfileInfo, ProfileError> {
        if token.trim().is_empty() {
            return Err(ProfileError::MissingToken);
        }

        tracing::debug!("fetching user profile from the upstream API");

        let response = self.fetch_user(token).await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, message = %message, "profile API request failed");

            return Err(match status {
                StatusCode::UNAUTHORIZED => ProfileError::InvalidToken,
                StatusCode::FORBIDDEN => ProfileError::Forbidden,
                other => ProfileError::Upstream {
                    status: other.as_u16(),
                    message,
                },
            });
        }

        let raw: RawProfile = response
            .json()
            .await
            .map_err(|e| ProfileError::Decode(e.to_string()))?;

        let info = ProfileInfo::from(raw);
        tracing::debug!(username = %info.username, "fetched user profile");
        Ok(info)
    }

    async fn validate_token(&self, token: &str) -> bool {
        if token.trim().is_empty() {
            return false;
        }

        match self.fetch_user(token).await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::error!(error = %err, "token validation request failed");
                false
            }
        }
    }
}
