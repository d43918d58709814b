use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("A token is required to query the profile API.")]
    MissingToken,

    #[error("Invalid token. Please check your credentials.")]
    InvalidToken,

    #[error("Profile API rate limit exceeded or the token lacks the required permissions.")]
    Forbidden,

    #[error("The profile API returned an error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to reach the profile API. Please check your network connection and try again.")]
    Unreachable(#[source] reqwest::Error),

    #[error("Failed to deserialize the profile API response: {0}")]
    Decode(String),
}
