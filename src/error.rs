use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while talking to the game server.
#[derive(Debug, Error)]
pub enum Error {
    /// The color name is neither `black` nor `white`. Raised before any I/O.
    #[error("Invalid color: {0}. Must be 'black' or 'white'.")]
    InvalidColor(String),
    /// The request could not be completed (refused, DNS, reset, ...).
    #[error("request to game server failed")]
    Transport(#[from] reqwest::Error),
    /// The server answered, but not with the JSON we expected.
    #[error("game server sent an unreadable response")]
    ResponseParse(#[from] serde_json::Error),
    /// The server answered with a non-success status.
    #[error("game server answered {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// An endpoint path could not be joined onto the server URL.
    #[error("invalid server url")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
