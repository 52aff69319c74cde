//! Blocking HTTP client for the game server.
//!
//! Every call makes exactly one request, with no retry and no timeout.
//! Failures go straight back to the caller.

use std::fmt;

use log::{debug, info};
use reqwest::blocking::{self, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::board::{Board, Color};
use crate::constants::{BOARD_PATH, DEFAULT_SERVER, PLACE_PATH, RESET_PATH};
use crate::error::{Error, Result};

/// Body of a `POST /api/place`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlacementRequest {
    pub intersection: String,
    pub color: Color,
    /// The color as the caller spelled it.
    #[serde(skip)]
    pub color_name: String,
}

impl PlacementRequest {
    /// Build a request from a color name. The intersection is not inspected.
    pub fn new(intersection: &str, color: &str) -> Result<Self> {
        Ok(Self {
            intersection: intersection.to_string(),
            color: color.parse()?,
            color_name: color.to_string(),
        })
    }
}

impl fmt::Display for PlacementRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Placing {} ({}) at {}",
            self.color_name,
            self.color.code(),
            self.intersection
        )
    }
}

/// Outcome of a successful placement: what was sent and what came back.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub request: PlacementRequest,
    pub response: Value,
}

#[derive(Deserialize)]
struct BoardResponse {
    board: Board,
}

/// Connection settings for one game server.
pub struct Client {
    http: blocking::Client,
    server: Url,
}

impl Client {
    /// Client for the local server at [`DEFAULT_SERVER`].
    pub fn new() -> Result<Self> {
        Self::with_server(Url::parse(DEFAULT_SERVER)?)
    }

    /// Client for the server at `server`. Endpoint paths are joined onto it.
    ///
    /// Requests block until they complete or fail; no timeout is applied.
    pub fn with_server(server: Url) -> Result<Self> {
        let http = blocking::Client::builder().timeout(None).build()?;
        Ok(Self { http, server })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.server.join(path)?)
    }

    /// Place a `color` stone at `intersection`.
    ///
    /// The color is validated before anything touches the network.
    pub fn place(&self, intersection: &str, color: &str) -> Result<Placement> {
        let request = PlacementRequest::new(intersection, color)?;
        let url = self.endpoint(PLACE_PATH)?;
        debug!(
            "POST {url} intersection={:?} color={}",
            request.intersection,
            request.color.code()
        );
        let response = self.http.post(url).json(&request).send()?;
        let response = read_json(response)?;
        Ok(Placement { request, response })
    }

    /// Fetch the current board.
    pub fn board(&self) -> Result<Board> {
        let url = self.endpoint(BOARD_PATH)?;
        debug!("GET {url}");
        let response = self.http.get(url).send()?;
        let BoardResponse { board } = read_json(response)?;
        Ok(board)
    }

    /// Clear the board.
    pub fn reset(&self) -> Result<Value> {
        let url = self.endpoint(RESET_PATH)?;
        debug!("POST {url}");
        let response = self.http.post(url).send()?;
        read_json(response)
    }
}

/// Read the whole body, then decode it, so a bad body is a parse error and
/// not a transport error.
fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    info!("{} answered {status}", response.url());
    let body = response.text()?;
    if !status.is_success() {
        return Err(Error::Status { status, body });
    }
    Ok(serde_json::from_str(&body)?)
}

/// Place a stone on the local server at [`DEFAULT_SERVER`].
///
/// ```no_run
/// let placement = go_link::client::place("D6", "white")?;
/// println!("{}", placement.request);
/// println!("{}", placement.response);
/// # Ok::<(), go_link::error::Error>(())
/// ```
pub fn place(intersection: &str, color: &str) -> Result<Placement> {
    Client::new()?.place(intersection, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let request = PlacementRequest::new("D6", "white").unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"intersection":"D6","color":2}"#
        );

        let request = PlacementRequest::new("A1", "BLACK").unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"intersection": "A1", "color": 1})
        );
    }

    #[test]
    fn test_request_passes_intersection_through() {
        for label in ["", "d6", "Z99", "not a point", "  D6  "] {
            let request = PlacementRequest::new(label, "white").unwrap();
            assert_eq!(request.intersection, label);
        }
    }

    #[test]
    fn test_request_rejects_bad_color() {
        assert!(matches!(
            PlacementRequest::new("D6", "green"),
            Err(Error::InvalidColor(c)) if c == "green"
        ));
    }

    #[test]
    fn test_confirmation_line() {
        let request = PlacementRequest::new("D6", "White").unwrap();
        assert_eq!(request.to_string(), "Placing White (2) at D6");

        let request = PlacementRequest::new("A1", "BLACK").unwrap();
        assert_eq!(request.to_string(), "Placing BLACK (1) at A1");
        assert_eq!(request.color, Color::Black);
    }

    #[test]
    fn test_endpoints() {
        let client = Client::new().unwrap();
        assert_eq!(
            client.endpoint(PLACE_PATH).unwrap().as_str(),
            "http://localhost:3000/api/place"
        );
        assert_eq!(
            client.endpoint(BOARD_PATH).unwrap().as_str(),
            "http://localhost:3000/api/board"
        );

        let server = Url::parse("http://example.com:8080/go/").unwrap();
        let client = Client::with_server(server).unwrap();
        assert_eq!(
            client.endpoint(RESET_PATH).unwrap().as_str(),
            "http://example.com:8080/go/api/reset"
        );
    }

    #[test]
    fn test_invalid_color_needs_no_server() {
        // Nothing listens on port 9; the error must come from validation.
        let server = Url::parse("http://127.0.0.1:9").unwrap();
        let client = Client::with_server(server).unwrap();
        assert!(matches!(
            client.place("D6", "blue"),
            Err(Error::InvalidColor(_))
        ));
    }
}
