//! go-link: place stones on a local Go game server.
//!
//! The server keeps a 19x19 board and exposes a small JSON API. This crate
//! sends stones to it, reads the board back, and clears it.
//!
//! ## Modules
//!
//! - [`constants`] - Server location, endpoint paths, board geometry
//! - [`board`] - Stone colors and the board snapshot
//! - [`client`] - Blocking HTTP client for the server API
//! - [`error`] - Error type shared by all operations
//!
//! ## Example
//!
//! ```no_run
//! use go_link::client::place;
//!
//! // Place a white stone at D6 on http://localhost:3000
//! let placement = place("D6", "white")?;
//! println!("{}", placement.request);
//! println!("{}", placement.response);
//! # Ok::<(), go_link::error::Error>(())
//! ```

pub mod board;
pub mod client;
pub mod constants;
pub mod error;
