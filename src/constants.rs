//! Server location, endpoint paths, and board geometry.
//!
//! The endpoint paths are relative so they can be joined onto any base URL
//! given on the command line.

// =============================================================================
// Server
// =============================================================================

/// Base URL of the local game server.
pub const DEFAULT_SERVER: &str = "http://localhost:3000";

/// Path of the stone placement endpoint (`POST`).
pub const PLACE_PATH: &str = "api/place";

/// Path of the board snapshot endpoint (`GET`).
pub const BOARD_PATH: &str = "api/board";

/// Path of the board reset endpoint (`POST`).
pub const RESET_PATH: &str = "api/reset";

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size used by the server (19x19).
pub const N: usize = 19;

/// Column labels, left to right. `I` is skipped by Go convention.
pub const COLUMNS: &str = "ABCDEFGHJKLMNOPQRST";

// =============================================================================
// Demo
// =============================================================================

/// Intersection used when the binary runs without a command.
pub const DEMO_INTERSECTION: &str = "D6";

/// Color used when the binary runs without a command.
pub const DEMO_COLOR: &str = "white";
