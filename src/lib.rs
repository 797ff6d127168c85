//! Pong Core - a two-player Pong simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring)
//! - `config`: Session constants, loadable from JSON
//! - `backdrop`: Scrolling tiled background placement

pub mod backdrop;
pub mod config;
pub mod sim;

pub use backdrop::Backdrop;
pub use config::{Config, ConfigError};

/// Game configuration constants
///
/// Time is in seconds, distances in pixels. The speeds reproduce the classic
/// feel of one pixel per millisecond.
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta accepted by the fixed stepper
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 1280.0;
    pub const FIELD_HEIGHT: f32 = 720.0;

    /// Ball defaults
    pub const BALL_WIDTH: f32 = 15.0;
    pub const BALL_HEIGHT: f32 = 15.0;
    pub const BALL_SPEED: f32 = 1000.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 1000.0;
    /// Horizontal distance between a side wall and its paddle
    pub const PADDLE_INSET: f32 = 50.0;

    /// Vertical deflection after an edge hit, as a fraction of ball speed
    pub const PADDLE_DEFLECT: f32 = 0.75;
    /// Range of the vertical serve speed, as fractions of ball speed
    pub const SERVE_MIN_Y: f32 = 0.5;
    pub const SERVE_MAX_Y: f32 = 1.0;
}
