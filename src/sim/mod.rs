//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through `dt`
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod stepper;
pub mod tick;

pub use collision::{CollisionType, Contact, Side, detect_paddle_collision, detect_wall_collision};
pub use rect::Rect;
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Player, ScoreState, Snapshot};
pub use stepper::FixedStep;
pub use tick::{TickInput, tick};
