//! Game state and core simulation types
//!
//! Everything the tick mutates lives here: the ball, both paddles, the score
//! counters and the serve RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionType, Contact, Side};
use super::rect::Rect;
use crate::config::Config;
use crate::consts::{PADDLE_DEFLECT, SERVE_MAX_Y, SERVE_MIN_Y};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Quit was requested; ticks are ignored
    Stopped,
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    /// Defends the left side
    One,
    /// Defends the right side
    Two,
}

/// Things that happened during a tick, for the display and audio side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit { player: Player, region: CollisionType },
    /// Ball bounced off the top or bottom wall
    WallBounce { side: CollisionType },
    /// A player's score changed; `score` is the new total
    ScoreChanged { player: Player, score: u32 },
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Pixels per second
    pub vel: Vec2,
    pub size: Vec2,
}

impl Ball {
    /// Ball at the field center, heading right at serve speed
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.field_center(),
            vel: Vec2::new(config.ball_speed, 0.0),
            size: Vec2::new(config.ball_width, config.ball_height),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Integrate position over `dt` seconds
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Bounce back off a paddle
    ///
    /// Edge hits send the ball away at a fixed vertical speed; middle hits
    /// keep the current vertical speed.
    pub fn resolve_paddle_contact(&mut self, contact: &Contact, ball_speed: f32) {
        if !contact.is_hit() {
            return;
        }

        self.pos.x += contact.penetration;
        self.vel.x = -self.vel.x;

        match contact.kind {
            CollisionType::Top => self.vel.y = -PADDLE_DEFLECT * ball_speed,
            CollisionType::Bottom => self.vel.y = PADDLE_DEFLECT * ball_speed,
            _ => {}
        }
    }

    /// Bounce off the top/bottom wall, or re-serve after a side exit
    pub fn resolve_wall_contact<R: Rng + ?Sized>(
        &mut self,
        contact: &Contact,
        config: &Config,
        rng: &mut R,
    ) {
        match contact.kind {
            CollisionType::Top | CollisionType::Bottom => {
                self.pos.y += contact.penetration;
                self.vel.y = -self.vel.y;
            }
            CollisionType::Left | CollisionType::Right => {
                self.serve(contact.kind == CollisionType::Left, config, rng);
            }
            _ => {}
        }
    }

    /// Re-center and launch toward the player who just scored
    fn serve<R: Rng + ?Sized>(&mut self, toward_right: bool, config: &Config, rng: &mut R) {
        let speed = config.ball_speed;
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let magnitude = rng.random_range(SERVE_MIN_Y..=SERVE_MAX_Y);

        self.pos = config.field_center();
        self.vel.x = if toward_right { speed } else { -speed };
        self.vel.y = sign * magnitude * speed;
    }
}

/// A player's paddle; only moves vertically
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// Pixels per second
    pub vel: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2, config: &Config) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size: Vec2::new(config.paddle_width, config.paddle_height),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Set vertical velocity from the two direction buttons (up wins ties)
    pub fn set_velocity_from_input(&mut self, up: bool, down: bool, speed: f32) {
        self.vel.y = if up {
            -speed
        } else if down {
            speed
        } else {
            0.0
        };
    }

    /// Integrate, then keep the paddle on the field
    pub fn advance(&mut self, dt: f32, field_height: f32) {
        self.pos += self.vel * dt;
        self.clamp_to_field(field_height);
    }

    fn clamp_to_field(&mut self, field_height: f32) {
        let max_y = (field_height - self.size.y).max(0.0);
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
        } else if self.pos.y > max_y {
            self.pos.y = max_y;
        }
    }
}

/// Score counters for both players
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub player_one: u32,
    pub player_two: u32,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit the player who did not let the ball through.
    ///
    /// Returns the scoring player and their new total.
    pub fn record_exit(&mut self, side: Side) -> (Player, u32) {
        match side {
            Side::Left => {
                self.player_two = self.player_two.saturating_add(1);
                (Player::Two, self.player_two)
            }
            Side::Right => {
                self.player_one = self.player_one.saturating_add(1);
                (Player::One, self.player_one)
            }
        }
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: Rect,
    /// Player one's paddle, then player two's
    pub paddles: [Rect; 2],
    /// Player one's score, then player two's
    pub scores: [u32; 2],
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the serve RNG was created from
    pub seed: u64,
    pub config: Config,
    pub phase: GamePhase,
    pub ball: Ball,
    /// Left paddle (player one)
    pub paddle_one: Paddle,
    /// Right paddle (player two)
    pub paddle_two: Paddle,
    pub scores: ScoreState,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Serve direction randomness
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(config: Config, seed: u64) -> Self {
        let paddle_y = (config.field_height - config.paddle_height) / 2.0;
        let paddle_one = Paddle::new(Vec2::new(config.paddle_inset, paddle_y), &config);
        let right_x = config.field_width - config.paddle_inset - config.paddle_width;
        let paddle_two = Paddle::new(Vec2::new(right_x, paddle_y), &config);

        Self {
            seed,
            ball: Ball::new(&config),
            paddle_one,
            paddle_two,
            phase: GamePhase::Playing,
            scores: ScoreState::new(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            config,
        }
    }

    pub fn paddle(&self, player: Player) -> &Paddle {
        match player {
            Player::One => &self.paddle_one,
            Player::Two => &self.paddle_two,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: self.ball.rect(),
            paddles: [self.paddle_one.rect(), self.paddle_two.rect()],
            scores: [self.scores.player_one, self.scores.player_two],
        }
    }
}
