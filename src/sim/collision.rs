//! Collision detection for the ball against walls and paddles
//!
//! Both detectors are pure: they read the bodies and return a [`Contact`]
//! describing what was hit and how far to push the ball back out. The response
//! lives on [`Ball`](super::Ball).

use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle};
use crate::config::Config;

/// What the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionType {
    #[default]
    None,
    /// Top third of a paddle, or the top wall
    Top,
    /// Middle third of a paddle
    Middle,
    /// Bottom third of a paddle, or the bottom wall
    Bottom,
    /// Ball left the field past the left paddle
    Left,
    /// Ball left the field past the right paddle
    Right,
}

/// Side of the playfield the ball exited through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl CollisionType {
    /// The exit side for `Left`/`Right` wall contacts
    pub fn exit_side(self) -> Option<Side> {
        match self {
            CollisionType::Left => Some(Side::Left),
            CollisionType::Right => Some(Side::Right),
            _ => None,
        }
    }
}

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Contact {
    pub kind: CollisionType,
    /// Signed correction along the resolution axis (0 when nothing was hit)
    pub penetration: f32,
}

impl Contact {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(kind: CollisionType, penetration: f32) -> Self {
        Self { kind, penetration }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.kind != CollisionType::None
    }
}

/// Check the ball against the four field boundaries
///
/// At most one contact is reported. Leaving through a side beats bouncing off
/// the top or bottom: `Left`, then `Right`, then `Top`, then `Bottom`.
pub fn detect_wall_collision(ball: &Ball, config: &Config) -> Contact {
    let rect = ball.rect();

    if rect.left() < 0.0 {
        return Contact::new(CollisionType::Left, 0.0);
    }
    if rect.right() > config.field_width {
        return Contact::new(CollisionType::Right, 0.0);
    }
    if rect.top() < 0.0 {
        return Contact::new(CollisionType::Top, -rect.top());
    }
    if rect.bottom() > config.field_height {
        return Contact::new(CollisionType::Bottom, config.field_height - rect.bottom());
    }

    Contact::none()
}

/// Check the ball against a paddle
///
/// The hit region is picked by where the ball's vertical midpoint falls among
/// the paddle's thirds. Penetration pushes the ball back out on the side it
/// came from.
pub fn detect_paddle_collision(ball: &Ball, paddle: &Paddle) -> Contact {
    let ball_rect = ball.rect();
    let paddle_rect = paddle.rect();

    if !ball_rect.overlaps(&paddle_rect) {
        return Contact::none();
    }

    let third = paddle_rect.size.y / 3.0;
    let ball_mid = ball_rect.mid_y();
    let kind = if ball_mid < paddle_rect.top() + third {
        CollisionType::Top
    } else if ball_mid <= paddle_rect.top() + 2.0 * third {
        CollisionType::Middle
    } else {
        CollisionType::Bottom
    };

    let penetration = if ball.vel.x < 0.0 {
        paddle_rect.right() - ball_rect.left()
    } else if ball.vel.x > 0.0 {
        paddle_rect.left() - ball_rect.right()
    } else {
        0.0
    };

    Contact::new(kind, penetration)
}
