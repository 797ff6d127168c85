//! Simulation tick
//!
//! Advances the session by one step. The order is fixed: paddle input,
//! paddle motion, ball motion, wall check, paddle one, paddle two, score.

use super::collision::{detect_paddle_collision, detect_wall_collision};
use super::state::{GameEvent, GamePhase, GameState, Player};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub paddle_one_up: bool,
    pub paddle_one_down: bool,
    pub paddle_two_up: bool,
    pub paddle_two_down: bool,
    /// Stop the session
    pub quit: bool,
}

/// Advance the game state by `dt` seconds and return what happened
///
/// Negative or NaN `dt` is treated as zero.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.quit && state.phase == GamePhase::Playing {
        log::info!(
            "Quit requested at tick {} (score {}-{})",
            state.time_ticks,
            state.scores.player_one,
            state.scores.player_two
        );
        state.phase = GamePhase::Stopped;
    }
    if state.phase == GamePhase::Stopped {
        return events;
    }

    // `max` also maps NaN to 0
    let dt = dt.max(0.0);
    state.time_ticks += 1;

    let config = &state.config;

    // Paddles
    state.paddle_one.set_velocity_from_input(
        input.paddle_one_up,
        input.paddle_one_down,
        config.paddle_speed,
    );
    state.paddle_two.set_velocity_from_input(
        input.paddle_two_up,
        input.paddle_two_down,
        config.paddle_speed,
    );
    state.paddle_one.advance(dt, config.field_height);
    state.paddle_two.advance(dt, config.field_height);

    // Ball
    state.ball.advance(dt);

    let wall = detect_wall_collision(&state.ball, config);
    if wall.is_hit() {
        log::debug!("Wall contact {:?} at {:?}", wall.kind, state.ball.pos);
        state.ball.resolve_wall_contact(&wall, config, &mut state.rng);

        if let Some(side) = wall.kind.exit_side() {
            let (player, score) = state.scores.record_exit(side);
            log::info!("Player {:?} scores: {}", player, score);
            events.push(GameEvent::ScoreChanged { player, score });
        } else {
            events.push(GameEvent::WallBounce { side: wall.kind });
        }
    }

    for player in [Player::One, Player::Two] {
        let paddle = match player {
            Player::One => &state.paddle_one,
            Player::Two => &state.paddle_two,
        };
        let contact = detect_paddle_collision(&state.ball, paddle);
        if contact.is_hit() {
            log::debug!(
                "Paddle {:?} contact {:?} (penetration {})",
                player,
                contact.kind,
                contact.penetration
            );
            state.ball.resolve_paddle_contact(&contact, config.ball_speed);
            events.push(GameEvent::PaddleHit {
                player,
                region: contact.kind,
            });
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::consts::SIM_DT;
    use crate::sim::collision::CollisionType;
    use glam::Vec2;

    fn new_state() -> GameState {
        GameState::new(Config::default(), 12345)
    }

    #[test]
    fn test_ball_exits_right_and_reserves() {
        let mut state = new_state();
        let config = state.config.clone();
        state.ball.pos = config.field_center();
        state.ball.vel = Vec2::new(config.ball_speed, 0.0);
        // Keep the right paddle out of the ball's path
        state.paddle_two.pos.y = 0.0;

        let input = TickInput::default();
        let mut scored = None;
        for _ in 0..1000 {
            let events = tick(&mut state, &input, SIM_DT);
            if let Some(GameEvent::ScoreChanged { player, score }) = events
                .iter()
                .copied()
                .find(|e| matches!(e, GameEvent::ScoreChanged { .. }))
            {
                scored = Some((player, score));
                break;
            }
        }

        assert_eq!(scored, Some((Player::One, 1)));
        assert_eq!(state.ball.pos, config.field_center());
        assert_eq!(state.ball.vel.x, -config.ball_speed);
        assert_eq!(state.snapshot().scores, [1, 0]);
    }

    #[test]
    fn test_ball_exits_left_credits_player_two() {
        let mut state = new_state();
        let config = state.config.clone();
        state.ball.vel = Vec2::new(-config.ball_speed, 0.0);
        state.paddle_one.pos.y = 0.0;

        let input = TickInput::default();
        for _ in 0..1000 {
            tick(&mut state, &input, SIM_DT);
            if state.scores.player_two > 0 {
                break;
            }
        }
        assert_eq!(state.scores.player_two, 1);
        assert_eq!(state.scores.player_one, 0);
        assert_eq!(state.ball.vel.x, config.ball_speed);
    }

    #[test]
    fn test_top_third_hit_on_paddle_one() {
        let mut state = new_state();
        let speed = state.config.ball_speed;
        let paddle = state.paddle_one.rect();

        // Ball just overlapping the paddle's right edge, midpoint in the top third
        state.ball.pos = Vec2::new(paddle.right() - 2.0, paddle.top() + 2.0);
        state.ball.vel = Vec2::new(-speed, 0.0);

        let events = tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(
            events,
            vec![GameEvent::PaddleHit {
                player: Player::One,
                region: CollisionType::Top,
            }]
        );
        assert_eq!(state.ball.pos.x, paddle.right());
        assert_eq!(state.ball.vel, Vec2::new(speed, -0.75 * speed));
    }

    #[test]
    fn test_bottom_third_hit_on_paddle_two() {
        let mut state = new_state();
        let speed = state.config.ball_speed;
        let paddle = state.paddle_two.rect();

        // Ball just past the paddle's left edge, midpoint in the bottom third
        state.ball.pos = Vec2::new(paddle.left() - 13.0, paddle.bottom() - 20.0);
        state.ball.vel = Vec2::new(speed, 0.0);

        let events = tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(
            events,
            vec![GameEvent::PaddleHit {
                player: Player::Two,
                region: CollisionType::Bottom,
            }]
        );
        assert_eq!(state.ball.pos.x, paddle.left() - 15.0);
        assert_eq!(state.ball.vel, Vec2::new(-speed, 0.75 * speed));
    }

    #[test]
    fn test_both_buttons_move_up() {
        let mut state = new_state();
        let start = state.paddle_two.pos.y;
        let input = TickInput {
            paddle_two_up: true,
            paddle_two_down: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.paddle_two.vel.y, -state.config.paddle_speed);
        assert!(state.paddle_two.pos.y < start);
    }

    #[test]
    fn test_wall_bounce_event() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(600.0, 1.0);
        state.ball.vel = Vec2::new(0.0, -600.0);
        let events = tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(
            events,
            vec![GameEvent::WallBounce {
                side: CollisionType::Top
            }]
        );
        assert_eq!(state.ball.pos.y, 0.0);
        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn test_negative_dt_is_clamped() {
        let mut state = new_state();
        let before = state.ball.pos;
        tick(&mut state, &TickInput::default(), -1.0);
        assert_eq!(state.ball.pos, before);
        tick(&mut state, &TickInput::default(), f32::NAN);
        assert_eq!(state.ball.pos, before);
    }

    #[test]
    fn test_quit_stops_session() {
        let mut state = new_state();
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        assert!(tick(&mut state, &quit, SIM_DT).is_empty());
        assert_eq!(state.phase, GamePhase::Stopped);

        let before = state.ball.pos;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.ball.pos, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = new_state();
        let mut state2 = new_state();

        let inputs = [
            TickInput {
                paddle_one_up: true,
                ..Default::default()
            },
            TickInput {
                paddle_two_down: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..5000 {
            let input = &inputs[i % inputs.len()];
            let events1 = tick(&mut state1, input, SIM_DT);
            let events2 = tick(&mut state2, input, SIM_DT);
            assert_eq!(events1, events2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.snapshot(), state2.snapshot());
    }
}
