//=========================================================================
// Simulation Step
//=========================================================================
//
// Advances the rally by one tick.
//
// Order of checks (each one independent, none short-circuits the rest):
// ```text
//   advance ─► paddle ─► miss ─► ceiling ─► right wall ─► left wall
// ```
//
// The miss check reads the vertical velocity *after* the paddle check,
// so a paddle return in the same tick suppresses the miss. Reordering
// these checks changes corner-case behavior.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::state::{GameState, RESPAWN_POSITION};

//=== StepOutcome =========================================================

/// Which collision checks fired during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    pub paddle_hit: bool,
    pub missed: bool,
    pub ceiling: bool,
    pub right_wall: bool,
    pub left_wall: bool,
}

impl StepOutcome {
    /// True if no check fired.
    pub fn is_quiet(&self) -> bool {
        *self == Self::default()
    }
}

//=== step() ==============================================================

/// Runs one tick of the simulation on `state`.
///
/// Total for every reachable state; never fails.
pub fn step(state: &mut GameState) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    let area = state.area;
    let paddle = state.paddle;
    let ball = &mut state.ball;

    //--- 1. Advance -------------------------------------------------------
    ball.pos.x += ball.velocity.vx;
    ball.pos.y += ball.velocity.vy;

    //--- 2. Paddle --------------------------------------------------------
    if ball.pos.x >= paddle.left()
        && ball.pos.x <= paddle.right()
        && ball.pos.y >= paddle.top(area) - ball.size
        && ball.velocity.vy > 0
    {
        ball.velocity.vy = -ball.velocity.vy;
        state.score.record_hit();
        outcome.paddle_hit = true;
    }

    //--- 3. Miss ----------------------------------------------------------
    if ball.pos.y >= area.height() - ball.size && ball.velocity.vy > 0 {
        state.score.reset_run();
        ball.pos = RESPAWN_POSITION;
        outcome.missed = true;
    }

    //--- 4. Ceiling -------------------------------------------------------
    if ball.pos.y <= 0 && ball.velocity.vy < 0 {
        ball.velocity.vy = -ball.velocity.vy;
        outcome.ceiling = true;
    }

    //--- 5. Right wall ----------------------------------------------------
    if ball.pos.x >= area.width() - ball.size && ball.velocity.vx > 0 {
        ball.velocity.vx = -ball.velocity.vx;
        outcome.right_wall = true;
    }

    //--- 6. Left wall -----------------------------------------------------
    if ball.pos.x <= 0 && ball.velocity.vx < 0 {
        ball.velocity.vx = -ball.velocity.vx;
        outcome.left_wall = true;
    }

    outcome
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::state::{DrawableArea, Point, Score, Velocity};

    fn state_with_ball(x: i32, y: i32, vx: i32, vy: i32) -> GameState {
        let mut state = GameState::new(DrawableArea::new(1024, 602).unwrap());
        state.ball.pos = Point::new(x, y);
        state.ball.velocity = Velocity::new(vx, vy);
        state
    }

    #[test]
    fn free_flight_only_advances() {
        let mut state = state_with_ball(100, 100, 3, 5);
        let outcome = step(&mut state);

        assert!(outcome.is_quiet());
        assert_eq!(state.ball.pos, Point::new(103, 105));
        assert_eq!(state.ball.velocity, Velocity::new(3, 5));
    }

    #[test]
    fn first_tick_from_startup() {
        let mut state = GameState::new(DrawableArea::new(1024, 602).unwrap());
        step(&mut state);
        assert_eq!(state.ball.pos, Point::new(3, 5));
    }

    #[test]
    fn top_right_corner_flips_both_axes() {
        let mut state = state_with_ball(1019, 0, 3, -5);
        let outcome = step(&mut state);

        assert_eq!(state.ball.pos, Point::new(1022, -5));
        assert_eq!(state.ball.velocity, Velocity::new(-3, 5));
        assert!(outcome.ceiling && outcome.right_wall);
        assert!(!outcome.left_wall && !outcome.paddle_hit && !outcome.missed);
    }

    #[test]
    fn left_wall_flips_horizontal_velocity() {
        let mut state = state_with_ball(0, 100, -3, 5);
        let outcome = step(&mut state);

        assert!(outcome.left_wall);
        assert_eq!(state.ball.velocity.vx, 3);
        assert_eq!(state.ball.pos.x, -3);

        step(&mut state);
        step(&mut state);
        assert_eq!(state.ball.pos.x, 3);
    }

    #[test]
    fn paddle_returns_ball_and_counts_hit() {
        let mut state = state_with_ball(500, 580, 0, 3);
        state.paddle.center_x = 500;

        let outcome = step(&mut state);

        assert!(outcome.paddle_hit);
        assert!(!outcome.missed);
        assert_eq!(state.ball.velocity.vy, -3);
        assert_eq!(state.score.hits, 1);
        assert_eq!(state.ball.pos, Point::new(500, 583));
    }

    #[test]
    fn paddle_edges_are_inclusive() {
        for x in [447, 547] {
            let mut state = state_with_ball(x, 570, 3, 5);
            state.paddle.center_x = 500;
            assert!(step(&mut state).paddle_hit, "x={} should land on paddle", x + 3);
        }

        let mut state = state_with_ball(548, 570, 3, 5);
        state.paddle.center_x = 500;
        assert!(!step(&mut state).paddle_hit);
    }

    #[test]
    fn paddle_line_threshold() {
        // 602 - 20 - 10 = 572
        let mut state = state_with_ball(500, 566, 3, 5);
        state.paddle.center_x = 500;
        assert!(!step(&mut state).paddle_hit, "y=571 is above the paddle line");

        let mut state = state_with_ball(500, 567, 3, 5);
        state.paddle.center_x = 500;
        assert!(step(&mut state).paddle_hit, "y=572 touches the paddle line");
    }

    #[test]
    fn upward_ball_passes_through_paddle_zone() {
        let mut state = state_with_ball(500, 585, 3, -5);
        state.paddle.center_x = 500;

        let outcome = step(&mut state);
        assert!(!outcome.paddle_hit);
        assert_eq!(state.score.hits, 0);
    }

    #[test]
    fn hit_beats_previous_best() {
        let mut state = state_with_ball(500, 570, 3, 5);
        state.paddle.center_x = 500;
        state.score = Score { hits: 7, highest: 5 };

        step(&mut state);
        assert_eq!(state.score, Score { hits: 8, highest: 8 });
    }

    #[test]
    fn miss_resets_run_and_respawns() {
        let mut state = state_with_ball(100, 590, 3, 5);
        state.paddle.center_x = 800;
        state.score = Score { hits: 4, highest: 9 };

        let outcome = step(&mut state);

        assert!(outcome.missed);
        assert_eq!(state.ball.pos, Point::new(1, 1));
        assert_eq!(state.ball.velocity, Velocity::new(3, 5));
        assert_eq!(state.score, Score { hits: 0, highest: 9 });
    }

    #[test]
    fn paddle_hit_suppresses_miss_on_floor_line() {
        // Lands at y=595, past both the paddle line (572) and the floor (592).
        let mut state = state_with_ball(500, 590, 3, 5);
        state.paddle.center_x = 500;
        state.score = Score { hits: 2, highest: 2 };

        let outcome = step(&mut state);

        assert!(outcome.paddle_hit);
        assert!(!outcome.missed);
        assert_eq!(state.ball.pos, Point::new(503, 595));
        assert_eq!(state.score, Score { hits: 3, highest: 3 });
    }

    #[test]
    fn respawn_position_does_not_touch_left_wall() {
        // Miss teleports to (1, 1) with the velocity unchanged; the later
        // checks see x=1, y=1 and do not fire.
        let mut state = state_with_ball(10, 595, -3, 5);
        state.paddle.center_x = 900;

        let outcome = step(&mut state);

        assert!(outcome.missed);
        assert!(!outcome.left_wall && !outcome.ceiling);
        assert_eq!(state.ball.velocity, Velocity::new(-3, 5));
    }
}
