//=========================================================================
// Game State
//=========================================================================
//
// Plain data for one rally: drawable area, ball, paddle and score.
//
// Ownership:
//   The core thread owns the only mutable `GameState`. Everything else
//   (renderer, tests, logging) receives `Copy` snapshots of it.
//
// Coordinate space:
//   Integer logical units, origin top-left, y grows downward. The ball
//   position is the top-left corner of its bounding box; the paddle is
//   tracked by its horizontal center and sits on the bottom edge.
//
//=========================================================================

//=== Constants ===========================================================

/// Ball diameter.
pub const BALL_SIZE: i32 = 10;

/// Horizontal ball speed. Only the sign ever changes.
pub const BALL_SPEED_X: i32 = 3;

/// Vertical ball speed. Only the sign ever changes.
pub const BALL_SPEED_Y: i32 = 5;

pub const PADDLE_WIDTH: i32 = 100;
pub const PADDLE_HEIGHT: i32 = 20;

/// Distance the paddle travels per LEFT/RIGHT key press.
pub const PADDLE_KEY_STEP: i32 = 10;

/// Where the ball is put back after a miss.
pub const RESPAWN_POSITION: Point = Point { x: 1, y: 1 };

//=== Point ===============================================================

/// Integer position in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

//=== Velocity ============================================================

/// Per-tick displacement of the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Velocity {
    pub vx: i32,
    pub vy: i32,
}

impl Velocity {
    pub const fn new(vx: i32, vy: i32) -> Self {
        Self { vx, vy }
    }
}

//=== DrawableArea ========================================================

/// Interior size of the window, used as the simulation's bounding box.
///
/// Fixed once the window exists. Both dimensions are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawableArea {
    width: i32,
    height: i32,
}

impl DrawableArea {
    /// Builds an area from window dimensions.
    ///
    /// Returns `None` for a zero dimension or one that does not fit the
    /// simulation's signed coordinate space.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let width = i32::try_from(width).ok().filter(|w| *w > 0)?;
        let height = i32::try_from(height).ok().filter(|h| *h > 0)?;
        Some(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

//=== Ball ================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: Point,
    pub velocity: Velocity,
    pub size: i32,
}

impl Ball {
    fn new() -> Self {
        Self {
            pos: Point::new(0, 0),
            velocity: Velocity::new(BALL_SPEED_X, BALL_SPEED_Y),
            size: BALL_SIZE,
        }
    }
}

//=== Paddle ==============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    /// Horizontal center. Key input keeps it inside the drawable width;
    /// pointer input does not.
    pub center_x: i32,
    pub width: i32,
    pub height: i32,
    pub key_step: i32,
}

impl Paddle {
    fn new() -> Self {
        Self {
            center_x: 0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            key_step: PADDLE_KEY_STEP,
        }
    }

    /// Leftmost x covered by the paddle (integer half-width).
    ///
    /// Saturates at `i32::MIN` for a pointer-placed center far off-screen.
    pub fn left(&self) -> i32 {
        self.center_x.saturating_sub(self.width / 2)
    }

    /// Rightmost x covered by the paddle (inclusive). Saturates at `i32::MAX`.
    pub fn right(&self) -> i32 {
        self.center_x.saturating_add(self.width / 2)
    }

    /// Top edge of the paddle inside the given area.
    pub fn top(&self, area: DrawableArea) -> i32 {
        area.height() - self.height
    }
}

//=== Score ===============================================================

/// Current run of consecutive returns and the best run this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub hits: u32,
    pub highest: u32,
}

impl Score {
    /// Counts one paddle return and raises the best run if it was beaten.
    pub fn record_hit(&mut self) {
        self.hits += 1;
        self.highest = self.highest.max(self.hits);
    }

    /// Ends the current run. The best run is kept.
    pub fn reset_run(&mut self) {
        self.hits = 0;
    }
}

//=== GameState ===========================================================

/// Complete simulation state.
///
/// Cheap to copy; snapshots of it are what the renderer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub area: DrawableArea,
    pub ball: Ball,
    pub paddle: Paddle,
    pub score: Score,
}

impl GameState {
    /// Initial state: ball at the origin moving down-right, paddle centered
    /// on x = 0, empty score.
    pub fn new(area: DrawableArea) -> Self {
        Self {
            area,
            ball: Ball::new(),
            paddle: Paddle::new(),
            score: Score::default(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
