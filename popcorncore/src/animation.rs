//! Popcorn animation cycle
//!
//! Four popcorn pieces wait parked below the visible area. A launch gives
//! each piece a fresh set of random motion parameters and the cycle then
//! advances in fixed ticks: every tick lifts each piece by a decaying
//! vertical step while drifting and spinning it in its chosen direction.
//! When the elapsed counter runs out, all pieces are parked again and the
//! cycle waits for the next launch.

use egui::Pos2;
use rand::Rng;

use crate::geometry::ScreenGeometry;

/// Number of popcorn pieces, fixed for the process lifetime.
pub const PIECE_COUNT: usize = 4;

/// Horizontal keep-out margin at both screen edges for launch positions.
pub const EDGE_MARGIN: f32 = 80.0;

/// How far below the bottom of the window parked pieces sit.
pub const OFFSCREEN_OFFSET: f32 = 80.0;

/// Elapsed counter value at the start of a cycle.
pub const COUNTER_START: u32 = 1;

/// Counter increment per motion tick.
pub const COUNTER_STEP: u32 = 10;

/// The cycle ends on the first tick at or past this counter value.
pub const COUNTER_LIMIT: u32 = 1000;

/// Rotation applied on a piece's very first tick, in degrees.
pub const INITIAL_SPIN_DEGREES: f32 = 6.0;

/// Horizontal step per tick is drawn uniformly from this range (pixels).
/// The same value doubles as the per-tick rotation delta in degrees.
pub const DRIFT_RANGE: std::ops::Range<f32> = 7.0..15.0;

/// Vertical magnitude factor is drawn uniformly from this range.
pub const LIFT_RANGE: std::ops::Range<f32> = 2.0..3.5;

/// Vertical step for one tick: `lift × (10 − counter/47)`.
///
/// Positive is upward. The step decays as the counter grows, crossing
/// zero at counter 470 and turning negative for the rest of the cycle,
/// so pieces arc up and then fall back down.
pub fn vertical_step(lift: f32, counter: u32) -> f32 {
    lift * (10.0 - counter as f32 / 47.0)
}

/// Which way a piece drifts (and spins) for the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_range(0..2) == 1 {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    /// +1 for rightward/clockwise, −1 for leftward/counter-clockwise.
    pub fn signum(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Per-piece motion parameters, regenerated at every launch.
#[derive(Debug, Clone, Copy)]
pub struct MotionParams {
    pub direction: Direction,
    /// Horizontal pixels per tick; also degrees of spin per tick.
    pub drift: f32,
    /// Vertical magnitude factor, see [`vertical_step`].
    pub lift: f32,
}

impl MotionParams {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            direction: Direction::random(rng),
            lift: rng.gen_range(LIFT_RANGE),
            drift: rng.gen_range(DRIFT_RANGE),
        }
    }
}

/// One popcorn piece: a drawable position plus its current motion.
#[derive(Debug, Clone)]
pub struct Piece {
    /// Top-left corner of the drawn sprite, window-relative pixels.
    pub pos: Pos2,
    /// Accumulated rotation in degrees. `None` until the first tick ever;
    /// it is not reset between cycles.
    pub rotation: Option<f32>,
    motion: MotionParams,
}

impl Piece {
    fn parked(floor: f32) -> Self {
        Self {
            pos: Pos2::new(0.0, floor),
            rotation: None,
            motion: MotionParams {
                direction: Direction::Left,
                drift: 0.0,
                lift: 0.0,
            },
        }
    }

    /// Give the piece a fresh horizontal position and motion for a new
    /// cycle. The vertical position is left where parking put it.
    fn launch(&mut self, rng: &mut impl Rng, x_range: std::ops::Range<f32>) {
        self.pos.x = rng.gen_range(x_range);
        self.motion = MotionParams::random(rng);
    }

    /// Advance the piece by one motion tick at the given counter value.
    fn advance(&mut self, counter: u32) {
        self.pos.y -= vertical_step(self.motion.lift, counter);

        let sign = self.motion.direction.signum();
        self.pos.x += sign * self.motion.drift;

        self.rotation = Some(match self.rotation {
            None => INITIAL_SPIN_DEGREES,
            Some(angle) => angle + sign * self.motion.drift,
        });
    }

    /// Drop the piece back below the visible area. Horizontal position and
    /// rotation keep their values until the next launch.
    fn park(&mut self, floor: f32) {
        self.pos.y = floor;
    }
}

/// Outcome of a single motion tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Pieces moved; the cycle continues.
    Advanced,
    /// The counter ran out: pieces were parked and the cycle is over.
    Finished,
}

/// Which of the two countdowns is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Parked off-screen, waiting for the next launch.
    Waiting,
    /// A cycle is in flight; motion ticks apply.
    Animating,
}

/// The animation controller: four pieces, an elapsed counter, and the
/// Waiting/Animating phase.
#[derive(Debug)]
pub struct Popper {
    pieces: [Piece; PIECE_COUNT],
    elapsed: u32,
    phase: Phase,
    geometry: ScreenGeometry,
}

impl Popper {
    pub fn new(geometry: ScreenGeometry) -> Self {
        let floor = geometry.min_height + OFFSCREEN_OFFSET;
        Self {
            pieces: std::array::from_fn(|_| Piece::parked(floor)),
            elapsed: COUNTER_START,
            phase: Phase::Waiting,
            geometry,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Start a new cycle: randomize every piece and enter `Animating`.
    pub fn launch(&mut self, rng: &mut impl Rng) {
        let lo = EDGE_MARGIN;
        // Narrow layouts: keep the spawn range non-empty.
        let hi = (self.geometry.total_width - EDGE_MARGIN).max(lo + 1.0);
        for piece in &mut self.pieces {
            piece.launch(rng, lo..hi);
        }
        self.phase = Phase::Animating;
    }

    /// Advance one motion tick: move every piece and bump the counter, or
    /// (once the counter has run out) park the pieces, reset the counter
    /// and return to `Waiting`. No-op outside an active cycle.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase == Phase::Waiting {
            return TickOutcome::Finished;
        }

        if self.elapsed < COUNTER_LIMIT {
            for piece in &mut self.pieces {
                piece.advance(self.elapsed);
            }
            self.elapsed += COUNTER_STEP;
            TickOutcome::Advanced
        } else {
            let floor = self.geometry.min_height + OFFSCREEN_OFFSET;
            for piece in &mut self.pieces {
                piece.park(floor);
            }
            self.elapsed = COUNTER_START;
            self.phase = Phase::Waiting;
            TickOutcome::Finished
        }
    }
}
