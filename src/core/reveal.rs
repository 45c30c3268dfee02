use std::time::Duration;

use crate::core::ballistics::TrajectoryPoint;
use crate::core::surface::{
    AXIS_COLOR, AXIS_THICKNESS, Surface, TRAJECTORY_COLOR, TRAJECTORY_THICKNESS,
};
use crate::core::window::{ScreenPoint, ViewTransform};

pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(50);

/// Progressive rendering of a precomputed trajectory, one point per elapsed delay.
#[derive(Clone, Debug)]
pub struct RevealLoop {
    transform: ViewTransform,
    screen_points: Vec<ScreenPoint>,
    revealed: usize,
    frame_delay_s: f32,
    waited_s: f32,
}

impl RevealLoop {
    /// Fits `points` to `surface` as it is sized right now. Returns `None` when the
    /// surface is not sized yet or there are fewer than two points; callers treat that
    /// as "nothing to draw".
    pub fn new<S: Surface>(
        points: &[TrajectoryPoint],
        surface: &S,
        margin: f64,
        frame_delay: Duration,
    ) -> Option<Self> {
        let (width, height) = surface.size();
        let transform = ViewTransform::fit(points, width, height, margin)?;
        let screen_points = points.iter().map(|p| transform.to_screen(*p)).collect();
        Some(Self {
            transform,
            screen_points,
            revealed: 1,
            frame_delay_s: frame_delay.as_secs_f32(),
            waited_s: 0.0,
        })
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    pub fn total(&self) -> usize {
        self.screen_points.len()
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.screen_points.len()
    }

    pub fn visible(&self) -> &[ScreenPoint] {
        &self.screen_points[..self.revealed]
    }

    /// Feeds one frame's elapsed time. Reveals at most one point per call and returns
    /// whether it did.
    pub fn advance(&mut self, frame_dt_s: f32) -> bool {
        if self.is_complete() {
            return false;
        }
        self.waited_s += frame_dt_s.max(0.0);
        if self.waited_s < self.frame_delay_s {
            return false;
        }
        self.waited_s = (self.waited_s - self.frame_delay_s).min(self.frame_delay_s);
        self.revealed += 1;
        true
    }

    pub fn reveal_all(&mut self) {
        self.revealed = self.screen_points.len();
    }

    /// Redraws the whole frame: background, revealed path, then both axes.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.draw_background()?;
        surface.draw_polyline(self.visible(), TRAJECTORY_THICKNESS, TRAJECTORY_COLOR)?;

        let (from, to) = self.transform.x_axis();
        surface.draw_line(from, to, AXIS_THICKNESS, AXIS_COLOR)?;
        let (from, to) = self.transform.y_axis();
        surface.draw_line(from, to, AXIS_THICKNESS, AXIS_COLOR)
    }
}
