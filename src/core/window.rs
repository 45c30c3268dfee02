use crate::core::ballistics::TrajectoryPoint;

pub const CANVAS_WIDTH_PX: f32 = 600.0;
pub const CANVAS_HEIGHT_PX: f32 = 400.0;
pub const CANVAS_MARGIN_PX: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl WorldBounds {
    pub fn of(points: &[TrajectoryPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for p in &points[1..] {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Uniform world-to-screen mapping. Screen y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub surface_width: f64,
    pub surface_height: f64,
}

fn usable_scale(scale: f64) -> f64 {
    if scale == 0.0 || !scale.is_finite() || scale < 0.0 {
        1.0
    } else {
        scale
    }
}

impl ViewTransform {
    /// Fits `points` into a `width` x `height` surface with `margin` on every side,
    /// centred on both axes. Returns `None` for an unsized surface or fewer than two
    /// points.
    pub fn fit(points: &[TrajectoryPoint], width: f32, height: f32, margin: f64) -> Option<Self> {
        let (width, height) = (f64::from(width), f64::from(height));
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return None;
        }
        if points.len() < 2 {
            return None;
        }
        let bounds = WorldBounds::of(points)?;

        let available_w = width - 2.0 * margin;
        let available_h = height - 2.0 * margin;
        let scale_x = if bounds.width() > 0.0 {
            available_w / bounds.width()
        } else {
            1.0
        };
        let scale_y = if bounds.height() > 0.0 {
            available_h / bounds.height()
        } else {
            1.0
        };
        let scale = usable_scale(scale_x.min(scale_y));

        let offset_x = margin - bounds.min_x * scale + (available_w - bounds.width() * scale) / 2.0;
        let offset_y =
            margin - bounds.min_y * scale + (available_h - bounds.height() * scale) / 2.0;

        Some(Self {
            scale,
            offset_x,
            offset_y,
            surface_width: width,
            surface_height: height,
        })
    }

    pub fn to_screen(&self, p: TrajectoryPoint) -> ScreenPoint {
        ScreenPoint::new(self.screen_x(p.x) as f32, self.screen_y(p.y) as f32)
    }

    pub fn screen_x(&self, world_x: f64) -> f64 {
        world_x * self.scale + self.offset_x
    }

    pub fn screen_y(&self, world_y: f64) -> f64 {
        self.surface_height - (world_y * self.scale + self.offset_y)
    }

    /// Horizontal reference line (world y = 0), spanning the whole surface.
    pub fn x_axis(&self) -> (ScreenPoint, ScreenPoint) {
        let y = self.screen_y(0.0) as f32;
        (
            ScreenPoint::new(0.0, y),
            ScreenPoint::new(self.surface_width as f32, y),
        )
    }

    /// Vertical reference line (world x = 0), spanning the whole surface.
    pub fn y_axis(&self) -> (ScreenPoint, ScreenPoint) {
        let x = self.screen_x(0.0) as f32;
        (
            ScreenPoint::new(x, 0.0),
            ScreenPoint::new(x, self.surface_height as f32),
        )
    }
}
