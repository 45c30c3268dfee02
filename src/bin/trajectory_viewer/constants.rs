use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 980;
pub const INITIAL_WINDOW_HEIGHT: i32 = 540;
pub const MSAA_SAMPLES: i32 = 4;
pub const DEFAULT_BACKGROUND_PATH: &str = "assets/background.png";

pub const PANEL_X: f32 = 18.0;
pub const PANEL_Y: f32 = 60.0;
pub const PANEL_W: f32 = 320.0;
pub const PANEL_H: f32 = 280.0;

pub const CANVAS_X: f32 = 360.0;
pub const CANVAS_Y: f32 = 60.0;

pub const TITLE_Y: f32 = 38.0;
pub const STATUS_Y: f32 = 500.0;

pub const WINDOW_BG: Color = Color::new(0.95, 0.96, 0.97, 1.0);
pub const CANVAS_BORDER: Color = Color::new(0.45, 0.48, 0.52, 1.0);
