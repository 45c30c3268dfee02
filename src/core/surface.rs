use crate::core::window::ScreenPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

pub const TRAJECTORY_COLOR: Rgba = Rgba::new(0, 0, 255, 255);
pub const AXIS_COLOR: Rgba = Rgba::new(0, 0, 0, 255);
pub const FALLBACK_BACKGROUND: Rgba = Rgba::new(211, 211, 211, 255);

pub const TRAJECTORY_THICKNESS: f32 = 2.0;
pub const AXIS_THICKNESS: f32 = 1.0;

/// A fixed-size drawing area the reveal loop paints on.
pub trait Surface {
    type Error;

    /// Width and height in pixels. Zero or non-finite means not laid out yet.
    fn size(&self) -> (f32, f32);

    /// Paints the surface's own background: an image when it has one, a fill otherwise.
    fn draw_background(&mut self) -> Result<(), Self::Error>;

    fn draw_line(
        &mut self,
        from: ScreenPoint,
        to: ScreenPoint,
        thickness: f32,
        color: Rgba,
    ) -> Result<(), Self::Error>;

    fn draw_polyline(
        &mut self,
        points: &[ScreenPoint],
        thickness: f32,
        color: Rgba,
    ) -> Result<(), Self::Error> {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], thickness, color)?;
        }
        Ok(())
    }
}
