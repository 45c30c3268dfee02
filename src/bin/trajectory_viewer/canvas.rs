use std::convert::Infallible;

use ballistic_trajectory::core::surface::{FALLBACK_BACKGROUND, Rgba, Surface};
use ballistic_trajectory::core::window::{CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX, ScreenPoint};
use macroquad::prelude::*;

use crate::constants::{CANVAS_BORDER, CANVAS_X, CANVAS_Y};

fn to_color(color: Rgba) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// The trajectory canvas, drawn at `origin` inside the macroquad window.
pub(crate) struct CanvasSurface<'a> {
    origin: Vec2,
    size: Vec2,
    background: Option<&'a Texture2D>,
}

impl<'a> CanvasSurface<'a> {
    pub(crate) fn new(origin: Vec2, size: Vec2, background: Option<&'a Texture2D>) -> Self {
        Self {
            origin,
            size,
            background,
        }
    }

    /// The fixed-size canvas laid out next to the control panel.
    pub(crate) fn trajectory_canvas(background: Option<&'a Texture2D>) -> Self {
        Self::new(
            vec2(CANVAS_X, CANVAS_Y),
            vec2(CANVAS_WIDTH_PX, CANVAS_HEIGHT_PX),
            background,
        )
    }

    pub(crate) fn draw_border(&self) {
        draw_rectangle_lines(
            self.origin.x,
            self.origin.y,
            self.size.x,
            self.size.y,
            2.0,
            CANVAS_BORDER,
        );
    }
}

impl Surface for CanvasSurface<'_> {
    type Error = Infallible;

    fn size(&self) -> (f32, f32) {
        (self.size.x, self.size.y)
    }

    fn draw_background(&mut self) -> Result<(), Infallible> {
        match self.background {
            Some(texture) => draw_texture_ex(
                texture,
                self.origin.x,
                self.origin.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(self.size),
                    ..Default::default()
                },
            ),
            None => draw_rectangle(
                self.origin.x,
                self.origin.y,
                self.size.x,
                self.size.y,
                to_color(FALLBACK_BACKGROUND),
            ),
        }
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: ScreenPoint,
        to: ScreenPoint,
        thickness: f32,
        color: Rgba,
    ) -> Result<(), Infallible> {
        draw_line(
            self.origin.x + from.x,
            self.origin.y + from.y,
            self.origin.x + to.x,
            self.origin.y + to.y,
            thickness,
            to_color(color),
        );
        Ok(())
    }
}
