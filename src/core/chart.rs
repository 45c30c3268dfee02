use std::path::Path;
use std::time::Duration;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::ballistics::TrajectoryPoint;
use crate::core::reveal::RevealLoop;
use crate::core::surface::{FALLBACK_BACKGROUND, Rgba, Surface};
use crate::core::window::{CANVAS_HEIGHT_PX, CANVAS_MARGIN_PX, CANVAS_WIDTH_PX, ScreenPoint};
use crate::error::{Error, Result};

fn plotters_color(color: Rgba) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, f64::from(color.a) / 255.0)
}

fn backend_coord(p: ScreenPoint) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

fn stroke(thickness: f32) -> u32 {
    thickness.round().max(1.0) as u32
}

/// Headless surface backed by a plotters SVG drawing area.
///
/// The backing file is only opened on the first draw call, so a surface that is
/// created but never drawn on leaves the filesystem untouched.
pub struct SvgSurface<'a> {
    path: &'a Path,
    area: Option<DrawingArea<SVGBackend<'a>, Shift>>,
    size: (u32, u32),
    background: Rgba,
}

impl<'a> SvgSurface<'a> {
    pub fn create(path: &'a Path, width: u32, height: u32) -> Self {
        Self {
            path,
            area: None,
            size: (width, height),
            background: FALLBACK_BACKGROUND,
        }
    }

    fn area(&mut self) -> &DrawingArea<SVGBackend<'a>, Shift> {
        let (path, size) = (self.path, self.size);
        self.area
            .get_or_insert_with(|| SVGBackend::new(path, size).into_drawing_area())
    }

    /// Flushes the drawing to disk. A surface that was never drawn on writes nothing.
    pub fn finish(self) -> Result<()> {
        match self.area {
            Some(area) => area.present().map_err(|e| Error::Chart(e.to_string())),
            None => Ok(()),
        }
    }
}

impl Surface for SvgSurface<'_> {
    type Error = Error;

    fn size(&self) -> (f32, f32) {
        (self.size.0 as f32, self.size.1 as f32)
    }

    fn draw_background(&mut self) -> Result<()> {
        let color = plotters_color(self.background);
        self.area()
            .fill(&color)
            .map_err(|e| Error::Chart(e.to_string()))
    }

    fn draw_line(
        &mut self,
        from: ScreenPoint,
        to: ScreenPoint,
        thickness: f32,
        color: Rgba,
    ) -> Result<()> {
        self.draw_polyline(&[from, to], thickness, color)
    }

    fn draw_polyline(&mut self, points: &[ScreenPoint], thickness: f32, color: Rgba) -> Result<()> {
        if points.len() < 2 {
            return Ok(());
        }
        let path = points.iter().copied().map(backend_coord).collect::<Vec<_>>();
        self.area()
            .draw(&PathElement::new(
                path,
                plotters_color(color).stroke_width(stroke(thickness)),
            ))
            .map_err(|e| Error::Chart(e.to_string()))
    }
}

/// Draws the fully revealed trajectory to an SVG file at the standard canvas size.
/// Returns `Ok(false)` without touching the file when there is nothing to draw.
pub fn render_svg(path: &Path, points: &[TrajectoryPoint]) -> Result<bool> {
    let mut surface = SvgSurface::create(path, CANVAS_WIDTH_PX as u32, CANVAS_HEIGHT_PX as u32);
    let Some(mut reveal) = RevealLoop::new(points, &surface, CANVAS_MARGIN_PX, Duration::ZERO)
    else {
        return Ok(false);
    };
    reveal.reveal_all();

    reveal.draw(&mut surface)?;
    surface.finish()?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ballistics::{LaunchParameters, Trajectory};

    #[test]
    fn renders_full_trajectory_to_svg() {
        let params = LaunchParameters::new(20.0, 45.0).expect("valid launch");
        let trajectory = Trajectory::compute(params).expect("calculation should succeed");
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("trajectory.svg");

        assert!(render_svg(&path, &trajectory.points).expect("render should succeed"));

        let svg = std::fs::read_to_string(&path).expect("output should be readable");
        assert!(svg.contains("<svg"));
        assert!(svg.contains("polyline"));
    }

    #[test]
    fn skips_degenerate_sequences() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("empty.svg");
        let drawn = render_svg(&path, &[TrajectoryPoint::new(0.0, 0.0)])
            .expect("render should succeed");
        assert!(!drawn);
        assert!(!path.exists());
    }

    #[test]
    fn undrawn_surface_writes_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("untouched.svg");
        let surface = SvgSurface::create(&path, 320, 240);
        assert_eq!(surface.size(), (320.0, 240.0));
        surface.finish().expect("finish should succeed");
        assert!(!path.exists());
    }

    #[test]
    fn reveal_fits_the_svg_surface_size() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("small.svg");
        let points = [TrajectoryPoint::new(0.0, 0.0), TrajectoryPoint::new(10.0, 10.0)];
        let mut surface = SvgSurface::create(&path, 200, 200);

        let mut reveal = RevealLoop::new(&points, &surface, 20.0, Duration::ZERO)
            .expect("reveal loop");
        assert_eq!(reveal.transform().surface_width, 200.0);
        reveal.reveal_all();
        reveal.draw(&mut surface).expect("draw should succeed");
        surface.finish().expect("finish should succeed");

        let svg = std::fs::read_to_string(&path).expect("output should be readable");
        assert!(svg.contains("width=\"200\""));
    }
}
