use ballistic_trajectory::core::reveal::RevealLoop;
use ballistic_trajectory::core::surface::Surface;
use macroquad::prelude::*;
use tracing::{info, warn};

use crate::canvas::CanvasSurface;
use crate::constants::{
    CANVAS_X, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MSAA_SAMPLES, PANEL_X,
    STATUS_Y, TITLE_Y, WINDOW_BG,
};
use crate::controls::{draw_control_panel, hotkey_commands};
use crate::settings::ViewerSettings;
use crate::state::ViewerRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Ballistic Trajectory".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn draw_canvas(reveal: Option<&RevealLoop>, background: Option<&Texture2D>) {
    let mut surface = CanvasSurface::trajectory_canvas(background);
    let drawn = match reveal {
        Some(reveal) => reveal.draw(&mut surface),
        None => surface.draw_background(),
    };
    drawn.unwrap_or_else(|never| match never {});
    surface.draw_border();
}

pub(crate) async fn run(settings: ViewerSettings) {
    let background_path = settings.background.display().to_string();
    let background = match load_texture(&background_path).await {
        Ok(texture) => Some(texture),
        Err(err) => {
            warn!("Could not load '{background_path}': {err}. Falling back to a solid fill.");
            None
        }
    };
    let image_missing = background.is_none();

    let mut state = ViewerRuntime::new(settings, background);
    if image_missing {
        state.session.status_line =
            format!("Background image '{background_path}' unavailable; using a solid fill");
    }
    info!("viewer started");

    loop {
        let frame_dt = get_frame_time();

        let mut commands = hotkey_commands(state.session.mode);
        commands.extend(draw_control_panel(&mut state));
        if !state.dispatch(commands) {
            break;
        }

        if let Some(reveal) = state.reveal.as_mut() {
            reveal.advance(frame_dt);
        }

        clear_background(WINDOW_BG);
        draw_text("Trajectory Visualization", CANVAS_X, TITLE_Y, 30.0, DARKGRAY);
        draw_canvas(state.reveal.as_ref(), state.background.as_ref());
        draw_text(&state.session.status_line, PANEL_X, STATUS_Y, 20.0, DARKGRAY);

        next_frame().await;
    }

    info!("viewer closed");
}
