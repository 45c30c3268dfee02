use std::time::Duration;

use ballistic_trajectory::core::ballistics::Trajectory;
use ballistic_trajectory::core::export::{mirror_entry_buffer, write_csv_file};
use ballistic_trajectory::core::input::FormFields;
use ballistic_trajectory::core::reveal::RevealLoop;
use ballistic_trajectory::core::session::{Command, Outcome, Session};
use ballistic_trajectory::core::window::CANVAS_MARGIN_PX;
use macroquad::prelude::Texture2D;
use tracing::{debug, info, warn};

use crate::canvas::CanvasSurface;
use crate::settings::ViewerSettings;

pub(crate) struct ViewerRuntime {
    pub(crate) settings: ViewerSettings,
    pub(crate) session: Session,
    pub(crate) reveal: Option<RevealLoop>,
    pub(crate) background: Option<Texture2D>,
}

impl ViewerRuntime {
    pub(crate) fn new(settings: ViewerSettings, background: Option<Texture2D>) -> Self {
        let form = FormFields::new(settings.speed.clone(), settings.angle.clone());
        Self {
            settings,
            session: Session::new(form),
            reveal: None,
            background,
        }
    }

    /// Applies the frame's commands in order. Returns `false` once the viewer should close.
    pub(crate) fn dispatch(&mut self, commands: Vec<Command>) -> bool {
        for command in commands {
            match self.session.apply(command) {
                Outcome::None => {}
                Outcome::EntryChanged => self.mirror_entry(),
                Outcome::Launch(trajectory) => self.launch(trajectory),
                Outcome::Exit => return false,
            }
        }
        true
    }

    fn launch(&mut self, trajectory: Trajectory) {
        let canvas = CanvasSurface::trajectory_canvas(self.background.as_ref());
        self.reveal = RevealLoop::new(
            &trajectory.points,
            &canvas,
            CANVAS_MARGIN_PX,
            Duration::from_millis(self.settings.frame_delay_ms),
        );
        if self.reveal.is_none() {
            warn!(samples = trajectory.points.len(), "trajectory too short to draw");
            self.session.status_line = format!(
                "Only {} sample(s) above ground; nothing to draw",
                trajectory.points.len()
            );
        }

        let path = &self.settings.csv_path;
        match write_csv_file(path, &trajectory.points) {
            Ok(()) => info!(
                path = %path.display(),
                lines = trajectory.points.len(),
                "csv written"
            ),
            Err(err) => warn!("{err}"),
        }
    }

    fn mirror_entry(&self) {
        let Some(path) = &self.settings.keystroke_file else {
            return;
        };
        match mirror_entry_buffer(path, self.session.entry.buffer()) {
            Ok(()) => debug!(buffer = self.session.entry.buffer(), "keypad buffer saved"),
            Err(err) => warn!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::Path;

    use clap::Parser;

    use super::*;

    fn runtime_writing_into(dir: &Path) -> ViewerRuntime {
        let args: Vec<OsString> = vec![
            "trajectory_viewer".into(),
            "--speed".into(),
            "20".into(),
            "--angle".into(),
            "45".into(),
            "--csv-path".into(),
            dir.join("out.csv").into_os_string(),
            "--keystroke-file".into(),
            dir.join("in.txt").into_os_string(),
        ];
        let settings = ViewerSettings::try_parse_from(args).expect("arguments should parse");
        ViewerRuntime::new(settings, None)
    }

    #[test]
    fn launch_starts_reveal_and_writes_csv() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut state = runtime_writing_into(dir.path());

        assert!(state.dispatch(vec![Command::ShowTrajectory]));

        let reveal = state.reveal.as_ref().expect("reveal should start");
        assert_eq!(reveal.total(), 289);
        assert_eq!(reveal.transform().surface_width, 600.0);
        let csv = std::fs::read_to_string(dir.path().join("out.csv"))
            .expect("output should be readable");
        assert_eq!(csv.lines().count(), 289);
    }

    #[test]
    fn unwritable_csv_does_not_stop_the_launch() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing");
        let mut state = runtime_writing_into(&missing);

        assert!(state.dispatch(vec![Command::ShowTrajectory]));

        assert!(state.reveal.is_some());
        assert!(state.session.status_line.contains("range 40.79 m"));
        assert!(!missing.join("out.csv").exists());
    }

    #[test]
    fn unwritable_keystroke_file_does_not_stop_entry() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing");
        let mut state = runtime_writing_into(&missing);

        assert!(state.dispatch(vec![Command::ToggleKeypad, Command::KeypadChar('5')]));

        assert_eq!(state.session.entry.buffer(), "5");
        assert!(!missing.join("in.txt").exists());
    }

    #[test]
    fn keypad_buffer_is_mirrored_after_each_key() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut state = runtime_writing_into(dir.path());

        state.dispatch(vec![
            Command::ToggleKeypad,
            Command::KeypadChar('1'),
            Command::KeypadChar('2'),
            Command::KeypadBackspace,
        ]);

        let mirrored = std::fs::read_to_string(dir.path().join("in.txt"))
            .expect("output should be readable");
        assert_eq!(mirrored, "1");
    }

    #[test]
    fn exit_stops_dispatch() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut state = runtime_writing_into(dir.path());
        assert!(!state.dispatch(vec![Command::Exit, Command::ShowTrajectory]));
        assert!(state.reveal.is_none());
    }
}
