use chrono::Local;
use tracing::{debug, info, warn};

use crate::core::ballistics::{LaunchParameters, Trajectory};
use crate::core::entry::{EntryMachine, KeyResult, Submitted};
use crate::core::input::FormFields;
use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryMode {
    Form,
    Keypad,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    ShowTrajectory,
    Reset,
    Exit,
    ToggleKeypad,
    KeypadChar(char),
    KeypadBackspace,
    KeypadSubmit,
}

#[derive(Debug)]
pub enum Outcome {
    None,
    /// The buffer shown by keypad entry changed.
    EntryChanged,
    Launch(Trajectory),
    Exit,
}

pub struct Session {
    pub form: FormFields,
    pub entry: EntryMachine,
    pub mode: EntryMode,
    pub status_line: String,
}

fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

impl Session {
    pub fn new(form: FormFields) -> Self {
        Self {
            form,
            entry: EntryMachine::new(),
            mode: EntryMode::Form,
            status_line: "Enter velocity and angle, then Show Trajectory".to_string(),
        }
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        debug!(?command, "dispatch");
        match command {
            Command::ShowTrajectory => match self.form.parse() {
                Ok(params) => self.launch(params),
                Err(err) => {
                    self.report(&err);
                    Outcome::None
                }
            },
            Command::Reset => {
                self.form.clear();
                self.entry.reset();
                self.status_line = "Inputs cleared".to_string();
                Outcome::EntryChanged
            }
            Command::Exit => Outcome::Exit,
            Command::ToggleKeypad => {
                self.mode = match self.mode {
                    EntryMode::Form => EntryMode::Keypad,
                    EntryMode::Keypad => EntryMode::Form,
                };
                self.status_line = match self.mode {
                    EntryMode::Form => "Form entry".to_string(),
                    EntryMode::Keypad => self.entry.prompt().to_string(),
                };
                Outcome::None
            }
            Command::KeypadChar(c) => match self.entry.push_char(c) {
                KeyResult::Rejected => Outcome::None,
                KeyResult::Accepted | KeyResult::Removed => Outcome::EntryChanged,
            },
            Command::KeypadBackspace => match self.entry.backspace() {
                KeyResult::Rejected => Outcome::None,
                KeyResult::Accepted | KeyResult::Removed => Outcome::EntryChanged,
            },
            Command::KeypadSubmit => match self.entry.submit() {
                Ok(Submitted::Launch(params)) => self.launch(params),
                Ok(Submitted::Speed(_) | Submitted::Angle(_)) => {
                    self.status_line = self.entry.prompt().to_string();
                    Outcome::EntryChanged
                }
                Err(err) => {
                    self.report(&err);
                    Outcome::None
                }
            },
        }
    }

    fn launch(&mut self, params: LaunchParameters) -> Outcome {
        match Trajectory::compute(params) {
            Ok(trajectory) => {
                info!(
                    speed_mps = params.speed_mps(),
                    angle_deg = params.angle_deg(),
                    samples = trajectory.points.len(),
                    "trajectory computed"
                );
                self.status_line = format!(
                    "[{}] v0 {:.2} m/s at {:.2} deg | flight {:.2} s | height {:.2} m | range {:.2} m",
                    timestamp(),
                    params.speed_mps(),
                    params.angle_deg(),
                    trajectory.flight_time_s,
                    trajectory.max_height_m,
                    trajectory.range_m
                );
                Outcome::Launch(trajectory)
            }
            Err(err) => {
                self.report(&err);
                Outcome::None
            }
        }
    }

    /// Puts an error on the status line. Nothing else changes.
    pub fn report(&mut self, err: &Error) {
        warn!("{err}");
        self.status_line = format!("[{}] {err}", timestamp());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::EntryStage;

    #[test]
    fn show_trajectory_launches_valid_form() {
        let mut session = Session::new(FormFields::new("20", "45"));
        let Outcome::Launch(trajectory) = session.apply(Command::ShowTrajectory) else {
            panic!("expected a launch");
        };
        assert_eq!(trajectory.points.len(), 289);
        assert!(session.status_line.contains("range 40.79 m"));
    }

    #[test]
    fn invalid_form_reports_and_keeps_state() {
        let mut session = Session::new(FormFields::new("abc", "45"));
        assert!(matches!(session.apply(Command::ShowTrajectory), Outcome::None));
        assert!(session.status_line.contains("Invalid velocity: 'abc'"));
        assert_eq!(session.form, FormFields::new("abc", "45"));
    }

    #[test]
    fn reset_clears_form_and_keypad() {
        let mut session = Session::new(FormFields::new("20", "45"));
        session.apply(Command::KeypadChar('7'));
        session.apply(Command::Reset);
        assert_eq!(session.form, FormFields::default());
        assert_eq!(session.entry.buffer(), "");
        assert_eq!(session.entry.stage(), EntryStage::AwaitingSpeed);
    }

    #[test]
    fn keypad_sequence_launches_on_third_submit() {
        let mut session = Session::new(FormFields::default());
        session.apply(Command::ToggleKeypad);
        assert_eq!(session.mode, EntryMode::Keypad);

        for c in ['1', '5'] {
            assert!(matches!(
                session.apply(Command::KeypadChar(c)),
                Outcome::EntryChanged
            ));
        }
        assert!(matches!(
            session.apply(Command::KeypadSubmit),
            Outcome::EntryChanged
        ));
        session.apply(Command::KeypadChar('3'));
        session.apply(Command::KeypadChar('0'));
        session.apply(Command::KeypadSubmit);
        assert!(matches!(session.entry.stage(), EntryStage::Ready(_)));

        let Outcome::Launch(trajectory) = session.apply(Command::KeypadSubmit) else {
            panic!("expected a launch");
        };
        assert_eq!(trajectory.params.speed_mps(), 15.0);
        assert_eq!(trajectory.params.angle_deg(), 30.0);
        assert_eq!(session.entry.stage(), EntryStage::AwaitingSpeed);
    }

    #[test]
    fn rejected_keys_do_not_signal_change() {
        let mut session = Session::new(FormFields::default());
        assert!(matches!(
            session.apply(Command::KeypadChar('q')),
            Outcome::None
        ));
        assert!(matches!(
            session.apply(Command::KeypadBackspace),
            Outcome::None
        ));
    }

    #[test]
    fn exit_is_passed_through() {
        let mut session = Session::new(FormFields::default());
        assert!(matches!(session.apply(Command::Exit), Outcome::Exit));
    }
}
