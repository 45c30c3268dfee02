use crate::core::ballistics::LaunchParameters;
use crate::core::input::{parse_angle, parse_speed};
use crate::error::Result;

pub const MAX_ENTRY_DIGITS: usize = 3;
const BACKSPACE: char = '\u{8}';

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntryStage {
    AwaitingSpeed,
    AwaitingAngle { speed_mps: f64 },
    Ready(LaunchParameters),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyResult {
    Accepted,
    Removed,
    Rejected,
}

/// What a submit did to the machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Submitted {
    Speed(f64),
    Angle(LaunchParameters),
    Launch(LaunchParameters),
}

/// Sequential keypad entry: speed first, then angle, then launch.
#[derive(Clone, Debug)]
pub struct EntryMachine {
    stage: EntryStage,
    buffer: String,
}

impl Default for EntryMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryMachine {
    pub fn new() -> Self {
        Self {
            stage: EntryStage::AwaitingSpeed,
            buffer: String::new(),
        }
    }

    pub fn stage(&self) -> EntryStage {
        self.stage
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn prompt(&self) -> &'static str {
        match self.stage {
            EntryStage::AwaitingSpeed => "Type velocity (m/s), Enter to confirm",
            EntryStage::AwaitingAngle { .. } => "Type angle (degrees), Enter to confirm",
            EntryStage::Ready(_) => "Enter to launch, Reset to start over",
        }
    }

    fn digit_count(&self) -> usize {
        self.buffer.chars().filter(char::is_ascii_digit).count()
    }

    pub fn push_char(&mut self, c: char) -> KeyResult {
        if c == BACKSPACE {
            return self.backspace();
        }
        if matches!(self.stage, EntryStage::Ready(_)) {
            return KeyResult::Rejected;
        }

        let accepted = if c.is_ascii_digit() {
            self.digit_count() < MAX_ENTRY_DIGITS
        } else {
            c == '.' && !self.buffer.contains('.')
        };
        if !accepted {
            return KeyResult::Rejected;
        }
        self.buffer.push(c);
        KeyResult::Accepted
    }

    pub fn backspace(&mut self) -> KeyResult {
        match self.buffer.pop() {
            Some(_) => KeyResult::Removed,
            None => KeyResult::Rejected,
        }
    }

    /// Advances one stage if the buffered value passes that stage's guard. A failed
    /// guard leaves both stage and buffer untouched.
    pub fn submit(&mut self) -> Result<Submitted> {
        match self.stage {
            EntryStage::AwaitingSpeed => {
                let speed_mps = parse_speed(&self.buffer)?;
                self.stage = EntryStage::AwaitingAngle { speed_mps };
                self.buffer.clear();
                Ok(Submitted::Speed(speed_mps))
            }
            EntryStage::AwaitingAngle { speed_mps } => {
                let angle = parse_angle(&self.buffer)?;
                let params = LaunchParameters::new(speed_mps, angle)?;
                self.stage = EntryStage::Ready(params);
                self.buffer.clear();
                Ok(Submitted::Angle(params))
            }
            EntryStage::Ready(params) => {
                self.reset();
                Ok(Submitted::Launch(params))
            }
        }
    }

    pub fn reset(&mut self) {
        self.stage = EntryStage::AwaitingSpeed;
        self.buffer.clear();
    }
}
