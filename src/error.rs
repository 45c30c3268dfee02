use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid {field}: '{value}'. Expected a number.")]
    NotANumber { field: &'static str, value: String },

    #[error("Velocity must be a positive, finite number (got {0}).")]
    InvalidSpeed(f64),

    #[error("Angle must be strictly between 0 and 90 degrees (got {0}).")]
    InvalidAngle(f64),

    #[error("Trajectory would need {needed} samples, more than the limit of {limit}.")]
    TooManySamples { needed: f64, limit: usize },

    #[error("Could not write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Chart rendering failed: {0}")]
    Chart(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by what the user typed, as opposed to I/O.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Self::NotANumber { .. }
                | Self::InvalidSpeed(_)
                | Self::InvalidAngle(_)
                | Self::TooManySamples { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
