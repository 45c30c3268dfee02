use crate::core::ballistics::LaunchParameters;
use crate::error::{Error, Result};

pub fn parse_f64(value: &str, field: &'static str) -> Result<f64> {
    let trimmed = value.trim();
    trimmed.parse::<f64>().map_err(|_| Error::NotANumber {
        field,
        value: trimmed.to_string(),
    })
}

pub fn parse_speed(value: &str) -> Result<f64> {
    let speed = parse_f64(value, "velocity")?;
    if !speed.is_finite() || speed <= 0.0 {
        return Err(Error::InvalidSpeed(speed));
    }
    Ok(speed)
}

pub fn parse_angle(value: &str) -> Result<f64> {
    let angle = parse_f64(value, "angle")?;
    if !angle.is_finite() || angle <= 0.0 || angle >= 90.0 {
        return Err(Error::InvalidAngle(angle));
    }
    Ok(angle)
}

/// The two text fields of the input form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub speed: String,
    pub angle: String,
}

impl FormFields {
    pub fn new(speed: impl Into<String>, angle: impl Into<String>) -> Self {
        Self {
            speed: speed.into(),
            angle: angle.into(),
        }
    }

    pub fn parse(&self) -> Result<LaunchParameters> {
        LaunchParameters::new(parse_speed(&self.speed)?, parse_angle(&self.angle)?)
    }

    pub fn clear(&mut self) {
        self.speed.clear();
        self.angle.clear();
    }
}
