use crate::error::{Error, Result};

pub const STANDARD_GRAVITY_MPS2: f64 = 9.80665;
pub const SAMPLE_STEP_S: f64 = 0.01;
pub const MAX_SAMPLES: usize = 1_000_000;

/// Validated launch inputs. Construct through [`LaunchParameters::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParameters {
    speed_mps: f64,
    angle_deg: f64,
}

impl LaunchParameters {
    pub fn new(speed_mps: f64, angle_deg: f64) -> Result<Self> {
        if !speed_mps.is_finite() || speed_mps <= 0.0 {
            return Err(Error::InvalidSpeed(speed_mps));
        }
        if !angle_deg.is_finite() || angle_deg <= 0.0 || angle_deg >= 90.0 {
            return Err(Error::InvalidAngle(angle_deg));
        }
        Ok(Self {
            speed_mps,
            angle_deg,
        })
    }

    pub fn speed_mps(&self) -> f64 {
        self.speed_mps
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
}

impl TrajectoryPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drag-free point mass launched from the origin.
#[derive(Clone, Copy, Debug)]
pub struct TrajectoryModel {
    speed_mps: f64,
    angle_rad: f64,
}

impl TrajectoryModel {
    pub fn new(params: LaunchParameters) -> Self {
        Self {
            speed_mps: params.speed_mps,
            angle_rad: params.angle_deg.to_radians(),
        }
    }

    pub fn velocity_components(&self) -> (f64, f64) {
        (
            self.speed_mps * self.angle_rad.cos(),
            self.speed_mps * self.angle_rad.sin(),
        )
    }

    pub fn position_x(&self, time_s: f64) -> f64 {
        self.speed_mps * time_s * self.angle_rad.cos()
    }

    pub fn position_y(&self, time_s: f64) -> f64 {
        self.speed_mps * self.angle_rad.sin() * time_s
            - (STANDARD_GRAVITY_MPS2 * time_s * time_s) / 2.0
    }

    pub fn position(&self, time_s: f64) -> TrajectoryPoint {
        TrajectoryPoint::new(self.position_x(time_s), self.position_y(time_s))
    }

    pub fn total_flight_time(&self) -> f64 {
        (2.0 * self.speed_mps * self.angle_rad.sin()) / STANDARD_GRAVITY_MPS2
    }

    pub fn max_height(&self) -> f64 {
        let (_, vy) = self.velocity_components();
        (vy * vy) / (2.0 * STANDARD_GRAVITY_MPS2)
    }

    pub fn range(&self) -> f64 {
        (self.speed_mps * self.speed_mps * (2.0 * self.angle_rad).sin()) / STANDARD_GRAVITY_MPS2
    }

    /// Samples at `k * step_s` while `y >= 0`, stopping at the first negative height.
    /// There is no interpolation to the landing point, so the last sample can sit up to
    /// one step short of it.
    pub fn sample(&self, step_s: f64) -> Result<Vec<TrajectoryPoint>> {
        let needed = (self.total_flight_time() / step_s).ceil() + 1.0;
        if !needed.is_finite() || needed > MAX_SAMPLES as f64 {
            return Err(Error::TooManySamples {
                needed,
                limit: MAX_SAMPLES,
            });
        }

        let mut points = Vec::with_capacity(needed as usize);
        for k in 0..=MAX_SAMPLES {
            let t = k as f64 * step_s;
            let y = self.position_y(t);
            if y < 0.0 {
                break;
            }
            points.push(TrajectoryPoint::new(self.position_x(t), y));
        }
        Ok(points)
    }
}

/// A sampled flight together with its closed-form summary.
#[derive(Clone, Debug)]
pub struct Trajectory {
    pub params: LaunchParameters,
    pub points: Vec<TrajectoryPoint>,
    pub flight_time_s: f64,
    pub max_height_m: f64,
    pub range_m: f64,
}

impl Trajectory {
    pub fn compute(params: LaunchParameters) -> Result<Self> {
        let model = TrajectoryModel::new(params);
        let points = model.sample(SAMPLE_STEP_S)?;
        Ok(Self {
            params,
            points,
            flight_time_s: model.total_flight_time(),
            max_height_m: model.max_height(),
            range_m: model.range(),
        })
    }
}
