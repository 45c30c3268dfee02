use std::path::PathBuf;

use ballistic_trajectory::core::export::DEFAULT_CSV_PATH;
use clap::Parser;

use crate::constants::DEFAULT_BACKGROUND_PATH;

#[derive(Parser, Debug, Clone)]
#[command(name = "trajectory_viewer")]
#[command(about = "Draws a drag-free projectile trajectory point by point")]
pub(crate) struct ViewerSettings {
    /// Where each launch writes its `X; Y` samples.
    #[arg(long, default_value = DEFAULT_CSV_PATH)]
    pub(crate) csv_path: PathBuf,

    /// Canvas background image. A solid fill is used if it cannot be loaded.
    #[arg(long, default_value = DEFAULT_BACKGROUND_PATH)]
    pub(crate) background: PathBuf,

    /// Pause between revealed points.
    #[arg(long, default_value_t = 50)]
    pub(crate) frame_delay_ms: u64,

    /// Mirror the keypad buffer into this file after every keystroke.
    #[arg(long)]
    pub(crate) keystroke_file: Option<PathBuf>,

    /// Prefill for the velocity field.
    #[arg(long, default_value = "")]
    pub(crate) speed: String,

    /// Prefill for the angle field.
    #[arg(long, default_value = "")]
    pub(crate) angle: String,

    #[arg(short, long)]
    pub(crate) verbose: bool,
}
