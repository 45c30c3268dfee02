use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use ballistic_trajectory::core::ballistics::{LaunchParameters, Trajectory};
use ballistic_trajectory::core::chart::render_svg;
use ballistic_trajectory::core::export::{DEFAULT_CSV_PATH, write_csv_file};
use ballistic_trajectory::core::input::{parse_angle, parse_speed};
use ballistic_trajectory::logging;
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "ballistic_trajectory")]
#[command(about = "Drag-free projectile trajectory: summary, CSV samples and SVG plot")]
struct Cli {
    /// Initial velocity (m/s). Prompted for when omitted.
    #[arg(requires = "angle", allow_negative_numbers = true)]
    speed: Option<String>,

    /// Launch angle in degrees, strictly between 0 and 90.
    #[arg(allow_negative_numbers = true)]
    angle: Option<String>,

    /// Where to write the `X; Y` samples.
    #[arg(long, default_value = DEFAULT_CSV_PATH)]
    csv: PathBuf,

    /// Skip the CSV export.
    #[arg(long)]
    no_csv: bool,

    /// Also render the trajectory to this SVG file.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

fn read_value<T>(
    prompt: &str,
    parse: impl Fn(&str) -> ballistic_trajectory::Result<T>,
) -> anyhow::Result<T> {
    loop {
        print!("{prompt}");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .context("Could not read input")?;

        if bytes == 0 {
            bail!("Input ended unexpectedly (EOF).");
        }

        match parse(&line) {
            Ok(v) => return Ok(v),
            Err(err) => eprintln!("{err} Please try again."),
        }
    }
}

fn launch_from_cli(cli: &Cli) -> anyhow::Result<LaunchParameters> {
    let (speed, angle) = match (&cli.speed, &cli.angle) {
        (Some(speed), Some(angle)) => (parse_speed(speed)?, parse_angle(angle)?),
        _ => (
            read_value("Velocity (m/s): ", parse_speed)?,
            read_value("Angle (degrees): ", parse_angle)?,
        ),
    };
    Ok(LaunchParameters::new(speed, angle)?)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let params = launch_from_cli(&cli)?;
    let trajectory = Trajectory::compute(params)?;

    println!("\nTime of flight: {:.4} s", trajectory.flight_time_s);
    println!("Maximum height: {:.4} m", trajectory.max_height_m);
    println!("Horizontal distance: {:.4} m", trajectory.range_m);
    println!("Samples: {}", trajectory.points.len());

    if !cli.no_csv {
        // Export failures are reported but do not fail the run.
        match write_csv_file(&cli.csv, &trajectory.points) {
            Ok(()) => info!(
                path = %cli.csv.display(),
                lines = trajectory.points.len(),
                "csv written"
            ),
            Err(err) => warn!("{err}"),
        }
    }

    if let Some(svg) = &cli.svg {
        if render_svg(svg, &trajectory.points)? {
            info!(path = %svg.display(), "svg written");
        } else {
            warn!("Trajectory has fewer than two samples; nothing to plot.");
        }
    }

    Ok(())
}

/// Usage is only worth repeating when the launch values themselves were wrong.
fn is_usage_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ballistic_trajectory::Error>()
        .is_some_and(ballistic_trajectory::Error::is_input)
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        if is_usage_error(&err) {
            eprintln!("Usage: ballistic_trajectory [SPEED ANGLE] [--csv PATH] [--svg PATH]");
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::{Cli, is_usage_error, launch_from_cli, run};
    use clap::Parser;

    #[test]
    fn parses_positional_launch_and_defaults() {
        let cli = Cli::try_parse_from(["ballistic_trajectory", "20", "45"])
            .expect("arguments should parse");
        assert_eq!(cli.speed.as_deref(), Some("20"));
        assert_eq!(cli.angle.as_deref(), Some("45"));
        assert_eq!(cli.csv.to_str(), Some("file_output1.csv"));
        assert!(!cli.no_csv);
        assert!(cli.svg.is_none());
    }

    #[test]
    fn speed_without_angle_is_rejected() {
        assert!(Cli::try_parse_from(["ballistic_trajectory", "20"]).is_err());
    }

    #[test]
    fn launch_from_arguments_is_validated() {
        let cli = Cli::try_parse_from(["ballistic_trajectory", "20", "95"])
            .expect("arguments should parse");
        let err = launch_from_cli(&cli).expect_err("launch should be rejected");
        assert!(err.to_string().contains("between 0 and 90"));
        assert!(is_usage_error(&err));
    }

    #[test]
    fn negative_values_reach_validation() {
        let cli = Cli::try_parse_from(["ballistic_trajectory", "-3", "45"])
            .expect("arguments should parse");
        assert_eq!(cli.speed.as_deref(), Some("-3"));
        let err = launch_from_cli(&cli).expect_err("launch should be rejected");
        assert!(err.to_string().contains("positive"));

        let cli = Cli::try_parse_from(["ballistic_trajectory", "20", "-10"])
            .expect("arguments should parse");
        let err = launch_from_cli(&cli).expect_err("launch should be rejected");
        assert!(err.to_string().contains("between 0 and 90"));
    }

    #[test]
    fn unwritable_csv_does_not_fail_the_run() {
        let dir = tempfile::tempdir().expect("temp dir");
        let csv = dir.path().join("missing").join("out.csv");
        let args: Vec<OsString> = vec![
            "ballistic_trajectory".into(),
            "20".into(),
            "45".into(),
            "--csv".into(),
            csv.clone().into_os_string(),
        ];
        let cli = Cli::try_parse_from(args).expect("arguments should parse");

        run(cli).expect("run should succeed");
        assert!(!csv.exists());
    }

    #[test]
    fn csv_is_written_for_a_valid_launch() {
        let dir = tempfile::tempdir().expect("temp dir");
        let csv = dir.path().join("out.csv");
        let cli = Cli {
            speed: Some("20".to_string()),
            angle: Some("45".to_string()),
            csv: csv.clone(),
            no_csv: false,
            svg: None,
            verbose: false,
        };

        run(cli).expect("run should succeed");
        let contents = std::fs::read_to_string(&csv).expect("output should be readable");
        assert_eq!(contents.lines().count(), 289);
    }

    #[test]
    fn io_failures_are_not_usage_errors() {
        let dir = tempfile::tempdir().expect("temp dir");
        let svg = dir.path().join("missing").join("plot.svg");
        let cli = Cli {
            speed: Some("20".to_string()),
            angle: Some("45".to_string()),
            csv: dir.path().join("out.csv"),
            no_csv: true,
            svg: Some(svg),
            verbose: false,
        };

        let err = run(cli).expect_err("svg into a missing directory should fail");
        assert!(!is_usage_error(&err));
    }
}
