use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::ballistics::TrajectoryPoint;
use crate::error::{Error, Result};

pub const DEFAULT_CSV_PATH: &str = "file_output1.csv";

/// Writes one `X; Y` line per sample, two decimals, no header.
pub fn write_csv<W: Write>(writer: &mut W, points: &[TrajectoryPoint]) -> io::Result<()> {
    for p in points {
        writeln!(writer, "{:.2}; {:.2}", p.x, p.y)?;
    }
    Ok(())
}

pub fn write_csv_file(path: &Path, points: &[TrajectoryPoint]) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, points).map_err(|e| Error::io(path, e))?;
    writer.flush().map_err(|e| Error::io(path, e))
}

/// Replaces the file contents with the keypad buffer.
pub fn mirror_entry_buffer(path: &Path, buffer: &str) -> Result<()> {
    std::fs::write(path, buffer).map_err(|e| Error::io(path, e))
}
