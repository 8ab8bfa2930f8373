use std::{
    io::{BufRead, Write},
    path::Path,
};

use super::{InspectError, scanner::LineScanner};

/// Echoes the file at `path` to `out`, one line at a time.
///
/// Lines written before a read error stay written.
pub fn show_contents<W: Write>(path: impl AsRef<Path>, out: &mut W) -> Result<(), InspectError> {
    let scanner = LineScanner::open(path.as_ref())?;
    let lines = show_lines_in(scanner, out)?;
    log::debug!("printed {} lines of {}", lines, path.as_ref().display());
    Ok(())
}

fn show_lines_in<R: BufRead, W: Write>(
    mut scanner: LineScanner<R>,
    out: &mut W,
) -> Result<usize, InspectError> {
    let mut lines = 0;
    while let Some(line) = scanner.next_line()? {
        out.write_all(line).map_err(InspectError::write)?;
        out.write_all(b"\n").map_err(InspectError::write)?;
        lines += 1;
    }
    Ok(lines)
}
