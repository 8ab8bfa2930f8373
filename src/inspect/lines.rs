use std::{io::BufRead, path::Path};

use super::{InspectError, scanner::LineScanner};

/// Counts the lines of the file at `path`.
pub fn count_lines(path: impl AsRef<Path>) -> Result<usize, InspectError> {
    let scanner = LineScanner::open(path.as_ref())?;
    let count = count_lines_in(scanner)?;
    log::debug!("counted {} lines in {}", count, path.as_ref().display());
    Ok(count)
}

pub(super) fn count_lines_in<R: BufRead>(
    mut scanner: LineScanner<R>,
) -> Result<usize, InspectError> {
    let mut count = 0;
    while scanner.next_line()?.is_some() {
        count += 1;
    }
    Ok(count)
}
