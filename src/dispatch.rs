use std::io::{self, Write};

use crate::inspect::{
    FileKind, InspectError, Mode, count_lines, count_words_in_json, count_words_in_text,
    show_contents,
};

pub const USAGE: &str = "Usage: fileinspect <filename> <count='show, lines, words'>";

pub const INVALID_MODE: &str = "Invalid count type. Only 'words' and 'lines' are supported.";

/// The two positional inputs of a run, either of which may be missing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub path: Option<String>,
    pub mode: Option<String>,
}

impl Invocation {
    pub fn new(path: impl Into<String>, mode: impl Into<String>) -> Self {
        Invocation {
            path: Some(path.into()),
            mode: Some(mode.into()),
        }
    }
}

/// Runs one invocation and writes its result, or the reason there is none, to `out`.
///
/// Problems with the arguments or the inspected file are reported on `out`
/// and still return `Ok`. Only a failure to write to `out` is returned.
pub fn dispatch<W: Write>(invocation: &Invocation, out: &mut W) -> io::Result<()> {
    let (Some(path), Some(mode)) = (&invocation.path, &invocation.mode) else {
        return writeln!(out, "{}", USAGE);
    };

    let mode = match mode.parse::<Mode>() {
        Ok(mode) => mode,
        Err(e) => {
            log::debug!("{}", e);
            return writeln!(out, "{}", INVALID_MODE);
        }
    };

    let kind = FileKind::of(path);
    log::debug!("inspecting {} as {:?} with mode {:?}", path, kind, mode);

    let result = match (mode, kind) {
        (Mode::Words, FileKind::Text) => {
            count_words_in_text(path).map(|count| write!(out, "{}", count))
        }
        (Mode::Words, FileKind::Json) => {
            count_words_in_json(path).map(|count| write!(out, "{}", count))
        }
        (Mode::Words, FileKind::Other) => {
            return writeln!(
                out,
                "Unsupported file type for 'words': {} (expected a .txt or .json file)",
                path
            );
        }
        (Mode::Lines, _) => {
            count_lines(path).map(|count| writeln!(out, "Number of lines: {}", count))
        }
        (Mode::Show, _) => show_contents(path, out).map(Ok),
    };

    match result {
        Ok(written) => written,
        Err(InspectError::Write(e)) => Err(e),
        Err(e) => {
            log::debug!("inspection of {} failed: {:?}", path, e);
            writeln!(out, "Error reading file: {}", e)
        }
    }
}
