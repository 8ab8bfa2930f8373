use std::str::FromStr;

/// What to do with the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the file line by line.
    Show,
    /// Print the number of lines.
    Lines,
    /// Print how often each word occurs.
    Words,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode '{0}'")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show" => Ok(Mode::Show),
            "lines" => Ok(Mode::Lines),
            "words" => Ok(Mode::Words),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// File kind as told by the path suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Json,
    Other,
}

impl FileKind {
    pub fn of(path: &str) -> Self {
        if path.ends_with(".txt") {
            FileKind::Text
        } else if path.ends_with(".json") {
            FileKind::Json
        } else {
            FileKind::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("show", Mode::Show)]
    #[case("lines", Mode::Lines)]
    #[case("words", Mode::Words)]
    fn parses_known_modes(#[case] input: &str, #[case] expected: Mode) {
        let_assert!(Ok(mode) = input.parse::<Mode>());
        check!(mode == expected);
    }

    #[rstest]
    #[case("bogus")]
    #[case("Words")]
    #[case(" lines")]
    #[case("")]
    fn rejects_anything_else(#[case] input: &str) {
        let_assert!(Err(UnknownMode(mode)) = input.parse::<Mode>());
        check!(mode == input);
    }

    #[rstest]
    #[case("a.txt", FileKind::Text)]
    #[case("dir.json/notes.txt", FileKind::Text)]
    #[case("p.json", FileKind::Json)]
    #[case(".json", FileKind::Json)]
    #[case("a.TXT", FileKind::Other)]
    #[case("a.txt.bak", FileKind::Other)]
    #[case("README", FileKind::Other)]
    fn classifies_by_suffix(#[case] path: &str, #[case] expected: FileKind) {
        check!(FileKind::of(path) == expected);
    }
}
