use clap::Parser;
use fileinspect::Invocation;

#[derive(Debug, Parser)]
#[command(name = "fileinspect", version, about)]
pub struct Cli {
    /// Path to the file to inspect
    #[arg(allow_hyphen_values = true)]
    pub filename: Option<String>,

    /// What to do with the file: `show` prints it, `lines` counts its lines,
    /// `words` counts word occurrences in a .txt file or in the string fields
    /// of a .json person record
    #[arg(allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// Anything after the mode is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl From<Cli> for Invocation {
    fn from(cli: Cli) -> Self {
        if !cli.rest.is_empty() {
            log::debug!("ignoring extra arguments: {:?}", cli.rest);
        }
        Invocation {
            path: cli.filename,
            mode: cli.mode,
        }
    }
}
