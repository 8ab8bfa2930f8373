mod error;
mod lines;
mod mode;
mod record;
mod scanner;
mod show;
mod words;

pub use error::InspectError;
pub use lines::count_lines;
pub use mode::{FileKind, Mode, UnknownMode};
pub use record::{Address, Person};
pub use scanner::LineScanner;
pub use show::show_contents;
pub use words::{WordCount, count_words_in_json, count_words_in_text};
