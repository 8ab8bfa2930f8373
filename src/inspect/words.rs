use std::{
    collections::BTreeMap,
    fmt,
    fs::File,
    io::{BufRead, BufReader, Read},
    ops::Deref,
    path::Path,
};

use serde::de::Error as _;

use super::{InspectError, record::Person, scanner::LineScanner};

/// Occurrence count per token, ordered by token.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCount(BTreeMap<String, usize>);

impl WordCount {
    pub fn new() -> Self {
        WordCount::default()
    }

    pub fn add(&mut self, word: &str) {
        *self.0.entry(word.to_owned()).or_default() += 1;
    }

    /// Number of tokens counted, duplicates included.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn get(&self, word: &str) -> usize {
        self.0.get(word).copied().unwrap_or(0)
    }
}

impl Deref for WordCount {
    type Target = BTreeMap<String, usize>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> FromIterator<&'a str> for WordCount {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut count = WordCount::new();
        for word in iter {
            count.add(word);
        }
        count
    }
}

/// One `<word>: <count>` line per entry.
impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (word, count) in &self.0 {
            writeln!(f, "{}: {}", word, count)?;
        }
        Ok(())
    }
}

/// Counts whitespace separated tokens in a plain text file.
///
/// Tokens are case sensitive and keep their punctuation. Each line is decoded
/// lossily, so every invalid UTF-8 sequence becomes U+FFFD and tokens that
/// differ only in their invalid bytes are counted as the same word.
pub fn count_words_in_text(path: impl AsRef<Path>) -> Result<WordCount, InspectError> {
    let scanner = LineScanner::open(path.as_ref())?;
    let count = count_text_words_in(scanner)?;
    log::debug!(
        "counted {} words ({} distinct) in {}",
        count.total(),
        count.len(),
        path.as_ref().display()
    );
    Ok(count)
}

/// Counts the string fields of a single [`Person`] record stored as JSON.
///
/// Every field value is one token, spaces and all.
pub fn count_words_in_json(path: impl AsRef<Path>) -> Result<WordCount, InspectError> {
    let file = File::open(path.as_ref())?;
    log::debug!("opened {}", path.as_ref().display());
    let person = decode_person(BufReader::new(file))?;
    log::trace!("decoded record: {:?}", person);
    Ok(person.words().collect())
}

fn count_text_words_in<R: BufRead>(mut scanner: LineScanner<R>) -> Result<WordCount, InspectError> {
    let mut count = WordCount::new();
    while let Some(line) = scanner.next_line()? {
        for word in String::from_utf8_lossy(line).split_whitespace() {
            count.add(word);
        }
    }
    Ok(count)
}

/// Decodes the first JSON value of the stream; anything after it is left unread.
fn decode_person<R: Read>(reader: R) -> Result<Person, InspectError> {
    let mut values = serde_json::Deserializer::from_reader(reader).into_iter::<Person>();
    match values.next() {
        Some(person) => Ok(person?),
        None => Err(serde_json::Error::custom("EOF while parsing a value").into()),
    }
}
