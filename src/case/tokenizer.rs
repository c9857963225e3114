use crate::case::SymbolPolicy;
use crate::error::{ConvertError, Result};
use std::mem;
use std::slice;

/// A maximal run of letters or of digits taken from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    acronym: bool,
}

impl Word {
    fn new(text: String) -> Self {
        let acronym = text.chars().all(char::is_uppercase);
        Self { text, acronym }
    }

    /// The word as it appeared in the input.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when every source character was an uppercase letter.
    pub fn is_acronym(&self) -> bool {
        self.acronym
    }

    pub fn is_numeric(&self) -> bool {
        self.text.chars().all(char::is_numeric)
    }
}

/// Words in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSequence {
    words: Vec<Word>,
}

impl WordSequence {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Source text of each word, mostly useful for display and tests.
    pub fn as_strs(&self) -> Vec<&str> {
        self.words.iter().map(Word::as_str).collect()
    }
}

impl<'a> IntoIterator for &'a WordSequence {
    type Item = &'a Word;
    type IntoIter = slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
}

fn classify(ch: char) -> Option<CharClass> {
    if ch.is_numeric() {
        Some(CharClass::Digit)
    } else if ch.is_uppercase() {
        Some(CharClass::Upper)
    } else if ch.is_alphabetic() {
        // caseless letters join lowercase runs
        Some(CharClass::Lower)
    } else {
        None
    }
}

/// Whitespace, `_` and `-`: the separators of the supported schemes.
fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || ch == '_' || ch == '-'
}

#[derive(Default)]
struct Splitter {
    words: Vec<Word>,
    current: String,
    current_len: usize,
    last: Option<CharClass>,
}

impl Splitter {
    fn feed(&mut self, ch: char) {
        match classify(ch) {
            Some(class) => self.push(ch, class),
            None => self.flush(),
        }
    }

    fn push(&mut self, ch: char, class: CharClass) {
        use CharClass::*;

        match (self.last, class) {
            (Some(Lower), Upper) => self.flush(),
            (Some(Digit), Upper | Lower) | (Some(Upper | Lower), Digit) => self.flush(),
            // "HTTPServer": the capital before a lowercase letter opens the next word
            (Some(Upper), Lower) if self.current_len >= 2 => {
                if let Some(head) = self.current.pop() {
                    self.current_len -= 1;
                    self.flush();
                    self.current.push(head);
                    self.current_len = 1;
                }
            }
            _ => {}
        }

        self.current.push(ch);
        self.current_len += 1;
        self.last = Some(class);
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            let word = Word::new(mem::take(&mut self.current));
            tracing::trace!(word = word.as_str(), acronym = word.acronym, "word");
            self.words.push(word);
        }
        self.current_len = 0;
        self.last = None;
    }

    fn finish(mut self) -> WordSequence {
        self.flush();
        WordSequence { words: self.words }
    }
}

/// Split `input` into words, treating every non-alphanumeric character as a boundary.
pub fn tokenize(input: &str) -> WordSequence {
    let mut splitter = Splitter::default();
    for ch in input.chars() {
        splitter.feed(ch);
    }
    splitter.finish()
}

/// Like [`tokenize`], but under `SymbolPolicy::Reject` any character that is
/// neither alphanumeric nor a delimiter is an error.
pub fn tokenize_with(input: &str, symbols: SymbolPolicy) -> Result<WordSequence> {
    if symbols == SymbolPolicy::Reject {
        let offending = input
            .char_indices()
            .find(|&(_, ch)| classify(ch).is_none() && !is_delimiter(ch));
        if let Some((offset, ch)) = offending {
            return Err(ConvertError::UnsupportedCharacter { ch, offset });
        }
    }

    Ok(tokenize(input))
}
