//! The 26-letter alphabet every machine component operates on.
//!
//! [`Letter`] is the single currency of the signal path: rotors, reflector
//! and plugboard all map `Letter -> Letter`. Conversion from text happens
//! once, at the edge, through [`parse_letters`].

use std::fmt;

use crate::error::EnigmaError;

/// Number of letters (and contacts on every wheel).
pub const ALPHABET_LEN: usize = 26;

/// A validated uppercase letter `A`..=`Z`, stored as its index 0..=25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// The letter `A` (index 0).
    pub const A: Letter = Letter(0);

    /// Returns the letter at `index`, or `None` if `index > 25`.
    pub fn from_index(index: usize) -> Option<Letter> {
        (index < ALPHABET_LEN).then_some(Letter(index as u8))
    }

    /// Returns the letter at `index` reduced modulo 26.
    pub(crate) fn wrapping(index: usize) -> Letter {
        Letter((index % ALPHABET_LEN) as u8)
    }

    /// Converts an uppercase ASCII letter. Anything else yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Letter;
    ///
    /// assert_eq!(Letter::from_char('C').map(Letter::index), Some(2));
    /// assert!(Letter::from_char('c').is_none());
    /// assert!(Letter::from_char('1').is_none());
    /// ```
    pub fn from_char(c: char) -> Option<Letter> {
        c.is_ascii_uppercase().then(|| Letter(c as u8 - b'A'))
    }

    /// Zero-based position in the alphabet.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Uppercase character for this letter.
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Iterates `A` through `Z`.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Converts a message into letters, rejecting it whole if any symbol is
/// outside `A`..=`Z`.
///
/// # Errors
/// Returns [`EnigmaError::InvalidInputCharacter`] for the first offending
/// symbol, with its character position.
pub fn parse_letters(message: &str) -> Result<Vec<Letter>, EnigmaError> {
    message
        .chars()
        .enumerate()
        .map(|(position, character)| {
            Letter::from_char(character).ok_or(EnigmaError::InvalidInputCharacter {
                position,
                character,
            })
        })
        .collect()
}

/// Renders letters back into a `String`.
pub fn letters_to_string(letters: &[Letter]) -> String {
    letters.iter().map(|l| l.to_char()).collect()
}

/// Uppercases ASCII letters in `text` and removes all whitespace.
///
/// Other symbols (digits, punctuation, non-ASCII letters such as `ß`) are
/// kept unchanged so the engine can reject them instead of enciphering a
/// silently altered message.
///
/// # Examples
///
/// ```
/// use enigma::alphabet::normalize;
///
/// assert_eq!(normalize("hello world\n"), "HELLOWORLD");
/// assert_eq!(normalize("a-b"), "A-B");
/// assert_eq!(normalize("straße"), "STRAßE");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Parses a 26-letter permutation table into contact indices.
///
/// Only used on the static catalog tables, which are checked by tests.
pub(crate) fn permutation(table: &str) -> [u8; ALPHABET_LEN] {
    let mut out = [0u8; ALPHABET_LEN];
    for (slot, byte) in out.iter_mut().zip(table.bytes()) {
        *slot = byte - b'A';
    }
    out
}

/// Returns the inverse of a permutation table.
pub(crate) fn invert(table: &[u8; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut out = [0u8; ALPHABET_LEN];
    for (input, &output) in table.iter().enumerate() {
        out[output as usize] = input as u8;
    }
    out
}
