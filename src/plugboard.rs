//! Plugboard: caller-configured letter swaps at both ends of the signal path.

use std::fmt;

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::error::EnigmaError;

/// An involutive partial permutation; unplugged letters map to themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    mapping: [u8; ALPHABET_LEN],
}

impl Default for Plugboard {
    fn default() -> Self {
        Plugboard {
            mapping: std::array::from_fn(|i| i as u8),
        }
    }
}

impl Plugboard {
    /// Builds a plugboard from two-letter pairs such as `["AB", "CD"]`.
    ///
    /// Letters are accepted in either case.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidPlugPair`] if a pair is not two symbols.
    /// - [`EnigmaError::InvalidPlugLetter`] if a symbol is not a letter.
    /// - [`EnigmaError::DuplicatePlugAssignment`] if a letter is used twice,
    ///   including within one pair (`"AA"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{EnigmaError, Plugboard};
    ///
    /// assert!(Plugboard::new(&["AB", "cd"]).is_ok());
    /// assert_eq!(
    ///     Plugboard::new(&["AB", "AC"]),
    ///     Err(EnigmaError::DuplicatePlugAssignment('A'))
    /// );
    /// ```
    pub fn new<S: AsRef<str>>(pairs: &[S]) -> Result<Self, EnigmaError> {
        let mut board = Plugboard::default();
        let mut plugged = [false; ALPHABET_LEN];

        for pair in pairs {
            let pair = pair.as_ref();
            let mut symbols = pair.chars();
            let (a, b) = match (symbols.next(), symbols.next(), symbols.next()) {
                (Some(a), Some(b), None) => (plug_letter(a)?, plug_letter(b)?),
                _ => return Err(EnigmaError::InvalidPlugPair(pair.to_string())),
            };
            for letter in [a, b] {
                if std::mem::replace(&mut plugged[letter.index()], true) {
                    return Err(EnigmaError::DuplicatePlugAssignment(letter.to_char()));
                }
            }
            board.mapping[a.index()] = b.index() as u8;
            board.mapping[b.index()] = a.index() as u8;
        }

        Ok(board)
    }

    /// Returns the plugged partner of `letter`, or `letter` itself.
    pub fn swap(&self, letter: Letter) -> Letter {
        Letter::wrapping(self.mapping[letter.index()] as usize)
    }

    /// Plugged pairs in alphabetical order of their first letter.
    pub fn pairs(&self) -> Vec<(Letter, Letter)> {
        Letter::all()
            .map(|l| (l, self.swap(l)))
            .filter(|(l, partner)| l < partner)
            .collect()
    }
}

fn plug_letter(symbol: char) -> Result<Letter, EnigmaError> {
    Letter::from_char(symbol.to_ascii_uppercase()).ok_or(EnigmaError::InvalidPlugLetter(symbol))
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .pairs()
            .into_iter()
            .map(|(a, b)| format!("{}{}", a, b))
            .collect();
        write!(f, "{}", pairs.join(" "))
    }
}
