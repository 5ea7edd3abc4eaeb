//! Reflector: the fixed wheel that sends the signal back through the rotors.

use crate::alphabet::{self, Letter, ALPHABET_LEN};
use crate::catalog;
use crate::error::EnigmaError;

/// A fixed-point-free involution over the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    key: &'static str,
    mapping: [u8; ALPHABET_LEN],
}

impl Reflector {
    /// Builds reflector `key` from the catalog.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownReflectorKey`] if the catalog has no
    /// such reflector.
    pub fn new(key: &str) -> Result<Self, EnigmaError> {
        let spec = catalog::reflector(key)
            .ok_or_else(|| EnigmaError::UnknownReflectorKey(key.to_string()))?;
        Ok(Reflector {
            key: spec.key,
            mapping: alphabet::permutation(spec.mapping),
        })
    }

    /// Catalog key this reflector was built from.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Returns the partner of `letter`.
    pub fn reflect(&self, letter: Letter) -> Letter {
        Letter::wrapping(self.mapping[letter.index()] as usize)
    }
}
