//! Error types for the Enigma engine.

use thiserror::Error;

/// Errors produced while building or driving an [`Enigma`](crate::Enigma).
///
/// Every variant is fatal to the call that produced it. Construction errors
/// are returned before any engine exists, so a caller never holds a
/// half-configured machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// The rotor catalog has no entry with this key.
    #[error("unknown rotor key \"{0}\"")]
    UnknownRotorKey(String),
    /// The reflector catalog has no entry with this key.
    #[error("unknown reflector key \"{0}\"")]
    UnknownReflectorKey(String),
    /// Ring setting outside 0..=25.
    #[error("ring setting {0} is outside 0..=25")]
    InvalidRingSetting(u8),
    /// Initial rotor offset outside 0..=25.
    #[error("rotor offset {0} is outside 0..=25")]
    InvalidOffset(u8),
    /// A letter is referenced by more than one plugboard pair.
    #[error("letter '{0}' is plugged more than once")]
    DuplicatePlugAssignment(char),
    /// A plugboard pair references a non-alphabetic symbol.
    #[error("plugboard symbol '{0}' is not a letter A-Z")]
    InvalidPlugLetter(char),
    /// A plugboard pair is not exactly two symbols long.
    #[error("plugboard pair \"{0}\" must be exactly two letters")]
    InvalidPlugPair(String),
    /// The machine was configured without any rotor.
    #[error("at least one rotor is required")]
    NoRotors,
    /// A per-rotor setting list does not match the number of rotors.
    #[error("expected {expected} {setting}, found {found}")]
    SettingsLengthMismatch {
        setting: &'static str,
        expected: usize,
        found: usize,
    },
    /// A message symbol outside A-Z reached the engine.
    #[error("invalid input character '{character}' at position {position}")]
    InvalidInputCharacter { position: usize, character: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_rotor_key() {
        let err = EnigmaError::UnknownRotorKey("IX".to_string());
        assert_eq!(format!("{}", err), "unknown rotor key \"IX\"");
    }

    #[test]
    fn test_display_invalid_ring_setting() {
        let err = EnigmaError::InvalidRingSetting(26);
        assert_eq!(format!("{}", err), "ring setting 26 is outside 0..=25");
    }

    #[test]
    fn test_display_duplicate_plug() {
        let err = EnigmaError::DuplicatePlugAssignment('A');
        assert_eq!(format!("{}", err), "letter 'A' is plugged more than once");
    }

    #[test]
    fn test_display_length_mismatch() {
        let err = EnigmaError::SettingsLengthMismatch {
            setting: "ring settings",
            expected: 3,
            found: 2,
        };
        assert_eq!(format!("{}", err), "expected 3 ring settings, found 2");
    }

    #[test]
    fn test_display_invalid_input() {
        let err = EnigmaError::InvalidInputCharacter {
            position: 4,
            character: '!',
        };
        assert_eq!(
            format!("{}", err),
            "invalid input character '!' at position 4"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(EnigmaError::NoRotors, EnigmaError::NoRotors);
        assert_ne!(
            EnigmaError::InvalidOffset(30),
            EnigmaError::InvalidRingSetting(30)
        );
    }
}
