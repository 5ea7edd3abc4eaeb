//! Enigma: the cipher engine.
//!
//! Owns an ordered bank of rotors, one reflector and one plugboard, and
//! drives the per-letter signal path:
//!
//! ```text
//! step rotors → plugboard → rotor 0 … rotor n-1 → reflector
//!             → rotor n-1 … rotor 0 → plugboard
//! ```
//!
//! The same configuration both enciphers and deciphers.

use std::fmt;

use tracing::{debug, trace};

use crate::alphabet::{self, Letter};
use crate::config::MachineConfig;
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::stepping;

/// A configured rotor cipher machine.
///
/// Rotor index 0 is the entry (fast, rightmost) rotor. Any number of rotors
/// from one upwards is supported; three is the historical configuration.
///
/// The engine is plain owned data: it is `Send` and `Sync`, and every call
/// that advances the rotors takes `&mut self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enigma {
    rotors: Vec<Rotor>,
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Enigma {
    /// Builds a machine from catalog keys and settings.
    ///
    /// # Parameters
    /// - `rotors`: Rotor catalog keys, entry rotor first.
    /// - `rings`: Ring setting per rotor, 0..=25.
    /// - `plugs`: Plugboard pairs such as `"AB"`.
    /// - `reflector`: Reflector catalog key.
    /// - `offsets`: Starting offset per rotor, 0..=25; `None` starts all at 0.
    ///
    /// # Errors
    /// - [`EnigmaError::NoRotors`] if `rotors` is empty.
    /// - [`EnigmaError::SettingsLengthMismatch`] if `rings` or `offsets`
    ///   does not have one entry per rotor.
    /// - Any rotor, reflector or plugboard construction error.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new(&["III", "II", "I"], &[0, 0, 0], &["AB"], "B", None).unwrap();
    /// let cipher = machine.codec("HELLO").unwrap();
    /// assert_eq!(cipher.len(), 5);
    /// ```
    ///
    /// ```
    /// use enigma::{Enigma, EnigmaError};
    ///
    /// let result = Enigma::new(&["IX", "II", "I"], &[0, 0, 0], &[] as &[&str], "B", None);
    /// assert_eq!(result, Err(EnigmaError::UnknownRotorKey("IX".to_string())));
    /// ```
    pub fn new<R, P>(
        rotors: &[R],
        rings: &[u8],
        plugs: &[P],
        reflector: &str,
        offsets: Option<&[u8]>,
    ) -> Result<Self, EnigmaError>
    where
        R: AsRef<str>,
        P: AsRef<str>,
    {
        if rotors.is_empty() {
            return Err(EnigmaError::NoRotors);
        }
        check_len("ring settings", rotors.len(), rings.len())?;
        if let Some(offsets) = offsets {
            check_len("offsets", rotors.len(), offsets.len())?;
        }

        let bank = rotors
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let offset = offsets.map_or(0, |o| o[i]);
                Rotor::new(key.as_ref(), rings[i], offset)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let reflector = Reflector::new(reflector)?;
        let plugboard = Plugboard::new(plugs)?;

        let machine = Enigma {
            rotors: bank,
            reflector,
            plugboard,
        };
        debug!(
            rotors = ?machine.rotors.iter().map(Rotor::key).collect::<Vec<_>>(),
            reflector = machine.reflector.key(),
            plugs = machine.plugboard.pairs().len(),
            windows = %machine.windows(),
            "enigma configured"
        );
        Ok(machine)
    }

    /// Builds a machine from a [`MachineConfig`].
    ///
    /// Empty `rings` are taken as zero for every rotor.
    ///
    /// # Errors
    /// Same as [`new`](Self::new).
    pub fn from_config(config: &MachineConfig) -> Result<Self, EnigmaError> {
        let zeros;
        let rings = if config.rings.is_empty() {
            zeros = vec![0; config.rotors.len()];
            &zeros
        } else {
            &config.rings
        };
        Self::new(
            &config.rotors,
            rings,
            &config.plugs,
            &config.reflector,
            config.offsets.as_deref(),
        )
    }

    /// Enciphers (or deciphers) a message of uppercase letters `A`-`Z`.
    ///
    /// The whole message is validated before any rotor moves, so a rejected
    /// message leaves the machine state untouched. Use
    /// [`alphabet::normalize`](crate::alphabet::normalize) to prepare free text.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidInputCharacter`] for the first symbol
    /// outside `A`-`Z`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new(&["III", "II", "I"], &[0, 0, 0], &[] as &[&str], "B", None).unwrap();
    /// assert_eq!(machine.codec("AAAAA").unwrap(), "BDZGO");
    ///
    /// machine.reset();
    /// assert_eq!(machine.codec("BDZGO").unwrap(), "AAAAA");
    /// ```
    pub fn codec(&mut self, message: &str) -> Result<String, EnigmaError> {
        let letters = alphabet::parse_letters(message)?;
        let output = self.codec_letters(&letters);
        Ok(alphabet::letters_to_string(&output))
    }

    /// Enciphers a sequence of letters, one key press each.
    pub fn codec_letters(&mut self, letters: &[Letter]) -> Vec<Letter> {
        letters.iter().map(|&l| self.codec_letter(l)).collect()
    }

    /// Presses a single key: steps the rotors, then runs the signal path.
    pub fn codec_letter(&mut self, letter: Letter) -> Letter {
        stepping::advance(&mut self.rotors);
        trace!(windows = %self.windows(), "rotors stepped");

        let mut signal = self.plugboard.swap(letter);
        for rotor in &self.rotors {
            signal = rotor.map_forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.map_backward(signal);
        }
        self.plugboard.swap(signal)
    }

    /// Returns every rotor to its initial offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new(&["I", "II", "III"], &[0, 0, 0], &["QW"], "C", Some(&[3, 2, 1])).unwrap();
    /// let first = machine.codec("SAMEMESSAGE").unwrap();
    /// machine.reset();
    /// assert_eq!(machine.codec("SAMEMESSAGE").unwrap(), first);
    /// ```
    pub fn reset(&mut self) {
        for rotor in &mut self.rotors {
            rotor.reset();
        }
        debug!(windows = %self.windows(), "enigma reset");
    }

    /// Current offsets, entry rotor first.
    pub fn offsets(&self) -> Vec<u8> {
        self.rotors.iter().map(Rotor::offset).collect()
    }

    /// Window letters read slow-to-fast, as an operator sees them.
    pub fn windows(&self) -> String {
        self.rotors
            .iter()
            .rev()
            .map(|r| r.window().to_char())
            .collect()
    }

    /// The rotor bank, entry rotor first.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// The reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }
}

fn check_len(setting: &'static str, expected: usize, found: usize) -> Result<(), EnigmaError> {
    if expected != found {
        return Err(EnigmaError::SettingsLengthMismatch {
            setting,
            expected,
            found,
        });
    }
    Ok(())
}

impl fmt::Display for Enigma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.rotors.iter().rev().map(Rotor::key).collect();
        let rings: String = self
            .rotors
            .iter()
            .rev()
            .map(|r| Letter::wrapping(r.ring_setting() as usize).to_char())
            .collect();
        writeln!(f, "Rotors: {}", keys.join(" "))?;
        writeln!(f, "Rings: {}", rings)?;
        writeln!(f, "Windows: {}", self.windows())?;
        writeln!(f, "Reflector: {}", self.reflector.key())?;
        write!(f, "Plugboard: {}", self.plugboard)
    }
}
