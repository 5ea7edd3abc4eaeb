//! Rotor: a wired wheel with a rotating offset and carry notches.
//!
//! The wiring is held as a pair of contact tables (forward and inverse),
//! copied from the catalog at construction. Rotation never rewrites the
//! tables; the current offset and the ring setting are folded into each
//! lookup instead.

use crate::alphabet::{self, Letter, ALPHABET_LEN};
use crate::catalog;
use crate::error::EnigmaError;

/// A single cipher wheel.
///
/// The rotor's effective shift is `offset - ring_setting`. A letter entering
/// on contact `c` leaves on `wiring[c + shift] - shift`, all modulo 26.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    key: &'static str,
    forward: [u8; ALPHABET_LEN],
    backward: [u8; ALPHABET_LEN],
    /// Bit `n` set when stepping into offset `n` carries to the next rotor.
    notches: u32,
    ring_setting: u8,
    offset: u8,
    initial_offset: u8,
}

impl Rotor {
    /// Builds rotor `key` from the catalog.
    ///
    /// # Parameters
    /// - `key`: Catalog key, `"I"` through `"VIII"`.
    /// - `ring_setting`: Ring position, 0..=25.
    /// - `offset`: Starting offset, 0..=25. [`reset`](Self::reset) returns here.
    ///
    /// # Errors
    /// - [`EnigmaError::UnknownRotorKey`] if the catalog has no such rotor.
    /// - [`EnigmaError::InvalidRingSetting`] / [`EnigmaError::InvalidOffset`]
    ///   if a value is outside 0..=25.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Letter, Rotor};
    ///
    /// let rotor = Rotor::new("I", 0, 0).unwrap();
    /// let a = Letter::from_char('A').unwrap();
    /// assert_eq!(rotor.map_forward(a).to_char(), 'E');
    /// assert_eq!(rotor.map_backward(rotor.map_forward(a)), a);
    /// ```
    pub fn new(key: &str, ring_setting: u8, offset: u8) -> Result<Self, EnigmaError> {
        let spec =
            catalog::rotor(key).ok_or_else(|| EnigmaError::UnknownRotorKey(key.to_string()))?;
        if ring_setting as usize >= ALPHABET_LEN {
            return Err(EnigmaError::InvalidRingSetting(ring_setting));
        }
        if offset as usize >= ALPHABET_LEN {
            return Err(EnigmaError::InvalidOffset(offset));
        }

        let forward = alphabet::permutation(spec.wiring);
        let backward = alphabet::invert(&forward);
        // Carry happens when the window moves off the turnover letter.
        let notches = spec
            .turnovers
            .bytes()
            .map(|b| ((b - b'A') as usize + 1) % ALPHABET_LEN)
            .fold(0u32, |mask, pos| mask | (1 << pos));

        Ok(Rotor {
            key: spec.key,
            forward,
            backward,
            notches,
            ring_setting,
            offset,
            initial_offset: offset,
        })
    }

    /// Catalog key this rotor was built from.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Current rotational offset (0..=25).
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Offset restored by [`reset`](Self::reset).
    pub fn initial_offset(&self) -> u8 {
        self.initial_offset
    }

    /// Ring setting fixed at construction.
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Letter currently showing in the machine window.
    pub fn window(&self) -> Letter {
        Letter::wrapping(self.offset as usize)
    }

    /// Offsets whose arrival signals a carry, ascending.
    pub fn notch_positions(&self) -> Vec<u8> {
        (0..ALPHABET_LEN as u8)
            .filter(|&pos| self.is_notch(pos))
            .collect()
    }

    fn is_notch(&self, pos: u8) -> bool {
        self.notches & (1 << pos) != 0
    }

    /// Whether the next single step will carry into the next rotor.
    ///
    /// True while the window shows a turnover letter. The stepping pawl
    /// behind a middle rotor uses this to push the rotor along with its
    /// neighbour.
    pub fn at_turnover(&self) -> bool {
        self.is_notch((self.offset + 1) % ALPHABET_LEN as u8)
    }

    fn shift(&self) -> usize {
        (self.offset as usize + ALPHABET_LEN - self.ring_setting as usize) % ALPHABET_LEN
    }

    /// Maps a letter travelling towards the reflector.
    pub fn map_forward(&self, letter: Letter) -> Letter {
        let shift = self.shift();
        let contact = self.forward[(letter.index() + shift) % ALPHABET_LEN] as usize;
        Letter::wrapping(contact + ALPHABET_LEN - shift)
    }

    /// Maps a letter travelling back from the reflector.
    ///
    /// Exact inverse of [`map_forward`](Self::map_forward) at the same offset.
    pub fn map_backward(&self, letter: Letter) -> Letter {
        let shift = self.shift();
        let contact = self.backward[(letter.index() + shift) % ALPHABET_LEN] as usize;
        Letter::wrapping(contact + ALPHABET_LEN - shift)
    }

    /// Advances the rotor by one position.
    ///
    /// # Returns
    /// `true` if the new offset is a notch position, i.e. the next rotor
    /// should step as well.
    pub fn step(&mut self) -> bool {
        self.step_by(1)
    }

    /// Advances the rotor by `amount` positions, modulo 26.
    ///
    /// # Returns
    /// `true` if the new offset is a notch position.
    pub fn step_by(&mut self, amount: u8) -> bool {
        let next = (self.offset as usize + amount as usize) % ALPHABET_LEN;
        self.offset = next as u8;
        self.is_notch(self.offset)
    }

    /// Returns the rotor to its initial offset.
    pub fn reset(&mut self) {
        self.offset = self.initial_offset;
    }
}
