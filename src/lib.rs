//! Enigma rotor cipher machine engine.
//!
//! Simulates the electromechanical rotor machines: a bank of wired rotors
//! that step like an odometer (with the historical double-step of the
//! middle rotor), a reflector that sends the signal back through the bank,
//! and a plugboard that swaps letter pairs at both ends. The machine is
//! self-reciprocal: the same settings encipher and decipher.
//!
//! # Architecture
//!
//! ```text
//! Letter      (validated A-Z, the currency of every mapping)
//! Catalog     (static rotor / reflector wirings)
//!     ↓
//! Rotor       (wiring + ring setting + rotating offset + notches)
//! Reflector   (fixed involution)
//! Plugboard   (caller-configured involution)
//!     ↓
//! stepping    (which rotors advance before each key press)
//!     ↓
//! Enigma      (orchestrator — plugboard → rotors → reflector → rotors → plugboard)
//! ```
//!
//! # Examples
//!
//! Encipher and decipher with the same settings:
//!
//! ```
//! use enigma::Enigma;
//!
//! // Rotors are listed entry (rightmost) rotor first: this is I-II-III
//! // read left to right on the machine.
//! let mut machine = Enigma::new(&["III", "II", "I"], &[0, 0, 0], &["AB", "CD"], "B", None).unwrap();
//!
//! let cipher = machine.codec("ATTACKATDAWN").unwrap();
//! assert_ne!(cipher, "ATTACKATDAWN");
//!
//! machine.reset();
//! assert_eq!(machine.codec(&cipher).unwrap(), "ATTACKATDAWN");
//! ```
//!
//! Build from a JSON configuration:
//!
//! ```
//! use enigma::{Enigma, MachineConfig};
//!
//! let config: MachineConfig = serde_json::from_str(
//!     r#"{ "rotors": ["V", "IV", "II"], "rings": [11, 20, 1],
//!          "plugs": ["AV", "BS", "CG", "DL", "FU", "HZ", "IN", "KM", "OW", "RX"],
//!          "offsets": [0, 11, 1] }"#,
//! ).unwrap();
//! let mut machine = Enigma::from_config(&config).unwrap();
//! assert_eq!(machine.codec("EDPUD").unwrap(), "AUFKL");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod catalog;
pub mod config;
pub mod error;

mod machine;
mod plugboard;
mod reflector;
mod rotor;
pub(crate) mod stepping;

pub use alphabet::Letter;
pub use config::{MachineConfig, TestVector};
pub use error::EnigmaError;
pub use machine::Enigma;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
