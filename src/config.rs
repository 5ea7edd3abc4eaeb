//! Serializable machine settings and recorded test vectors.
//!
//! A [`MachineConfig`] holds the construction parameters of an
//! [`Enigma`](crate::Enigma) exactly as a caller supplies them. Nothing is
//! validated here; [`Enigma::from_config`](crate::Enigma::from_config)
//! performs all checks.

use serde::{Deserialize, Serialize};

/// Construction parameters for a machine.
///
/// Missing fields take the defaults of a plain three-rotor Enigma I:
/// rotors I, II, III with rings and offsets at zero, reflector B and an
/// empty plugboard. Empty `rings` and absent `offsets` mean zero for every
/// rotor, so a config may change the rotor count without restating them.
///
/// # Examples
///
/// ```
/// use enigma::MachineConfig;
///
/// let config: MachineConfig =
///     serde_json::from_str(r#"{ "rotors": ["III", "II", "I"], "plugs": ["AB"] }"#).unwrap();
/// assert_eq!(config.reflector, "B");
/// assert!(config.rings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Rotor catalog keys, entry (fast) rotor first.
    pub rotors: Vec<String>,
    /// Ring settings per rotor, 0..=25. Empty means all zero.
    pub rings: Vec<u8>,
    /// Plugboard pairs such as `"AB"`.
    pub plugs: Vec<String>,
    /// Reflector catalog key.
    pub reflector: String,
    /// Starting offsets per rotor, 0..=25. `None` means all zero.
    pub offsets: Option<Vec<u8>>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            rotors: vec!["I".to_string(), "II".to_string(), "III".to_string()],
            rings: Vec::new(),
            plugs: Vec::new(),
            reflector: "B".to_string(),
            offsets: None,
        }
    }
}

/// A machine configuration together with a known plaintext/ciphertext pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestVector {
    /// Free-form label used in failure messages.
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub config: MachineConfig,
    /// Normalized plaintext.
    pub message: String,
    /// Expected ciphertext.
    pub cipher: String,
}
