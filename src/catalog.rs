//! Static catalog of the standard rotor and reflector wirings.
//!
//! The tables are process-wide read-only data. Components copy what they
//! need out of a [`RotorSpec`] or [`ReflectorSpec`] at construction time
//! and never refer back to the catalog afterwards.

/// Wiring and turnover letters of a catalog rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    /// Catalog key (`"I"`..`"VIII"`).
    pub key: &'static str,
    /// Forward wiring: contact `i` is wired to `wiring[i]`.
    pub wiring: &'static str,
    /// Window letters from which the next step carries into the next rotor.
    pub turnovers: &'static str,
}

/// Wiring of a catalog reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorSpec {
    /// Catalog key (`"A"`, `"B"`, `"C"`, `"B_thin"`, `"C_thin"`).
    pub key: &'static str,
    /// Involutive mapping: `mapping[i]` is the partner of letter `i`.
    pub mapping: &'static str,
}

/// The eight Wehrmacht / Kriegsmarine rotors.
pub static ROTORS: [RotorSpec; 8] = [
    RotorSpec {
        key: "I",
        wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        turnovers: "Q",
    },
    RotorSpec {
        key: "II",
        wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
        turnovers: "E",
    },
    RotorSpec {
        key: "III",
        wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
        turnovers: "V",
    },
    RotorSpec {
        key: "IV",
        wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
        turnovers: "J",
    },
    RotorSpec {
        key: "V",
        wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
        turnovers: "Z",
    },
    RotorSpec {
        key: "VI",
        wiring: "JPGVOUMFYQBENHZRDKASXLICTW",
        turnovers: "MZ",
    },
    RotorSpec {
        key: "VII",
        wiring: "NZJHGRCXMYSWBOUFAIVLPEKQDT",
        turnovers: "MZ",
    },
    RotorSpec {
        key: "VIII",
        wiring: "FKQHTLXOCBJSPDZRAMEWNIUYGV",
        turnovers: "MZ",
    },
];

/// The five standard reflectors, thin variants included.
pub static REFLECTORS: [ReflectorSpec; 5] = [
    ReflectorSpec {
        key: "A",
        mapping: "EJMZALYXVBWFCRQUONTSPIKHGD",
    },
    ReflectorSpec {
        key: "B",
        mapping: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    },
    ReflectorSpec {
        key: "C",
        mapping: "FVPJIAOYEDRZXWGCTKUQSBNMHL",
    },
    ReflectorSpec {
        key: "B_thin",
        mapping: "ENKQAUYWJICOPBLMDXZVFTHRGS",
    },
    ReflectorSpec {
        key: "C_thin",
        mapping: "RDOBJNTKVEHMLFCWZAXGYIPSUQ",
    },
];

/// Looks up a rotor by catalog key.
pub fn rotor(key: &str) -> Option<&'static RotorSpec> {
    ROTORS.iter().find(|spec| spec.key == key)
}

/// Looks up a reflector by catalog key.
pub fn reflector(key: &str) -> Option<&'static ReflectorSpec> {
    REFLECTORS.iter().find(|spec| spec.key == key)
}

/// Keys of all catalog rotors, in catalog order.
pub fn rotor_keys() -> impl Iterator<Item = &'static str> {
    ROTORS.iter().map(|spec| spec.key)
}

/// Keys of all catalog reflectors, in catalog order.
pub fn reflector_keys() -> impl Iterator<Item = &'static str> {
    REFLECTORS.iter().map(|spec| spec.key)
}
