//! Regression tests for the public component API.
//!
//! Exercises the building blocks exported next to [`Enigma`] the way an
//! external harness would: catalog lookups, single components, and the
//! text helpers around the engine.
//!
//! Coverage:
//! - `alphabet::{Letter, normalize, parse_letters}`
//! - `catalog`
//! - `Rotor`, `Reflector`, `Plugboard`
//! - `EnigmaError` messages
//! - `Enigma` inspection accessors

use enigma::alphabet::{letters_to_string, normalize, parse_letters};
use enigma::catalog;
use enigma::{Enigma, EnigmaError, Letter, MachineConfig, Plugboard, Reflector, Rotor};

fn letter(c: char) -> Letter {
    Letter::from_char(c).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Alphabet helpers
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn normalize_then_codec() {
    let mut machine = Enigma::from_config(&MachineConfig::default()).unwrap();
    let text = normalize("Hello World");
    assert_eq!(text, "HELLOWORLD");
    assert_eq!(machine.codec(&text).unwrap(), "MFNCZBBFZM");
}

#[test]
fn normalized_non_ascii_text_is_rejected() {
    let mut machine = Enigma::from_config(&MachineConfig::default()).unwrap();
    let text = normalize("straße ık");
    assert_eq!(text, "STRAßEıK");
    assert_eq!(
        machine.codec(&text),
        Err(EnigmaError::InvalidInputCharacter {
            position: 4,
            character: 'ß'
        })
    );
    assert_eq!(machine.offsets(), vec![0, 0, 0]);
}

#[test]
fn parse_letters_reports_position_of_first_bad_symbol() {
    let err = parse_letters("ABCÄX").unwrap_err();
    assert_eq!(
        err,
        EnigmaError::InvalidInputCharacter {
            position: 3,
            character: 'Ä'
        }
    );
    assert_eq!(
        letters_to_string(&parse_letters("XYZ").unwrap()),
        "XYZ"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Components
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn catalog_rotors_build() {
    for key in catalog::rotor_keys() {
        let rotor = Rotor::new(key, 0, 0).unwrap();
        assert_eq!(rotor.key(), key);
    }
    for key in catalog::reflector_keys() {
        assert_eq!(Reflector::new(key).unwrap().key(), key);
    }
}

#[test]
fn rotor_catalog_keys_are_case_sensitive() {
    assert_eq!(
        Rotor::new("iii", 0, 0),
        Err(EnigmaError::UnknownRotorKey("iii".to_string()))
    );
}

#[test]
fn rotor_step_reports_carry_for_each_turnover() {
    // VI carries twice per revolution (M -> N and Z -> A).
    let mut rotor = Rotor::new("VI", 0, 0).unwrap();
    let carries = (0..26).filter(|_| rotor.step()).count();
    assert_eq!(carries, 2);
    assert_eq!(rotor.offset(), 0);
}

#[test]
fn rotor_mapping_is_bijective_at_any_setting() {
    let mut rotor = Rotor::new("VII", 13, 22).unwrap();
    rotor.step_by(7);
    let mut images: Vec<Letter> = Letter::all().map(|l| rotor.map_forward(l)).collect();
    images.sort();
    images.dedup();
    assert_eq!(images.len(), 26);
}

#[test]
fn plugboard_partial_mapping() {
    let board = Plugboard::new(&["KX"]).unwrap();
    assert_eq!(board.swap(letter('K')), letter('X'));
    assert_eq!(board.swap(letter('X')), letter('K'));
    assert_eq!(board.swap(letter('A')), letter('A'));
    assert_eq!(board.pairs(), vec![(letter('K'), letter('X'))]);
}

// ═══════════════════════════════════════════════════════════════════════
// Engine inspection
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn engine_exposes_components() {
    let machine = Enigma::new(&["I", "II"], &[0, 5], &["AB"], "C_thin", Some(&[1, 2])).unwrap();
    assert_eq!(machine.rotors().len(), 2);
    assert_eq!(machine.rotors()[1].ring_setting(), 5);
    assert_eq!(machine.reflector().key(), "C_thin");
    assert_eq!(machine.plugboard().to_string(), "AB");
    assert_eq!(machine.windows(), "CB");
    assert_eq!(machine.offsets(), vec![1, 2]);
}

#[test]
fn independent_engines_do_not_share_state() {
    let mut a = Enigma::from_config(&MachineConfig::default()).unwrap();
    let b = Enigma::from_config(&MachineConfig::default()).unwrap();
    a.codec("ABCDEFGHIJ").unwrap();
    assert_eq!(a.offsets(), vec![10, 0, 0]);
    assert_eq!(b.offsets(), vec![0, 0, 0]);
}

#[test]
fn engines_run_on_separate_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let mut machine = Enigma::from_config(&MachineConfig::default()).unwrap();
                machine.codec("AAAAA").unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "FTZMG");
    }
}

#[test]
fn error_messages() {
    assert_eq!(
        EnigmaError::UnknownReflectorKey("D".to_string()).to_string(),
        "unknown reflector key \"D\""
    );
    assert_eq!(
        EnigmaError::InvalidPlugPair("ABC".to_string()).to_string(),
        "plugboard pair \"ABC\" must be exactly two letters"
    );
    assert_eq!(
        EnigmaError::NoRotors.to_string(),
        "at least one rotor is required"
    );
}
