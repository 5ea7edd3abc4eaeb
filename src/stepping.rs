//! Stepping controller: which rotors advance before each key press.
//!
//! Rotors are visited strictly in order from the entry (fast) rotor to the
//! last one. Each rotor's step result is the carry input of the next rotor,
//! so the whole decision is one explicit pass with no shared flag.
//!
//! A rotor steps when:
//! - it is rotor 0 (always), or
//! - the previous rotor carried into it, or
//! - it has a rotor after it and sits at its own turnover letter. The pawl
//!   that pushes that next rotor also pushes this one, which is the
//!   double-step anomaly.
//!
//! The last rotor never carries and has no pawl of its own.

use crate::rotor::Rotor;

/// Runs one stepping cycle over `rotors` (index 0 is the fast rotor).
pub(crate) fn advance(rotors: &mut [Rotor]) {
    let last = rotors.len().saturating_sub(1);
    let mut carry = true;

    for (i, rotor) in rotors.iter_mut().enumerate() {
        let pawl_engaged = i > 0 && i < last && rotor.at_turnover();
        carry = if carry || pawl_engaged {
            rotor.step() && i < last
        } else {
            false
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a bank from (key, window letter) pairs, fast rotor first.
    fn bank(setup: &[(&str, char)]) -> Vec<Rotor> {
        setup
            .iter()
            .map(|&(key, window)| Rotor::new(key, 0, window as u8 - b'A').unwrap())
            .collect()
    }

    /// Windows read slow-to-fast, as on the machine lid.
    fn windows(rotors: &[Rotor]) -> String {
        rotors.iter().rev().map(|r| r.window().to_char()).collect()
    }

    #[test]
    fn test_fast_rotor_always_steps() {
        let mut rotors = bank(&[("I", 'A'), ("II", 'A'), ("III", 'A')]);
        advance(&mut rotors);
        assert_eq!(windows(&rotors), "AAB");
    }

    #[test]
    fn test_single_carry() {
        // Right rotor III turns over on V.
        let mut rotors = bank(&[("III", 'V'), ("II", 'A'), ("I", 'A')]);
        advance(&mut rotors);
        assert_eq!(windows(&rotors), "ABW");
    }

    #[test]
    fn test_double_step_sequence() {
        let mut rotors = bank(&[("III", 'U'), ("II", 'D'), ("I", 'A')]);
        let mut seen = vec![windows(&rotors)];
        for _ in 0..4 {
            advance(&mut rotors);
            seen.push(windows(&rotors));
        }
        assert_eq!(seen, vec!["ADU", "ADV", "AEW", "BFX", "BFY"]);
    }

    #[test]
    fn test_last_rotor_has_no_pawl() {
        // Slow rotor II sits on its turnover letter E; nothing pushes it.
        let mut rotors = bank(&[("I", 'A'), ("III", 'A'), ("II", 'E')]);
        advance(&mut rotors);
        assert_eq!(windows(&rotors), "EAB");
    }

    #[test]
    fn test_single_rotor() {
        let mut rotors = bank(&[("I", 'Q')]);
        advance(&mut rotors);
        assert_eq!(rotors[0].window().to_char(), 'R');
        advance(&mut rotors);
        assert_eq!(rotors[0].window().to_char(), 'S');
    }

    #[test]
    fn test_two_rotors_odometer() {
        let mut rotors = bank(&[("I", 'Q'), ("II", 'A')]);
        advance(&mut rotors);
        assert_eq!(windows(&rotors), "BR");
        advance(&mut rotors);
        assert_eq!(windows(&rotors), "BS");
    }

    #[test]
    fn test_full_period_without_middle_turnover() {
        // 26 presses bring the fast rotor home and carry exactly once.
        let mut rotors = bank(&[("I", 'A'), ("II", 'A'), ("III", 'A')]);
        for _ in 0..26 {
            advance(&mut rotors);
        }
        assert_eq!(windows(&rotors), "ABA");
    }

    #[test]
    fn test_four_rotor_bank_double_steps_every_middle_rotor() {
        // Rotor 1 (II) sits on E, rotor 2 (IV) sits on J.
        let mut rotors = bank(&[("I", 'A'), ("II", 'E'), ("IV", 'J'), ("V", 'A')]);
        advance(&mut rotors);
        assert_eq!(windows(&rotors), "BKFB");
    }

    #[test]
    fn test_empty_bank_is_noop() {
        let mut rotors: Vec<Rotor> = Vec::new();
        advance(&mut rotors);
        assert!(rotors.is_empty());
    }
}
