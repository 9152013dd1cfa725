// src/generators/strength.rs
use crate::generators::password::SYMBOLS;
use crate::models::{StrengthAssessment, StrengthLabel};

/// Heuristic entropy estimate in bits: log2 of the alphabet implied by the
/// character classes present, times the password length. This inspects the
/// finished string only, so it works on passwords from any origin, not just
/// ones this service generated.
pub fn calculate_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }

    let mut alphabet: u32 = 0;
    if password.bytes().any(|b| b.is_ascii_lowercase()) {
        alphabet += 26;
    }
    if password.bytes().any(|b| b.is_ascii_uppercase()) {
        alphabet += 26;
    }
    if password.bytes().any(|b| b.is_ascii_digit()) {
        alphabet += 10;
    }
    if password.bytes().any(|b| SYMBOLS.contains(&b)) {
        alphabet += 32;
    }

    // Nothing recognizable (e.g. all non-ASCII): no basis for an estimate.
    if alphabet == 0 {
        return 0.0;
    }

    f64::from(alphabet).log2() * password.chars().count() as f64
}

/// Map an entropy estimate to its band. Lower bounds are inclusive, so an
/// exact boundary value lands in the higher band.
pub fn label_for_entropy(entropy_bits: f64) -> StrengthLabel {
    if entropy_bits < 30.0 {
        StrengthLabel::VeryWeak
    } else if entropy_bits < 50.0 {
        StrengthLabel::Weak
    } else if entropy_bits < 70.0 {
        StrengthLabel::Fair
    } else if entropy_bits < 90.0 {
        StrengthLabel::Strong
    } else {
        StrengthLabel::VeryStrong
    }
}

pub fn assess_strength(password: &str) -> StrengthLabel {
    label_for_entropy(calculate_entropy(password))
}

pub fn assess(password: &str) -> StrengthAssessment {
    let entropy_bits = calculate_entropy(password);
    StrengthAssessment {
        entropy_bits,
        label: label_for_entropy(entropy_bits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_has_zero_entropy() {
        assert_eq!(calculate_entropy(""), 0.0);
    }

    #[test]
    fn lowercase_only_entropy() {
        let entropy = calculate_entropy("abcd");
        let expected = 26f64.log2() * 4.0;
        assert!((entropy - expected).abs() < 1e-9);
        assert!((entropy - 18.8).abs() < 0.1);
    }

    #[test]
    fn all_classes_widen_the_alphabet() {
        let entropy = calculate_entropy("aA1!");
        let expected = 94f64.log2() * 4.0;
        assert!((entropy - expected).abs() < 1e-9);
    }

    #[test]
    fn unrecognized_glyphs_score_zero() {
        assert_eq!(calculate_entropy("€€€"), 0.0);
    }

    #[test]
    fn boundary_values_take_the_higher_band() {
        assert_eq!(label_for_entropy(30.0), StrengthLabel::Weak);
        assert_eq!(label_for_entropy(50.0), StrengthLabel::Fair);
        assert_eq!(label_for_entropy(70.0), StrengthLabel::Strong);
        assert_eq!(label_for_entropy(90.0), StrengthLabel::VeryStrong);
    }

    #[test]
    fn just_below_boundary_stays_in_lower_band() {
        assert_eq!(label_for_entropy(29.999), StrengthLabel::VeryWeak);
        assert_eq!(label_for_entropy(49.999), StrengthLabel::Weak);
        assert_eq!(label_for_entropy(89.999), StrengthLabel::Strong);
    }

    #[test]
    fn assess_combines_entropy_and_label() {
        let assessment = assess("abcd");
        assert_eq!(assessment.label, StrengthLabel::VeryWeak);
        assert!(assessment.entropy_bits > 18.0 && assessment.entropy_bits < 19.0);

        // 16 chars over the full 94-glyph alphabet: ~104.9 bits
        let assessment = assess("aB3!aB3!aB3!aB3!");
        assert_eq!(assessment.label, StrengthLabel::VeryStrong);
    }
}
