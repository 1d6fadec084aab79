use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is not an ASCII digit.
///
/// `\D` is Unicode aware in the regex crate and would let digits from other
/// scripts through, so the class is spelled out.
pub static NON_DIGIT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^0-9]").expect("Invalid regex pattern for non-digit characters")
});

/// Complete CPF display form: `000.000.000-00`
pub static CPF_MASKED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<first>[0-9]{3})\.(?P<second>[0-9]{3})\.(?P<third>[0-9]{3})-(?P<check>[0-9]{2})$")
        .expect("Invalid regex pattern for masked CPF")
});

/// Complete phone display form: `(00) 0000-0000` or `(00) 00000-0000`
pub static PHONE_MASKED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\((?P<ddd>[0-9]{2})\) (?P<prefix>[0-9]{4,5})-(?P<line>[0-9]{4})$")
        .expect("Invalid regex pattern for masked phone")
});

/// Same expression the registration forms use for e-mail fields
pub static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern for e-mail")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_digit_pattern() {
        assert_eq!(NON_DIGIT_PATTERN.replace_all("529.982.247-25", ""), "52998224725");
        assert_eq!(NON_DIGIT_PATTERN.replace_all("abc", ""), "");
        // Arabic-Indic three is a Unicode digit but not an ASCII one
        assert_eq!(NON_DIGIT_PATTERN.replace_all("1\u{0663}2", ""), "12");
    }

    #[test]
    fn test_cpf_masked_pattern() {
        let valid = vec!["529.982.247-25", "000.000.000-00"];
        for cpf in valid {
            assert!(CPF_MASKED_PATTERN.is_match(cpf), "Should match: {}", cpf);
        }

        let invalid = vec![
            "52998224725",     // No punctuation
            "529.982.247",     // Partial
            "529.982.247-2",   // Short check group
            "529-982-247.25",  // Swapped separators
        ];
        for cpf in invalid {
            assert!(!CPF_MASKED_PATTERN.is_match(cpf), "Should not match: {}", cpf);
        }

        let caps = CPF_MASKED_PATTERN.captures("529.982.247-25").unwrap();
        assert_eq!(&caps["check"], "25");
    }

    #[test]
    fn test_phone_masked_pattern() {
        assert!(PHONE_MASKED_PATTERN.is_match("(31) 3722-0000"));
        assert!(PHONE_MASKED_PATTERN.is_match("(31) 98765-4321"));
        assert!(!PHONE_MASKED_PATTERN.is_match("(31) 3722"));
        assert!(!PHONE_MASKED_PATTERN.is_match("31 3722-0000"));

        let caps = PHONE_MASKED_PATTERN.captures("(31) 98765-4321").unwrap();
        assert_eq!(&caps["ddd"], "31");
        assert_eq!(&caps["prefix"], "98765");
    }

    #[test]
    fn test_email_pattern() {
        assert!(EMAIL_PATTERN.is_match("contato@empresa.com.br"));
        assert!(!EMAIL_PATTERN.is_match("contato@empresa"));
        assert!(!EMAIL_PATTERN.is_match("con tato@empresa.com"));
        assert!(!EMAIL_PATTERN.is_match("@empresa.com"));
    }
}
