use crate::models::*;

/// Scenarios that cross module boundaries, the way the registration
/// forms use the masks together.

const VALID_CPFS: &[&str] = &["52998224725", "11144477735", "12345678810"];

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn digit_strings() -> Vec<String> {
        // Every prefix of a few sample numbers, 0 to 11 digits long
        let samples = ["52998224725", "31987654321", "00000000000", "90817263544"];
        samples
            .iter()
            .flat_map(|s| (0..=s.len()).map(move |n| s[..n].to_string()))
            .collect()
    }

    #[test]
    fn test_raw_round_trip_for_digit_strings() {
        for d in digit_strings() {
            assert_eq!(mask_cpf(&d).raw, d, "CPF mask lost digits of {:?}", d);
            assert_eq!(mask_phone(&d).raw, d, "Phone mask lost digits of {:?}", d);
        }
    }

    #[test]
    fn test_raw_is_always_short_digits() {
        let inputs = [
            "",
            "abc",
            "529.982.247-25 / 31 98765-4321",
            "+55 (31) 3722-0000 ramal 204",
            "١٢٣ 456",
            "🙂1🙂2🙂3",
        ];
        for input in inputs {
            for masked in [mask_cpf(input), mask_phone(input)] {
                assert!(masked.raw.len() <= MAX_DIGITS, "Too long for {:?}", input);
                assert!(masked.raw.bytes().all(|b| b.is_ascii_digit()), "Non-digit for {:?}", input);
            }
        }
    }

    #[test]
    fn test_remasking_is_stable() {
        for d in digit_strings() {
            let cpf = mask_cpf(&d);
            assert_eq!(mask_cpf(&cpf.masked), cpf);
            let phone = mask_phone(&d);
            assert_eq!(mask_phone(&phone.masked), phone);
        }
    }

    #[test]
    fn test_masked_output_matches_display_patterns() {
        for cpf in VALID_CPFS {
            let masked = mask_cpf(cpf).masked;
            assert!(regex_patterns::CPF_MASKED_PATTERN.is_match(&masked), "{}", masked);
            assert!(validate_cpf(&masked));
        }
        for phone in ["3137220000", "31987654321"] {
            let masked = mask_phone(phone).masked;
            assert!(regex_patterns::PHONE_MASKED_PATTERN.is_match(&masked), "{}", masked);
        }
    }

    #[test]
    fn test_form_submission_flow() {
        // Display state lives in the fields, submitted values in the form
        let mut cpf_field = CpfField::default();
        let mut phone_field = PhoneField::default();

        let cpf = cpf_field.on_change("529.982.247-25");
        let telefone = phone_field.on_change("(31) 98765-4321");

        assert_eq!(cpf_field.masked(), "529.982.247-25");
        assert_eq!(phone_field.masked(), "(31) 98765-4321");

        let result = Validator::new()
            .required("nome", "José da Silva")
            .required("cpf", &cpf)
            .cpf("cpf", &cpf)
            .phone("telefone", &telefone)
            .email("email", "jose@empresa.com.br")
            .finish();
        assert!(result.is_ok());

        let parsed = Cpf::parse(&cpf).unwrap();
        assert_eq!(parsed.to_string(), cpf_field.masked());
        let phone = Phone::parse(&telefone).unwrap();
        assert_eq!(phone.to_string(), phone_field.masked());
        assert_eq!(phone.area_code().state(), "MG");
    }

    #[test]
    fn test_cpf_region_and_phone_state_agree() {
        let cpf = Cpf::parse("111.444.777-35").unwrap();
        let phone = Phone::parse("(21) 3333-4444").unwrap();
        assert!(cpf.fiscal_region().covers(phone.area_code().state()));
    }

    #[test]
    fn test_filter_then_paginate() {
        let pessoas: Vec<(String, String)> = VALID_CPFS
            .iter()
            .enumerate()
            .map(|(i, cpf)| (format!("Funcionário {}", i + 1), cpf.to_string()))
            .collect();

        let found = filter_items(&pessoas, "529.982", |(_, cpf)| mask_cpf(cpf).masked);
        assert_eq!(found.len(), 1);

        let page = paginate_with(&Settings::default(), &found, 0, 2);
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.content[0].0, "Funcionário 1");
    }
}
