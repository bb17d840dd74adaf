#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub iso: &'static str,
    pub name: &'static str,
    pub dial_code: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { iso: "in", name: "India", dial_code: "91" },
    Country { iso: "ae", name: "United Arab Emirates", dial_code: "971" },
    Country { iso: "gb", name: "United Kingdom", dial_code: "44" },
    Country { iso: "us", name: "United States", dial_code: "1" },
    Country { iso: "sg", name: "Singapore", dial_code: "65" },
    Country { iso: "au", name: "Australia", dial_code: "61" },
];

/// Looks up a country by ISO code, falling back to the first entry.
pub fn country_or_default(iso: &str) -> Country {
    COUNTRIES
        .iter()
        .copied()
        .find(|c| c.iso.eq_ignore_ascii_case(iso))
        .unwrap_or(COUNTRIES[0])
}

/// Normalized phone value: `+<dial code><digits>`, or empty when no digits were typed.
pub fn normalize(country: &Country, local: &str) -> String {
    let digits: String = local.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        String::new()
    } else {
        format!("+{}{}", country.dial_code, digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_formatting_and_prefixes_dial_code() {
        let india = country_or_default("in");
        assert_eq!(normalize(&india, "12345 67890"), "+911234567890");
        assert_eq!(normalize(&india, "(123) 456-7890"), "+911234567890");
    }

    #[test]
    fn empty_without_digits() {
        let india = country_or_default("in");
        assert_eq!(normalize(&india, ""), "");
        assert_eq!(normalize(&india, " - "), "");
    }

    #[test]
    fn unknown_country_falls_back_to_india() {
        assert_eq!(country_or_default("zz").iso, "in");
        assert_eq!(country_or_default("GB").dial_code, "44");
    }
}
