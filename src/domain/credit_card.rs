//! Structural validation of payment card numbers.

pub const INVALID_CARD_MESSAGE: &str = "invalid credit card number";

/// Checks a card number with the Luhn checksum.
///
/// Only plain decimal digits are accepted: separators, signs, whitespace and
/// the empty string all make the number invalid.
pub fn is_valid_card_number(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let checksum = number
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(i, digit)| {
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .fold(0u32, |acc, digit| (acc + digit) % 10);

    checksum == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_numbers() {
        assert!(is_valid_card_number("4193523830170205"));
        assert!(is_valid_card_number("4111111111111111"));
        assert!(is_valid_card_number("79927398713"));
    }

    #[test]
    fn test_checksum_mismatch() {
        assert!(!is_valid_card_number("400000000000000"));
        assert!(!is_valid_card_number("4193523830170206"));
        assert!(!is_valid_card_number("79927398710"));
    }

    #[test]
    fn test_malformed_input() {
        assert!(!is_valid_card_number(""));
        assert!(!is_valid_card_number("4193 5238 3017 0205"));
        assert!(!is_valid_card_number("4193-5238-3017-0205"));
        assert!(!is_valid_card_number("41935238301702a5"));
        assert!(!is_valid_card_number("-79927398713"));
        assert!(!is_valid_card_number("٤١٩٣"));
    }

    #[test]
    fn test_long_input_does_not_overflow() {
        // Each 9 contributes 9 whether doubled or not; 10 of them sum to 0 mod 10.
        let nines = "9".repeat(1_000_000);
        assert!(is_valid_card_number(&nines));
        assert!(!is_valid_card_number(&"9".repeat(999_999)));
    }

    #[test]
    fn test_single_zero_is_structurally_valid() {
        // Checksum of zero is the only requirement.
        assert!(is_valid_card_number("0"));
    }
}
