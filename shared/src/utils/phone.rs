//! Phone number utilities
//!
//! Phone numbers are stored as given by the user; nothing here rejects a
//! number.

/// Mask phone numbers for logging, keeping only the last 4 digits
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let visible = 4;
    let masked_count = chars.len() - visible;
    let last: String = chars[masked_count..].iter().collect();

    if chars[0] == '+' {
        format!("+{}{}", "*".repeat(masked_count - 1), last)
    } else {
        format!("{}{}", "*".repeat(masked_count), last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+224600000000"), "+********0000");
        assert_eq!(mask_phone_number("1234567890"), "******7890");
        assert_eq!(mask_phone_number("123"), "***");
        assert_eq!(mask_phone_number("1234"), "****");
    }
}
