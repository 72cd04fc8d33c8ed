//! Input guards for the prediction form.

/// `true` iff `value` is an optional leading `-` followed by one or more ASCII
/// digits. Whitespace, decimal points and signs anywhere else are rejected.
pub fn is_valid_integer(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_negative_integers() {
        for ok in ["0", "-5", "42", "007", "-0", "123456789012345678901234567890"] {
            assert!(is_valid_integer(ok), "{ok:?} should be accepted");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for bad in ["", "-", "3.5", "12a", " 3", "3 ", "--3", "+3", "3\n", "٣"] {
            assert!(!is_valid_integer(bad), "{bad:?} should be rejected");
        }
    }
}
