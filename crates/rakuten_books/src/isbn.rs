/// Decides whether an identifier is something a scraper can look up.
pub trait IsbnValidator {
    /// Returns `true` when `id` is a structurally valid ISBN.
    fn is_valid(&self, id: &str) -> bool;
}

impl<F> IsbnValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, id: &str) -> bool {
        self(id)
    }
}

/// Checksum based validation of ISBN-10 and ISBN-13 identifiers.
///
/// Hyphens and spaces are ignored, so `978-4-87311-978-6` and `9784873119786` are both accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct Isbn;

impl Isbn {
    /// Removes the separators commonly printed inside an ISBN.
    #[must_use]
    pub fn normalize(id: &str) -> String {
        id.chars().filter(|c| !matches!(c, '-' | ' ')).collect()
    }

    fn is_valid_isbn10(digits: &[u8]) -> bool {
        let mut sum = 0u32;
        for (i, (&b, weight)) in digits.iter().zip((1..=10u32).rev()).enumerate() {
            let value = match b {
                b'0'..=b'9' => u32::from(b - b'0'),
                // check digit of 10
                b'X' | b'x' if i == 9 => 10,
                _ => return false,
            };
            sum += value * weight;
        }
        sum % 11 == 0
    }

    fn is_valid_isbn13(digits: &[u8]) -> bool {
        if !(digits.starts_with(b"978") || digits.starts_with(b"979")) {
            return false;
        }

        let mut sum = 0u32;
        for (i, &b) in digits.iter().enumerate() {
            if !b.is_ascii_digit() {
                return false;
            }
            let weight = if i % 2 == 0 { 1 } else { 3 };
            sum += u32::from(b - b'0') * weight;
        }
        sum % 10 == 0
    }
}

impl IsbnValidator for Isbn {
    fn is_valid(&self, id: &str) -> bool {
        let id = Self::normalize(id);
        let digits = id.as_bytes();
        match digits.len() {
            10 => Self::is_valid_isbn10(digits),
            13 => Self::is_valid_isbn13(digits),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Isbn, IsbnValidator};

    #[test]
    fn valid_isbn_10_is_accepted() {
        assert!(Isbn.is_valid("4088725093"));
        assert!(Isbn.is_valid("4-08-872509-3"));
        // X check digit
        assert!(Isbn.is_valid("080442957X"));
    }

    #[test]
    fn valid_isbn_13_is_accepted() {
        assert!(Isbn.is_valid("9784873119786"));
        assert!(Isbn.is_valid("978-4-87311-978-6"));
        assert!(Isbn.is_valid("978 0 7356 1967 8"));
    }

    #[test]
    fn bad_checksum_is_rejected() {
        assert!(!Isbn.is_valid("4088725094"));
        assert!(!Isbn.is_valid("9784873119787"));
    }

    #[test]
    fn wrong_shape_is_rejected() {
        assert!(!Isbn.is_valid(""));
        assert!(!Isbn.is_valid("10.1000/182"));
        assert!(!Isbn.is_valid("X080442957"));
        // valid mod 10 checksum but not a bookland prefix
        assert!(!Isbn.is_valid("1234567890128"));
    }

    #[test]
    fn closures_are_validators() {
        let any = |_: &str| true;
        assert!(any.is_valid("not an isbn"));
    }

    #[test]
    fn generated_isbn_13_checksum_is_accepted() {
        proptest::proptest!(|(body in "97[89][0-9]{9}")| {
            let sum: u32 = body
                .bytes()
                .enumerate()
                .map(|(i, b)| u32::from(b - b'0') * if i % 2 == 0 { 1 } else { 3 })
                .sum();
            let check = (10 - sum % 10) % 10;
            let isbn = format!("{body}{check}");
            proptest::prop_assert!(Isbn.is_valid(&isbn), "{} should be valid", isbn);
        })
    }

    #[test]
    fn single_digit_change_is_rejected() {
        proptest::proptest!(|(pos in 0usize..13, delta in 1u8..10)| {
            let mut digits = b"9784873119786".to_vec();
            digits[pos] = b'0' + (digits[pos] - b'0' + delta) % 10;
            let isbn = String::from_utf8(digits).unwrap();
            proptest::prop_assert!(!Isbn.is_valid(&isbn), "{} should be invalid", isbn);
        })
    }
}
