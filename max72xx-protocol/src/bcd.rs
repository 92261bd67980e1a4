//! Code-B font values
//!
//! With decode mode enabled for a digit, the low nibble of its register
//! selects one of these glyphs and bit 7 drives the decimal point.
//! Values 0 through 9 display the matching numeral.

/// `-`
pub const DASH: u8 = 10;
/// `E`
pub const E: u8 = 11;
/// `H`
pub const H: u8 = 12;
/// `L`
pub const L: u8 = 13;
/// `P`
pub const P: u8 = 14;
/// All segments off
pub const BLANK: u8 = 15;
/// Decimal point, OR with any other code
pub const DOT: u8 = 0x80;

/// Code-B value for a decimal numeral, or `None` above 9
pub const fn numeral(value: u8) -> Option<u8> {
    if value <= 9 {
        Some(value)
    } else {
        None
    }
}

/// Add the decimal point to a code
pub const fn with_dot(code: u8) -> u8 {
    code | DOT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeral() {
        assert_eq!(numeral(0), Some(0));
        assert_eq!(numeral(9), Some(9));
        assert_eq!(numeral(10), None);
    }

    #[test]
    fn test_dot_keeps_code() {
        assert_eq!(with_dot(5), 0x85);
        assert_eq!(with_dot(BLANK) & 0x0F, BLANK);
    }
}
