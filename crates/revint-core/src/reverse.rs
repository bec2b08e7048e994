//! Decimal digit reversal bounded to the signed 32-bit range.

/// Largest magnitude a non-negative reversal may reach (`2^31 - 1`).
const POSITIVE_LIMIT: u64 = i32::MAX as u64;

/// Largest magnitude a negative reversal may reach (`2^31`).
const NEGATIVE_LIMIT: u64 = i32::MIN.unsigned_abs() as u64;

/// Decimal digits of a magnitude, least-significant first.
///
/// Zero has no digits, so `Digits::new(0)` yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits {
    magnitude: u64,
}

impl Digits {
    #[must_use]
    pub const fn new(magnitude: u64) -> Self {
        Self { magnitude }
    }
}

impl Iterator for Digits {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.magnitude == 0 {
            return None;
        }
        let digit = (self.magnitude % 10) as u8;
        self.magnitude /= 10;
        Some(digit)
    }
}

/// Whether `value` lies in `[-2^31, 2^31 - 1]`.
#[must_use]
pub const fn fits_i32(value: i64) -> bool {
    value >= i32::MIN as i64 && value <= i32::MAX as i64
}

/// Reverse the decimal digits of `x`, keeping its sign.
///
/// Returns `None` when the reversed value falls outside the signed 32-bit
/// range. The accumulator never shrinks, so accumulation stops as soon as it
/// passes the bound for the input's sign; the arithmetic therefore stays in
/// `u64` for every `i64`, `i64::MIN` included.
#[must_use]
pub fn checked_reverse(x: i64) -> Option<i32> {
    let negative = x < 0;
    let limit = if negative { NEGATIVE_LIMIT } else { POSITIVE_LIMIT };

    let mut accumulator: u64 = 0;
    for digit in Digits::new(x.unsigned_abs()) {
        accumulator = accumulator * 10 + u64::from(digit);
        if accumulator > limit {
            return None;
        }
    }

    let magnitude = i64::try_from(accumulator).ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    i32::try_from(signed).ok()
}

/// Reverse the decimal digits of `x`, or return `0` if the reversal
/// overflows a signed 32-bit integer.
///
/// Trailing zeros of `x` become leading zeros of the reversal and vanish,
/// so `reverse(reverse(x)) == x` only holds when `x` has no trailing zeros
/// and neither direction overflows.
///
/// ```
/// use revint_core::reverse;
///
/// assert_eq!(reverse(123), 321);
/// assert_eq!(reverse(-123), -321);
/// assert_eq!(reverse(120), 21);
/// assert_eq!(reverse(1_534_236_469), 0);
/// ```
#[must_use]
pub fn reverse(x: i32) -> i32 {
    checked_reverse(i64::from(x)).unwrap_or(0)
}

/// Like [`reverse`], for inputs that are already wider than 32 bits.
///
/// Only the result is bounds-checked; the input itself may be any `i64`.
#[must_use]
pub fn reverse_wide(x: i64) -> i32 {
    checked_reverse(x).unwrap_or(0)
}
