//! Integration tests for the reversal contract
//! Known values plus properties checked against a string-based reference

use proptest::prelude::*;
use revint::{checked_reverse, reverse, reverse_wide};

#[test]
fn test_documented_examples() {
    assert_eq!(reverse(0), 0);
    assert_eq!(reverse(123), 321);
    assert_eq!(reverse(-123), -321);
    assert_eq!(reverse(120), 21);
    assert_eq!(reverse(1_534_236_469), 0);
    assert_eq!(reverse(-2_147_483_648), 0);
}

#[test]
fn test_trailing_zeros_make_reversal_lossy() {
    // 120 -> 21 -> 12: the zero is gone for good
    assert_eq!(reverse(reverse(120)), 12);
    assert_eq!(reverse(reverse(-9000)), -9);
}

#[test]
fn test_reverse_is_usable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|offset| {
            std::thread::spawn(move || (0..1000).map(|x| reverse(x * 7 + offset)).sum::<i32>())
        })
        .collect();
    let sequential: Vec<i32> = (0..4)
        .map(|offset| (0..1000).map(|x| reverse(x * 7 + offset)).sum::<i32>())
        .collect();

    let concurrent: Vec<i32> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(concurrent, sequential);
}

proptest! {
    #[test]
    fn test_result_is_reversal_or_zero(x in any::<i32>()) {
        let digits: String = x.unsigned_abs().to_string().chars().rev().collect();
        let magnitude: i64 = digits.parse().unwrap();
        let expected = if x < 0 { -magnitude } else { magnitude };

        match i32::try_from(expected) {
            Ok(value) => prop_assert_eq!(reverse(x), value),
            Err(_) => prop_assert_eq!(reverse(x), 0),
        }
    }

    #[test]
    fn test_narrow_and_wide_agree(x in any::<i32>()) {
        prop_assert_eq!(reverse(x), reverse_wide(i64::from(x)));
        prop_assert_eq!(checked_reverse(i64::from(x)).unwrap_or(0), reverse(x));
    }
}
