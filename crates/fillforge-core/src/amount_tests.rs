//! Tests for amount validation and tolerance.

use crate::Amount;

#[test]
fn test_float_validity() {
    assert!(0.0_f64.is_valid());
    assert!(9.99_f64.is_valid());
    assert!(!(-0.01_f64).is_valid());
    assert!(!f64::NAN.is_valid());
    assert!(f64::INFINITY.is_valid());
}

#[test]
fn test_integer_validity() {
    assert!(0_i64.is_valid());
    assert!(!(-3_i64).is_valid());
    assert!(42_u64.is_valid());
}

#[test]
fn test_comparable() {
    assert!((-5.0_f64).is_comparable());
    assert!(!f32::NAN.is_comparable());
}

#[test]
fn test_float_tolerance_scales_with_magnitude() {
    let big = 1.0e12_f64;
    assert!(big.approx_eq(&(big + 1.0e-4)));
    assert!(!1.0_f64.approx_eq(&1.001));
}

#[test]
fn test_integer_equality_is_exact() {
    assert!(!10_i32.approx_eq(&11));
    assert!(10_i32.approx_eq(&10));
}

#[test]
fn test_as_f64() {
    assert_eq!(480_i64.as_f64(), 480.0);
    assert_eq!(2.5_f32.as_f64(), 2.5);
}

#[cfg(feature = "decimal")]
#[test]
fn test_decimal_amount() {
    use rust_decimal::Decimal;

    let a = Decimal::new(999, 2);
    assert!(a.is_valid());
    assert!(!Decimal::new(-1, 0).is_valid());
    assert_eq!(a.as_f64(), 9.99);
}
