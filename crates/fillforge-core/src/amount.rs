//! Amount - numeric type for item sizes and ceilings
//!
//! Every quantity the filler compares or accumulates is an [`Amount`]:
//! item sizes, solution totals and the ceiling itself. Integer, float and
//! (with the `decimal` feature) `rust_decimal::Decimal` amounts are supported.

use std::fmt::{Debug, Display};

use num_traits::{Num, ToPrimitive};

/// Numeric type usable as an item amount or ceiling.
///
/// Ceiling comparisons made by the filler are always exact (`==`, `>`).
/// [`approx_eq`](Amount::approx_eq) is only used to check that a cached
/// total still matches the sum of its items.
///
/// # Examples
///
/// ```
/// use fillforge_core::Amount;
///
/// assert!(4.5_f64.is_valid());
/// assert!(!(-1.0_f64).is_valid());
/// assert!(!f64::NAN.is_valid());
/// assert!(!f64::NAN.is_comparable());
///
/// assert!(0.1_f64 + 0.2 != 0.3);
/// assert!((0.1_f64 + 0.2).approx_eq(&0.3));
/// assert!(7_i64.approx_eq(&7));
/// ```
pub trait Amount:
    Num + ToPrimitive + Copy + PartialOrd + Debug + Display + Send + Sync + 'static
{
    /// Returns true if this value has a defined ordering (not NaN).
    #[inline]
    fn is_comparable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }

    /// Returns true if this value is a valid item amount: comparable and
    /// non-negative.
    #[inline]
    fn is_valid(&self) -> bool {
        self.is_comparable() && *self >= Self::zero()
    }

    /// Equality within the rounding tolerance of the type.
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self == other
    }

    /// Lossy conversion used for reporting.
    #[inline]
    fn as_f64(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

macro_rules! impl_exact_amount {
    ($($t:ty),+) => {
        $(impl Amount for $t {})+
    };
}

macro_rules! impl_float_amount {
    ($($t:ty => $eps:expr),+) => {
        $(
            impl Amount for $t {
                #[inline]
                fn approx_eq(&self, other: &Self) -> bool {
                    let scale = self.abs().max(other.abs()).max(1.0);
                    (self - other).abs() <= $eps * scale
                }
            }
        )+
    };
}

impl_exact_amount!(i32, i64, u32, u64, usize);
impl_float_amount!(f32 => 1e-5, f64 => 1e-9);

#[cfg(feature = "decimal")]
impl Amount for rust_decimal::Decimal {}
