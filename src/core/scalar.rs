use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Numeric coordinate type accepted by plot series.
///
/// Every scalar is projected through `f64` before mapping to screen space, so
/// integer, decimal and timestamp series share the same transform.
pub trait Scalar: Copy + PartialOrd + Send + Sync + 'static {
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar_as_cast {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_scalar_as_cast!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Scalar for Decimal {
    /// Values outside `f64` range map to NaN and are skipped by bounds.
    fn to_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

impl Scalar for DateTime<Utc> {
    /// Unix seconds with millisecond precision.
    fn to_f64(self) -> f64 {
        self.timestamp_millis() as f64 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::Scalar;

    #[test]
    fn integer_and_float_scalars_cast_losslessly_in_range() {
        assert_eq!(42_i32.to_f64(), 42.0);
        assert_eq!(7_u64.to_f64(), 7.0);
        assert_eq!(1.5_f32.to_f64(), 1.5);
    }

    #[test]
    fn decimal_scalar_converts_to_f64() {
        let value = Decimal::new(12_345, 2);
        assert!((value.to_f64() - 123.45).abs() <= 1e-9);
    }

    #[test]
    fn datetime_scalar_uses_unix_seconds() {
        let time = Utc
            .timestamp_millis_opt(1_700_000_000_250)
            .single()
            .expect("valid timestamp");
        assert!((time.to_f64() - 1_700_000_000.25).abs() <= 1e-6);
    }
}
