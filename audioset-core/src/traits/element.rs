//! Element type constraints for waveform and label matrices
//!
//! Encode accepts waveforms in any common numeric representation and
//! labels in any integer or boolean representation.

/// Types that can be quantized as waveform samples
pub trait SampleElement: Copy + PartialOrd + Sized {
    /// Widen to f64 for scaling
    fn to_f64(self) -> f64;
}

impl SampleElement for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl SampleElement for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl SampleElement for i16 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl SampleElement for i32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// Types that can be bit-packed as label flags
pub trait LabelElement: Copy + Sized {
    /// Low bit of the value
    fn to_bit(self) -> u8;

    /// Whether the value is exactly 0 or 1
    fn is_binary(self) -> bool;
}

macro_rules! impl_integer_label {
    ($($t:ty),*) => {
        $(
            impl LabelElement for $t {
                #[inline]
                fn to_bit(self) -> u8 {
                    (self & 1) as u8
                }

                #[inline]
                fn is_binary(self) -> bool {
                    self == 0 || self == 1
                }
            }
        )*
    };
}

impl_integer_label!(u8, i8, u16, i16, u32, i32, i64, u64);

impl LabelElement for bool {
    #[inline]
    fn to_bit(self) -> u8 {
        self as u8
    }

    #[inline]
    fn is_binary(self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_bits() {
        assert_eq!(1i32.to_bit(), 1);
        assert_eq!(0u8.to_bit(), 0);
        assert_eq!(3i64.to_bit(), 1);
        assert_eq!((-2i32).to_bit(), 0);
        assert!(true.is_binary());
        assert!(!2u8.is_binary());
        assert!(!(-1i32).is_binary());
    }

    #[test]
    fn test_sample_widening() {
        assert_eq!(0.5f32.to_f64(), 0.5);
        assert_eq!((-32768i16).to_f64(), -32768.0);
        assert_eq!(70_000i32.to_f64(), 70_000.0);
    }
}
