use super::{NativeInt, sealed::Sealed};

macro_rules! impl_native_unsigned {
    ($($t:ty),*) => {
        $(
            impl Sealed for $t {}

            impl NativeInt for $t {
                const BITS: u32 = <$t>::BITS;

                fn to_words(self) -> (u64, u64) {
                    (0, self as u64)
                }

                fn is_negative(self) -> bool {
                    false
                }

                fn from_words(_upper: u64, lower: u64) -> Self {
                    lower as $t
                }
            }
        )*
    };
}

macro_rules! impl_native_signed {
    ($($t:ty),*) => {
        $(
            impl Sealed for $t {}

            impl NativeInt for $t {
                const BITS: u32 = <$t>::BITS;

                fn to_words(self) -> (u64, u64) {
                    let fill = if self < 0 { u64::MAX } else { 0 };

                    (fill, self as i64 as u64)
                }

                fn is_negative(self) -> bool {
                    self < 0
                }

                fn from_words(_upper: u64, lower: u64) -> Self {
                    lower as $t
                }
            }
        )*
    };
}

impl_native_unsigned!(u8, u16, u32, u64, usize);
impl_native_signed!(i8, i16, i32, i64, isize);

impl Sealed for u128 {}

impl NativeInt for u128 {
    const BITS: u32 = u128::BITS;

    fn to_words(self) -> (u64, u64) {
        ((self >> 64) as u64, self as u64)
    }

    fn is_negative(self) -> bool {
        false
    }

    fn from_words(upper: u64, lower: u64) -> Self {
        ((upper as u128) << 64) | lower as u128
    }
}
