//! Trait implementations shared by `U128` and `U256`
//!
//! Both widths expose the same operator surface. The bodies only differ in
//! the concrete type, so they are stamped out by the macros below instead of
//! being written twice.

/// Same-width compound assignment operators, delegating to the binary form.
macro_rules! impl_assign_ops {
    ($uint:ty) => {
        impl ::std::ops::AddAssign for $uint {
            fn add_assign(&mut self, rhs: $uint) {
                *self = *self + rhs;
            }
        }

        impl ::std::ops::SubAssign for $uint {
            fn sub_assign(&mut self, rhs: $uint) {
                *self = *self - rhs;
            }
        }

        impl ::std::ops::MulAssign for $uint {
            fn mul_assign(&mut self, rhs: $uint) {
                *self = *self * rhs;
            }
        }

        impl ::std::ops::DivAssign for $uint {
            fn div_assign(&mut self, rhs: $uint) {
                *self = *self / rhs;
            }
        }

        impl ::std::ops::RemAssign for $uint {
            fn rem_assign(&mut self, rhs: $uint) {
                *self = *self % rhs;
            }
        }

        impl ::std::ops::BitAndAssign for $uint {
            fn bitand_assign(&mut self, rhs: $uint) {
                *self = *self & rhs;
            }
        }

        impl ::std::ops::BitOrAssign for $uint {
            fn bitor_assign(&mut self, rhs: $uint) {
                *self = *self | rhs;
            }
        }

        impl ::std::ops::BitXorAssign for $uint {
            fn bitxor_assign(&mut self, rhs: $uint) {
                *self = *self ^ rhs;
            }
        }

        impl ::std::ops::ShlAssign for $uint {
            fn shl_assign(&mut self, rhs: $uint) {
                *self = *self << rhs;
            }
        }

        impl ::std::ops::ShrAssign for $uint {
            fn shr_assign(&mut self, rhs: $uint) {
                *self = *self >> rhs;
            }
        }
    };
}

/// Operators taking a native integer on the right-hand side.
///
/// The native operand is promoted with `From` and the same-width operator
/// does the work.
macro_rules! impl_native_ops {
    (@binary $uint:ty, $native:ty, $($op:ident $method:ident $assign:ident $assign_method:ident),*) => {
        $(
            impl ::std::ops::$op<$native> for $uint {
                type Output = $uint;

                fn $method(self, rhs: $native) -> $uint {
                    ::std::ops::$op::$method(self, <$uint>::from(rhs))
                }
            }

            impl ::std::ops::$assign<$native> for $uint {
                fn $assign_method(&mut self, rhs: $native) {
                    *self = ::std::ops::$op::$method(*self, <$uint>::from(rhs));
                }
            }
        )*
    };

    ($uint:ty; $($native:ty),*) => {
        $(
            impl_native_ops!(@binary $uint, $native,
                Add add AddAssign add_assign,
                Sub sub SubAssign sub_assign,
                Mul mul MulAssign mul_assign,
                Div div DivAssign div_assign,
                Rem rem RemAssign rem_assign,
                BitAnd bitand BitAndAssign bitand_assign,
                BitOr bitor BitOrAssign bitor_assign,
                BitXor bitxor BitXorAssign bitxor_assign,
                Shl shl ShlAssign shl_assign,
                Shr shr ShrAssign shr_assign
            );

            impl ::std::cmp::PartialEq<$native> for $uint {
                fn eq(&self, other: &$native) -> bool {
                    *self == <$uint>::from(*other)
                }
            }

            impl ::std::cmp::PartialOrd<$native> for $uint {
                fn partial_cmp(&self, other: &$native) -> Option<::std::cmp::Ordering> {
                    Some(self.cmp(&<$uint>::from(*other)))
                }
            }
        )*
    };
}

/// `From<native>` promotion and checked `TryFrom` narrowing.
macro_rules! impl_native_conversions {
    ($uint:ty; signed: $($signed:ty),*; unsigned: $($unsigned:ty),*) => {
        $(
            impl From<$signed> for $uint {
                fn from(value: $signed) -> Self {
                    <$uint>::from_native(value)
                }
            }
        )*

        $(
            impl From<$unsigned> for $uint {
                fn from(value: $unsigned) -> Self {
                    <$uint>::from_native(value)
                }
            }

            /// Fails when the value needs more bits than the target type has.
            impl TryFrom<$uint> for $unsigned {
                type Error = $crate::error::UintError;

                fn try_from(value: $uint) -> Result<Self, Self::Error> {
                    let bits = <$unsigned as $crate::primitives::NativeInt>::BITS;

                    if value.bits() > bits {
                        return Err($crate::error::UintError::Overflow { bits });
                    }

                    Ok(value.truncate_to())
                }
            }
        )*
    };
}

/// `Display`, `Octal`, `LowerHex`, `UpperHex` and `Binary`.
macro_rules! impl_radix_fmt {
    (@one $uint:ty, $fmt:ident, $base:expr, $prefix:expr, $upper:expr) => {
        impl ::std::fmt::$fmt for $uint {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::primitives::algo::radix::fmt_radix(*self, f, $base, $prefix, $upper)
            }
        }
    };

    ($uint:ty) => {
        impl_radix_fmt!(@one $uint, Display, 10, "", false);
        impl_radix_fmt!(@one $uint, Octal, 8, "0o", false);
        impl_radix_fmt!(@one $uint, LowerHex, 16, "0x", false);
        impl_radix_fmt!(@one $uint, UpperHex, 16, "0x", true);
        impl_radix_fmt!(@one $uint, Binary, 2, "0b", false);
    };
}

pub(crate) use impl_assign_ops;
pub(crate) use impl_native_conversions;
pub(crate) use impl_native_ops;
pub(crate) use impl_radix_fmt;
