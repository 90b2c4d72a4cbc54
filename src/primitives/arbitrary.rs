//! `quickcheck::Arbitrary` support, enabled by the `quickcheck` feature.
//!
//! Values are drawn limb by limb so that every bit pattern is reachable.
//! Shrinking shrinks the limbs independently.

use crate::primitives::{U128, U256};

use quickcheck::{Arbitrary, Gen};

impl Arbitrary for U128 {
    fn arbitrary(g: &mut Gen) -> Self {
        U128::new(u64::arbitrary(g), u64::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            (self.upper(), self.lower())
                .shrink()
                .map(|(upper, lower)| U128::new(upper, lower)),
        )
    }
}

impl Arbitrary for U256 {
    fn arbitrary(g: &mut Gen) -> Self {
        U256::new(U128::arbitrary(g), U128::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            (self.upper(), self.lower())
                .shrink()
                .map(|(upper, lower)| U256::new(upper, lower)),
        )
    }
}
