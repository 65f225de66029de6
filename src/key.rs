//! The scalar key stored in every [`Node`][crate::Node].
//!
//! Most algorithms in this crate only need `K: Ord`. A few need a little
//! arithmetic on top of ordering: [`has_path_sum`][crate::has_path_sum]
//! subtracts keys from a running total and
//! [`is_bst_efficient`][crate::is_bst_efficient] needs the next representable
//! key to tighten its lower bound. Those are expressed by [`Key`].

use std::fmt;

/// An ordered integer scalar usable as a tree key.
pub trait Key: Ord + Copy + fmt::Debug {
    /// The smallest representable key.
    const MIN: Self;
    /// The largest representable key.
    const MAX: Self;
    /// The additive identity.
    const ZERO: Self;

    /// The next key after `self`, or `None` if `self` is [`Key::MAX`].
    fn successor(self) -> Option<Self>;

    /// `self - rhs`, wrapping around at the type's boundary.
    fn wrapping_sub(self, rhs: Self) -> Self;
}

macro_rules! impl_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl Key for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;

                #[inline]
                fn successor(self) -> Option<Self> {
                    self.checked_add(1)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }
            }
        )*
    };
}

impl_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
