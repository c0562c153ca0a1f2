use lazy_static::lazy_static;

use crate::big_int_constants::MAX_CACHED;
use crate::BigInt;

lazy_static! {
    /// Canonical zero: a single zero limb, non-negative.
    pub static ref ZERO: BigInt = BigInt::from_raw(vec![0], false);
    pub static ref ONE: BigInt = BigInt::from_raw(vec![1], false);
    pub static ref NEG_ONE: BigInt = BigInt::from_raw(vec![u32::MAX], true);
    /// Small non-negative values `0..=MAX_CACHED`.
    pub static ref POS_CACHE: [BigInt; MAX_CACHED + 1] =
        std::array::from_fn(|v| BigInt::from_raw(vec![v as u32], false));
    /// Small negative values `0..=-MAX_CACHED`, stored in two's-complement
    /// form; index 0 aliases canonical zero.
    pub static ref NEG_CACHE: [BigInt; MAX_CACHED + 1] = std::array::from_fn(|v| {
        if v == 0 {
            BigInt::from_raw(vec![0], false)
        } else {
            BigInt::from_raw(vec![(v as u32).wrapping_neg()], true)
        }
    });
}
