/// Decimal digits handled per conversion chunk. Nine digits keep both the
/// chunk value and the matching power of ten inside a single 32-bit limb,
/// so one short multiply plus one addition absorbs a whole chunk.
pub const DIGITS_PER_CHUNK: usize = 9;

/// `10^DIGITS_PER_CHUNK`, the base of the chunked decimal conversions.
pub const DECIMAL_CHUNK_RADIX: u32 = 1_000_000_000;

/// `POW10[k]` scales an accumulator past a k-digit chunk.
pub const POW10: [u32; DIGITS_PER_CHUNK + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// The limb base, `2^32`.
pub const LIMB_RADIX: u64 = 1 << 32;

/// Values with magnitude up to this bound are served from the shared cache.
pub const MAX_CACHED: usize = 16;
