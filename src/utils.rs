//! Hashing helpers for the partition table.
//!
//! Partitions are hash-consed by folding their labels and edge endpoints through a
//! pairing function. Arithmetic wraps, so the result is only a hash, not a perfect
//! encoding.

/// [Szudzik pairing function][szudzik-pairing].
///
/// ```text
/// (a, b) -> if (a<b) then (b^2 + a) else (a^2 + a + b)
/// ```
///
/// [szudzik-pairing]: http://szudzik.com/ElegantPairing.pdf
pub fn pairing_szudzik(a: u64, b: u64) -> u64 {
    if a < b {
        b.wrapping_mul(b).wrapping_add(a)
    } else {
        a.wrapping_mul(a).wrapping_add(a).wrapping_add(b)
    }
}

/// Pairing function for two `u64` values.
pub fn pairing2(a: u64, b: u64) -> u64 {
    pairing_szudzik(a, b)
}

/// Spreads the bits of `x` so that small consecutive inputs land in distant buckets.
fn mix(x: u64) -> u64 {
    // splitmix64 finalizer
    let x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    let x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

pub trait MyHash {
    fn hash(&self) -> u64;
}

impl MyHash for usize {
    fn hash(&self) -> u64 {
        *self as u64
    }
}

impl<T: MyHash> MyHash for [T] {
    fn hash(&self) -> u64 {
        self.iter()
            .fold(self.len() as u64, |acc, x| mix(pairing2(acc, x.hash())))
    }
}

impl<T: MyHash> MyHash for Vec<T> {
    fn hash(&self) -> u64 {
        self.as_slice().hash()
    }
}
