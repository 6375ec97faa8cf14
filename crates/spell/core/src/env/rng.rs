//! Random sources for deck shuffling.
//!
//! Shuffles depend on an injected [`RandomSource`] so that draw order is
//! reproducible under a fixed seed.

/// Stateful uniform random source.
pub trait RandomSource {
    /// Generates the next random u32.
    fn next_u32(&mut self) -> u32;

    /// Uniform index in `[lo, hi)`. Returns `lo` when the range is empty.
    fn index_in(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo + 1 {
            return lo;
        }
        // Spans past u32::MAX are clamped; deck sizes never get near it.
        let span = u32::try_from(hi - lo).unwrap_or(u32::MAX);
        // Lemire's multiply-shift; low products under the threshold are
        // redrawn so every offset is equally likely.
        let threshold = span.wrapping_neg() % span;
        loop {
            let product = u64::from(self.next_u32()) * u64::from(span);
            if product as u32 >= threshold {
                return lo + (product >> 32) as usize;
            }
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces the same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.state = Self::pcg_step(rng.state.wrapping_add(seed));
        rng
    }

    /// Seeds from the configured battle seed, falling back to `fallback`
    /// (typically wall-clock or match id) when none is configured.
    pub fn from_config(config: &crate::config::SpellCoreConfig, fallback: u64) -> Self {
        Self::seeded(config.shuffle_seed.unwrap_or(fallback))
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}
