//! Injected random number source for hit rolls.
//!
//! The encounter never reaches for a process-global generator. Every roll
//! goes through a [`RandomNumberService`] supplied by the caller, which keeps
//! attack outcomes reproducible under test and replay.

/// Random number source consumed by [`crate::Encounter`].
pub trait RandomNumberService {
    /// Returns a value expected to lie in `[min, max)`.
    ///
    /// Callers do not validate the result: whatever integer comes back is
    /// compared directly against the defender's evasion.
    fn range(&mut self, min: i32, max: i32) -> i32;
}

impl<R: RandomNumberService + ?Sized> RandomNumberService for &mut R {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        (**self).range(min, max)
    }
}

impl<R: RandomNumberService + ?Sized> RandomNumberService for Box<R> {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        (**self).range(min, max)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64 bits of state, 32 bits of output per step.
/// Equal seeds always produce equal sequences.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRandom {
    state: u64,
}

impl PcgRandom {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advances the generator and returns the next 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }

    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift high bits, then rotate by the top five.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRandom {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomNumberService for PcgRandom {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min)) as u64;
        let offset = u64::from(self.next_u32()) % span;
        (i64::from(min) + offset as i64) as i32
    }
}
