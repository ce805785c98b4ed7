use rand::rngs::{StdRng, ThreadRng};
use rand::{RngExt, SeedableRng, TryRng};
use std::convert::Infallible;

/// Source of uniform draws used by every stochastic formula in the core.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..upper`. `upper` must be non-zero.
    fn next_below(&mut self, upper: u64) -> u64 {
        let index = (self.next_f64() * upper as f64) as u64;
        index.min(upper.saturating_sub(1))
    }
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        RngSource(rand::rng())
    }
}

impl<R: RngExt> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<f64>,
    position: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<f64>) -> Self {
        FixedSequence {
            values,
            position: 0,
        }
    }

    pub fn repeat(value: f64) -> Self {
        FixedSequence::new(vec![value])
    }

    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for FixedSequence {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }

        let value = self.values[self.position % self.values.len()];
        self.position += 1;

        // keep the [0, 1) contract even for hand-written sequences
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Exposes a `RandomSource` as a `rand` generator so the `rand::seq`
/// helpers can run on injected draws.
pub struct SourceRng<'a>(pub &'a mut dyn RandomSource);

impl TryRng for SourceRng<'_> {
    type Error = Infallible;

    fn try_next_u32(&mut self) -> Result<u32, Infallible> {
        Ok((self.0.next_f64() * 4_294_967_296.0) as u32)
    }

    fn try_next_u64(&mut self) -> Result<u64, Infallible> {
        let high = self.try_next_u32()? as u64;
        let low = self.try_next_u32()? as u64;
        Ok((high << 32) | low)
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Infallible> {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.try_next_u64()?.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        Ok(())
    }
}
