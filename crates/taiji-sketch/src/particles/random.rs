use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform `f32` source over `[0, 1)`.
pub trait UnitRandom {
    fn next_unit(&mut self) -> f32;
}

impl<T: UnitRandom + ?Sized> UnitRandom for &mut T {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

impl<T: UnitRandom + ?Sized> UnitRandom for Box<T> {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// Adapter from any `rand::Rng` (a seeded `SmallRng` by default).
#[derive(Debug, Clone)]
pub struct RandomSource<R = SmallRng> {
    rng: R,
}

impl RandomSource<SmallRng> {
    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }

    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self { rng: SmallRng::from_entropy() }
    }
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> UnitRandom for RandomSource<R> {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        // `Standard` for f32 samples [0, 1).
        self.rng.r#gen::<f32>()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// An empty list yields `0.0` forever.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self { values: values.into(), next: 0 }
    }

    /// The same value every draw.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl UnitRandom for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}
