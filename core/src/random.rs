use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Source of uniform samples in [0, 1).
// Threaded explicitly through generation so runs can be replayed
// with a scripted source in tests.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

// Uniform offset in [-amplitude, +amplitude).
// Scales last so a large amplitude cannot overflow.
#[inline]
pub fn displacement<R: RandomSource + ?Sized>(rng: &mut R, amplitude: f64) -> f64 {
    (rng.next_unit() * 2.0 - 1.0) * amplitude
}

// StdRng backed source, reseeded for every generation run
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    // Seeded from OS entropy, so repeated runs differ
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    // Fixed seed if given, entropy otherwise
    pub fn for_run(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

// Replays a fixed list of draws, wrapping around at the end.
// An empty script always yields 0.5, which means zero displacement.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    taken: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            taken: 0,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    // How many samples have been handed out so far
    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let value = if self.draws.is_empty() {
            0.5
        } else {
            self.draws[self.taken % self.draws.len()]
        };
        self.taken += 1;
        value
    }
}
