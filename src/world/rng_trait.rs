//! RNG trait abstraction for generation and simulation
//!
//! Generation passes and creature logic only need a handful of dice; any
//! `rand::Rng` (seeded Xoshiro in practice) provides them through the
//! blanket impl below.

/// Random number generator trait for world code
pub trait WorldRng {
    /// Uniform integer in `[min, max]`, or `min` when the range is empty
    fn roll(&mut self, min: i32, max: i32) -> i32;

    /// Uniform f32 in [0.0, 1.0)
    fn roll_unit(&mut self) -> f32;

    /// True when `roll(0, 100) < percent`, i.e. `percent` in 101
    fn chance_percent(&mut self, percent: i32) -> bool {
        self.roll(0, 100) < percent
    }

    /// True when `roll(0, 1000) < odds`, i.e. `odds` in 1001
    fn chance_per_mille(&mut self, odds: i32) -> bool {
        self.roll(0, 1000) < odds
    }

    /// Either -1.0 or 1.0 with equal odds
    fn coin_sign(&mut self) -> f32 {
        if self.roll(0, 1) == 0 {
            -1.0
        } else {
            1.0
        }
    }
}

impl<T: ?Sized + rand::Rng> WorldRng for T {
    fn roll(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        rand::Rng::gen_range(self, min..=max)
    }

    fn roll_unit(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}
