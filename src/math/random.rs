use rand::Rng;
use rand_distr::StandardNormal;

use crate::math::matrix::Matrix;

/// Fills a container with independent draws from N(0, 1).
///
/// The random source is always passed in, so a seeded `StdRng` gives a
/// reproducible initialisation.
pub trait Randomize {
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R);
}

impl Randomize for [f64] {
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for e in self.iter_mut() {
            *e = rng.sample(StandardNormal);
        }
    }
}

impl Randomize for Vec<f64> {
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.as_mut_slice().randomize(rng);
    }
}

impl Randomize for Matrix {
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in self.data.iter_mut() {
            row.randomize(rng);
        }
    }
}
