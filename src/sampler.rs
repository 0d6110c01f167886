//! Weighted index sampling by cumulative-distribution inversion.
//!
//! The running totals of the weight list are computed once; every draw then
//! scales a uniform variate into `[0, total)` and bisects the totals for the
//! first entry exceeding it, so index `i` is returned with probability
//! `weights[i] / total`.
use crate::error::MarkovError;
use rand::Rng;

/// A reusable sampler over one fixed set of non-negative weights.
#[derive(Debug, Clone)]
pub struct WeightedSampler {
    totals: Vec<f64>,
}

impl WeightedSampler {
    /// Build the cumulative table.
    ///
    /// The weights must be non-empty, non-negative, and sum to a positive
    /// value; anything else cannot define a distribution and is rejected
    /// before the table is stored.
    pub fn new(weights: &[f64]) -> Result<Self, MarkovError> {
        let degenerate = |total| MarkovError::DegenerateWeights {
            len: weights.len(),
            total,
        };
        if weights.is_empty() || weights.iter().any(|w| *w < 0f64) {
            return Err(degenerate(weights.iter().sum()));
        }
        let mut running = 0f64;
        let totals: Vec<_> = weights
            .iter()
            .map(|w| {
                running += w;
                running
            })
            .collect();
        if running <= 0f64 {
            return Err(degenerate(running));
        }
        Ok(Self { totals })
    }
    /// Draw one index, biased by the weight magnitudes.
    ///
    /// Draws are independent; the same sampler can be reused for any number
    /// of them.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> usize {
        let total = *self.totals.last().unwrap();
        let scaled = rng.gen::<f64>() * total;
        let index = self.totals.partition_point(|&t| t <= scaled);
        // The scaling can round up to the exact total; land on the last slot.
        index.min(self.totals.len() - 1)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    #[test]
    fn uniform_weights() {
        let sampler = WeightedSampler::new(&[1f64, 1f64, 1f64, 1f64]).unwrap();
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(43290);
        let mut hits = [0u32; 4];
        let draws = 100_000;
        for _ in 0..draws {
            hits[sampler.draw(&mut rng)] += 1;
        }
        for &h in hits.iter() {
            let freq = h as f64 / draws as f64;
            assert!((freq - 0.25).abs() < 0.01, "{}", freq);
        }
    }
    #[test]
    fn zero_weight_never_drawn() {
        let sampler = WeightedSampler::new(&[0f64, 5f64]).unwrap();
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(482);
        for _ in 0..1_000 {
            assert_eq!(sampler.draw(&mut rng), 1);
        }
    }
    #[test]
    fn skewed_weights() {
        let sampler = WeightedSampler::new(&[1f64, 3f64]).unwrap();
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(320);
        let draws = 100_000;
        let ones = (0..draws).filter(|_| sampler.draw(&mut rng) == 1).count();
        let freq = ones as f64 / draws as f64;
        assert!((freq - 0.75).abs() < 0.01, "{}", freq);
    }
    #[test]
    fn interior_zero_skipped() {
        let sampler = WeightedSampler::new(&[2f64, 0f64, 2f64]).unwrap();
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(98);
        for _ in 0..1_000 {
            assert_ne!(sampler.draw(&mut rng), 1);
        }
    }
    #[test]
    fn rejects_degenerate_weights() {
        assert!(WeightedSampler::new(&[]).is_err());
        assert!(WeightedSampler::new(&[0f64, 0f64]).is_err());
        assert!(WeightedSampler::new(&[1f64, -1f64]).is_err());
        match WeightedSampler::new(&[0f64]).unwrap_err() {
            MarkovError::DegenerateWeights { len, total } => {
                assert_eq!(len, 1);
                assert_eq!(total, 0f64);
            }
            other => panic!("{}", other),
        }
    }
}
