//! Chain extension: grow a seed sequence one symbol at a time by sampling
//! from a trained model.
use crate::error::MarkovError;
use crate::model::{ContextModel, Symbol};
use crate::sampler::WeightedSampler;
use log::trace;
use rand::Rng;

/// Extend `seed` by `length` symbols drawn from `model`.
///
/// Each step takes the trailing `order` symbols of the chain as the lookup
/// context and samples the next symbol with probability equal to its
/// within-context frequency. The model is read-only; the returned chain owns
/// its symbols and has length `seed.len() + length`.
///
/// Fails with [`MarkovError::SeedLengthMismatch`] unless the seed is exactly
/// `order` symbols long, and with [`MarkovError::UnknownContext`] the moment
/// the chain ends in a context the training data never produced. There is no
/// smoothing or fallback.
pub fn extend<S: Symbol, R: Rng>(
    model: &ContextModel<S>,
    seed: &[S],
    length: usize,
    rng: &mut R,
) -> Result<Vec<S>, MarkovError> {
    if seed.len() != model.order() {
        return Err(MarkovError::SeedLengthMismatch {
            seed_len: seed.len(),
            order: model.order(),
        });
    }
    let mut chain = seed.to_vec();
    for _ in 0..length {
        let context = &chain[chain.len() - model.order()..];
        let successors = model
            .successors(context)
            .ok_or_else(|| MarkovError::UnknownContext(format!("{:?}", context)))?;
        let candidates: Vec<_> = successors.iter().collect();
        let weights: Vec<_> = candidates
            .iter()
            .map(|(_, transition)| transition.freq_within_context)
            .collect();
        let picked = WeightedSampler::new(&weights)?.draw(rng);
        trace!("{:?} -> {:?}", context, candidates[picked].0);
        let next = candidates[picked].0.clone();
        chain.push(next);
    }
    Ok(chain)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn cyclic_model() -> ContextModel<u8> {
        let seqs = vec![b"AABAABAAB".to_vec()];
        ContextModel::train(2, &seqs).unwrap().0
    }

    #[test]
    fn deterministic_cycle() {
        // Every context of the training cycle has a single successor, so the
        // draws cannot change the outcome.
        let model = cyclic_model();
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(9);
        let chain = extend(&model, b"AA", 10, &mut rng).unwrap();
        assert_eq!(chain, b"AABAABAABAAB".to_vec());
    }

    #[test]
    fn chain_length() {
        let model = cyclic_model();
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(10);
        for length in [0, 1, 17] {
            let chain = extend(&model, b"AB", length, &mut rng).unwrap();
            assert_eq!(chain.len(), 2 + length);
        }
    }

    #[test]
    fn rejects_wrong_seed_length() {
        let model = cyclic_model();
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(11);
        let err = extend(&model, b"AAB", 5, &mut rng).unwrap_err();
        assert_eq!(
            err,
            MarkovError::SeedLengthMismatch {
                seed_len: 3,
                order: 2
            }
        );
    }

    #[test]
    fn unseen_seed_context_fails() {
        let model = cyclic_model();
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(12);
        match extend(&model, b"BB", 1, &mut rng).unwrap_err() {
            MarkovError::UnknownContext(_) => {}
            other => panic!("{}", other),
        }
    }

    #[test]
    fn stops_at_dead_end() {
        // "ACGT" of order 1: T has no successor, so the chain dies there.
        let seqs = vec![b"ACGT".to_vec()];
        let model = ContextModel::train(1, &seqs).unwrap().0;
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(13);
        let err = extend(&model, b"G", 5, &mut rng).unwrap_err();
        match err {
            MarkovError::UnknownContext(ctx) => assert!(ctx.contains("84")),
            other => panic!("{}", other),
        }
    }

    #[test]
    fn branching_follows_training_distribution() {
        // Order 1 over "AABAC...": from A, successors are A, B, C.
        let seqs = vec![b"AAABACAAABAC".to_vec()];
        let model = ContextModel::train(1, &seqs).unwrap().0;
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(77);
        let mut from_a = [0u32; 3];
        let trials = 30_000;
        for _ in 0..trials {
            let chain = extend(&model, b"A", 1, &mut rng).unwrap();
            match chain[1] {
                b'A' => from_a[0] += 1,
                b'B' => from_a[1] += 1,
                b'C' => from_a[2] += 1,
                other => panic!("{}", other),
            }
        }
        let a = model.successors(b"A".as_ref()).unwrap();
        for (slot, symbol) in [b'A', b'B', b'C'].iter().enumerate() {
            let expected = a[symbol].freq_within_context;
            let observed = from_a[slot] as f64 / trials as f64;
            assert!((observed - expected).abs() < 0.02, "{} {}", observed, expected);
        }
    }
}
