//! Finite-context (n-th order) Markov models of symbol sequences.
//!
//! A model of order `k` counts, for every `k`-symbol context in the training
//! data, how often each symbol follows it, and normalizes the counts into
//! frequencies. A trained model can then extend a seed context one symbol at
//! a time by weighted random sampling, producing new sequences with the same
//! local statistics as the training data.
//!
//! ```rust
//! use rand::SeedableRng;
//! let seqs = vec![b"AABAABAAB".to_vec()];
//! let (model, _report) = markseq::ContextModel::train(2, &seqs).unwrap();
//! let mut rng: rand_xoshiro::Xoshiro256StarStar = SeedableRng::seed_from_u64(3909);
//! let chain = markseq::extend(&model, b"AA", 6, &mut rng).unwrap();
//! assert_eq!(chain, b"AABAABAA".to_vec());
//! ```
pub mod chain;
pub mod error;
pub mod gen_seq;
pub mod model;
pub mod sampler;
pub mod window;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

pub use crate::chain::extend;
pub use crate::error::MarkovError;
pub use crate::model::{Context, ContextModel, Symbol, TrainingReport, Transition};
pub use crate::sampler::WeightedSampler;
pub use crate::window::{sliding_windows, SlidingWindows};

/// Train a model on `seqs` and extend `seed` by `length` symbols in one call,
/// with an internally seeded RNG so the output is reproducible for a given
/// `rng_seed`.
pub fn generate<S, T>(
    order: usize,
    seqs: &[T],
    seed: &[S],
    length: usize,
    rng_seed: u64,
) -> Result<Vec<S>, MarkovError>
where
    S: Symbol,
    T: std::borrow::Borrow<[S]>,
{
    let (model, _report) = ContextModel::train(order, seqs)?;
    let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(rng_seed);
    chain::extend(&model, seed, length, &mut rng)
}
