//! n-th order context models: occurrence counts of (context, next symbol)
//! pairs over all training windows, plus the two frequencies derived from
//! those counts.
//!
//! Training is two-phase. Counts are accumulated first, over any number of
//! sequences and any number of `train`/`update` calls; both frequency fields
//! are then recomputed from the counts, so every denominator reflects all
//! merged observations. The counts are canonical and the frequencies are
//! always consistent with them after a public call returns.
use crate::error::MarkovError;
use crate::window::sliding_windows;
use log::debug;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

/// What a training symbol needs: by-value storage, structural equality and
/// hashing for table keys, a total order for deterministic candidate
/// enumeration, and debug rendering for diagnostics. Blanket-implemented;
/// `u8` and `char` are the usual instantiations.
pub trait Symbol: Clone + Eq + Ord + Hash + fmt::Debug {}
impl<T: Clone + Eq + Ord + Hash + fmt::Debug> Symbol for T {}

/// A fixed-length tuple of symbols used as a table key.
///
/// The length always equals the order of the model holding it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Context<S: Symbol>(Box<[S]>);

impl<S: Symbol> Context<S> {
    fn from_slice(symbols: &[S]) -> Self {
        Self(symbols.to_vec().into_boxed_slice())
    }
    pub fn symbols(&self) -> &[S] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Lets the table answer lookups for a bare `&[S]` without allocating a key.
impl<S: Symbol> Borrow<[S]> for Context<S> {
    fn borrow(&self) -> &[S] {
        &self.0
    }
}

/// One observed (context, next symbol) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Times this pair was seen across all training sequences.
    pub count: u64,
    /// `count` over the number of windows in the whole model.
    pub freq_of_all_windows: f64,
    /// `count` over the number of observations sharing this context.
    /// Sums to one over the successors of any single context.
    pub freq_within_context: f64,
}

/// Per-call training statistics, including the skip list for sequences too
/// short to yield a single window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Sequences presented in this batch.
    pub sequences: usize,
    /// Windows accumulated from this batch.
    pub windows: u64,
    /// Batch indices of sequences shorter than `order + 1`, skipped entirely.
    pub skipped: Vec<usize>,
}

/// A trained (or in-training) model of order `order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextModel<S: Symbol> {
    order: usize,
    total_windows: u64,
    table: HashMap<Context<S>, BTreeMap<S, Transition>>,
}

impl<S: Symbol> ContextModel<S> {
    /// An empty model. The order must be at least one.
    pub fn new(order: usize) -> Result<Self, MarkovError> {
        if order == 0 {
            return Err(MarkovError::InvalidOrder(order));
        }
        Ok(Self {
            order,
            total_windows: 0,
            table: HashMap::new(),
        })
    }
    /// Train a fresh model of the given order on a batch of sequences.
    pub fn train<T: Borrow<[S]>>(
        order: usize,
        seqs: &[T],
    ) -> Result<(Self, TrainingReport), MarkovError> {
        let mut model = Self::new(order)?;
        let report = model.update(seqs);
        Ok((model, report))
    }
    /// Merge another batch of sequences into the model, additively, then
    /// recompute both frequency fields from the merged counts.
    ///
    /// Sequences shorter than `order + 1` are skipped and listed in the
    /// report by their index within this batch; the rest of the batch still
    /// trains.
    pub fn update<T: Borrow<[S]>>(&mut self, seqs: &[T]) -> TrainingReport {
        let mut report = TrainingReport {
            sequences: seqs.len(),
            ..TrainingReport::default()
        };
        for (idx, seq) in seqs.iter().enumerate() {
            match self.accumulate(seq.borrow()) {
                Some(added) => report.windows += added,
                None => report.skipped.push(idx),
            }
        }
        if !report.skipped.is_empty() {
            debug!(
                "Skipped {} sequence(s) shorter than {} symbols",
                report.skipped.len(),
                self.order + 1
            );
        }
        self.normalize();
        report
    }
    // Phase 1: count every (context, next) pair of one sequence.
    // None if the sequence cannot yield a single window.
    fn accumulate(&mut self, seq: &[S]) -> Option<u64> {
        let windows = sliding_windows(seq, self.order + 1, 1).ok()?;
        let mut added = 0;
        for win in windows {
            let (context, next) = win.split_at(self.order);
            let successors = self
                .table
                .entry(Context::from_slice(context))
                .or_insert_with(BTreeMap::new);
            successors.entry(next[0].clone()).or_default().count += 1;
            added += 1;
        }
        self.total_windows += added;
        Some(added)
    }
    // Phase 2: derive both frequency kinds from the counts. The global
    // denominator is shared by the whole table; the local one is the count
    // sum of each context's successors.
    fn normalize(&mut self) {
        let total_windows = self.total_windows as f64;
        for successors in self.table.values_mut() {
            let context_total: u64 = successors.values().map(|t| t.count).sum();
            for transition in successors.values_mut() {
                transition.freq_of_all_windows = transition.count as f64 / total_windows;
                transition.freq_within_context =
                    transition.count as f64 / context_total as f64;
            }
        }
    }
    /// The context length this model was built with.
    pub fn order(&self) -> usize {
        self.order
    }
    /// Windows accumulated so far, over all batches.
    pub fn total_windows(&self) -> u64 {
        self.total_windows
    }
    /// Number of distinct contexts.
    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
    /// The successor table of one context, or `None` if it was never
    /// observed. Symbols enumerate in their natural order.
    pub fn successors(&self, context: &[S]) -> Option<&BTreeMap<S, Transition>> {
        self.table.get(context)
    }
    /// All observed contexts, in no particular order.
    pub fn contexts(&self) -> impl Iterator<Item = &Context<S>> {
        self.table.keys()
    }
    /// All (context, successor table) pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Context<S>, &BTreeMap<S, Transition>)> {
        self.table.iter()
    }
}
