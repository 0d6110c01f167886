use std::fmt;

/// Errors raised by the model-building and generation routines.
///
/// Every variant carries the offending values so a caller can tell which
/// input broke which precondition without re-deriving them.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkovError {
    /// Window/step parameters cannot tile the sequence.
    InvalidWindowParameters {
        win_size: usize,
        step: usize,
        seq_len: usize,
    },
    /// Training order must be at least one.
    InvalidOrder(usize),
    /// Weight set is empty, contains a negative weight, or sums to zero.
    DegenerateWeights { len: usize, total: f64 },
    /// Seed length does not match the order the model was trained with.
    SeedLengthMismatch { seed_len: usize, order: usize },
    /// Generation reached a context that was never observed in training.
    UnknownContext(String),
}

impl fmt::Display for MarkovError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWindowParameters {
                win_size,
                step,
                seq_len,
            } => write!(
                f,
                "invalid window parameters: win_size={}, step={}, sequence length={}",
                win_size, step, seq_len
            ),
            Self::InvalidOrder(order) => write!(f, "invalid model order: {}", order),
            Self::DegenerateWeights { len, total } => write!(
                f,
                "degenerate weights: {} weights summing to {}",
                len, total
            ),
            Self::SeedLengthMismatch { seed_len, order } => write!(
                f,
                "seed length mismatch: seed has {} symbols, model order is {}",
                seed_len, order
            ),
            Self::UnknownContext(ctx) => write!(f, "context never observed in training: {}", ctx),
        }
    }
}

impl std::error::Error for MarkovError {}
