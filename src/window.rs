//! Fixed-size, fixed-step windows over a symbol slice.
//!
//! The iterator yields borrowed slices at offsets `0, step, 2*step, ...` and
//! stops as soon as the remaining tail is shorter than the window, so a
//! trailing fragment is never emitted. The number of windows for a sequence of
//! length `n` is therefore `(n - win_size) / step + 1`.
use crate::error::MarkovError;

/// Validate the window parameters and return the lazy window iterator.
///
/// All checks run here, before any element of `seq` is read: `win_size` and
/// `step` must be at least one, `step` must not exceed `win_size`, and
/// `win_size` must not exceed the sequence length.
pub fn sliding_windows<S>(
    seq: &[S],
    win_size: usize,
    step: usize,
) -> Result<SlidingWindows<'_, S>, MarkovError> {
    if win_size == 0 || step == 0 || step > win_size || win_size > seq.len() {
        return Err(MarkovError::InvalidWindowParameters {
            win_size,
            step,
            seq_len: seq.len(),
        });
    }
    Ok(SlidingWindows {
        seq,
        win_size,
        step,
        start: 0,
    })
}

/// Single-pass window iterator returned by [`sliding_windows`].
#[derive(Debug, Clone)]
pub struct SlidingWindows<'a, S> {
    seq: &'a [S],
    win_size: usize,
    step: usize,
    start: usize,
}

impl<'a, S> Iterator for SlidingWindows<'a, S> {
    type Item = &'a [S];
    fn next(&mut self) -> Option<Self::Item> {
        let stop = self.start + self.win_size;
        if stop > self.seq.len() {
            return None;
        }
        let chunk = &self.seq[self.start..stop];
        self.start += self.step;
        Some(chunk)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.seq.len().checked_sub(self.start + self.win_size) {
            Some(tail) => tail / self.step + 1,
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<'a, S> ExactSizeIterator for SlidingWindows<'a, S> {}
