use rand::Rng;

/// Source of the "which canned string" decision, injectable so tests can
/// pin the selection.
pub trait ResponseSelector: Send + Sync {
    /// Returns an index in `0..len`. `len` is never 0.
    fn pick(&self, len: usize) -> usize;
}

pub struct ThreadRngSelector;

impl ResponseSelector for ThreadRngSelector {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same index (clamped to the valid range).
pub struct FixedSelector(pub usize);

impl ResponseSelector for FixedSelector {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}
