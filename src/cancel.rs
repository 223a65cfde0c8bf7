// "Keep running" flag shared between the frame loop and the window adapter.
// Single-threaded, so a shared Cell is all it takes.

use std::cell::Cell;
use std::rc::Rc;

/// Cloning hands out another handle to the same flag.
#[derive(Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn clones_observe_cancellation() {
        let token = CancelToken::new();
        let adapter_side = token.clone();
        assert!(!token.is_cancelled());
        adapter_side.cancel();
        assert!(token.is_cancelled());
        // Idempotent.
        adapter_side.cancel();
        assert!(token.is_cancelled());
    }
}
