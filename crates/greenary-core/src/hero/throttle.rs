/// Coalesces bursts of scroll events into one recompute per tick.
/// A newer offset replaces any pending one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollCoalescer {
    pending: Option<f64>,
}

impl ScrollCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, offset: f64) {
        self.pending = Some(offset);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Latest offset since the last take, if any
    pub fn take(&mut self) -> Option<f64> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_offset_wins() {
        let mut coalescer = ScrollCoalescer::new();
        coalescer.push(10.0);
        coalescer.push(25.0);
        coalescer.push(40.0);
        assert!(coalescer.is_pending());
        assert_eq!(coalescer.take(), Some(40.0));
        assert_eq!(coalescer.take(), None);
    }
}
