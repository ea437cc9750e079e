/// Direction of a variant switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Index reached by stepping once from `current` in a list of `count` items, wrapping around
    pub fn step(self, current: usize, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        let current = current % count;
        match self {
            Direction::Next => (current + 1) % count,
            Direction::Previous => (current + count - 1) % count,
        }
    }
}

/// Lifecycle of the hero sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroPhase {
    /// Frames of the variant are still settling
    Loading { variant: usize },
    /// All attempts settled; scrubbing is live
    Ready { variant: usize, frame: usize },
    /// A switch was requested; the old frame stays up until the new variant starts loading
    Switching { from: usize, to: usize },
}

impl HeroPhase {
    /// Variant the phase is about (the target, while switching)
    pub fn variant(&self) -> usize {
        match *self {
            HeroPhase::Loading { variant } | HeroPhase::Ready { variant, .. } => variant,
            HeroPhase::Switching { to, .. } => to,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, HeroPhase::Ready { .. })
    }
}

/// Active variant and displayed frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrubState {
    pub variant: usize,
    pub frame: usize,
}
