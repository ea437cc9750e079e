use std::time::{Duration, Instant};

/// Length of a single card's fade-in
pub const REVEAL_FADE: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardReveal {
    /// Never been visible
    Hidden,
    /// Seen once; fade starts at the given instant
    Scheduled(Instant),
}

/// Staggered, once-only reveal of catalog cards.
///
/// Cards reported visible in the same batch start fading in `stagger` apart,
/// in batch order. After its first sighting a card is no longer observed, so
/// scrolling it out and back in does not replay the animation.
#[derive(Debug, Clone)]
pub struct RevealScheduler {
    cards: Vec<CardReveal>,
    stagger: Duration,
}

impl RevealScheduler {
    pub fn new(card_count: usize, stagger: Duration) -> Self {
        Self {
            cards: vec![CardReveal::Hidden; card_count],
            stagger,
        }
    }

    /// Report the cards currently intersecting the viewport.
    ///
    /// Returns how many cards were newly scheduled.
    pub fn observe(&mut self, visible: impl IntoIterator<Item = usize>, now: Instant) -> usize {
        let mut batch_position = 0u32;
        for index in visible {
            let Some(state) = self.cards.get_mut(index) else {
                continue;
            };
            if *state == CardReveal::Hidden {
                *state = CardReveal::Scheduled(now + self.stagger * batch_position);
                batch_position += 1;
            }
        }
        batch_position as usize
    }

    /// Fade-in progress of a card in [0.0, 1.0]
    pub fn opacity(&self, index: usize, now: Instant) -> f64 {
        match self.cards.get(index) {
            Some(CardReveal::Scheduled(start)) => {
                if now <= *start {
                    return 0.0;
                }
                let elapsed = now.duration_since(*start);
                (elapsed.as_secs_f64() / REVEAL_FADE.as_secs_f64()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Whether the card has started (or finished) revealing
    pub fn is_revealed(&self, index: usize, now: Instant) -> bool {
        matches!(self.cards.get(index), Some(CardReveal::Scheduled(start)) if now >= *start)
    }

    /// Whether any card is still mid-fade or waiting for its turn
    pub fn is_animating(&self, now: Instant) -> bool {
        self.cards.iter().any(|card| match card {
            CardReveal::Scheduled(start) => now < *start + REVEAL_FADE,
            CardReveal::Hidden => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAGGER: Duration = Duration::from_millis(100);

    #[test]
    fn test_initially_visible_cards_reveal_in_sequence() {
        let start = Instant::now();
        let mut reveal = RevealScheduler::new(3, STAGGER);
        assert_eq!(reveal.observe([0, 1, 2], start), 3);

        assert!(reveal.is_revealed(0, start));
        assert!(!reveal.is_revealed(1, start));
        assert!(reveal.is_revealed(1, start + STAGGER));
        assert!(!reveal.is_revealed(2, start + STAGGER));
        assert!(reveal.is_revealed(2, start + STAGGER * 2));
    }

    #[test]
    fn test_card_reveals_only_once() {
        let start = Instant::now();
        let mut reveal = RevealScheduler::new(2, STAGGER);
        reveal.observe([1], start);

        // Seen again much later: the original schedule stands
        assert_eq!(reveal.observe([1], start + Duration::from_secs(5)), 0);
        assert!((reveal.opacity(1, start + REVEAL_FADE) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_later_batch_starts_its_own_stagger() {
        let start = Instant::now();
        let mut reveal = RevealScheduler::new(4, STAGGER);
        reveal.observe([0, 1], start);

        let later = start + Duration::from_secs(2);
        assert_eq!(reveal.observe([1, 2, 3], later), 2);
        assert!(reveal.is_revealed(2, later));
        assert!(!reveal.is_revealed(3, later));
        assert!(reveal.is_revealed(3, later + STAGGER));
    }

    #[test]
    fn test_opacity_ramps_over_fade() {
        let start = Instant::now();
        let mut reveal = RevealScheduler::new(1, STAGGER);
        assert_eq!(reveal.opacity(0, start), 0.0);

        reveal.observe([0], start);
        let half = reveal.opacity(0, start + REVEAL_FADE / 2);
        assert!((half - 0.5).abs() < 0.01);
        assert!(reveal.is_animating(start + REVEAL_FADE / 2));
        assert!(!reveal.is_animating(start + REVEAL_FADE));
    }

    #[test]
    fn test_out_of_range_indices_ignored() {
        let mut reveal = RevealScheduler::new(0, STAGGER);
        assert_eq!(reveal.observe([0, 7], Instant::now()), 0);
    }
}
