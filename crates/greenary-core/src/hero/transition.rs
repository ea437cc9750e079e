//! Fade sequencing for variant text when the active slide changes.
//!
//! `FadingOut → Updating → FadingIn → Idle`, advanced only by [`MetadataTransition::tick`].

use std::time::{Duration, Instant};

/// Text elements that fade during a switch, in fade-in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataElement {
    Name,
    Subtitle,
    Description,
    StoryLink,
}

impl MetadataElement {
    pub const ORDER: [MetadataElement; 4] = [
        MetadataElement::Name,
        MetadataElement::Subtitle,
        MetadataElement::Description,
        MetadataElement::StoryLink,
    ];
}

/// Side effect the surface should perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataStep {
    /// Hide every element
    FadeOut,
    /// Write the variant's text, accent, index and story link
    Apply { variant: usize },
    /// Show one element again
    FadeIn(MetadataElement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    FadingOut { variant: usize, started: Instant },
    Updating { variant: usize, at: Instant },
    FadingIn { variant: usize, updated: Instant, shown: usize },
}

#[derive(Debug, Clone)]
pub struct MetadataTransition {
    phase: TransitionPhase,
    fade_out: Duration,
    stagger: Duration,
}

impl MetadataTransition {
    pub fn new(fade_out: Duration, stagger: Duration) -> Self {
        Self {
            phase: TransitionPhase::Idle,
            fade_out,
            stagger,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    /// Begin a transition to `variant`. Restarts any transition in progress.
    pub fn start(&mut self, variant: usize, now: Instant) -> Vec<MetadataStep> {
        self.phase = TransitionPhase::FadingOut {
            variant,
            started: now,
        };
        vec![MetadataStep::FadeOut]
    }

    /// Advance to `now`, returning every step that came due in order
    pub fn tick(&mut self, now: Instant) -> Vec<MetadataStep> {
        let mut steps = Vec::new();
        loop {
            match self.phase {
                TransitionPhase::Idle => break,
                TransitionPhase::FadingOut { variant, started } => {
                    let due = started + self.fade_out;
                    if now < due {
                        break;
                    }
                    self.phase = TransitionPhase::Updating { variant, at: due };
                }
                TransitionPhase::Updating { variant, at } => {
                    steps.push(MetadataStep::Apply { variant });
                    self.phase = TransitionPhase::FadingIn {
                        variant,
                        updated: at,
                        shown: 0,
                    };
                }
                TransitionPhase::FadingIn {
                    variant,
                    updated,
                    shown,
                } => {
                    let Some(element) = MetadataElement::ORDER.get(shown) else {
                        self.phase = TransitionPhase::Idle;
                        break;
                    };
                    if now < updated + self.stagger * shown as u32 {
                        break;
                    }
                    steps.push(MetadataStep::FadeIn(*element));
                    self.phase = TransitionPhase::FadingIn {
                        variant,
                        updated,
                        shown: shown + 1,
                    };
                }
            }
        }
        steps
    }
}
