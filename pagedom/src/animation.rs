//! Document timeline for keyframed height animations.
//!
//! Animations advance only when the host calls [`Document::tick`], which
//! keeps progress deterministic. An animation ends in exactly one of two
//! ways, reported as an [`AnimationEvent`]: it finishes on its own during a
//! tick, or it is cancelled through [`Document::cancel_animation`].

use std::time::Duration;

use crate::document::{Document, NodeId};
use crate::transitions::TransitionConfig;

/// Identity of one animation on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

/// Overflow behavior applied while an animation runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
}

/// Start and end values for the animated height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes {
    pub from: f32,
    pub to: f32,
    pub overflow: Overflow,
}

impl Keyframes {
    pub fn height(from: f32, to: f32) -> Self {
        Self {
            from,
            to,
            overflow: Overflow::Visible,
        }
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }
}

/// How an animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    /// Ran to the end.
    Finished,
    /// Stopped before the end.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationEvent {
    pub id: AnimationId,
    pub target: NodeId,
    pub outcome: AnimationOutcome,
}

#[derive(Debug, Clone)]
struct ActiveAnimation {
    id: AnimationId,
    target: NodeId,
    keyframes: Keyframes,
    config: TransitionConfig,
    elapsed: Duration,
}

impl ActiveAnimation {
    fn progress(&self) -> f32 {
        if self.config.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.config.duration.as_secs_f32()).min(1.0)
    }

    fn current(&self) -> f32 {
        lerp(
            self.keyframes.from,
            self.keyframes.to,
            self.config.easing.apply(self.progress()),
        )
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.config.duration
    }
}

/// Running animations, in start order.
#[derive(Debug, Default)]
pub struct Timeline {
    active: Vec<ActiveAnimation>,
    next_id: u64,
    current_time: Duration,
    /// Reduced motion flag - when true, animations finish on the next tick.
    reduced_motion: bool,
}

impl Timeline {
    /// Height currently produced by the newest animation on `target`.
    pub(crate) fn animated_height(&self, target: NodeId) -> Option<f32> {
        self.active
            .iter()
            .rev()
            .find(|animation| animation.target == target)
            .map(ActiveAnimation::current)
    }
}

impl Document {
    /// Start animating the height of `target`.
    pub fn animate(
        &mut self,
        target: NodeId,
        keyframes: Keyframes,
        config: TransitionConfig,
    ) -> AnimationId {
        let timeline = &mut self.timeline;
        let id = AnimationId(timeline.next_id);
        timeline.next_id += 1;
        timeline.active.push(ActiveAnimation {
            id,
            target,
            keyframes,
            config,
            elapsed: Duration::ZERO,
        });
        log::debug!(
            "[animation] {:?} on {}: {} -> {} over {:?} ({})",
            id,
            target,
            keyframes.from,
            keyframes.to,
            config.duration,
            config.easing
        );
        id
    }

    /// Cancel a running animation. Returns `None` if it already ended.
    pub fn cancel_animation(&mut self, id: AnimationId) -> Option<AnimationEvent> {
        let index = self.timeline.active.iter().position(|a| a.id == id)?;
        let animation = self.timeline.active.remove(index);
        log::debug!(
            "[animation] {:?} on {} cancelled at {:.0}%",
            id,
            animation.target,
            animation.progress() * 100.0
        );
        Some(AnimationEvent {
            id,
            target: animation.target,
            outcome: AnimationOutcome::Cancelled,
        })
    }

    /// Advance every running animation by `dt` and return the ones that
    /// finished, in start order.
    pub fn tick(&mut self, dt: Duration) -> Vec<AnimationEvent> {
        let timeline = &mut self.timeline;
        timeline.current_time += dt;

        let reduced_motion = timeline.reduced_motion;
        let mut finished = Vec::new();
        timeline.active.retain_mut(|animation| {
            animation.elapsed += dt;
            if reduced_motion || animation.is_done() {
                finished.push(AnimationEvent {
                    id: animation.id,
                    target: animation.target,
                    outcome: AnimationOutcome::Finished,
                });
                false
            } else {
                true
            }
        });

        for event in &finished {
            log::debug!("[animation] {:?} on {} finished", event.id, event.target);
        }
        finished
    }

    pub fn is_animating(&self, target: NodeId) -> bool {
        self.timeline.active.iter().any(|a| a.target == target)
    }

    pub fn is_running(&self, id: AnimationId) -> bool {
        self.timeline.active.iter().any(|a| a.id == id)
    }

    pub fn has_active_animations(&self) -> bool {
        !self.timeline.active.is_empty()
    }

    /// Running animations on `target`, oldest first.
    pub fn animations_on(&self, target: NodeId) -> Vec<AnimationId> {
        self.timeline
            .active
            .iter()
            .filter(|a| a.target == target)
            .map(|a| a.id)
            .collect()
    }

    /// Linear progress (before easing) of a running animation.
    pub fn animation_progress(&self, id: AnimationId) -> Option<f32> {
        self.timeline
            .active
            .iter()
            .find(|a| a.id == id)
            .map(ActiveAnimation::progress)
    }

    /// Overflow applied to `target` by its newest running animation.
    pub fn overflow(&self, target: NodeId) -> Overflow {
        self.timeline
            .active
            .iter()
            .rev()
            .find(|a| a.target == target)
            .map(|a| a.keyframes.overflow)
            .unwrap_or_default()
    }

    /// Total time the timeline has been advanced.
    pub fn current_time(&self) -> Duration {
        self.timeline.current_time
    }

    /// Enable or disable reduced motion (accessibility).
    /// When enabled, running and future animations finish on the next tick.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.timeline.reduced_motion = enabled;
    }

    pub fn reduced_motion(&self) -> bool {
        self.timeline.reduced_motion
    }
}

/// Linear interpolation between two heights.
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
