//! In-flight animation tracking.

use pagedom::{AnimationEvent, AnimationId, Document};

/// Direction of a panel transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Open,
    Close,
}

impl Direction {
    /// Value of the panel's `open` flag once the transition settles.
    pub fn target_open(self) -> bool {
        matches!(self, Direction::Open)
    }
}

/// Exclusive ownership of one running animation.
///
/// The handle is not `Clone`; giving it up goes through [`cancel`](Self::cancel)
/// or through the animation's own finish event.
#[derive(Debug, PartialEq, Eq)]
pub struct AnimationHandle {
    id: AnimationId,
}

impl AnimationHandle {
    pub(crate) fn new(id: AnimationId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> AnimationId {
        self.id
    }

    /// Revoke the animation. Returns its cancellation event, or `None` if
    /// it had already ended.
    pub(crate) fn cancel(self, doc: &mut Document) -> Option<AnimationEvent> {
        doc.cancel_animation(self.id)
    }
}

/// What a panel is currently doing.
///
/// Holding the handle inside the variant keeps a single animation per panel
/// and makes "opening and closing at once" unrepresentable.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Idle,
    Opening(AnimationHandle),
    Closing(AnimationHandle),
}

impl Motion {
    pub(crate) fn in_flight(direction: Direction, handle: AnimationHandle) -> Self {
        match direction {
            Direction::Open => Motion::Opening(handle),
            Direction::Close => Motion::Closing(handle),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Motion::Idle)
    }

    pub fn is_opening(&self) -> bool {
        matches!(self, Motion::Opening(_))
    }

    pub fn is_closing(&self) -> bool {
        matches!(self, Motion::Closing(_))
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Motion::Idle => None,
            Motion::Opening(_) => Some(Direction::Open),
            Motion::Closing(_) => Some(Direction::Close),
        }
    }

    pub fn handle(&self) -> Option<&AnimationHandle> {
        match self {
            Motion::Idle => None,
            Motion::Opening(handle) | Motion::Closing(handle) => Some(handle),
        }
    }

    /// Whether the running animation is `id`.
    pub fn owns(&self, id: AnimationId) -> bool {
        self.handle().is_some_and(|handle| handle.id() == id)
    }

    /// Leave `Idle` behind and hand back what was in flight.
    pub(crate) fn take(&mut self) -> Option<(Direction, AnimationHandle)> {
        match std::mem::take(self) {
            Motion::Idle => None,
            Motion::Opening(handle) => Some((Direction::Open, handle)),
            Motion::Closing(handle) => Some((Direction::Close, handle)),
        }
    }
}
