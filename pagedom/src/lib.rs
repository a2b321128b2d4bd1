//! In-memory page document for disclosure widgets.
//!
//! `pagedom` models the slice of a browser page that collapsible panels
//! interact with: an element tree with attributes, the `open` state of
//! `details` elements, inline heights, block-flow measurement, selector
//! queries, click dispatch with default actions, and a timeline of height
//! animations that the host advances explicitly.

pub mod animation;
pub mod document;
pub mod element;
pub mod event;
pub mod layout;
pub mod selector;
pub mod transitions;

pub use animation::{AnimationEvent, AnimationId, AnimationOutcome, Keyframes, Overflow};
pub use document::{Document, NodeId};
pub use element::{Content, Element, LINE_HEIGHT};
pub use event::{ClickEvent, EventKind, ListenerId};
pub use selector::{Selector, SelectorError};
pub use transitions::{Easing, ParseEasingError, TransitionConfig};
