//! Accordion controller - one disclosure panel with an interruptible height
//! animation.

use std::time::Duration;

use log::{debug, trace};
use pagedom::{
    AnimationEvent, AnimationOutcome, ClickEvent, Document, Easing, EventKind, Keyframes,
    ListenerId, NodeId, Overflow, TransitionConfig,
};

use crate::error::{AccordionError, Result};
use crate::motion::{AnimationHandle, Direction, Motion};

const HEADER_SELECTOR: &str = "summary";

/// Per-instance configuration, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AccordionSettings {
    pub duration: Duration,
    pub easing: Easing,
    /// Base for the generated element ids (`<id>-details`, ...).
    pub id: String,
    pub manage_aria: bool,
}

impl AccordionSettings {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            duration: Duration::from_millis(200),
            easing: Easing::Linear,
            id: id.into(),
            manage_aria: true,
        }
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn manage_aria(mut self, manage_aria: bool) -> Self {
        self.manage_aria = manage_aria;
        self
    }
}

impl Default for AccordionSettings {
    fn default() -> Self {
        Self::new("accordion-1")
    }
}

/// Controller for one `details` panel.
///
/// The panel's `open` flag is only authoritative while [`motion`](Self::motion)
/// is idle. During a transition the motion names where the panel is heading,
/// and the document is committed only when that transition finishes.
///
/// The controller holds node ids, not references, so every operation takes
/// the document it was built against.
#[derive(Debug)]
pub struct Accordion {
    panel: NodeId,
    header: NodeId,
    content: NodeId,
    settings: AccordionSettings,
    motion: Motion,
    listener: Option<ListenerId>,
}

impl Accordion {
    /// Build and attach a controller.
    ///
    /// Fails with [`AccordionError::MissingHeader`] if `panel` has no
    /// `summary`; the document is not touched in that case.
    pub fn new(
        doc: &mut Document,
        panel: NodeId,
        content: NodeId,
        settings: AccordionSettings,
    ) -> Result<Self> {
        let header = doc
            .query_selector(panel, HEADER_SELECTOR)?
            .ok_or(AccordionError::MissingHeader { panel })?;

        let mut accordion = Self {
            panel,
            header,
            content,
            settings,
            motion: Motion::Idle,
            listener: None,
        };
        accordion.attach(doc);

        debug!(
            "[accordion] {} created (panel {}, header {}, content {})",
            accordion.settings.id, panel, header, content
        );
        Ok(accordion)
    }

    // Accessors

    pub fn panel(&self) -> NodeId {
        self.panel
    }

    pub fn header(&self) -> NodeId {
        self.header
    }

    pub fn content(&self) -> NodeId {
        self.content
    }

    pub fn id(&self) -> &str {
        &self.settings.id
    }

    pub fn settings(&self) -> &AccordionSettings {
        &self.settings
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn is_opening(&self) -> bool {
        self.motion.is_opening()
    }

    pub fn is_closing(&self) -> bool {
        self.motion.is_closing()
    }

    pub fn is_animating(&self) -> bool {
        !self.motion.is_idle()
    }

    pub fn listener(&self) -> Option<ListenerId> {
        self.listener
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// The panel's settled `open` flag.
    pub fn is_open(&self, doc: &Document) -> bool {
        doc.is_open(self.panel)
    }

    // Lifecycle

    /// Register the click listener and, when enabled, ids and ARIA.
    /// Returns false if already attached.
    pub fn attach(&mut self, doc: &mut Document) -> bool {
        if self.listener.is_some() {
            return false;
        }
        self.listener = Some(doc.add_listener(self.header, EventKind::Click));

        if self.settings.manage_aria {
            self.create_ids(doc);
            self.add_aria(doc);
        }
        true
    }

    /// Remove the listener and any ids and ARIA added by [`attach`](Self::attach).
    ///
    /// A transition still in flight is cancelled and the panel jumps to its
    /// end state. Returns false if already detached.
    pub fn detach(&mut self, doc: &mut Document) -> bool {
        let Some(listener) = self.listener.take() else {
            return false;
        };
        doc.remove_listener(listener);
        self.jump_to_end(doc);

        if self.settings.manage_aria {
            self.remove_aria(doc);
            self.remove_ids(doc);
        }
        debug!("[accordion] {} detached", self.settings.id);
        true
    }

    fn jump_to_end(&mut self, doc: &mut Document) {
        let Some((direction, handle)) = self.motion.take() else {
            return;
        };
        handle.cancel(doc);
        doc.clear_style_height(self.panel);
        doc.set_open(self.panel, direction.target_open());
    }

    // Interaction

    /// Header click handler.
    pub fn handle_click(&mut self, doc: &mut Document, event: &mut ClickEvent) {
        // The native toggle would flip `open` a second time.
        event.prevent_default();
        self.toggle(doc);
    }

    /// Reverse the current intent: open a closed or closing panel, close an
    /// open or opening one.
    pub fn toggle(&mut self, doc: &mut Document) {
        if self.motion.is_closing() || !doc.is_open(self.panel) {
            trace!("[accordion] {} toggle -> open", self.settings.id);
            self.open(doc);
        } else {
            trace!("[accordion] {} toggle -> close", self.settings.id);
            self.close(doc);
        }
    }

    /// Animate to the expanded height.
    pub fn open(&mut self, doc: &mut Document) {
        let start = doc.offset_height(self.panel);

        // Pin the current height before the content becomes visible so the
        // panel does not jump ahead of the animation.
        doc.set_style_height(self.panel, start);
        doc.set_open(self.panel, true);

        let end = doc.offset_height(self.header) + doc.offset_height(self.content);
        self.animate(doc, start, end, Direction::Open);
    }

    /// Animate down to the header height.
    pub fn close(&mut self, doc: &mut Document) {
        let start = doc.offset_height(self.panel);
        let end = doc.offset_height(self.header);
        self.animate(doc, start, end, Direction::Close);
    }

    fn animate(&mut self, doc: &mut Document, start: f32, end: f32, direction: Direction) {
        if let Some((previous, handle)) = self.motion.take() {
            if handle.cancel(doc).is_some() {
                debug!(
                    "[accordion] {} interrupted {:?} transition",
                    self.settings.id, previous
                );
            }
        }

        let keyframes = Keyframes::height(start, end).overflow(Overflow::Hidden);
        let config = TransitionConfig::new(self.settings.duration, self.settings.easing);
        let id = doc.animate(self.panel, keyframes, config);
        self.motion = Motion::in_flight(direction, AnimationHandle::new(id));

        debug!(
            "[accordion] {} {:?} {} -> {}",
            self.settings.id, direction, start, end
        );
    }

    /// Feed an animation event from the document. Returns false if the
    /// event belongs to an animation this controller does not own.
    pub fn handle_animation_event(&mut self, doc: &mut Document, event: &AnimationEvent) -> bool {
        if !self.motion.owns(event.id) {
            return false;
        }
        let Some((direction, _handle)) = self.motion.take() else {
            return false;
        };

        match event.outcome {
            AnimationOutcome::Finished => {
                doc.clear_style_height(self.panel);
                doc.set_open(self.panel, direction.target_open());
                self.update_aria(doc);
                debug!(
                    "[accordion] {} settled open={}",
                    self.settings.id,
                    direction.target_open()
                );
            }
            AnimationOutcome::Cancelled => {
                // Only the intent is dropped; whoever cancelled owns the
                // document state from here.
                debug!(
                    "[accordion] {} {:?} cancelled externally",
                    self.settings.id, direction
                );
            }
        }
        true
    }

    // Identifiers and ARIA

    pub fn panel_element_id(&self) -> String {
        format!("{}-details", self.settings.id)
    }

    pub fn header_element_id(&self) -> String {
        format!("{}-summary", self.settings.id)
    }

    pub fn content_element_id(&self) -> String {
        format!("{}-content", self.settings.id)
    }

    fn create_ids(&self, doc: &mut Document) {
        doc.set_attribute(self.panel, "id", self.panel_element_id());
        doc.set_attribute(self.header, "id", self.header_element_id());
        doc.set_attribute(self.content, "id", self.content_element_id());
    }

    fn remove_ids(&self, doc: &mut Document) {
        doc.remove_attribute(self.panel, "id");
        doc.remove_attribute(self.header, "id");
        doc.remove_attribute(self.content, "id");
    }

    fn add_aria(&self, doc: &mut Document) {
        let expanded = doc.is_open(self.panel).to_string();
        doc.set_attribute(self.header, "role", "button");
        doc.set_attribute(self.header, "aria-expanded", expanded);
        doc.set_attribute(self.header, "aria-controls", self.content_element_id());
        doc.set_attribute(self.content, "role", "region");
        doc.set_attribute(self.content, "aria-labelledby", self.header_element_id());
    }

    fn update_aria(&self, doc: &mut Document) {
        if !self.settings.manage_aria || !self.is_attached() {
            return;
        }
        let expanded = doc.is_open(self.panel).to_string();
        doc.set_attribute(self.header, "aria-expanded", expanded);
    }

    fn remove_aria(&self, doc: &mut Document) {
        for name in ["role", "aria-expanded", "aria-controls"] {
            doc.remove_attribute(self.header, name);
        }
        for name in ["role", "aria-labelledby"] {
            doc.remove_attribute(self.content, name);
        }
    }
}
