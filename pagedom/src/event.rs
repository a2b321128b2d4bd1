use crate::document::{Document, NodeId};

/// Kinds of events a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
}

/// Identity of a registered listener. Removing a listener needs the exact
/// id returned when it was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Debug, Clone)]
pub(crate) struct Listener {
    pub(crate) id: ListenerId,
    pub(crate) node: NodeId,
    pub(crate) kind: EventKind,
}

/// A click in flight between [`Document::begin_click`] and
/// [`Document::complete_click`].
///
/// `listeners` holds every listener the click reaches, target first and then
/// bubbling through the ancestors. The caller runs its handlers for those
/// ids, which may call [`ClickEvent::prevent_default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    target: NodeId,
    listeners: Vec<ListenerId>,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn listeners(&self) -> &[ListenerId] {
        &self.listeners
    }

    /// Stop the element's native activation behavior from running.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl Document {
    pub fn add_listener(&mut self, node: NodeId, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(Listener { id, node, kind });
        log::trace!("[events] Added {:?} listener {:?} on {}", kind, id, node);
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        let removed = self.listeners.len() != before;
        if removed {
            log::trace!("[events] Removed listener {:?}", id);
        }
        removed
    }

    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|listener| listener.id == id)
    }

    /// Listeners of `kind` registered directly on `node`, in registration order.
    pub fn listeners_on(&self, node: NodeId, kind: EventKind) -> Vec<ListenerId> {
        self.listeners
            .iter()
            .filter(|listener| listener.node == node && listener.kind == kind)
            .map(|listener| listener.id)
            .collect()
    }

    /// Start dispatching a click on `target`.
    pub fn begin_click(&self, target: NodeId) -> ClickEvent {
        let listeners = std::iter::once(target)
            .chain(self.ancestors(target))
            .flat_map(|node| self.listeners_on(node, EventKind::Click))
            .collect();

        ClickEvent {
            target,
            listeners,
            default_prevented: false,
        }
    }

    /// Finish dispatching a click, running the default action unless it was
    /// prevented. Returns true if a default action ran.
    ///
    /// The only default action modeled is the disclosure toggle: a click
    /// inside the summary of a `details` element flips its `open` flag.
    pub fn complete_click(&mut self, event: ClickEvent) -> bool {
        if event.default_prevented {
            log::trace!("[events] Default action prevented for {}", event.target);
            return false;
        }

        let Some(details) = self.activated_details(event.target) else {
            return false;
        };
        let open = !self.is_open(details);
        self.set_open(details, open);
        log::debug!("[events] Native toggle of {} to open={}", details, open);
        true
    }

    /// The `details` element whose disclosure summary contains `target`.
    fn activated_details(&self, target: NodeId) -> Option<NodeId> {
        std::iter::once(target)
            .chain(self.ancestors(target))
            .filter(|&node| self.tag(node) == "summary")
            .find_map(|summary| {
                let details = self.parent(summary)?;
                (self.disclosure_summary(details) == Some(summary)).then_some(details)
            })
    }
}
