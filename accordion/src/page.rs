//! Event loop glue: one document, its accordions, and the routing between
//! them.

use std::time::Duration;

use log::{trace, warn};
use pagedom::{Document, NodeId};

use crate::controller::Accordion;
use crate::error::Result;
use crate::factory;
use crate::options::AccordionOptions;

/// Upper bound on ticks spent in [`Page::settle`].
const MAX_SETTLE_TICKS: usize = 100_000;

/// A document together with the accordions managing it.
///
/// Clicks and animation events are delivered one at a time, so controllers
/// never observe each other mid-update.
#[derive(Debug)]
pub struct Page {
    document: Document,
    accordions: Vec<Accordion>,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            accordions: Vec::new(),
        }
    }

    /// Run the factory over `document` and keep the result.
    pub fn with_options(mut document: Document, options: &AccordionOptions) -> Result<Self> {
        let accordions = factory::create(&mut document, options)?.into_vec();
        Ok(Self {
            document,
            accordions,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn accordions(&self) -> &[Accordion] {
        &self.accordions
    }

    pub fn accordion(&self, index: usize) -> Option<&Accordion> {
        self.accordions.get(index)
    }

    /// Add an accordion built against this page's document.
    pub fn push(&mut self, accordion: Accordion) {
        self.accordions.push(accordion);
    }

    /// Dispatch a click on `target`: every attached accordion whose listener
    /// the click reaches gets it, then the default action runs unless one of
    /// them prevented it.
    pub fn click(&mut self, target: NodeId) {
        let mut event = self.document.begin_click(target);
        let listeners = event.listeners().to_vec();

        for listener in listeners {
            if let Some(accordion) = self
                .accordions
                .iter_mut()
                .find(|a| a.listener() == Some(listener))
            {
                accordion.handle_click(&mut self.document, &mut event);
            }
        }

        self.document.complete_click(event);
    }

    /// Click the header of the accordion at `index`.
    pub fn click_header(&mut self, index: usize) -> bool {
        let Some(header) = self.accordions.get(index).map(Accordion::header) else {
            return false;
        };
        self.click(header);
        true
    }

    /// Advance animations by `dt` and deliver the finish events.
    pub fn tick(&mut self, dt: Duration) {
        for event in self.document.tick(dt) {
            let handled = self
                .accordions
                .iter_mut()
                .any(|accordion| accordion.handle_animation_event(&mut self.document, &event));
            if !handled {
                trace!("[page] Unrouted animation event {:?}", event);
            }
        }
    }

    /// Tick in steps of `step` until nothing is animating. Returns the
    /// number of ticks taken.
    pub fn settle(&mut self, step: Duration) -> usize {
        let mut ticks = 0;
        while self.document.has_active_animations() {
            if ticks == MAX_SETTLE_TICKS {
                warn!("[page] Animations still running after {} ticks", ticks);
                break;
            }
            self.tick(step);
            ticks += 1;
        }
        ticks
    }

    pub fn is_animating(&self) -> bool {
        self.accordions.iter().any(Accordion::is_animating)
    }

    pub fn detach_all(&mut self) -> usize {
        self.accordions
            .iter_mut()
            .map(|accordion| accordion.detach(&mut self.document))
            .filter(|&detached| detached)
            .count()
    }

    pub fn attach_all(&mut self) -> usize {
        self.accordions
            .iter_mut()
            .map(|accordion| accordion.attach(&mut self.document))
            .filter(|&attached| attached)
            .count()
    }

    pub fn into_parts(self) -> (Document, Vec<Accordion>) {
        (self.document, self.accordions)
    }
}
