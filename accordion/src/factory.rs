//! Building accordions for the panels of a document.
//!
//! [`from_pairs`] is the core: it takes explicit panel/content pairs.
//! [`create_multiple`] and [`create_one`] are selector adapters that find
//! the pairs first.

use log::debug;
use pagedom::{Document, NodeId, Selector};

use crate::controller::Accordion;
use crate::error::{AccordionError, Result};
use crate::options::{AccordionOptions, IdPrefix};

/// A panel found in the document and the content found inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelPair {
    pub panel: NodeId,
    /// `None` when the panel has no content; such panels are skipped.
    pub content: Option<NodeId>,
    /// 1-based position of the panel among all discovered panels.
    pub index: usize,
}

/// Result of [`create`], shaped by `create_multiple`.
#[derive(Debug)]
pub enum Created {
    Many(Vec<Accordion>),
    One(Accordion),
}

impl Created {
    pub fn into_vec(self) -> Vec<Accordion> {
        match self {
            Created::Many(accordions) => accordions,
            Created::One(accordion) => vec![accordion],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Created::Many(accordions) => accordions.len(),
            Created::One(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `<prefix>-<index>`.
pub fn generate_id(prefix: &IdPrefix, index: usize) -> String {
    format!("{prefix}-{index}")
}

/// Build accordions according to `options.create_multiple`.
pub fn create(doc: &mut Document, options: &AccordionOptions) -> Result<Created> {
    if options.create_multiple {
        create_multiple(doc, options).map(Created::Many)
    } else {
        create_one(doc, options).map(Created::One)
    }
}

/// Find every panel and its content, in document order.
///
/// Fails with [`AccordionError::NoPanels`] when nothing matches the panel
/// selector. Panels without content are returned with `content: None`.
pub fn discover_pairs(doc: &Document, options: &AccordionOptions) -> Result<Vec<PanelPair>> {
    let panel_selector = Selector::parse(&options.details_selector)?;
    let content_selector = Selector::parse(&options.content_selector)?;

    let panels = doc.select_all(doc.root(), &panel_selector);
    if panels.is_empty() {
        return Err(AccordionError::NoPanels {
            selector: options.details_selector.clone(),
        });
    }

    Ok(panels
        .into_iter()
        .enumerate()
        .map(|(i, panel)| PanelPair {
            panel,
            content: doc.select(panel, &content_selector),
            index: i + 1,
        })
        .collect())
}

/// Build one accordion per panel that has content.
pub fn create_multiple(doc: &mut Document, options: &AccordionOptions) -> Result<Vec<Accordion>> {
    let pairs = discover_pairs(doc, options)?;
    from_pairs(doc, pairs, options)
}

/// Build an accordion for the first matching panel only.
pub fn create_one(doc: &mut Document, options: &AccordionOptions) -> Result<Accordion> {
    let panel = doc
        .query_selector(doc.root(), &options.details_selector)?
        .ok_or_else(|| AccordionError::PanelNotFound {
            selector: options.details_selector.clone(),
        })?;
    let content = doc
        .query_selector(panel, &options.content_selector)?
        .ok_or_else(|| AccordionError::ContentNotFound {
            selector: options.content_selector.clone(),
        })?;

    let id = generate_id(&options.id_prefix, 1);
    Accordion::new(doc, panel, content, options.settings(id))
}

/// Build accordions for explicit pairs, skipping pairs without content.
///
/// If any panel fails to build, the accordions already built are detached
/// before the error is returned, leaving the document unmanaged.
pub fn from_pairs(
    doc: &mut Document,
    pairs: impl IntoIterator<Item = PanelPair>,
    options: &AccordionOptions,
) -> Result<Vec<Accordion>> {
    let mut built = Vec::new();

    for pair in pairs {
        let Some(content) = pair.content else {
            debug!(
                "[accordion] Skipping panel {} (#{}): no content",
                pair.panel, pair.index
            );
            continue;
        };

        let id = generate_id(&options.id_prefix, pair.index);
        match Accordion::new(doc, pair.panel, content, options.settings(id)) {
            Ok(accordion) => built.push(accordion),
            Err(err) => {
                for mut accordion in built {
                    accordion.detach(doc);
                }
                return Err(err);
            }
        }
    }

    debug!("[accordion] Built {} accordions", built.len());
    Ok(built)
}
