//! Collapsible disclosure panels with interruptible height animations.
//!
//! An [`Accordion`] drives one `details` panel of a [`pagedom::Document`]:
//! a click on its header starts an open or close animation, a click during
//! an animation reverses it from wherever it is, and the panel's `open` flag
//! and ARIA attributes are committed only once a transition finishes.
//!
//! ```
//! use std::time::Duration;
//!
//! use accordion::{AccordionOptions, Page};
//! use pagedom::{Document, Element};
//!
//! let doc = Document::new(
//!     Element::body().child(
//!         Element::details()
//!             .child(Element::summary("Shipping"))
//!             .child(Element::div().class("content").child(Element::p("3-5 days"))),
//!     ),
//! );
//! let mut page = Page::with_options(doc, &AccordionOptions::default()).unwrap();
//!
//! page.click_header(0);
//! page.settle(Duration::from_millis(16));
//!
//! let accordion = &page.accordions()[0];
//! assert!(accordion.is_open(page.document()));
//! assert_eq!(
//!     page.document().attribute(accordion.header(), "aria-expanded"),
//!     Some("true")
//! );
//! ```

mod controller;
mod error;
mod factory;
mod motion;
mod options;
mod page;

pub use controller::{Accordion, AccordionSettings};
pub use error::{AccordionError, Result};
pub use factory::{
    create, create_multiple, create_one, discover_pairs, from_pairs, generate_id, Created,
    PanelPair,
};
pub use motion::{AnimationHandle, Direction, Motion};
pub use options::{AccordionOptions, IdPrefix};
pub use page::Page;
