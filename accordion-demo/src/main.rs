mod paths;
mod screen;

use std::fs::{self, File};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use accordion::{AccordionOptions, Page};
use crossterm::event::KeyCode;
use log::info;
use pagedom::{Document, Easing, Element, NodeId};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::screen::Screen;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> accordion::Result<()> {
    let log_path = paths::log_file().unwrap_or_else(|| PathBuf::from("accordion-demo.log"));
    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&log_path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    // An options file may be passed as the only argument
    let options = match std::env::args().nth(1) {
        Some(path) => AccordionOptions::from_path(path)?,
        None => AccordionOptions::new()
            .details_selector(".collapse")
            .content_selector(".collapse__content")
            .duration(Duration::from_millis(400))
            .easing(Easing::EaseInOut),
    };

    let doc = Document::new(product_page());
    let panels = doc.query_selector_all(doc.root(), &options.details_selector)?;
    let mut page = Page::with_options(doc, &options)?;
    info!("[demo] {} accordions on {} panels", page.accordions().len(), panels.len());

    let mut screen = Screen::new()?;
    let mut last = Instant::now();

    loop {
        for key in screen.poll_keys(FRAME)? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    page.click_header(index);
                }
                KeyCode::Char('n') => {
                    if let Some(summary) = native_summary(&page, &panels) {
                        page.click(summary);
                    }
                }
                KeyCode::Char('d') => {
                    if page.accordions().iter().any(|a| a.is_attached()) {
                        info!("[demo] Detached {}", page.detach_all());
                    } else {
                        info!("[demo] Attached {}", page.attach_all());
                    }
                }
                KeyCode::Char('r') => {
                    let doc = page.document_mut();
                    let reduced = !doc.reduced_motion();
                    doc.set_reduced_motion(reduced);
                }
                _ => {}
            }
        }

        let now = Instant::now();
        page.tick(now - last);
        last = now;

        screen.render(&page, &panels)?;
    }
}

/// Summary of the first panel no accordion manages.
fn native_summary(page: &Page, panels: &[NodeId]) -> Option<NodeId> {
    let doc = page.document();
    panels
        .iter()
        .find(|&&panel| page.accordions().iter().all(|a| a.panel() != panel))
        .and_then(|&panel| doc.disclosure_summary(panel))
}

fn product_page() -> Element {
    Element::body()
        .child(collapse(
            "Size guide",
            &["S fits 36-38", "M fits 40-42", "L fits 44-46", "XL fits 48-50"],
        ))
        .child(collapse(
            "Shipping",
            &["Ships in 2 business days", "Free over 50 EUR"],
        ))
        .child(
            // No content block, so it keeps its native toggle
            Element::details()
                .class("collapse")
                .child(Element::summary("Reviews"))
                .child(Element::p("No reviews yet")),
        )
        .child(collapse(
            "Returns",
            &["30 day returns", "Items must be unworn", "Refunds within a week"],
        ))
}

fn collapse(label: &str, lines: &[&str]) -> Element {
    Element::details().class("collapse").child(Element::summary(label)).child(
        Element::div()
            .class("collapse__content")
            .children(lines.iter().map(|line| Element::p(*line))),
    )
}
