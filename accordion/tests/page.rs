use std::time::Duration;

use accordion::{AccordionOptions, Page};
use pagedom::{Document, Element};

const FRAME: Duration = Duration::from_millis(16);

fn collapse(label: &str) -> Element {
    Element::details()
        .class("collapse")
        .child(Element::summary(label))
        .child(
            Element::div()
                .class("collapse__content")
                .child(Element::p(format!("{label} details"))),
        )
}

fn options() -> AccordionOptions {
    AccordionOptions::default()
        .details_selector(".collapse")
        .content_selector(".collapse__content")
}

fn three_panels() -> Page {
    let doc = Document::new(
        Element::body()
            .child(collapse("Size"))
            .child(collapse("Color"))
            .child(collapse("Returns")),
    );
    Page::with_options(doc, &options()).unwrap()
}

fn open_flags(page: &Page) -> Vec<bool> {
    page.accordions()
        .iter()
        .map(|a| a.is_open(page.document()))
        .collect()
}

// =============================================================================
// Routing
// =============================================================================

#[test]
fn test_click_reaches_only_its_accordion() {
    let mut page = three_panels();
    assert_eq!(page.accordions().len(), 3);

    assert!(page.click_header(1));
    assert!(!page.accordions()[0].is_animating());
    assert!(page.accordions()[1].is_opening());
    assert!(!page.accordions()[2].is_animating());

    page.settle(FRAME);
    assert_eq!(open_flags(&page), [false, true, false]);
}

#[test]
fn test_click_on_header_descendant_is_routed() {
    let doc = Document::new(
        Element::body().child(
            Element::details()
                .child(Element::new("summary").child(Element::new("span").id("label").text("Q")))
                .child(Element::div().class("content").child(Element::p("A"))),
        ),
    );
    let mut page = Page::with_options(doc, &AccordionOptions::default()).unwrap();
    let label = page.document().get_element_by_id("label").unwrap();

    page.click(label);
    assert!(page.accordions()[0].is_opening());
    page.settle(FRAME);
    assert_eq!(open_flags(&page), [true]);
}

#[test]
fn test_interleaved_accordions_are_independent() {
    let mut page = three_panels();

    page.click_header(0);
    page.tick(Duration::from_millis(50));
    page.click_header(2);
    page.tick(Duration::from_millis(50));
    page.click_header(0);
    page.tick(Duration::from_millis(50));
    page.click_header(1);
    assert!(page.is_animating());

    page.settle(FRAME);
    assert!(!page.is_animating());
    assert_eq!(open_flags(&page), [false, true, true]);
    for acc in page.accordions() {
        let expected = acc.is_open(page.document()).to_string();
        assert_eq!(
            page.document().attribute(acc.header(), "aria-expanded"),
            Some(expected.as_str())
        );
    }
}

#[test]
fn test_unmanaged_panel_toggles_natively() {
    let doc = Document::new(
        Element::body()
            .child(collapse("Managed"))
            .child(
                Element::details()
                    .class("collapse")
                    .id("plain")
                    .child(Element::summary("Plain").id("plain-summary")),
            ),
    );
    let mut page = Page::with_options(doc, &options()).unwrap();
    assert_eq!(page.accordions().len(), 1);

    let summary = page.document().get_element_by_id("plain-summary").unwrap();
    let plain = page.document().get_element_by_id("plain").unwrap();
    page.click(summary);

    assert!(page.document().is_open(plain));
    assert!(!page.document().has_active_animations());
}

#[test]
fn test_single_mode_page() {
    let doc = Document::new(
        Element::body()
            .child(collapse("First"))
            .child(collapse("Second")),
    );
    let page = Page::with_options(doc, &options().create_multiple(false)).unwrap();
    assert_eq!(page.accordions().len(), 1);
    assert_eq!(page.accordions()[0].id(), "accordion-1");
}

#[test]
fn test_settle_reports_ticks() {
    let mut page = three_panels();
    assert_eq!(page.settle(FRAME), 0);

    page.click_header(0);
    // 200ms in 16ms frames
    assert_eq!(page.settle(FRAME), 13);
    assert!(!page.click_header(7));
}

#[test]
fn test_reduced_motion_settles_in_one_tick() {
    let mut page = three_panels();
    page.document_mut().set_reduced_motion(true);

    page.click_header(2);
    assert_eq!(page.settle(FRAME), 1);
    assert_eq!(open_flags(&page), [false, false, true]);
}
