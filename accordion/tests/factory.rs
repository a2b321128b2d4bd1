use accordion::{
    create, create_multiple, create_one, discover_pairs, from_pairs, generate_id,
    AccordionError, AccordionOptions, Created, IdPrefix, PanelPair,
};
use pagedom::{Document, Element, EventKind};

fn collapse(label: &str, with_content: bool) -> Element {
    let panel = Element::details()
        .class("collapse")
        .child(Element::summary(label));
    if with_content {
        panel.child(Element::div().class("collapse__content").child(Element::p(label)))
    } else {
        panel
    }
}

fn options() -> AccordionOptions {
    AccordionOptions::default()
        .details_selector(".collapse")
        .content_selector(".collapse__content")
}

// =============================================================================
// Multi-instance Discovery
// =============================================================================

#[test]
fn test_one_accordion_per_panel_in_document_order() {
    let mut doc = Document::new(
        Element::body()
            .child(collapse("A", true))
            .child(Element::div().child(collapse("B", true)))
            .child(collapse("C", true)),
    );
    let panels = doc.query_selector_all(doc.root(), ".collapse").unwrap();

    let accordions = create_multiple(&mut doc, &options()).unwrap();

    assert_eq!(accordions.len(), 3);
    let built: Vec<_> = accordions.iter().map(|a| a.panel()).collect();
    assert_eq!(built, panels);
    let ids: Vec<_> = accordions.iter().map(|a| a.id().to_string()).collect();
    assert_eq!(ids, ["accordion-1", "accordion-2", "accordion-3"]);
}

#[test]
fn test_panels_without_content_are_skipped() {
    let mut doc = Document::new(
        Element::body()
            .child(collapse("A", false))
            .child(collapse("B", true)),
    );

    let accordions = create_multiple(&mut doc, &options()).unwrap();

    assert_eq!(accordions.len(), 1);
    // Skipped panels still use up their index
    assert_eq!(accordions[0].id(), "accordion-2");
    let skipped = doc.query_selector(doc.root(), ".collapse").unwrap().unwrap();
    assert_eq!(doc.element_id(skipped), None);
}

#[test]
fn test_no_panels_is_fatal() {
    let mut doc = Document::new(Element::body().child(Element::p("nothing here")));

    let err = create_multiple(&mut doc, &options()).unwrap_err();
    assert!(matches!(err, AccordionError::NoPanels { ref selector } if selector == ".collapse"));
}

#[test]
fn test_all_panels_without_content_is_empty_not_error() {
    let mut doc = Document::new(
        Element::body()
            .child(collapse("A", false))
            .child(collapse("B", false)),
    );
    let accordions = create_multiple(&mut doc, &options()).unwrap();
    assert!(accordions.is_empty());
}

#[test]
fn test_missing_header_rolls_back_built_accordions() {
    let mut doc = Document::new(
        Element::body()
            .child(collapse("A", true))
            .child(
                Element::details()
                    .class("collapse")
                    .child(Element::div().class("collapse__content")),
            ),
    );
    let first_header = doc.query_selector(doc.root(), "summary").unwrap().unwrap();

    let err = create_multiple(&mut doc, &options()).unwrap_err();
    assert!(matches!(err, AccordionError::MissingHeader { .. }));

    // The first panel was built, then unwound
    assert!(doc.listeners_on(first_header, EventKind::Click).is_empty());
    assert!(!doc.has_attribute(first_header, "aria-expanded"));
    assert_eq!(doc.element_id(first_header), None);
}

#[test]
fn test_discover_pairs_reports_missing_content() {
    let doc = Document::new(
        Element::body()
            .child(collapse("A", true))
            .child(collapse("B", false)),
    );
    let pairs = discover_pairs(&doc, &options()).unwrap();

    assert_eq!(pairs.len(), 2);
    assert!(pairs[0].content.is_some());
    assert_eq!(pairs[0].index, 1);
    assert_eq!(pairs[1].content, None);
    assert_eq!(pairs[1].index, 2);
}

#[test]
fn test_from_pairs_with_explicit_nodes() {
    let mut doc = Document::new(
        Element::body()
            .child(collapse("A", true))
            .child(collapse("B", true)),
    );
    let panels = doc.query_selector_all(doc.root(), "details").unwrap();
    let content = doc.query_selector(panels[1], "div").unwrap();

    let pairs = [
        PanelPair {
            panel: panels[1],
            content,
            index: 9,
        },
        PanelPair {
            panel: panels[0],
            content: None,
            index: 10,
        },
    ];
    let opts = options().id_prefix("faq");
    let accordions = from_pairs(&mut doc, pairs, &opts).unwrap();

    assert_eq!(accordions.len(), 1);
    assert_eq!(accordions[0].panel(), panels[1]);
    assert_eq!(accordions[0].id(), "faq-9");
    assert_eq!(doc.element_id(panels[1]), Some("faq-9-details"));
}

#[test]
fn test_invalid_selector_is_reported() {
    let mut doc = Document::new(Element::body().child(collapse("A", true)));
    let opts = options().details_selector("details >");
    let err = create_multiple(&mut doc, &opts).unwrap_err();
    assert!(matches!(err, AccordionError::Selector(_)));
    assert!(!err.is_structural());
}

// =============================================================================
// Single-instance Mode
// =============================================================================

#[test]
fn test_create_one_uses_first_panel() {
    let mut doc = Document::new(
        Element::body()
            .child(collapse("A", true))
            .child(collapse("B", true)),
    );
    let first = doc.query_selector(doc.root(), ".collapse").unwrap().unwrap();

    let accordion = create_one(&mut doc, &options().id_prefix(42_i64)).unwrap();

    assert_eq!(accordion.panel(), first);
    assert_eq!(accordion.id(), "42-1");
    assert_eq!(doc.element_id(first), Some("42-1-details"));
}

#[test]
fn test_create_one_missing_panel() {
    let mut doc = Document::new(Element::body());
    let err = create_one(&mut doc, &options()).unwrap_err();
    assert!(matches!(err, AccordionError::PanelNotFound { .. }));
}

#[test]
fn test_create_one_missing_content() {
    let mut doc = Document::new(
        Element::body()
            .child(collapse("A", false))
            .child(collapse("B", true)),
    );
    let err = create_one(&mut doc, &options()).unwrap_err();
    assert!(matches!(err, AccordionError::ContentNotFound { ref selector } if selector == ".collapse__content"));
}

#[test]
fn test_create_dispatches_on_mode() {
    let page = || {
        Document::new(
            Element::body()
                .child(collapse("A", true))
                .child(collapse("B", true)),
        )
    };

    let mut doc = page();
    let created = create(&mut doc, &options()).unwrap();
    assert!(matches!(created, Created::Many(ref v) if v.len() == 2));

    let mut doc = page();
    let created = create(&mut doc, &options().create_multiple(false)).unwrap();
    assert!(matches!(created, Created::One(_)));
    assert_eq!(created.len(), 1);
    assert_eq!(created.into_vec().len(), 1);
}

#[test]
fn test_generate_id() {
    assert_eq!(generate_id(&IdPrefix::from("faq"), 3), "faq-3");
    assert_eq!(generate_id(&IdPrefix::from(7_i64), 1), "7-1");
}
