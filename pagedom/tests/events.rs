use pagedom::{Document, Element, EventKind, NodeId};

fn page() -> Document {
    Document::new(
        Element::body().id("body").child(
            Element::details()
                .id("panel")
                .child(
                    Element::summary("Toggle")
                        .id("header")
                        .child(Element::new("span").id("icon")),
                )
                .child(Element::div().id("content").child(Element::p("Body"))),
        ),
    )
}

fn node(doc: &Document, id: &str) -> NodeId {
    doc.get_element_by_id(id).expect("element exists")
}

// ============================================================================
// Listener Registration
// ============================================================================

#[test]
fn test_add_and_remove_listener() {
    let mut doc = page();
    let header = node(&doc, "header");

    let id = doc.add_listener(header, EventKind::Click);
    assert!(doc.has_listener(id));
    assert_eq!(doc.listeners_on(header, EventKind::Click), vec![id]);

    assert!(doc.remove_listener(id));
    assert!(!doc.has_listener(id));
    assert!(!doc.remove_listener(id), "second removal is a no-op");
}

#[test]
fn test_listener_ids_are_distinct() {
    let mut doc = page();
    let header = node(&doc, "header");
    let a = doc.add_listener(header, EventKind::Click);
    let b = doc.add_listener(header, EventKind::Click);
    assert_ne!(a, b);

    doc.remove_listener(a);
    assert_eq!(doc.listeners_on(header, EventKind::Click), vec![b]);
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_click_bubbles_target_first() {
    let mut doc = page();
    let body = doc.add_listener(node(&doc, "body"), EventKind::Click);
    let header = doc.add_listener(node(&doc, "header"), EventKind::Click);
    let icon = doc.add_listener(node(&doc, "icon"), EventKind::Click);

    let event = doc.begin_click(node(&doc, "icon"));
    assert_eq!(event.listeners(), &[icon, header, body]);
    assert_eq!(event.target(), node(&doc, "icon"));
}

#[test]
fn test_summary_click_toggles_details() {
    let mut doc = page();
    let panel = node(&doc, "panel");

    let event = doc.begin_click(node(&doc, "header"));
    assert!(doc.complete_click(event));
    assert!(doc.is_open(panel));

    // Clicks inside the summary activate it too
    let event = doc.begin_click(node(&doc, "icon"));
    assert!(doc.complete_click(event));
    assert!(!doc.is_open(panel));
}

#[test]
fn test_prevent_default_skips_toggle() {
    let mut doc = page();
    let panel = node(&doc, "panel");

    let mut event = doc.begin_click(node(&doc, "header"));
    event.prevent_default();
    assert!(event.default_prevented());
    assert!(!doc.complete_click(event));
    assert!(!doc.is_open(panel));
}

#[test]
fn test_click_outside_summary_has_no_default_action() {
    let mut doc = page();
    let event = doc.begin_click(node(&doc, "content"));
    assert!(!doc.complete_click(event));
    assert!(!doc.is_open(node(&doc, "panel")));
}
