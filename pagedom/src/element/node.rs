use super::Content;

/// Height of one rendered line of text, in pixels.
pub const LINE_HEIGHT: f32 = 20.0;

/// Declarative description of a page element.
///
/// Elements are plain builders. A [`Document`](crate::Document) is created
/// from a root element and takes over the tree from then on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    // Identity
    pub tag: String,

    // Content
    pub content: Content,

    // Markup attributes in insertion order (`id` and `class` live here too)
    pub attributes: Vec<(String, String)>,

    // Layout
    /// Height of the element's own box, added to the height of its children.
    /// When unset, text content measures one line and everything else zero.
    pub height: Option<f32>,

    // Disclosure state (only meaningful for `details`)
    pub open: bool,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn body() -> Self {
        Self::new("body")
    }

    pub fn details() -> Self {
        Self::new("details")
    }

    pub fn summary(label: impl Into<String>) -> Self {
        Self::new("summary").text(label)
    }

    pub fn p(text: impl Into<String>) -> Self {
        Self::new("p").text(text)
    }

    // Identity
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Add a class, keeping any classes already present.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        match self.attributes.iter_mut().find(|(name, _)| name == "class") {
            Some((_, value)) if !value.is_empty() => {
                value.push(' ');
                value.push_str(&class);
            }
            Some((_, value)) => *value = class,
            None => self.attributes.push(("class".into(), class)),
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into().to_ascii_lowercase();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    // Layout
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    // State
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }
}
