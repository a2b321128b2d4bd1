#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    /// A single line of text. Measures one `LINE_HEIGHT`.
    Text(String),
    Children(Vec<super::Element>),
}

impl Content {
    pub fn is_none(&self) -> bool {
        matches!(self, Content::None)
    }
}
