//! A small CSS selector subset.
//!
//! Supported: type (`details`), universal (`*`), class (`.collapse`),
//! id (`#faq`), attribute presence and equality (`[open]`, `[role=button]`,
//! `[data-kind="x"]`), the descendant combinator (whitespace) and selector
//! lists (`a, b`).

use std::str::FromStr;

use crate::document::{Document, NodeId};

/// Errors produced while parsing a selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Unexpected character {found:?} at position {position} in selector {selector:?}")]
    Unexpected {
        selector: String,
        position: usize,
        found: char,
    },

    #[error("Unexpected end of selector {0:?}")]
    UnexpectedEnd(String),

    #[error("Unterminated attribute selector in {0:?}")]
    UnterminatedAttribute(String),
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Complex>,
}

/// Compound selectors joined by descendant combinators, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    compounds: Vec<Compound>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
    attributes: Vec<AttributeMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttributeMatch {
    name: String,
    value: Option<String>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        if source.trim().is_empty() {
            return Err(SelectorError::Empty);
        }
        let mut parser = Parser {
            source,
            chars: source.chars().collect(),
            pos: 0,
        };
        let alternatives = parser.parse_list()?;
        Ok(Self { alternatives })
    }

    /// Whether `id` matches any selector in the list.
    pub fn matches(&self, doc: &Document, id: NodeId) -> bool {
        self.alternatives.iter().any(|complex| complex.matches(doc, id))
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Complex {
    fn matches(&self, doc: &Document, id: NodeId) -> bool {
        let Some((subject, rest)) = self.compounds.split_last() else {
            return false;
        };
        if !subject.matches(doc, id) {
            return false;
        }

        // Descendant combinators only, so matching each remaining compound
        // against the nearest qualifying ancestor is enough.
        let mut ancestors = doc.ancestors(id);
        rest.iter()
            .rev()
            .all(|compound| ancestors.any(|ancestor| compound.matches(doc, ancestor)))
    }
}

impl Compound {
    fn matches(&self, doc: &Document, id: NodeId) -> bool {
        if let Some(tag) = &self.tag {
            if doc.tag(id) != tag {
                return false;
            }
        }
        if !self.ids.iter().all(|v| doc.element_id(id) == Some(v.as_str())) {
            return false;
        }
        if !self.classes.iter().all(|c| doc.has_class(id, c)) {
            return false;
        }
        self.attributes.iter().all(|attr| match &attr.value {
            Some(value) => doc.attribute(id, &attr.name) == Some(value.as_str()),
            None => doc.has_attribute(id, &attr.name),
        })
    }
}

struct Parser<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Returns true if any whitespace was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn unexpected(&self, found: char) -> SelectorError {
        SelectorError::Unexpected {
            selector: self.source.to_string(),
            position: self.pos,
            found,
        }
    }

    fn error_here(&self) -> SelectorError {
        match self.peek() {
            Some(c) => self.unexpected(c),
            None => SelectorError::UnexpectedEnd(self.source.to_string()),
        }
    }

    fn parse_list(&mut self) -> Result<Vec<Complex>, SelectorError> {
        let mut list = Vec::new();
        loop {
            self.skip_whitespace();
            list.push(self.parse_complex()?);
            self.skip_whitespace();
            match self.peek() {
                None => return Ok(list),
                Some(',') => self.pos += 1,
                Some(c) => return Err(self.unexpected(c)),
            }
        }
    }

    fn parse_complex(&mut self) -> Result<Complex, SelectorError> {
        let mut compounds = vec![self.parse_compound()?];
        loop {
            let had_whitespace = self.skip_whitespace();
            match self.peek() {
                None | Some(',') => break,
                Some(_) if had_whitespace => compounds.push(self.parse_compound()?),
                Some(c) => return Err(self.unexpected(c)),
            }
        }
        Ok(Complex { compounds })
    }

    fn parse_compound(&mut self) -> Result<Compound, SelectorError> {
        let start = self.pos;
        let mut compound = Compound::default();

        match self.peek() {
            Some('*') => self.pos += 1,
            Some(c) if is_ident_char(c) => {
                compound.tag = Some(self.ident()?.to_ascii_lowercase());
            }
            _ => {}
        }

        loop {
            match self.peek() {
                Some('.') => {
                    self.pos += 1;
                    compound.classes.push(self.ident()?);
                }
                Some('#') => {
                    self.pos += 1;
                    compound.ids.push(self.ident()?);
                }
                Some('[') => {
                    self.pos += 1;
                    compound.attributes.push(self.attribute()?);
                }
                _ => break,
            }
        }

        if self.pos == start {
            return Err(self.error_here());
        }
        Ok(compound)
    }

    fn ident(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.error_here());
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn attribute(&mut self) -> Result<AttributeMatch, SelectorError> {
        self.skip_whitespace();
        if self.peek().is_none() {
            return Err(SelectorError::UnterminatedAttribute(self.source.to_string()));
        }
        let name = self.ident()?.to_ascii_lowercase();
        self.skip_whitespace();

        let value = if self.peek() == Some('=') {
            self.pos += 1;
            self.skip_whitespace();
            Some(self.attribute_value()?)
        } else {
            None
        };

        self.skip_whitespace();
        match self.bump() {
            Some(']') => Ok(AttributeMatch { name, value }),
            Some(c) => {
                self.pos -= 1;
                Err(self.unexpected(c))
            }
            None => Err(SelectorError::UnterminatedAttribute(self.source.to_string())),
        }
    }

    fn attribute_value(&mut self) -> Result<String, SelectorError> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.pos += 1;
                let start = self.pos;
                while self.peek().is_some_and(|c| c != quote) {
                    self.pos += 1;
                }
                if self.peek().is_none() {
                    return Err(SelectorError::UnterminatedAttribute(self.source.to_string()));
                }
                let value = self.chars[start..self.pos].iter().collect();
                self.pos += 1;
                Ok(value)
            }
            Some(_) => self.ident(),
            None => Err(SelectorError::UnterminatedAttribute(self.source.to_string())),
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

impl Document {
    /// First descendant of `scope` matching `selector`, in document order.
    pub fn query_selector(
        &self,
        scope: NodeId,
        selector: &str,
    ) -> Result<Option<NodeId>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self.select(scope, &selector))
    }

    /// Every descendant of `scope` matching `selector`, in document order.
    pub fn query_selector_all(
        &self,
        scope: NodeId,
        selector: &str,
    ) -> Result<Vec<NodeId>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self.select_all(scope, &selector))
    }

    pub fn select(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&id| selector.matches(self, id))
    }

    pub fn select_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&id| selector.matches(self, id))
            .collect()
    }
}
