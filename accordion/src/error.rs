//! Accordion error types

use pagedom::{NodeId, SelectorError};

/// Errors that can occur while building accordions.
///
/// All of these are construction errors: they are returned before any
/// listener or attribute is left behind on the document.
#[derive(Debug, thiserror::Error)]
pub enum AccordionError {
    /// The panel has no `summary` to act as its header.
    #[error("Didn't find a summary inside panel {panel}")]
    MissingHeader { panel: NodeId },

    /// Multi-instance discovery matched no panels at all.
    #[error("Didn't find any panel matching {selector:?}")]
    NoPanels { selector: String },

    /// Single-instance mode matched no panel.
    #[error("Didn't find a panel matching {selector:?}")]
    PanelNotFound { selector: String },

    /// Single-instance mode found a panel without content.
    #[error("Didn't find content matching {selector:?}")]
    ContentNotFound { selector: String },

    /// A configured selector could not be parsed.
    #[error("Invalid selector: {0}")]
    Selector(#[from] SelectorError),

    /// Options could not be deserialized.
    #[error("Invalid options: {0}")]
    Options(#[from] serde_json::Error),

    /// Options file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AccordionError {
    /// Returns `true` if the error comes from the document's structure
    /// rather than from configuration.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MissingHeader { .. }
                | Self::NoPanels { .. }
                | Self::PanelNotFound { .. }
                | Self::ContentNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AccordionError>;
