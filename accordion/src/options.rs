//! Accordion configuration bundle.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use pagedom::Easing;
use serde::{Deserialize, Deserializer};

use crate::controller::AccordionSettings;
use crate::error::Result;

const DEFAULT_DURATION: Duration = Duration::from_millis(200);

/// Prefix used when generating accordion ids. Accepts strings or numbers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdPrefix {
    Text(String),
    Number(i64),
}

impl Default for IdPrefix {
    fn default() -> Self {
        Self::Text("accordion".into())
    }
}

impl fmt::Display for IdPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for IdPrefix {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for IdPrefix {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for IdPrefix {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Options recognized by the accordion factory.
///
/// Every field has a default, so any subset may be given:
///
/// ```
/// use accordion::AccordionOptions;
///
/// let options = AccordionOptions::from_json_str(
///     r#"{ "detailsSelector": ".collapse", "duration": 300, "idPrefix": 7 }"#,
/// ).unwrap();
/// assert_eq!(options.details_selector, ".collapse");
/// assert_eq!(options.content_selector, ".content");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccordionOptions {
    /// Animation length, given in milliseconds.
    #[serde(deserialize_with = "deserialize_millis")]
    pub duration: Duration,
    /// Timing function name, e.g. `"ease-out"`.
    #[serde(deserialize_with = "deserialize_easing")]
    pub easing: Easing,
    pub details_selector: String,
    /// Looked up inside each matched panel.
    pub content_selector: String,
    /// Build one accordion per matching panel, or only for the first.
    pub create_multiple: bool,
    pub id_prefix: IdPrefix,
    /// Assign ids and ARIA attributes to the managed elements.
    pub manage_aria: bool,
}

impl Default for AccordionOptions {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            easing: Easing::Linear,
            details_selector: "details".into(),
            content_selector: ".content".into(),
            create_multiple: true,
            id_prefix: IdPrefix::default(),
            manage_aria: true,
        }
    }
}

impl AccordionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let options = Self::from_json_str(&json)?;
        log::debug!("[accordion] Loaded options from {}", path.display());
        Ok(options)
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn details_selector(mut self, selector: impl Into<String>) -> Self {
        self.details_selector = selector.into();
        self
    }

    pub fn content_selector(mut self, selector: impl Into<String>) -> Self {
        self.content_selector = selector.into();
        self
    }

    pub fn create_multiple(mut self, create_multiple: bool) -> Self {
        self.create_multiple = create_multiple;
        self
    }

    pub fn id_prefix(mut self, prefix: impl Into<IdPrefix>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    pub fn manage_aria(mut self, manage_aria: bool) -> Self {
        self.manage_aria = manage_aria;
        self
    }

    /// Per-instance settings for the accordion with the given id.
    pub fn settings(&self, id: impl Into<String>) -> AccordionSettings {
        AccordionSettings::new(id)
            .duration(self.duration)
            .easing(self.easing)
            .manage_aria(self.manage_aria)
    }
}

fn deserialize_millis<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = f64::deserialize(deserializer)?;
    if !millis.is_finite() || millis < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "duration must be a non-negative number of milliseconds, got {millis}"
        )));
    }
    Ok(Duration::from_secs_f64(millis / 1000.0))
}

fn deserialize_easing<'de, D>(deserializer: D) -> std::result::Result<Easing, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}
