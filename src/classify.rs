//! Semantic classification of cell type tags.
//!
//! A cell's [`CellObj`] carries loosely typed `t`/`p` tags. [`ClassifierTable`] turns them into a
//! closed [`SemanticKind`] once, so the rest of the crate matches on an enum instead of
//! inspecting strings. The table is configuration: widget sets can supply their own rules.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::types::CellObj;

/// The classified meaning of a cell's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticKind {
    Number,
    Date,
    Checkbox,
    Button,
    Icon,
    Image,
    Link,
    ProgressBar,
    Radio,
    Chart,
    PlainText,
}

/// A single classification rule. `None` matches any tag value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRule {
    #[serde(default)]
    pub t: Option<String>,
    #[serde(default)]
    pub p: Option<String>,
    pub kind: SemanticKind,
}

impl TagRule {
    pub fn new(t: Option<&str>, p: Option<&str>, kind: SemanticKind) -> Self {
        Self {
            t: t.map(str::to_string),
            p: p.map(str::to_string),
            kind,
        }
    }

    fn matches(&self, obj: &CellObj) -> bool {
        self.t.as_deref().is_none_or(|t| t == obj.t) && self.p.as_deref().is_none_or(|p| p == obj.p)
    }
}

/// Ordered rule table; the first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierTable {
    pub rules: Vec<TagRule>,
}

impl Default for ClassifierTable {
    fn default() -> Self {
        use SemanticKind::*;

        Self {
            rules: vec![
                TagRule::new(Some("NR"), None, Number),
                TagRule::new(Some("D8"), None, Date),
                TagRule::new(Some("V2"), Some("SI/NO"), Checkbox),
                TagRule::new(None, Some("CHK"), Checkbox),
                TagRule::new(Some("V2"), Some("RAD"), Radio),
                TagRule::new(None, Some("BTN"), Button),
                TagRule::new(Some("J4"), Some("ICO"), Icon),
                TagRule::new(Some("VO"), Some("COD_VER"), Icon),
                TagRule::new(None, Some("IMG"), Image),
                TagRule::new(Some("J1"), Some("URL"), Link),
                TagRule::new(Some("J4"), Some("PGB"), ProgressBar),
                TagRule::new(Some("J4"), Some("BAR"), Chart),
            ],
        }
    }
}

impl ClassifierTable {
    pub fn new(rules: Vec<TagRule>) -> Self {
        Self { rules }
    }

    /// Classify a tag pair. Total: unknown tags are [`SemanticKind::PlainText`].
    pub fn classify(&self, obj: &CellObj) -> SemanticKind {
        self.rules
            .iter()
            .find(|rule| rule.matches(obj))
            .map(|rule| rule.kind)
            .unwrap_or(SemanticKind::PlainText)
    }

    /// Whether a cell shows an object tooltip: tagged cells that render as text.
    pub fn has_tooltip(&self, obj: &CellObj) -> bool {
        !obj.t.is_empty()
            && matches!(self.classify(obj), SemanticKind::PlainText | SemanticKind::Date)
    }
}

static STANDARD_TABLE: LazyLock<ClassifierTable> = LazyLock::new(ClassifierTable::default);

/// Classify with the standard tag vocabulary.
pub fn classify(obj: &CellObj) -> SemanticKind {
    STANDARD_TABLE.classify(obj)
}
