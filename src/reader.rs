//! Reading typed information out of cells: semantic kind and numeric value.

use serde::{Deserialize, Serialize};

use crate::classify::{ClassifierTable, SemanticKind};
use crate::types::Cell;

/// Separators used by display values.
///
/// Raw keys (`obj.k`) always use `.` as decimal separator; display values follow the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberLocale {
    pub decimal_separator: char,
    pub grouping_separator: Option<char>,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: Some(','),
        }
    }
}

impl NumberLocale {
    /// `1.234,56` style.
    pub fn comma_decimal() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: Some('.'),
        }
    }

    /// Parse a display string. Returns `None` for empty or non-numeric text.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let normalized: String = trimmed
            .chars()
            .filter(|c| Some(*c) != self.grouping_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect();
        parse_finite(&normalized)
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// The collaborator configuration every pipeline stage reads cells through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellReader {
    pub classifier: ClassifierTable,
    pub locale: NumberLocale,
}

impl CellReader {
    pub fn new(classifier: ClassifierTable, locale: NumberLocale) -> Self {
        Self { classifier, locale }
    }

    pub fn kind(&self, cell: &Cell) -> SemanticKind {
        self.classifier.classify(&cell.obj)
    }

    /// Numeric value of a cell: the raw key when it parses, otherwise the display value.
    pub fn number(&self, cell: &Cell) -> Option<f64> {
        parse_finite(cell.obj.k.trim()).or_else(|| self.locale.parse(&cell.value))
    }
}

#[cfg(test)]
mod tests {
    use super::{CellReader, NumberLocale};
    use crate::types::{Cell, CellObj};

    #[test]
    fn raw_key_wins_over_display_value() {
        let reader = CellReader::default();
        let cell = Cell::new(CellObj::new("NR", "", "1234.5"), "1.234,50 EUR");
        assert_eq!(reader.number(&cell), Some(1234.5));
    }

    #[test]
    fn display_value_is_parsed_with_locale() {
        let cell = Cell::new(CellObj::new("NR", "", ""), "1.234,5");
        let reader = CellReader {
            locale: NumberLocale::comma_decimal(),
            ..Default::default()
        };
        assert_eq!(reader.number(&cell), Some(1234.5));
        assert_eq!(CellReader::default().number(&Cell::text("1,234.5")), Some(1234.5));
    }

    #[test]
    fn non_numeric_text_has_no_number() {
        let reader = CellReader::default();
        assert_eq!(reader.number(&Cell::new(CellObj::new("CN", "COL", "CASFRA"), "CASFRA")), None);
        assert_eq!(reader.number(&Cell::text("")), None);
        assert_eq!(reader.number(&Cell::text("NaN")), None);
    }
}
