// ============================================================
// CELL VALUES
// ============================================================
// Typed values for race-result cells, inferred per column

use serde::Serialize;
use std::fmt;

/// Raw cell contents that count as missing
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A non-null cell value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Numeric view of the value. Text cells count when they hold a finite
    /// number, since one non-numeric cell turns a whole column into text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            CellValue::Text(v) => parse_finite(v),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Column type inferred from every non-missing value in one file's column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Int,
    Float,
    Text,
}

impl ColumnKind {
    /// Narrowest kind that holds all the given raw values.
    /// A column with no values at all is text.
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut kind = None;

        for raw in values.into_iter().filter(|raw| !is_missing(raw)) {
            let value_kind = if raw.parse::<i64>().is_ok() {
                ColumnKind::Int
            } else if parse_finite(raw).is_some() {
                ColumnKind::Float
            } else {
                return ColumnKind::Text;
            };

            kind = match (kind, value_kind) {
                (None, k) => Some(k),
                (Some(ColumnKind::Int), ColumnKind::Int) => Some(ColumnKind::Int),
                _ => Some(ColumnKind::Float),
            };
        }

        kind.unwrap_or(ColumnKind::Text)
    }

    /// Convert a raw cell into a value of this kind; missing cells are `None`
    pub fn parse(self, raw: &str) -> Option<CellValue> {
        if is_missing(raw) {
            return None;
        }

        let value = match self {
            ColumnKind::Int => raw.parse().map(CellValue::Int).ok(),
            ColumnKind::Float => parse_finite(raw).map(CellValue::Float),
            ColumnKind::Text => None,
        };

        Some(value.unwrap_or_else(|| CellValue::Text(raw.to_string())))
    }
}

pub fn is_missing(raw: &str) -> bool {
    NA_TOKENS.contains(&raw)
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
