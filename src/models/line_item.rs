//! Budget line item model
//!
//! A budget is an ordered list of lines. Priced lines carry the raw pricing
//! inputs and the derived values computed from them; comment and section
//! lines only carry text and never take part in monetary totals.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::LineItemId;
use crate::pricing::cascade::{
    coerce_amount, compute_line_item, parse_lenient, LinePricing, PricingInput,
    DEFAULT_TAX_PERCENT,
};

/// What a budget line represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// A priced line
    #[default]
    Item,
    /// Free text shown between lines
    Comment,
    /// A heading that groups the following lines
    Section,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => write!(f, "item"),
            Self::Comment => write!(f, "comment"),
            Self::Section => write!(f, "section"),
        }
    }
}

/// One row of a budget
///
/// Pricing inputs are private so every change goes through a setter that
/// recomputes the derived values. Derived values present in serialized input
/// are ignored and recomputed on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "LineItemRecord")]
pub struct LineItem {
    /// Unique identifier
    pub id: LineItemId,

    /// Kind of line
    pub kind: LineKind,

    /// Item description, comment text or section title
    pub description: String,

    /// Unit label (e.g. "m2", "gl")
    pub unit: String,

    unit_value: f64,
    quantity: f64,
    utility_percent: f64,
    tax_percent: f64,

    /// Derived values, always recomputed from the inputs above
    pricing: LinePricing,
}

impl LineItem {
    /// Create an empty priced line with the given tax percentage
    pub fn item(description: impl Into<String>, tax_percent: f64) -> Self {
        Self::priced(
            description,
            PricingInput {
                tax_percent,
                ..PricingInput::default()
            },
        )
    }

    /// Create a priced line from a full set of inputs
    pub fn priced(description: impl Into<String>, input: PricingInput) -> Self {
        let input = input.sanitized();
        let mut line = Self {
            id: LineItemId::new(),
            kind: LineKind::Item,
            description: description.into(),
            unit: String::new(),
            unit_value: input.unit_value,
            quantity: input.quantity,
            utility_percent: input.utility_percent,
            tax_percent: input.tax_percent,
            pricing: LinePricing::default(),
        };
        line.recompute();
        line
    }

    /// Create a comment line
    pub fn comment(text: impl Into<String>) -> Self {
        Self::text_line(LineKind::Comment, text.into())
    }

    /// Create a section heading line
    pub fn section(title: impl Into<String>) -> Self {
        Self::text_line(LineKind::Section, title.into())
    }

    fn text_line(kind: LineKind, description: String) -> Self {
        Self {
            id: LineItemId::new(),
            kind,
            description,
            unit: String::new(),
            unit_value: 0.0,
            quantity: 0.0,
            utility_percent: 0.0,
            tax_percent: 0.0,
            pricing: LinePricing::default(),
        }
    }

    /// Whether this line takes part in monetary totals
    pub fn is_monetary(&self) -> bool {
        self.kind == LineKind::Item
    }

    /// Current pricing inputs
    pub fn input(&self) -> PricingInput {
        PricingInput::new(
            self.unit_value,
            self.quantity,
            self.utility_percent,
            self.tax_percent,
        )
    }

    /// Derived pricing values (all zero for comment and section lines)
    pub fn pricing(&self) -> &LinePricing {
        &self.pricing
    }

    pub fn unit_value(&self) -> f64 {
        self.unit_value
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn utility_percent(&self) -> f64 {
        self.utility_percent
    }

    pub fn tax_percent(&self) -> f64 {
        self.tax_percent
    }

    /// Net value plus tax on the net value
    pub fn gross_value(&self) -> f64 {
        self.pricing.gross_value
    }

    /// Utility-loaded value plus its tax
    pub fn total(&self) -> f64 {
        self.pricing.total
    }

    /// Set the unit value and recompute
    pub fn set_unit_value(&mut self, value: f64) -> Result<(), LineItemError> {
        self.ensure_monetary()?;
        self.unit_value = coerce_amount(value);
        self.recompute();
        Ok(())
    }

    /// Set the quantity and recompute
    pub fn set_quantity(&mut self, value: f64) -> Result<(), LineItemError> {
        self.ensure_monetary()?;
        self.quantity = coerce_amount(value);
        self.recompute();
        Ok(())
    }

    /// Set the utility percentage and recompute
    pub fn set_utility_percent(&mut self, value: f64) -> Result<(), LineItemError> {
        self.ensure_monetary()?;
        self.utility_percent = coerce_amount(value);
        self.recompute();
        Ok(())
    }

    /// Set the tax percentage and recompute
    pub fn set_tax_percent(&mut self, value: f64) -> Result<(), LineItemError> {
        self.ensure_monetary()?;
        self.tax_percent = coerce_amount(value);
        self.recompute();
        Ok(())
    }

    fn ensure_monetary(&self) -> Result<(), LineItemError> {
        if self.is_monetary() {
            Ok(())
        } else {
            Err(LineItemError::NotMonetary(self.kind))
        }
    }

    fn recompute(&mut self) {
        self.pricing = if self.is_monetary() {
            compute_line_item(&self.input())
        } else {
            LinePricing::default()
        };
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LineKind::Item => write!(
                f,
                "{} ({} x {:.2})",
                self.description, self.quantity, self.unit_value
            ),
            LineKind::Comment => write!(f, "# {}", self.description),
            LineKind::Section => write!(f, "== {} ==", self.description),
        }
    }
}

/// Serialized shape of a line; derived values are not read back
///
/// Pricing inputs are read leniently: numbers pass through, text goes
/// through [`parse_lenient`] and `null` is `0`. A missing `taxPercent`
/// stays unset until [`LineItemRecord::into_line_item`] fills it in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRecord {
    #[serde(default)]
    id: LineItemId,
    #[serde(default)]
    kind: LineKind,
    #[serde(default)]
    description: String,
    #[serde(default)]
    unit: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    unit_value: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    quantity: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    utility_percent: f64,
    #[serde(default, deserialize_with = "lenient_optional_amount")]
    tax_percent: Option<f64>,
}

impl LineItemRecord {
    /// Build the line, taking `default_tax_percent` when the row had no tax
    pub fn into_line_item(self, default_tax_percent: f64) -> LineItem {
        let mut line = match self.kind {
            LineKind::Item => LineItem::priced(
                self.description,
                PricingInput::new(
                    self.unit_value,
                    self.quantity,
                    self.utility_percent,
                    self.tax_percent.unwrap_or(default_tax_percent),
                ),
            ),
            kind => LineItem::text_line(kind, self.description),
        };
        line.id = self.id;
        line.unit = self.unit;
        line
    }
}

impl From<LineItemRecord> for LineItem {
    fn from(record: LineItemRecord) -> Self {
        record.into_line_item(DEFAULT_TAX_PERCENT)
    }
}

/// Raw JSON value of a pricing field
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Option::<RawAmount>::deserialize(deserializer)? {
        Some(RawAmount::Number(value)) => value,
        Some(RawAmount::Text(text)) => parse_lenient(&text),
        None => 0.0,
    };
    Ok(amount)
}

fn lenient_optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_amount(deserializer).map(Some)
}

/// Errors raised when editing a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineItemError {
    NotMonetary(LineKind),
}

impl fmt::Display for LineItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotMonetary(kind) => {
                write!(f, "A {} line has no pricing fields", kind)
            }
        }
    }
}

impl std::error::Error for LineItemError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_uses_given_tax() {
        let line = LineItem::item("Excavación", 19.0);
        assert!(line.is_monetary());
        assert_eq!(line.tax_percent(), 19.0);
        assert_eq!(line.utility_percent(), 0.0);
        assert_eq!(line.total(), 0.0);
    }

    #[test]
    fn test_setters_recompute() {
        let mut line = LineItem::item("Radier", 19.0);
        line.set_unit_value(1000.0).unwrap();
        line.set_quantity(2.0).unwrap();
        assert_eq!(line.pricing().net_value, 2000.0);
        assert!((line.gross_value() - 2380.0).abs() < 1e-9);

        line.set_utility_percent(10.0).unwrap();
        assert!((line.pricing().utility_loaded - 2200.0).abs() < 1e-9);
        assert!((line.total() - 2618.0).abs() < 1e-9);
        // Gross value ignores utility
        assert!((line.gross_value() - 2380.0).abs() < 1e-9);
    }

    #[test]
    fn test_setter_coerces_invalid_values() {
        let mut line = LineItem::priced("Moldaje", PricingInput::new(500.0, 4.0, 0.0, 19.0));
        line.set_quantity(f64::NAN).unwrap();
        assert_eq!(line.quantity(), 0.0);
        assert_eq!(line.total(), 0.0);

        line.set_quantity(3.0).unwrap();
        line.set_unit_value(-10.0).unwrap();
        assert_eq!(line.unit_value(), 0.0);
    }

    #[test]
    fn test_comment_has_no_pricing() {
        let mut line = LineItem::comment("Incluye retiro de escombros");
        assert!(!line.is_monetary());
        assert_eq!(*line.pricing(), LinePricing::default());
        assert_eq!(
            line.set_unit_value(100.0),
            Err(LineItemError::NotMonetary(LineKind::Comment))
        );
        assert_eq!(line.total(), 0.0);
    }

    #[test]
    fn test_deserialize_ignores_stale_derived_values() {
        let json = r#"{
            "kind": "item",
            "description": "Pintura",
            "unitValue": 1000,
            "quantity": 1,
            "utilityPercent": 10,
            "taxPercent": 19,
            "grossValue": 99999,
            "total": 12345
        }"#;

        let line: LineItem = serde_json::from_str(json).unwrap();
        assert!((line.total() - 1309.0).abs() < 1e-9);
        assert!((line.gross_value() - 1190.0).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_defaults_and_text_lines() {
        let line: LineItem =
            serde_json::from_str(r#"{"description": "Cierre", "unitValue": 10, "quantity": 1}"#)
                .unwrap();
        assert_eq!(line.kind, LineKind::Item);
        assert_eq!(line.tax_percent(), 19.0);

        let section: LineItem =
            serde_json::from_str(r#"{"kind": "section", "description": "Obra gruesa", "unitValue": 10, "quantity": 3}"#)
                .unwrap();
        assert_eq!(section.kind, LineKind::Section);
        assert_eq!(section.unit_value(), 0.0);
        assert_eq!(section.total(), 0.0);
    }

    #[test]
    fn test_serialized_line_reloads_identically() {
        let line = LineItem::priced("Cerámica", PricingInput::new(12_500.0, 18.5, 12.0, 19.0));
        let json = serde_json::to_string(&line).unwrap();
        let reloaded: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(line, reloaded);
    }
}
