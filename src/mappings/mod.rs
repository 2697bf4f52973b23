//! Declarative translation of raw survey attributes into display-ready rows.
//!
//! Everything here is pure: the functions take raw JSON attribute values and
//! return labelled, ordered, human-readable rows without touching the network.

mod tables;

use chrono::Local;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::arcgis::types::{Feature, Geometry};

pub use tables::DEFAULT_ROUTE_LOGO;

/// One display-ready attribute row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedAttribute {
    pub field: String,
    pub label: String,
    pub value: String,
    pub original: Value,
}

/// A feature whose attributes have been translated for display.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedFeature {
    pub attributes: Vec<ProcessedAttribute>,
    pub geometry: Option<Geometry>,
}

/// A value is empty when it is null, or a string that trims to nothing or to
/// the literal "null" in any casing.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null")
        }
        _ => false,
    }
}

/// Display label for a field code. Unknown codes fall back to a title-cased
/// rendering of the snake_case name.
pub fn field_label(field: &str) -> String {
    if let Some((_, label)) = tables::FIELD_LABELS.iter().find(|(f, _)| *f == field) {
        return (*label).to_string();
    }
    field
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn is_date_field(field: &str) -> bool {
    tables::DATE_FIELDS.iter().any(|(f, _)| *f == field)
}

/// strftime pattern for a date field, defaulting to day-first dates.
pub fn date_format(field: &str) -> &'static str {
    tables::DATE_FIELDS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, fmt)| *fmt)
        .unwrap_or("%d/%m/%Y")
}

/// Coerce a raw value to a Unix timestamp in seconds. Millisecond epochs
/// (anything past 9999999999) are divided down. Numeric strings count.
pub fn normalized_timestamp(value: &Value) -> Option<f64> {
    let raw = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if raw > 9_999_999_999.0 {
        Some(raw / 1000.0)
    } else {
        Some(raw)
    }
}

/// Render a seconds timestamp with a strftime pattern in local time.
pub fn format_timestamp(seconds: f64, fmt: &str) -> Option<String> {
    let dt = chrono::DateTime::from_timestamp(seconds as i64, 0)?;
    Some(dt.with_timezone(&Local).format(fmt).to_string())
}

/// Display value for a field: date fields render as local dates, coded
/// fields translate through their value table, everything else stringifies.
pub fn field_value(field: &str, value: &Value) -> String {
    if is_date_field(field) && !is_empty(value) {
        if let Some(seconds) = normalized_timestamp(value) {
            if let Some(rendered) = format_timestamp(seconds, date_format(field)) {
                return rendered;
            }
        }
    }

    if let Value::String(code) = value {
        if let Some((_, pairs)) = tables::FIELD_VALUES.iter().find(|(f, _)| *f == field) {
            if let Some((_, display)) = pairs.iter().find(|(c, _)| c == code) {
                return (*display).to_string();
            }
        }
    }

    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Translate raw attributes into ordered display rows, dropping empty values.
///
/// Sections with a declared order emit only the declared fields, in that
/// order; unknown sections fall back to the map's own ordering.
pub fn process_attributes(attributes: &Map<String, Value>, section: &str) -> Vec<ProcessedAttribute> {
    let order = field_order(section);
    let mut rows = Vec::new();

    if !order.is_empty() {
        for field in order {
            if let Some(value) = attributes.get(*field) {
                if !is_empty(value) {
                    rows.push(row_for(field, value));
                }
            }
        }
    } else {
        for (field, value) in attributes {
            if !is_empty(value) {
                rows.push(row_for(field, value));
            }
        }
    }

    rows
}

fn row_for(field: &str, value: &Value) -> ProcessedAttribute {
    ProcessedAttribute {
        field: field.to_string(),
        label: field_label(field),
        value: field_value(field, value),
        original: value.clone(),
    }
}

pub fn process_features(features: &[Feature], section: &str) -> Vec<ProcessedFeature> {
    features
        .iter()
        .map(|feature| ProcessedFeature {
            attributes: process_attributes(&feature.attributes, section),
            geometry: feature.geometry.clone(),
        })
        .collect()
}

/// All coded values for a field, for building filter dropdowns.
pub fn field_options(field: &str) -> &'static [(&'static str, &'static str)] {
    tables::FIELD_VALUES
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, pairs)| *pairs)
        .unwrap_or(&[])
}

pub fn field_order(section: &str) -> &'static [&'static str] {
    tables::FIELD_ORDER
        .iter()
        .find(|(s, _)| *s == section)
        .map(|(_, fields)| *fields)
        .unwrap_or(&[])
}

/// Logo filename for a route code, matched case-insensitively.
pub fn route_logo(route: &str) -> &'static str {
    let code = route.trim().to_lowercase();
    tables::ROUTE_LOGOS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, logo)| *logo)
        .unwrap_or(DEFAULT_ROUTE_LOGO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_detection() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!("")));
        assert!(is_empty(&json!("   ")));
        assert!(is_empty(&json!("null")));
        assert!(is_empty(&json!("NULL")));
        assert!(!is_empty(&json!("0")));
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(false)));
    }

    #[test]
    fn test_known_label() {
        assert_eq!(field_label("nome_operatore"), "Operatore");
        assert_eq!(field_label("tipo_intervento_pav"), "Tipologia di intervento");
    }

    #[test]
    fn test_label_fallback_title_cases() {
        assert_eq!(field_label("qualcosa_di_nuovo"), "Qualcosa Di Nuovo");
        assert_eq!(field_label("singolo"), "Singolo");
    }

    #[test]
    fn test_coded_value_translation() {
        assert_eq!(
            field_value("nome_operatore", &json!("g_vitale")),
            "Giovanni Vitale"
        );
        assert_eq!(field_value("tratta", &json!("A50")), "A50 (Tangenziale Ovest)");
        assert_eq!(field_value("presenza_dl", &json!("yes")), "Sì");
    }

    #[test]
    fn test_unmapped_code_passes_through() {
        assert_eq!(field_value("nome_operatore", &json!("sconosciuto")), "sconosciuto");
        assert_eq!(field_value("note", &json!("testo libero")), "testo libero");
        assert_eq!(field_value("num_imprese", &json!(3)), "3");
        assert_eq!(field_value("note", &Value::Null), "");
    }

    #[test]
    fn test_timestamp_normalization() {
        assert_eq!(normalized_timestamp(&json!(1700000000)), Some(1_700_000_000.0));
        assert_eq!(
            normalized_timestamp(&json!(1700000000000i64)),
            Some(1_700_000_000.0)
        );
        assert_eq!(
            normalized_timestamp(&json!("1700000000000")),
            Some(1_700_000_000.0)
        );
        assert_eq!(normalized_timestamp(&json!("abc")), None);
        assert_eq!(normalized_timestamp(&Value::Null), None);
    }

    #[test]
    fn test_date_field_renders_ms_and_s_identically() {
        let from_ms = field_value("data_rilevamento", &json!(1700000000000i64));
        let from_s = field_value("data_rilevamento", &json!(1700000000));
        assert_eq!(from_ms, from_s);
        // Expected value derived through the same local-time path so the
        // test does not depend on the host timezone.
        let expected = format_timestamp(1_700_000_000.0, "%d/%m/%Y").unwrap();
        assert_eq!(from_ms, expected);
    }

    #[test]
    fn test_non_numeric_date_value_passes_through() {
        assert_eq!(field_value("data_rilevamento", &json!("domani")), "domani");
    }

    #[test]
    fn test_process_attributes_ordered_section() {
        let mut attrs = Map::new();
        attrs.insert("note".into(), json!("ok"));
        attrs.insert("nome_operatore".into(), json!("g_vitale"));
        attrs.insert("tratta".into(), json!("A51"));
        attrs.insert("nome_dl".into(), json!(""));
        attrs.insert("fuori_ordine".into(), json!("ignorato"));

        let rows = process_attributes(&attrs, "main");
        let fields: Vec<&str> = rows.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(fields, vec!["nome_operatore", "tratta", "note"]);
        assert_eq!(rows[0].value, "Giovanni Vitale");
        assert_eq!(rows[1].value, "A51 (Tangenziale Est)");
    }

    #[test]
    fn test_process_attributes_unknown_section_keeps_all() {
        let mut attrs = Map::new();
        attrs.insert("b_campo".into(), json!("due"));
        attrs.insert("a_campo".into(), json!("uno"));
        attrs.insert("vuoto".into(), Value::Null);

        let rows = process_attributes(&attrs, "altro");
        assert_eq!(rows.len(), 2);
        // serde_json maps iterate in key order
        assert_eq!(rows[0].field, "a_campo");
        assert_eq!(rows[1].field, "b_campo");
    }

    #[test]
    fn test_field_order_sections() {
        assert_eq!(field_order("pk_pav").first(), Some(&"corsia"));
        assert_eq!(field_order("impresa").first(), Some(&"nome_impresa"));
        assert!(field_order("inesistente").is_empty());
    }

    #[test]
    fn test_field_options() {
        assert!(!field_options("tratta").is_empty());
        assert!(field_options("note").is_empty());
    }

    #[test]
    fn test_route_logos() {
        assert_eq!(route_logo("A50"), "A50-logo.png");
        assert_eq!(route_logo("a7_neg"), "A7-logo.png");
        assert_eq!(route_logo("A7_pos"), "A7-logo.png");
        assert_eq!(route_logo("sp11"), "SP11-logo.png");
        assert_eq!(route_logo(""), DEFAULT_ROUTE_LOGO);
        assert_eq!(route_logo("x99"), DEFAULT_ROUTE_LOGO);
    }
}
