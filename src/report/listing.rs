//! Paginated survey listing with filtering, sorting and dropdown options,
//! computed in memory over a full main-layer fetch.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::arcgis::types::{Filter, QueryOutcome, MAIN_LAYER};
use crate::arcgis::ArcGisClient;
use crate::error::ReportError;
use crate::mappings;

pub const DEFAULT_PER_PAGE: usize = 10;
pub const DEFAULT_SORT_FIELD: &str = "data_rilevamento";

const FILTERABLE_FIELDS: &[&str] = &["nome_operatore", "tratta", "tipologia_appalto"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a query parameter, falling back to descending.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("asc") {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListingQuery {
    pub page: usize,
    pub per_page: usize,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub filters: ListingFilters,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            sort_by: DEFAULT_SORT_FIELD.to_string(),
            sort_order: SortOrder::Desc,
            filters: ListingFilters::default(),
        }
    }
}

/// Raw-code filters; empty vectors and `None` dates match everything.
#[derive(Debug, Clone, Default)]
pub struct ListingFilters {
    pub nome_operatore: Vec<String>,
    pub tratta: Vec<String>,
    pub tipologia_appalto: Vec<String>,
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub date_from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub date_to: Option<String>,
}

/// One listing row with display values; the date is already rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRow {
    pub uniquerowid: String,
    pub nome_operatore: String,
    pub tratta: String,
    pub tipologia_appalto: String,
    pub data_rilevamento: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub rows: Vec<ListingRow>,
    /// Matching records before pagination.
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateRange {
    pub min: String,
    pub max: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub nome_operatore: Vec<FilterOption>,
    pub tratta: Vec<FilterOption>,
    pub tipologia_appalto: Vec<FilterOption>,
    pub date_range: Option<DateRange>,
}

/// Row with the raw survey date kept alongside, for sorting before display
/// formatting.
#[derive(Debug, Clone)]
struct CandidateRow {
    row: ListingRow,
    raw_date: Value,
}

/// Fetch the full main layer and compute one page of the listing.
pub async fn query_listing(
    client: &ArcGisClient,
    query: &ListingQuery,
) -> Result<ListingPage, ReportError> {
    let features = match client.query_layer(MAIN_LAYER, &Filter::all()).await? {
        QueryOutcome::Features(collection) => collection.features,
        QueryOutcome::ServiceError(message) => return Err(ReportError::Upstream(message)),
    };

    let mut candidates: Vec<CandidateRow> = features
        .iter()
        .filter(|feature| passes_filters(&feature.attributes, &query.filters))
        .map(|feature| candidate_from(&feature.attributes))
        .collect();

    sort_candidates(&mut candidates, &query.sort_by, query.sort_order);

    let total = candidates.len();
    let page = query.page.max(1);
    let offset = (page - 1) * query.per_page;

    let rows = candidates
        .into_iter()
        .skip(offset)
        .take(query.per_page)
        .map(|candidate| {
            let mut row = candidate.row;
            if !mappings::is_empty(&candidate.raw_date) {
                row.data_rilevamento =
                    mappings::field_value("data_rilevamento", &candidate.raw_date);
            }
            row
        })
        .collect();

    Ok(ListingPage { rows, total })
}

/// Distinct filter values present in the data, with display labels and the
/// covered date range.
pub async fn filter_options(client: &ArcGisClient) -> Result<FilterOptions, ReportError> {
    let features = match client.query_layer(MAIN_LAYER, &Filter::all()).await? {
        QueryOutcome::Features(collection) => collection.features,
        QueryOutcome::ServiceError(message) => return Err(ReportError::Upstream(message)),
    };

    let mut distinct: Vec<BTreeSet<String>> = vec![BTreeSet::new(); FILTERABLE_FIELDS.len()];
    let mut timestamps: Vec<f64> = Vec::new();

    for feature in &features {
        for (i, field) in FILTERABLE_FIELDS.iter().enumerate() {
            if let Some(code) = feature.attributes.get(*field).and_then(Value::as_str) {
                if !code.is_empty() {
                    distinct[i].insert(code.to_string());
                }
            }
        }
        if let Some(raw) = feature.attributes.get("data_rilevamento") {
            if let Some(ts) = mappings::normalized_timestamp(raw) {
                timestamps.push(ts);
            }
        }
    }

    let options_for = |i: usize, field: &str| -> Vec<FilterOption> {
        distinct[i]
            .iter()
            .map(|code| FilterOption {
                label: mappings::field_value(field, &Value::String(code.clone())),
                value: code.clone(),
            })
            .collect()
    };

    let date_range = match (
        timestamps.iter().copied().reduce(f64::min),
        timestamps.iter().copied().reduce(f64::max),
    ) {
        (Some(min), Some(max)) => {
            let min = mappings::format_timestamp(min, "%Y-%m-%d");
            let max = mappings::format_timestamp(max, "%Y-%m-%d");
            min.zip(max).map(|(min, max)| DateRange { min, max })
        }
        _ => None,
    };

    Ok(FilterOptions {
        nome_operatore: options_for(0, "nome_operatore"),
        tratta: options_for(1, "tratta"),
        tipologia_appalto: options_for(2, "tipologia_appalto"),
        date_range,
    })
}

/// Split a comma-separated parameter into trimmed, non-empty values.
pub fn normalize_filter_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn candidate_from(attrs: &Map<String, Value>) -> CandidateRow {
    let display = |field: &str| -> String {
        attrs
            .get(field)
            .map(|value| mappings::field_value(field, value))
            .unwrap_or_default()
    };
    let raw_date = attrs
        .get("data_rilevamento")
        .cloned()
        .unwrap_or(Value::Null);
    CandidateRow {
        row: ListingRow {
            uniquerowid: attrs
                .get("uniquerowid")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            nome_operatore: display("nome_operatore"),
            tratta: display("tratta"),
            tipologia_appalto: display("tipologia_appalto"),
            data_rilevamento: String::new(),
        },
        raw_date,
    }
}

fn passes_filters(attrs: &Map<String, Value>, filters: &ListingFilters) -> bool {
    let code_matches = |field: &str, wanted: &[String]| -> bool {
        if wanted.is_empty() {
            return true;
        }
        attrs
            .get(field)
            .and_then(Value::as_str)
            .map(|code| wanted.iter().any(|w| w == code))
            .unwrap_or(false)
    };

    if !code_matches("nome_operatore", &filters.nome_operatore)
        || !code_matches("tratta", &filters.tratta)
        || !code_matches("tipologia_appalto", &filters.tipologia_appalto)
    {
        return false;
    }

    if filters.date_from.is_some() || filters.date_to.is_some() {
        let record_date = attrs
            .get("data_rilevamento")
            .and_then(mappings::normalized_timestamp)
            .and_then(|ts| mappings::format_timestamp(ts, "%Y-%m-%d"));
        let Some(record_date) = record_date else {
            return false;
        };
        if let Some(from) = &filters.date_from {
            if record_date < *from {
                return false;
            }
        }
        if let Some(to) = &filters.date_to {
            if record_date > *to {
                return false;
            }
        }
    }

    true
}

/// Stable sort; equal keys keep their fetch order in both directions.
fn sort_candidates(candidates: &mut [CandidateRow], sort_by: &str, order: SortOrder) {
    let compare = |a: &CandidateRow, b: &CandidateRow| -> Ordering {
        if sort_by == "data_rilevamento" {
            let ts = |c: &CandidateRow| mappings::normalized_timestamp(&c.raw_date).unwrap_or(0.0);
            ts(a).total_cmp(&ts(b))
        } else {
            sort_key(&a.row, sort_by).cmp(&sort_key(&b.row, sort_by))
        }
    };
    match order {
        SortOrder::Asc => candidates.sort_by(compare),
        SortOrder::Desc => candidates.sort_by(|a, b| compare(b, a)),
    }
}

fn sort_key(row: &ListingRow, sort_by: &str) -> String {
    let value = match sort_by {
        "uniquerowid" => &row.uniquerowid,
        "nome_operatore" => &row.nome_operatore,
        "tratta" => &row.tratta,
        "tipologia_appalto" => &row.tipologia_appalto,
        _ => return String::new(),
    };
    value.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(operator: &str, route: &str, date_ts: i64) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("uniquerowid".into(), json!(format!("R-{date_ts}")));
        map.insert("nome_operatore".into(), json!(operator));
        map.insert("tratta".into(), json!(route));
        map.insert("tipologia_appalto".into(), json!("segnaletica"));
        map.insert("data_rilevamento".into(), json!(date_ts * 1000));
        map
    }

    #[test]
    fn test_sort_order_parse_defaults_to_desc() {
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("ASC"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("sideways"), SortOrder::Desc);
    }

    #[test]
    fn test_normalize_filter_values() {
        assert_eq!(
            normalize_filter_values("a, b ,,c"),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert!(normalize_filter_values("  ").is_empty());
        assert_eq!(normalize_filter_values("solo"), vec!["solo".to_string()]);
    }

    #[test]
    fn test_code_filter_matches_raw_codes() {
        let record = attrs("g_vitale", "A50", 1_700_000_000);
        let mut filters = ListingFilters {
            nome_operatore: vec!["g_vitale".to_string()],
            ..Default::default()
        };
        assert!(passes_filters(&record, &filters));

        filters.nome_operatore = vec!["g_ferrari".to_string()];
        assert!(!passes_filters(&record, &filters));
    }

    #[test]
    fn test_date_filter_requires_a_date() {
        let mut record = attrs("g_vitale", "A50", 1_700_000_000);
        record.remove("data_rilevamento");
        let filters = ListingFilters {
            date_from: Some("2020-01-01".to_string()),
            ..Default::default()
        };
        assert!(!passes_filters(&record, &filters));
    }

    #[test]
    fn test_date_range_filter_is_inclusive() {
        let record = attrs("g_vitale", "A50", 1_700_000_000);
        let record_date = mappings::format_timestamp(1_700_000_000.0, "%Y-%m-%d").unwrap();
        let filters = ListingFilters {
            date_from: Some(record_date.clone()),
            date_to: Some(record_date),
            ..Default::default()
        };
        assert!(passes_filters(&record, &filters));
    }

    #[test]
    fn test_sort_by_date_descending() {
        let mut candidates: Vec<CandidateRow> = [1_700_000_000i64, 1_700_300_000, 1_700_100_000]
            .iter()
            .map(|ts| candidate_from(&attrs("g_vitale", "A50", *ts)))
            .collect();
        sort_candidates(&mut candidates, "data_rilevamento", SortOrder::Desc);
        let ids: Vec<&str> = candidates.iter().map(|c| c.row.uniquerowid.as_str()).collect();
        assert_eq!(ids, vec!["R-1700300000", "R-1700100000", "R-1700000000"]);
    }

    #[test]
    fn test_sort_by_string_field_is_case_insensitive() {
        let mut candidates = vec![
            candidate_from(&attrs("g_vitale", "SP11", 1)),
            candidate_from(&attrs("g_vitale", "A51", 2)),
            candidate_from(&attrs("g_vitale", "A50", 3)),
        ];
        sort_candidates(&mut candidates, "tratta", SortOrder::Asc);
        let routes: Vec<&str> = candidates.iter().map(|c| c.row.tratta.as_str()).collect();
        assert_eq!(
            routes,
            vec!["A50 (Tangenziale Ovest)", "A51 (Tangenziale Est)", "SP11"]
        );
    }

    #[test]
    fn test_missing_date_sorts_as_zero() {
        let mut no_date = attrs("g_vitale", "A50", 5);
        no_date.remove("data_rilevamento");
        let mut candidates = vec![
            candidate_from(&attrs("g_vitale", "A50", 1_700_000_000)),
            candidate_from(&no_date),
        ];
        sort_candidates(&mut candidates, "data_rilevamento", SortOrder::Asc);
        assert_eq!(candidates[0].row.uniquerowid, "R-5");
    }
}
