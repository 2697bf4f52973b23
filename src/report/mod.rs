//! Report assembly: fetches a survey's main record, related rows and
//! attachment references concurrently and shapes them for display.

pub mod listing;

use futures::stream::{self, StreamExt};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::arcgis::types::{
    AttachmentsOutcome, Feature, Filter, QueryOutcome, CONTRACTOR_LAYER, MAIN_LAYER,
    PAVEMENT_LAYER, PHOTO_LAYER,
};
use crate::arcgis::ArcGisClient;
use crate::error::ReportError;
use crate::geometry;
use crate::mappings::{self, ProcessedAttribute};

const LOCATION_FIELDS: &[&str] = &[
    "tratta",
    "carreggiata",
    "pk_iniz",
    "pk_fin",
    "area_intervento",
    "nome_svincolo",
    "corsie_svincolo",
    "nome_casello",
    "nome_area_servizio",
];

const MAIN_FIELDS: &[&str] = &[
    "nome_operatore",
    "data_rilevamento",
    "ora_rilevamento",
    "tipologia_appalto",
    "presenza_dl",
    "nome_dl",
    "presenza_cse",
    "nome_cse",
    "num_imprese",
    "note",
];

const PK_PAV_FIELDS: &[&str] = &["corsia", "tipo_intervento_pav", "pk_iniz_pav", "pk_fin_pav"];

/// Concurrent attachment-info lookups per report.
const PHOTO_FANOUT: usize = 5;

/// Pointer to one attachment on the feature service, resolvable later into
/// image bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachmentRef {
    pub layer: u32,
    pub object_id: i64,
    pub attachment_id: i64,
    pub name: String,
}

/// Everything a rendered report needs, already translated for display.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub report_id: String,
    pub object_id: Option<i64>,
    pub tratta: String,
    pub tratta_code: String,
    pub route_logo: String,
    pub maps_url: Option<String>,
    pub location_data: Vec<ProcessedAttribute>,
    pub main_data: Vec<ProcessedAttribute>,
    pub pk_pav_data: Vec<Vec<ProcessedAttribute>>,
    pub pk_pav_headers: Vec<String>,
    pub impresa_data: Vec<Vec<ProcessedAttribute>>,
    pub impresa_headers: Vec<String>,
    pub photos: Vec<AttachmentRef>,
    pub signature_attachments: Vec<AttachmentRef>,
    pub raw_attributes: Map<String, Value>,
}

/// Assemble the full report for one survey.
///
/// The main record is fetched first; a missing record is [`ReportError::NotFound`]
/// and an upstream failure on that fetch is [`ReportError::Upstream`]. Related
/// layers and the signature list are then fetched concurrently, and a failure
/// on any of those degrades to an empty section rather than failing the report.
pub async fn build_report(
    client: &ArcGisClient,
    report_id: &str,
) -> Result<ReportView, ReportError> {
    let main_filter = Filter::eq("uniquerowid", report_id);
    let main = match client.query_layer(MAIN_LAYER, &main_filter).await? {
        QueryOutcome::Features(collection) => collection.features,
        QueryOutcome::ServiceError(message) => return Err(ReportError::Upstream(message)),
    };
    let main_feature = main.into_iter().next().ok_or(ReportError::NotFound)?;
    let main_attrs = main_feature.attributes.clone();
    let main_obj_id = main_feature.object_id();

    let related = Filter::eq("parentrowid", report_id);
    let (pk_pav, impresa, foto, signature) = tokio::join!(
        client.query_layer(PAVEMENT_LAYER, &related),
        client.query_layer(CONTRACTOR_LAYER, &related),
        client.query_layer(PHOTO_LAYER, &related),
        fetch_signature_infos(client, main_obj_id),
    );

    let pk_pav = degraded("pk_pav", pk_pav?);
    let impresa = degraded("impresa", impresa?);
    let foto = degraded("foto", foto?);
    let signature = signature?;

    let processed_main = mappings::process_attributes(&main_attrs, "main");
    let mut location_data = filter_fields(&processed_main, LOCATION_FIELDS);
    let main_data = filter_fields(&processed_main, MAIN_FIELDS);

    let coords = geometry::feature_coordinates(main_feature.geometry.as_ref());
    let maps_url = coords.map(|(lat, lon)| {
        location_data.push(ProcessedAttribute {
            field: "latitudine".to_string(),
            label: "Latitudine".to_string(),
            value: format!("{lat:.6}"),
            original: json!(lat),
        });
        location_data.push(ProcessedAttribute {
            field: "longitudine".to_string(),
            label: "Longitudine".to_string(),
            value: format!("{lon:.6}"),
            original: json!(lon),
        });
        geometry::maps_url(lat, lon)
    });

    let mut pk_pav_data = Vec::new();
    for feature in mappings::process_features(&pk_pav, "pk_pav") {
        let filtered = filter_fields(&feature.attributes, PK_PAV_FIELDS);
        if !filtered.is_empty() {
            pk_pav_data.push(filtered);
        }
    }

    let mut impresa_data = Vec::new();
    for feature in mappings::process_features(&impresa, "impresa") {
        if !feature.attributes.is_empty() {
            impresa_data.push(feature.attributes);
        }
    }
    let impresa_headers = impresa_data
        .first()
        .map(|rows| rows.iter().map(|attr| attr.label.clone()).collect())
        .unwrap_or_default();

    let photos = resolve_photos(client, &foto).await?;

    let signature_attachments = match main_obj_id {
        Some(object_id) => signature
            .into_iter()
            .map(|info| AttachmentRef {
                layer: MAIN_LAYER,
                object_id,
                attachment_id: info.id,
                name: info.name,
            })
            .collect(),
        None => Vec::new(),
    };

    let tratta_code = main_attrs
        .get("tratta")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let tratta = mappings::field_value("tratta", &Value::String(tratta_code.clone()));
    let route_logo = mappings::route_logo(&tratta_code).to_string();

    Ok(ReportView {
        report_id: report_id.to_string(),
        object_id: main_obj_id,
        tratta,
        tratta_code,
        route_logo,
        maps_url,
        location_data,
        main_data,
        pk_pav_data,
        pk_pav_headers: PK_PAV_FIELDS
            .iter()
            .map(|field| mappings::field_label(field))
            .collect(),
        impresa_data,
        impresa_headers,
        photos,
        signature_attachments,
        raw_attributes: main_attrs,
    })
}

/// An upstream error on a secondary layer empties that section only.
fn degraded(section: &str, outcome: QueryOutcome) -> Vec<Feature> {
    match outcome {
        QueryOutcome::Features(collection) => collection.features,
        QueryOutcome::ServiceError(message) => {
            warn!(section, %message, "related layer query failed, leaving section empty");
            Vec::new()
        }
    }
}

async fn fetch_signature_infos(
    client: &ArcGisClient,
    main_obj_id: Option<i64>,
) -> Result<Vec<crate::arcgis::types::AttachmentInfo>, ReportError> {
    let Some(object_id) = main_obj_id else {
        return Ok(Vec::new());
    };
    match client.get_attachments(MAIN_LAYER, object_id).await? {
        AttachmentsOutcome::Infos(infos) => Ok(infos),
        AttachmentsOutcome::ServiceError(message) => {
            warn!(object_id, %message, "signature attachment lookup failed");
            Ok(Vec::new())
        }
    }
}

/// List photo attachments for every photo feature, a few lookups at a time.
/// Results keep the order of the photo features.
async fn resolve_photos(
    client: &ArcGisClient,
    foto_features: &[Feature],
) -> Result<Vec<AttachmentRef>, ReportError> {
    let object_ids: Vec<i64> = foto_features
        .iter()
        .filter_map(Feature::object_id)
        .collect();

    let results: Vec<_> = stream::iter(object_ids)
        .map(|object_id| async move {
            let outcome = client.get_attachments(PHOTO_LAYER, object_id).await?;
            Ok::<_, ReportError>((object_id, outcome))
        })
        .buffered(PHOTO_FANOUT)
        .collect()
        .await;

    let mut photos = Vec::new();
    for result in results {
        let (object_id, outcome) = result?;
        match outcome {
            AttachmentsOutcome::Infos(infos) => {
                for info in infos {
                    photos.push(AttachmentRef {
                        layer: PHOTO_LAYER,
                        object_id,
                        attachment_id: info.id,
                        name: info.name,
                    });
                }
            }
            AttachmentsOutcome::ServiceError(message) => {
                warn!(object_id, %message, "photo attachment lookup failed");
            }
        }
    }
    Ok(photos)
}

fn filter_fields(processed: &[ProcessedAttribute], fields: &[&str]) -> Vec<ProcessedAttribute> {
    processed
        .iter()
        .filter(|attr| fields.contains(&attr.field.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attr(field: &str, value: Value) -> ProcessedAttribute {
        ProcessedAttribute {
            field: field.to_string(),
            label: mappings::field_label(field),
            value: mappings::field_value(field, &value),
            original: value,
        }
    }

    #[test]
    fn test_filter_fields_keeps_processed_order() {
        let processed = vec![
            attr("nome_operatore", json!("g_vitale")),
            attr("tratta", json!("A50")),
            attr("note", json!("ok")),
        ];
        let filtered = filter_fields(&processed, &["note", "tratta"]);
        let fields: Vec<&str> = filtered.iter().map(|a| a.field.as_str()).collect();
        assert_eq!(fields, vec!["tratta", "note"]);
    }

    #[test]
    fn test_degraded_empties_on_service_error() {
        let outcome = QueryOutcome::ServiceError("token mancante".to_string());
        assert!(degraded("pk_pav", outcome).is_empty());
    }

    #[test]
    fn test_pk_pav_headers_are_display_labels() {
        let headers: Vec<String> = PK_PAV_FIELDS
            .iter()
            .map(|field| mappings::field_label(field))
            .collect();
        assert_eq!(
            headers,
            vec!["Corsia", "Tipologia di intervento", "PK iniziale", "PK finale"]
        );
    }
}
