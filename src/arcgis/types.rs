use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Main record layer (verbale di sopralluogo).
pub const MAIN_LAYER: u32 = 0;
/// Pavement intervention repeats.
pub const PAVEMENT_LAYER: u32 = 1;
/// Contractor repeats.
pub const CONTRACTOR_LAYER: u32 = 2;
/// Photo index records; the images themselves are attachments on this layer.
pub const PHOTO_LAYER: u32 = 3;

/// One record returned by a layer query: a flat attribute map plus an
/// optional point geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}

impl Feature {
    /// Integer `objectid` attribute, when present and numeric.
    pub fn object_id(&self) -> Option<i64> {
        self.attributes.get("objectid").and_then(Value::as_i64)
    }
}

/// Projected (or already geographic) point geometry.
///
/// ArcGIS occasionally serves coordinates as strings; keep them raw and let
/// the reprojector coerce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub x: Value,
    #[serde(default)]
    pub y: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// Result of a layer query. The upstream distinguishes "no rows" from
/// "application error" only by which JSON key is present; the client turns
/// that into a tagged type so callers handle the two cases explicitly.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    Features(FeatureCollection),
    ServiceError(String),
}

impl QueryOutcome {
    /// Features on success, empty on a service error. For callers whose
    /// section degrades rather than aborts.
    pub fn features_or_empty(self) -> Vec<Feature> {
        match self {
            Self::Features(fc) => fc.features,
            Self::ServiceError(_) => Vec::new(),
        }
    }
}

/// Attachment descriptor as listed by the attachments endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentInfo {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "contentType")]
    pub content_type: String,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Debug, Clone)]
pub enum AttachmentsOutcome {
    Infos(Vec<AttachmentInfo>),
    ServiceError(String),
}

impl AttachmentsOutcome {
    pub fn infos_or_empty(self) -> Vec<AttachmentInfo> {
        match self {
            Self::Infos(infos) => infos,
            Self::ServiceError(_) => Vec::new(),
        }
    }
}

/// Record filter compiled into a WHERE clause.
///
/// Caller-supplied identifiers are never spliced into SQL text raw: the
/// field name is a compile-time constant and the value is quote-escaped.
#[derive(Debug, Clone)]
pub enum Filter {
    /// Tautology, matches every record.
    All,
    /// Single-field string equality.
    Eq {
        field: &'static str,
        value: String,
    },
}

impl Filter {
    pub fn all() -> Self {
        Self::All
    }

    pub fn eq(field: &'static str, value: impl Into<String>) -> Self {
        Self::Eq {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn to_where_clause(&self) -> String {
        match self {
            Self::All => "1=1".to_string(),
            Self::Eq { field, value } => {
                format!("{}='{}'", field, value.replace('\'', "''"))
            }
        }
    }
}
