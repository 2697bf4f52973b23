//! Acquisition and aggregation core for motorway inspection reports
//! ("verbali di sopralluogo") stored in an ArcGIS feature service.
//!
//! The crate covers the data side only: token lifecycle, authenticated layer
//! queries, geometry reprojection, the declarative field-mapping tables and
//! the report aggregator. Routing, sessions and HTML/PDF rendering belong to
//! the consuming application, which receives display-ready view-models from
//! here.

pub mod arcgis;
pub mod config;
pub mod error;
pub mod geometry;
pub mod images;
pub mod mappings;
pub mod report;

pub use arcgis::ArcGisClient;
pub use config::ArcGisConfig;
pub use error::{AuthenticationError, ReportError};
pub use report::{build_report, ReportView};
