//! Compliance report service library.
//!
//! Registers users, AI models and individual decision cases, and turns a
//! case into a structured explainability report, a plain-language narrative
//! and a downloadable document.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
pub use settings::AppSettings;
