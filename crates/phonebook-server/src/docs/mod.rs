//! API documentation: the schema document and a browser page for it.
//!
//! The document is embedded as YAML and converted to JSON once at startup.
//!
//! - `/apispec_1.json` : schema document
//! - `/apidocs`        : Swagger UI
//!
//! The UI page pulls its script and stylesheet from the unpkg CDN, so it
//! renders blank without network access. `/apispec_1.json` is self-contained.

use std::sync::Arc;

use axum::{extract::State, response::Html, Json};
use serde_json::Value;

use phonebook_core::error::{PhonebookError, Result};

use crate::app_state::AppState;

pub const SPEC_PATH: &str = "/apispec_1.json";
pub const UI_PATH: &str = "/apidocs";

const OPENAPI_YAML: &str = include_str!("openapi.yaml");

const UI_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Phonebook API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/apispec_1.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// Parsed schema document, shared by every `/apispec_1.json` request.
#[derive(Debug, Clone)]
pub struct ApiDocs {
    spec: Arc<Value>,
}

impl ApiDocs {
    pub fn load() -> Result<Self> {
        let spec: Value = serde_yaml::from_str(OPENAPI_YAML)
            .map_err(|e| PhonebookError::Internal(format!("embedded api spec is invalid: {e}")))?;
        Ok(Self { spec: Arc::new(spec) })
    }

    pub fn spec(&self) -> &Value {
        &self.spec
    }
}

pub async fn apispec(State(state): State<AppState>) -> Json<Value> {
    Json(state.docs().spec().clone())
}

pub async fn apidocs() -> Html<&'static str> {
    Html(UI_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_spec_parses() {
        let docs = ApiDocs::load().expect("embedded spec must parse");
        let paths = docs.spec().get("paths").expect("paths");
        assert!(paths.get("/contacts").is_some());
        assert!(paths.get("/contacts/{contact_id}").is_some());
        assert_eq!(
            docs.spec()["definitions"]["NewContact"]["required"],
            serde_json::json!(["name", "phone"])
        );
    }

    #[test]
    fn ui_page_points_at_spec() {
        assert!(UI_HTML.contains(r##"dom_id: "#swagger-ui""##));
        assert!(UI_HTML.contains(SPEC_PATH));
        assert!(UI_HTML.trim_end().ends_with("</html>"));
    }
}
