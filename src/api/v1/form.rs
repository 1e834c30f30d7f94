//! Form schema handler

use crate::api::types::{FormSchemaResponse, Json};

/// GET /v1/form
pub async fn form_schema() -> Json<FormSchemaResponse> {
    Json(FormSchemaResponse::new())
}
