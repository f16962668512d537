use axum::Json;
use serde::Serialize;

use crate::assistant::prompts::library;
use crate::assistant::EMAIL_ASSISTANT_PERSONA;

/// GET /api/assistant/persona
///
/// The copilot system prompt, verbatim. Consumers feed it to the
/// language model unchanged.
pub async fn persona() -> &'static str {
    EMAIL_ASSISTANT_PERSONA
}

#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub name: String,
    pub version: String,
}

/// GET /api/assistant/templates
pub async fn templates() -> Json<Vec<TemplateSummary>> {
    Json(
        library::all()
            .into_iter()
            .map(|t| TemplateSummary {
                name: t.name,
                version: t.version,
            })
            .collect(),
    )
}
