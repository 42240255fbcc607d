//! # Template Rendering
//!
//! `POST /templates/generate/` loads one template, finds its `{{{name}}}`
//! placeholders and replaces those the caller supplied values for. The
//! response carries the final text together with the placeholders found and
//! the bindings that were actually applied, so a client can tell which
//! placeholders are still open.

use crate::error::ServiceError;
use crate::placeholders::{extract_placeholders, substitute};
use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::template::Template;
use common::requests::GenerateRequest;
use common::responses::GenerateResult;
use serde_json::{Map, Value};

pub async fn process(
    store: web::Data<Store>,
    payload: web::Json<GenerateRequest>,
) -> impl Responder {
    match generate_from_template(&store, payload.template_id, &payload.variables) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => failure("Error generating from template", e),
    }
}

pub fn generate_from_template(
    store: &Store,
    template_id: i64,
    bindings: &Map<String, Value>,
) -> Result<GenerateResult, ServiceError> {
    let template = store.get_template(template_id)?;
    Ok(render(&template, bindings))
}

/// Substitutes `bindings` into one template. Shared with folder batch
/// generation.
pub(crate) fn render(template: &Template, bindings: &Map<String, Value>) -> GenerateResult {
    let found_variables = extract_placeholders(&template.fixed_content);
    let applied_variables = bindings
        .keys()
        .filter(|key| found_variables.contains(key))
        .cloned()
        .collect();

    GenerateResult {
        template_id: template.id,
        template_name: template.name.clone(),
        final_prompt: substitute(&template.fixed_content, bindings),
        variables_used: bindings.clone(),
        found_variables,
        applied_variables,
    }
}
