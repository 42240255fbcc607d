use crate::error::ServiceError;
use crate::services::failure;
use crate::services::templates::generate::render;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::requests::BatchGenerateRequest;
use common::responses::BatchGenerateResponse;
use log::info;
use serde_json::{Map, Value};

/// `POST /folders/{folder_id}/batch-generate/`: renders every template of
/// the folder with the same bindings. `404 Not Found` when the folder does
/// not exist or holds no templates.
pub async fn process(
    store: web::Data<Store>,
    folder_id: web::Path<i64>,
    payload: web::Json<BatchGenerateRequest>,
) -> impl Responder {
    match batch_generate_from_folder(&store, folder_id.into_inner(), &payload.variables) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => failure("Error generating folder batch", e),
    }
}

pub fn batch_generate_from_folder(
    store: &Store,
    folder_id: i64,
    bindings: &Map<String, Value>,
) -> Result<BatchGenerateResponse, ServiceError> {
    let folder = store.get_folder(folder_id)?;
    let templates = store.list_templates_in_folder(folder_id)?;
    if templates.is_empty() {
        return Err(ServiceError::NotFound(format!(
            "Templates in folder {}",
            folder_id
        )));
    }

    let results: Vec<_> = templates.iter().map(|t| render(t, bindings)).collect();
    info!(
        "Batch generated {} templates from folder {} '{}'",
        results.len(),
        folder_id,
        folder.name
    );

    Ok(BatchGenerateResponse {
        folder_id,
        folder_name: folder.name,
        total_templates: results.len(),
        results,
    })
}
