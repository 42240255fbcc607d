//! # Folder Placeholder Analysis
//!
//! `GET /folders/{folder_id}/common-variables/` reports, for every distinct
//! placeholder used by the folder's templates, how many templates use it
//! and what share of the folder that is. A placeholder used by a single
//! template carries that template's name so the client can label it.
//! Variables are ordered by usage, most shared first; ties keep the order
//! in which they were first met.

use crate::error::ServiceError;
use crate::placeholders::distinct_placeholders;
use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::placeholder::CommonVariable;
use common::model::template::Template;
use common::responses::CommonVariablesResponse;

pub async fn process(store: web::Data<Store>, folder_id: web::Path<i64>) -> impl Responder {
    match folder_common_variables(&store, folder_id.into_inner()) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => failure("Error analysing folder variables", e),
    }
}

pub fn folder_common_variables(
    store: &Store,
    folder_id: i64,
) -> Result<CommonVariablesResponse, ServiceError> {
    let folder = store.get_folder(folder_id)?;
    let templates = store.list_templates_in_folder(folder_id)?;

    Ok(CommonVariablesResponse {
        folder_id,
        folder_name: folder.name,
        total_templates: templates.len(),
        common_variables: summarize(&templates),
    })
}

fn summarize(templates: &[Template]) -> Vec<CommonVariable> {
    // (name, templates using it, first template using it)
    let mut usage: Vec<(String, usize, &str)> = Vec::new();
    for template in templates {
        for name in distinct_placeholders(&template.fixed_content) {
            match usage.iter().position(|(n, _, _)| *n == name) {
                Some(i) => usage[i].1 += 1,
                None => usage.push((name, 1, template.name.as_str())),
            }
        }
    }
    usage.sort_by(|a, b| b.1.cmp(&a.1));

    let total = templates.len();
    usage
        .into_iter()
        .map(|(name, usage_count, owner)| CommonVariable {
            name,
            usage_count,
            percentage: percentage(usage_count, total),
            template_name: (usage_count == 1).then(|| owner.to_string()),
        })
        .collect()
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 1000.0 / total as f64).round() / 10.0
}
