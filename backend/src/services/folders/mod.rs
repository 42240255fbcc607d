//! # Folder Service Module
//!
//! Routes under `/folders`. Besides plain CRUD, a folder can be analysed
//! for the placeholders its templates share and rendered as a whole with
//! one set of bindings.

mod batch_generate;
mod common_variables;
mod create;
mod delete;
mod get;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/folders";

/// # Registered Routes:
///
/// *   **`POST /`**, **`GET /`**: create / list.
/// *   **`GET|PUT|DELETE /{folder_id}`**: fetch / update / delete. Deleting
///     moves the folder's templates into the default folder first.
/// *   **`GET /{folder_id}/common-variables/`**: placeholder usage across the folder.
/// *   **`POST /{folder_id}/batch-generate/`**: render every template of the folder.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/", post().to(create::process))
        .route("/", get().to(get::list))
        .route("/{folder_id}", get().to(get::process))
        .route("/{folder_id}", put().to(update::process))
        .route("/{folder_id}", delete().to(delete::process))
        .route(
            "/{folder_id}/common-variables/",
            get().to(common_variables::process),
        )
        .route(
            "/{folder_id}/batch-generate/",
            post().to(batch_generate::process),
        )
}
