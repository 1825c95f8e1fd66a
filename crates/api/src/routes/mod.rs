pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{annotations, environment, groups, materials, models, transforms, upload};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET    /models                    list catalog (newest first)
/// DELETE /models?id=<id>            delete model + stored file
/// POST   /upload                    multipart upload (file, name, description)
///
/// GET    /annotations?model_id=<id> list annotations for a model
/// POST   /annotations               replace-all save
/// DELETE /annotations?id=<id>       delete one annotation
///
/// GET    /materials?model_id=<id>   list per-object materials
/// POST   /materials                 replace-all save
/// POST   /materials/preset          apply a named preset to one object
///
/// GET    /transforms?model_id=<id>  list per-object transforms
/// POST   /transforms                replace-all save
///
/// GET    /groups?model_id=<id>      list object groups
/// POST   /groups                    replace-all save
///
/// GET    /environment?model_id=<id> fetch environment settings (null if unset)
/// PUT    /environment               upsert environment settings
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/models",
            get(models::list_models).delete(models::delete_model),
        )
        .route("/upload", post(upload::upload_model))
        .route(
            "/annotations",
            get(annotations::list_annotations)
                .post(annotations::save_annotations)
                .delete(annotations::delete_annotation),
        )
        .route(
            "/materials",
            get(materials::list_materials).post(materials::save_materials),
        )
        .route("/materials/preset", post(materials::apply_preset))
        .route(
            "/transforms",
            get(transforms::list_transforms).post(transforms::save_transforms),
        )
        .route(
            "/groups",
            get(groups::list_groups).post(groups::save_groups),
        )
        .route(
            "/environment",
            get(environment::get_environment).put(environment::put_environment),
        )
}
