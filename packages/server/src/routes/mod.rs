use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(health_routes())
        .merge(owner_routes())
        .merge(cat_routes())
}

fn health_routes() -> OpenApiRouter<AppState> {
    use crate::handlers::health::*;

    OpenApiRouter::new()
        .routes(routes!(root))
        .routes(routes!(health_checker))
}

fn owner_routes() -> OpenApiRouter<AppState> {
    use crate::handlers::owner::*;

    OpenApiRouter::new()
        .routes(routes!(list_owners, create_owner))
        .routes(routes!(get_owner, update_owner, delete_owner))
}

fn cat_routes() -> OpenApiRouter<AppState> {
    use crate::handlers::cat::*;

    OpenApiRouter::new()
        .routes(routes!(list_cats, create_cat))
        .routes(routes!(get_cat, update_cat, delete_cat))
}
