//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI is
//! served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together through a single `routes!` call.
///
/// # Registered Endpoints
/// - `GET|POST /api/patch-types` - List or create patch types
/// - `PUT|DELETE /api/patch-types/{id}` - Edit or delete a custom patch type
/// - `PUT /api/patch-types/{id}/enabled` - Enable or disable a patch type
/// - `GET /api/inventory` - Stock counts
/// - `PUT /api/inventory/{patch_type_id}` - Set a stock count
/// - `POST /api/inventory/{patch_type_id}/restock` - Add stock
/// - `GET /api/inventory/alerts` - Low & out of stock alerts
/// - `GET|POST /api/patches` - List worn patches or apply one
/// - `DELETE /api/patches/{id}` - Remove a patch
/// - `POST /api/patches/{id}/unapply` - Undo an application
/// - `GET /api/patches/next-location` - Body location suggestion
/// - `GET /api/notifications` - Notifications currently due
/// - `GET /api/settings` - Notification settings
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(db, config.notifications));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Patchkeeper", description = "Patchkeeper API"), tags(
        (name = controller::patch_type::PATCH_TYPE_TAG, description = "Patch type API routes"),
        (name = controller::inventory::INVENTORY_TAG, description = "Inventory API routes"),
        (name = controller::patch::PATCH_TAG, description = "Patch application API routes"),
        (name = controller::notification::NOTIFICATION_TAG, description = "Notification API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::patch_type::get_patch_types,
            controller::patch_type::create_patch_type
        ))
        .routes(routes!(
            controller::patch_type::update_patch_type,
            controller::patch_type::delete_patch_type
        ))
        .routes(routes!(controller::patch_type::set_patch_type_enabled))
        .routes(routes!(controller::inventory::get_inventory))
        .routes(routes!(controller::inventory::set_inventory_count))
        .routes(routes!(controller::inventory::restock_inventory))
        .routes(routes!(controller::inventory::get_inventory_alerts))
        .routes(routes!(
            controller::patch::get_active_patches,
            controller::patch::apply_patch
        ))
        .routes(routes!(controller::patch::remove_patch))
        .routes(routes!(controller::patch::unapply_patch))
        .routes(routes!(controller::patch::get_next_location))
        .routes(routes!(controller::notification::get_notifications))
        .routes(routes!(controller::notification::get_settings))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
