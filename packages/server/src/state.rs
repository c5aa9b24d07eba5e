use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

/// Shared router state. `db` is a connection pool; each handler borrows a
/// connection for the duration of its query.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
}
