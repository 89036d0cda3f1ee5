pub mod middleware;
pub mod openapi;
pub mod routes;

use axum::Router;
use mm_core::{Mockmate, MockmateError};
use mm_db::schema;
use mm_db::store::DbStore;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    pub db_path: String,
}

/// Opens a fresh store handle for one unit of work. SQLite in WAL mode with
/// a busy timeout tolerates the short-lived connections.
pub fn build_mockmate(state: &AppState) -> Result<Mockmate<DbStore>, MockmateError> {
    let conn = schema::open_and_migrate(&state.db_path).map_err(|err| MockmateError::Internal {
        message: err.to_string(),
    })?;
    Ok(Mockmate::new(DbStore::new(conn)))
}

pub fn app(state: AppState) -> Router {
    routes::router(state)
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await
}
