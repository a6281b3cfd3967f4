//! CLARP Terminal REST API Module
//! Entity resolution, project lookup and LARP scoring over HTTP

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use types::*;
