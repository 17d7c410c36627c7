pub mod routes;
pub mod server;
pub mod state;

mod error;
mod response;

pub use error::{Result, WebError};
pub use response::{RideFailure, StatusMode};
pub use rides_config::ServerConfig;
pub use server::{build_router, start_server};
pub use state::AppState;
