mod fallback;
mod health;
mod rides;

pub use fallback::not_found;
pub use health::health_routes;
pub use rides::ride_routes;
