// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer is the boundary between HTTP (axum) and the services
// - It translates between DTOs and domain entities
// - All failure classification already happened below; here it only
//   becomes a status code and a {"msg": ...} body

pub mod dto;
pub mod error_handling;
pub mod handlers;
pub mod state;

pub use dto::{CommentDto, ReviewDto};
pub use error_handling::ErrorBody;
pub use handlers::router;
pub use state::AppState;
