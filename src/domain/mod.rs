// src/domain/mod.rs
//
// Domain entities
//
// Plain data carriers for the catalog. Business rules (validation of
// untrusted input, integrity checks before writes) live in `queries` and
// `services`; repositories map these structs to and from rows.

pub mod category;
pub mod comment;
pub mod review;
pub mod user;

pub use category::Category;
pub use comment::Comment;
pub use review::Review;
pub use user::User;
