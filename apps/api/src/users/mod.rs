pub mod handlers;
pub mod repository;
pub mod service;

pub use repository::PgUserRepository;
pub use service::{UserError, UserRepository, UserService};
