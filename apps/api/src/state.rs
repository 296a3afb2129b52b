use crate::config::Config;
use crate::resume::SectionService;
use crate::users::UserService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Section Service. Holds the generator built once in `main`.
    pub sections: SectionService,
    pub users: UserService,
    pub config: Config,
}
