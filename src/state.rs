use crate::config::Config;
use crate::repository::ForumRepository;
use axum::extract::FromRef;

/// Application state: an explicitly constructed repository handle plus the
/// loaded configuration. Handlers extract whichever piece they need.
#[derive(Clone)]
pub struct AppState {
    pub repo: ForumRepository,
    pub config: Config,
}

impl FromRef<AppState> for ForumRepository {
    fn from_ref(state: &AppState) -> Self {
        state.repo.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
