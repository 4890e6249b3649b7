use crate::dashboard::DashboardState;
use crate::errors::LoadError;
use crate::grid::ArticleGrid;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Mutex<DashboardState>>,
    pub grid: Arc<Mutex<ArticleGrid>>,
    /// Set when `data.json` could not be loaded; the grid then starts empty.
    pub articles_error: Option<LoadError>,
}

impl AppState {
    pub fn new(dashboard: DashboardState, grid: ArticleGrid, articles_error: Option<LoadError>) -> Self {
        Self {
            dashboard: Arc::new(Mutex::new(dashboard)),
            grid: Arc::new(Mutex::new(grid)),
            articles_error,
        }
    }
}
