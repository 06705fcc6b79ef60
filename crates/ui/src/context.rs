use std::sync::Arc;

use quiz_core::QuizCatalog;
use quiz_core::model::QuizSettings;
use services::{MemoryHistory, QuizEngine, QuizShell, RouteTable, Router, RouterError};

use crate::routes::route_table;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<QuizCatalog>;
    fn settings(&self) -> QuizSettings;

    /// Location fragment the window opens on, e.g. `#choose-quiz`.
    fn initial_fragment(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<QuizCatalog>,
    settings: QuizSettings,
    initial_fragment: String,
    routes: RouteTable,
}

impl AppContext {
    /// # Errors
    ///
    /// Returns `RouterError` if the panel declarations do not form a valid
    /// route table.
    pub fn new(app: &Arc<dyn UiApp>) -> Result<Self, RouterError> {
        let catalog = app.catalog();
        let routes = route_table(&catalog)?;

        Ok(Self {
            catalog,
            settings: app.settings(),
            initial_fragment: app.initial_fragment(),
            routes,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<QuizCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn initial_fragment(&self) -> &str {
        &self.initial_fragment
    }

    /// A fresh, not yet started shell over this context's panels and catalog.
    #[must_use]
    pub fn build_shell(&self) -> QuizShell {
        let router = Router::new(
            self.routes.clone(),
            MemoryHistory::new(self.initial_fragment.clone()),
        );
        let engine = QuizEngine::new(self.catalog(), self.settings);
        QuizShell::new(router, engine)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
///
/// # Errors
///
/// Returns `RouterError` if the route table is invalid.
pub fn build_app_context(app: &Arc<dyn UiApp>) -> Result<AppContext, RouterError> {
    AppContext::new(app)
}
