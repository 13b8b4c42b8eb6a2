use std::sync::Arc;

use dioxus::prelude::*;
use services::{EngineConfig, SessionEngine};

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn engine_config(&self) -> EngineConfig;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppContext {
    app_name: String,
    engine_config: EngineConfig,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name().to_string(),
            engine_config: app.engine_config(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        self.engine_config
    }

    #[must_use]
    pub fn build_engine(&self) -> SessionEngine {
        self.engine_config.build_engine()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Install the session engine every view reads from and drives.
///
/// Exactly one engine lives per window; views get it back with `use_engine`.
pub fn use_engine_provider(build: impl FnOnce() -> SessionEngine) -> Signal<SessionEngine> {
    use_context_provider(|| Signal::new(build()))
}

#[must_use]
pub fn use_engine() -> Signal<SessionEngine> {
    use_context::<Signal<SessionEngine>>()
}
