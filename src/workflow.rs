use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use scour::controller::SessionController;
use scour::export::PagedTextExporter;
use scour::history::{HistoryEntry, HistoryStorage, HistoryStore, JsonFileStorage, MemoryStorage};
use scour::session::{HttpBackend, SearchRuntime, SessionState};

use crate::settings::ResolvedConfig;

/// Slack on top of the request timeout before batch mode gives up waiting.
const BATCH_GRACE: Duration = Duration::from_secs(2);

/// Result of a one-shot search.
#[derive(Debug)]
pub(crate) struct BatchOutcome {
    pub(crate) query: String,
    pub(crate) state: SessionState,
    pub(crate) error: Option<String>,
}

/// Coordinates building the controller and running it interactively or once.
pub(crate) struct ResearchWorkflow {
    config: ResolvedConfig,
}

impl ResearchWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Self {
        Self { config }
    }

    /// Open the configured history store.
    pub(crate) fn history_store(&self) -> HistoryStore {
        let storage: Box<dyn HistoryStorage> = if self.config.history.persist {
            Box::new(JsonFileStorage::new(&self.config.history.path))
        } else {
            Box::new(MemoryStorage::new())
        };
        HistoryStore::open(storage)
    }

    pub(crate) fn history(&self) -> Vec<HistoryEntry> {
        self.history_store().entries().to_vec()
    }

    fn controller(&self) -> Result<SessionController> {
        let search = &self.config.search;
        let backend = HttpBackend::new(&search.endpoint, Some(search.timeout))?;
        let runtime = SearchRuntime::spawn(Arc::new(backend))?;
        let exporter =
            PagedTextExporter::new(&self.config.export.directory, &self.config.export.file_name);

        Ok(
            SessionController::new(runtime, self.history_store(), Box::new(exporter))
                .with_limits(self.config.display)
                .with_locale(search.country, search.ui_lang),
        )
    }

    /// Run the interactive UI, submitting the initial query if one was given.
    pub(crate) fn run_interactive(self) -> Result<()> {
        let controller = self.controller()?;
        scour::ui::run(controller, self.config.initial_query.as_deref())
    }

    /// Search once for the initial query and wait for the outcome.
    pub(crate) fn run_batch(self) -> Result<BatchOutcome> {
        let Some(query) = self.config.initial_query.clone() else {
            bail!("batch mode needs a non-blank --query");
        };
        let mut controller = self.controller()?;
        controller
            .submit(&query)
            .ok_or_else(|| anyhow!("batch mode needs a non-blank --query"))?;

        let idle = controller.wait_idle(self.config.search.timeout + BATCH_GRACE);
        let error = if !idle {
            Some(format!("Search timed out after {}s", self.config.search.timeout.as_secs()))
        } else {
            controller
                .status()
                .filter(|status| status.is_error())
                .map(|status| status.text().to_string())
        };

        Ok(BatchOutcome {
            query,
            state: controller.state().clone(),
            error,
        })
    }
}
