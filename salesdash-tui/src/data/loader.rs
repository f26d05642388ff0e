use std::sync::Arc;

use salesdash_core::DashboardApi;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::events::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadingState::Error)
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            LoadingState::Idle => "",
            LoadingState::Loading => "⟳",
            LoadingState::Success => "✓",
            LoadingState::Error => "✗",
        }
    }
}

/// Runs gateway calls as background tasks for the current mount.
///
/// Each mount gets a fresh cancellation token and generation number.
/// Results are sent back over the channel tagged with the generation that
/// requested them, so the receiver can drop anything from an older mount.
pub struct DataLoader {
    api: Arc<dyn DashboardApi>,
    tx: UnboundedSender<AppEvent>,
    cancel: CancellationToken,
    generation: u64,
}

impl DataLoader {
    pub fn new(api: Arc<dyn DashboardApi>, tx: UnboundedSender<AppEvent>) -> Self {
        Self {
            api,
            tx,
            cancel: CancellationToken::new(),
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, mount: u64) -> bool {
        mount == self.generation
    }

    /// Cancels the previous mount's tasks and starts the one list fetch of
    /// the new mount.
    pub fn mount(&mut self) -> JoinHandle<()> {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
        self.generation += 1;

        debug!(mount = self.generation, "Mounting dashboard");
        spawn_fetch(
            Arc::clone(&self.api),
            self.tx.clone(),
            self.cancel.clone(),
            self.generation,
        )
    }

    /// Sends a question. Nothing stops several from being in flight at once.
    pub fn ask(&self, question: String) -> JoinHandle<()> {
        spawn_ask(
            Arc::clone(&self.api),
            self.tx.clone(),
            self.cancel.clone(),
            self.generation,
            question,
        )
    }

    pub fn unmount(&self) {
        debug!(mount = self.generation, "Unmounting dashboard");
        self.cancel.cancel();
    }
}

fn spawn_fetch(
    api: Arc<dyn DashboardApi>,
    tx: UnboundedSender<AppEvent>,
    cancel: CancellationToken,
    mount: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(mount, "Sales rep fetch cancelled");
            }
            result = api.fetch_sales_reps() => {
                let _ = tx.send(AppEvent::SalesRepsLoaded { mount, result });
            }
        }
    })
}

fn spawn_ask(
    api: Arc<dyn DashboardApi>,
    tx: UnboundedSender<AppEvent>,
    cancel: CancellationToken,
    mount: u64,
    question: String,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(mount, "Question cancelled");
            }
            result = api.ask_question(&question) => {
                let _ = tx.send(AppEvent::AnswerReady { mount, result });
            }
        }
    })
}
