use std::cell::{Cell, RefCell};

use tracing::{debug, error};

use super::render::render_markdown;
use super::snapshot::{CommandRequest, OutputSnapshot};
use super::status::Status;
use super::view::ConsoleView;
use crate::config::ClientConfig;
use crate::services::api::ConsoleApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// A previous fetch was still outstanding; this tick did nothing.
    Skipped,
    Unchanged,
    Rendered,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; no request was made.
    Empty,
    Sent,
    Failed,
}

/// Enter plus Cmd (macOS) or Ctrl (elsewhere) submits the form.
pub fn is_submit_chord(key: &str, meta: bool, ctrl: bool) -> bool {
    key == "Enter" && (meta || ctrl)
}

/// Clears the in-flight flag however the fetch ends.
struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Page-lifetime client state: what was last rendered, and whether a poll is out.
///
/// Shared via `Rc` between the poll timer and the form listeners. All
/// mutation happens on the UI thread between await points, so `Cell` and
/// `RefCell` are enough.
pub struct ConsoleController<A, V> {
    api: A,
    view: V,
    stick_threshold: f64,
    last_content: RefCell<String>,
    fetching: Cell<bool>,
}

impl<A: ConsoleApi, V: ConsoleView> ConsoleController<A, V> {
    pub fn new(api: A, view: V, config: &ClientConfig) -> Self {
        let last_content = view.output_text();
        Self {
            api,
            view,
            stick_threshold: config.stick_threshold,
            last_content: RefCell::new(last_content),
            fetching: Cell::new(false),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn last_content(&self) -> String {
        self.last_content.borrow().clone()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching.get()
    }

    /// One poll cycle. Never queues: a tick that lands while a fetch is out is dropped.
    pub async fn poll(&self) -> PollOutcome {
        if self.fetching.replace(true) {
            debug!("Poll skipped: fetch still outstanding");
            return PollOutcome::Skipped;
        }
        let _in_flight = InFlight(&self.fetching);

        match self.api.fetch_output().await {
            Ok(snapshot) => {
                let outcome = self.apply_snapshot(&snapshot);
                self.view.show_status(&Status::for_update(snapshot.updated_at));
                outcome
            }
            Err(e) => {
                // Displayed output stays as it was.
                error!("Failed to fetch output: {}", e);
                self.view.show_status(&Status::connection_lost());
                PollOutcome::Failed
            }
        }
    }

    fn apply_snapshot(&self, snapshot: &OutputSnapshot) -> PollOutcome {
        if *self.last_content.borrow() == snapshot.content {
            return PollOutcome::Unchanged;
        }

        // Measure before replacing: the new markup changes scroll_height.
        let stick = self.view.scroll_metrics().is_near_bottom(self.stick_threshold);
        self.view.replace_markup(&render_markdown(&snapshot.content));
        *self.last_content.borrow_mut() = snapshot.content.clone();

        if stick {
            self.view.scroll_to_bottom();
        }
        debug!("Rendered {} bytes of output (stick to bottom: {})", snapshot.content.len(), stick);
        PollOutcome::Rendered
    }

    /// Form submission path, shared by the submit button and the keyboard chord.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(request) = CommandRequest::from_input(&self.view.input_value()) else {
            return SubmitOutcome::Empty;
        };

        self.view.show_status(&Status::sending());
        self.view.set_input_disabled(true);

        let outcome = match self.api.submit_command(&request).await {
            Ok(()) => {
                self.view.set_input_value("");
                self.view.show_status(&Status::command_sent());
                SubmitOutcome::Sent
            }
            Err(e) => {
                error!("Failed to send command: {}", e);
                self.view.show_status(&Status::failed(e.to_string()));
                SubmitOutcome::Failed
            }
        };

        // Order matters: a disabled field cannot take focus.
        self.view.set_input_disabled(false);
        self.view.focus_input();
        outcome
    }

    /// Clear button. Local only.
    pub fn clear(&self) {
        self.view.set_input_value("");
        self.view.focus_input();
    }
}
