#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use termdown::console::render::ScrollMetrics;
use termdown::console::view::ConsoleView;
use termdown::{ApiError, CommandRequest, ConsoleApi, OutputSnapshot, Status};

/// Route crate logs through the native subscriber; `RUST_LOG` overrides the level.
pub fn init_logging() {
    termdown::logging::init("debug");
}

/// Scripted server. Responses are consumed in order.
#[derive(Default)]
pub struct FakeApi {
    outputs: RefCell<VecDeque<Result<OutputSnapshot, ApiError>>>,
    submits: RefCell<VecDeque<Result<(), ApiError>>>,
    pub fetch_calls: Cell<usize>,
    pub sent: RefCell<Vec<CommandRequest>>,
    /// When set, every fetch parks until the gate is notified.
    pub gate: Option<Rc<Notify>>,
    /// When set, every fetch takes this long (tokio time).
    pub latency: Option<Duration>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(self, snapshot: OutputSnapshot) -> Self {
        self.outputs.borrow_mut().push_back(Ok(snapshot));
        self
    }

    pub fn with_fetch_error(self, err: ApiError) -> Self {
        self.outputs.borrow_mut().push_back(Err(err));
        self
    }

    pub fn with_submit(self, result: Result<(), ApiError>) -> Self {
        self.submits.borrow_mut().push_back(result);
        self
    }

    pub fn gated(mut self, gate: Rc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn slow(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait(?Send)]
impl ConsoleApi for FakeApi {
    async fn fetch_output(&self) -> Result<OutputSnapshot, ApiError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.outputs
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(OutputSnapshot::default()))
    }

    async fn submit_command(&self, request: &CommandRequest) -> Result<(), ApiError> {
        self.sent.borrow_mut().push(request.clone());
        self.submits.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

/// In-memory page. Scrolling is modelled just enough to check sticky-bottom.
pub struct FakeView {
    pub initial_text: String,
    pub metrics: Cell<ScrollMetrics>,
    /// scroll_height the container takes on after the next render.
    pub rendered_height: Cell<f64>,
    pub markup: RefCell<String>,
    pub renders: Cell<usize>,
    pub status: RefCell<Option<Status>>,
    pub input: RefCell<String>,
    pub disabled: Cell<bool>,
    pub focused: Cell<bool>,
    /// Ordered log of input-field and status side effects.
    pub events: RefCell<Vec<String>>,
}

impl FakeView {
    pub fn new() -> Self {
        let metrics = ScrollMetrics { scroll_height: 600.0, scroll_top: 400.0, client_height: 200.0 };
        Self {
            initial_text: String::new(),
            metrics: Cell::new(metrics),
            rendered_height: Cell::new(1000.0),
            markup: RefCell::new(String::new()),
            renders: Cell::new(0),
            status: RefCell::new(None),
            input: RefCell::new(String::new()),
            disabled: Cell::new(false),
            focused: Cell::new(false),
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.initial_text = text.to_string();
        self
    }

    pub fn with_input(self, text: &str) -> Self {
        *self.input.borrow_mut() = text.to_string();
        self
    }

    pub fn scrolled_to(self, scroll_top: f64) -> Self {
        let mut m = self.metrics.get();
        m.scroll_top = scroll_top;
        self.metrics.set(m);
        self
    }

    pub fn status(&self) -> Status {
        self.status.borrow().clone().expect("no status shown")
    }

    pub fn input_value_now(&self) -> String {
        self.input.borrow().clone()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

impl ConsoleView for FakeView {
    fn output_text(&self) -> String {
        self.initial_text.clone()
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.metrics.get()
    }

    fn replace_markup(&self, html: &str) {
        *self.markup.borrow_mut() = html.to_string();
        self.renders.set(self.renders.get() + 1);
        let mut m = self.metrics.get();
        m.scroll_height = self.rendered_height.get();
        // Browsers clamp scrollTop when content shrinks.
        m.scroll_top = m.scroll_top.min((m.scroll_height - m.client_height).max(0.0));
        self.metrics.set(m);
    }

    fn scroll_to_bottom(&self) {
        let mut m = self.metrics.get();
        m.scroll_top = (m.scroll_height - m.client_height).max(0.0);
        self.metrics.set(m);
    }

    fn show_status(&self, status: &Status) {
        self.events.borrow_mut().push(format!("status:{}", status.state.as_str()));
        *self.status.borrow_mut() = Some(status.clone());
    }

    fn input_value(&self) -> String {
        self.input.borrow().clone()
    }

    fn set_input_value(&self, value: &str) {
        self.events.borrow_mut().push(format!("value:{value}"));
        *self.input.borrow_mut() = value.to_string();
    }

    fn set_input_disabled(&self, disabled: bool) {
        self.events.borrow_mut().push(format!("disabled:{disabled}"));
        self.disabled.set(disabled);
    }

    fn focus_input(&self) {
        self.events.borrow_mut().push("focus".to_string());
        self.focused.set(true);
    }
}
