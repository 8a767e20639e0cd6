use anyhow::{anyhow, Result};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlTextAreaElement};

use crate::config::ElementIds;
use crate::console::render::ScrollMetrics;
use crate::console::status::Status;
use crate::console::view::ConsoleView;

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing element #{id}"))?
        .dyn_into::<T>()
        .map_err(|_| anyhow!("element #{id} has an unexpected type"))
}

/// The three elements the controller writes to.
pub struct DomView {
    output: HtmlElement,
    status: HtmlElement,
    input: HtmlTextAreaElement,
}

impl DomView {
    pub fn bind(document: &Document, ids: &ElementIds) -> Result<Self> {
        Ok(Self {
            output: element_by_id(document, &ids.output)?,
            status: element_by_id(document, &ids.status)?,
            input: element_by_id(document, &ids.input)?,
        })
    }
}

impl ConsoleView for DomView {
    fn output_text(&self) -> String {
        self.output.inner_text()
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_height: f64::from(self.output.scroll_height()),
            scroll_top: f64::from(self.output.scroll_top()),
            client_height: f64::from(self.output.client_height()),
        }
    }

    fn replace_markup(&self, html: &str) {
        self.output.set_inner_html(html);
    }

    fn scroll_to_bottom(&self) {
        self.output.set_scroll_top(self.output.scroll_height().into());
    }

    fn show_status(&self, status: &Status) {
        self.status.set_text_content(Some(&status.message));
        if self.status.dataset().set("state", status.state.as_str()).is_err() {
            warn!("Could not set data-state on status indicator");
        }
    }

    fn input_value(&self) -> String {
        self.input.value()
    }

    fn set_input_value(&self, value: &str) {
        self.input.set_value(value);
    }

    fn set_input_disabled(&self, disabled: bool) {
        self.input.set_disabled(disabled);
    }

    fn focus_input(&self) {
        if self.input.focus().is_err() {
            warn!("Could not focus command input");
        }
    }
}
