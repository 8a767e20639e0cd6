//! Browser entry point: binds the page elements, wires listeners, starts the poll timer.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use gloo_timers::callback::Interval;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlFormElement, KeyboardEvent};

use crate::config::ClientConfig;
use crate::console::controller::{is_submit_chord, ConsoleController};
use crate::services::api::fetch::FetchConsoleApi;

pub mod dom;

use dom::{element_by_id, DomView};

/// Optional `<script type="application/json">` block carrying a `ClientConfig`.
pub const CONFIG_ELEMENT_ID: &str = "termdown-config";

type WebController = ConsoleController<FetchConsoleApi, DomView>;

thread_local! {
    // Listeners and the timer live as long as the page.
    static LISTENERS: RefCell<Vec<Closure<dyn FnMut(Event)>>> = const { RefCell::new(Vec::new()) };
    static POLL_TIMER: RefCell<Option<Interval>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    boot().map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn read_config(document: &Document) -> (ClientConfig, Option<String>) {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    match raw {
        Some(raw) if !raw.trim().is_empty() => match ClientConfig::from_json(&raw) {
            Ok(config) => (config, None),
            Err(e) => (ClientConfig::default(), Some(e.to_string())),
        },
        _ => (ClientConfig::default(), None),
    }
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<()> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|_| anyhow!("failed to attach {event} listener"))?;
    LISTENERS.with(|slot| slot.borrow_mut().push(callback));
    Ok(())
}

fn boot() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("window is unavailable"))?;
    let document = window.document().ok_or_else(|| anyhow!("document is unavailable"))?;

    // Logging depends on config, so a bad config block is reported after init.
    let (config, config_error) = read_config(&document);
    crate::logging::init(&config.log_level);
    if let Some(e) = config_error {
        warn!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
    }

    let ids = &config.elements;
    let view = DomView::bind(&document, ids)?;
    let form: HtmlFormElement = element_by_id(&document, &ids.form)?;
    let input: HtmlElement = element_by_id(&document, &ids.input)?;
    let clear: HtmlElement = element_by_id(&document, &ids.clear)?;

    let controller = Rc::new(ConsoleController::new(FetchConsoleApi::new(&config), view, &config));

    {
        let controller = Rc::clone(&controller);
        listen(&form, "submit", move |event| {
            event.prevent_default();
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                controller.submit().await;
            });
        })?;
    }

    {
        let form = form.clone();
        listen(&input, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if is_submit_chord(&key.key(), key.meta_key(), key.ctrl_key()) {
                event.prevent_default();
                if form.request_submit().is_err() {
                    warn!("Form refused submission");
                }
            }
        })?;
    }

    {
        let controller = Rc::clone(&controller);
        listen(&clear, "click", move |_event| controller.clear())?;
    }

    schedule_polls(controller, config.poll_interval());
    info!("termdown attached. Polling {} every {}ms", config.output_path, config.poll_interval_ms);
    Ok(())
}

/// First poll immediately, then on a fixed cadence. Each tick is fire-and-forget;
/// the controller drops ticks that overlap an outstanding fetch.
fn schedule_polls(controller: Rc<WebController>, period: Duration) {
    let tick = move || {
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            controller.poll().await;
        });
    };
    tick();

    let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
    let timer = Interval::new(millis, tick);
    POLL_TIMER.with(|slot| *slot.borrow_mut() = Some(timer));
}
