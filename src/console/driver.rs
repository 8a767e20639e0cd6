use std::rc::Rc;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use super::controller::ConsoleController;
use super::view::ConsoleView;
use crate::services::api::ConsoleApi;

/// Native poll loop. Must run inside a `tokio::task::LocalSet`.
///
/// Each tick spawns its own poll task and moves on, so a slow fetch does not
/// delay the cadence; the controller's in-flight guard drops overlapping ticks.
pub async fn run_poller<A, V>(controller: Rc<ConsoleController<A, V>>, period: Duration)
where
    A: ConsoleApi + 'static,
    V: ConsoleView + 'static,
{
    info!("Poller started. Period: {}ms", period.as_millis());

    let mut cadence = interval(period);
    cadence.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        cadence.tick().await;
        let controller = Rc::clone(&controller);
        tokio::task::spawn_local(async move {
            controller.poll().await;
        });
    }
}
