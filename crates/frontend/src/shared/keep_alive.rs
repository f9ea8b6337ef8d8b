//! Keep-alive ping for the backend host.
//!
//! The free hosting tier puts the backend to sleep after a period without
//! traffic, so the page pings the base URL once on start and then on a fixed
//! interval. Results are logged and otherwise ignored; there is no retry and
//! nothing here touches the composer.

use super::api_utils::catalog_client;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

pub struct KeepAlive {
    interval: Interval,
}

impl KeepAlive {
    pub fn start(period_ms: u32) -> Self {
        log::debug!("Keep-alive started, period {} ms", period_ms);
        ping();
        Self {
            interval: Interval::new(period_ms, ping),
        }
    }

    pub fn cancel(self) {
        self.interval.cancel();
        log::debug!("Keep-alive stopped");
    }
}

fn ping() {
    leptos::task::spawn_local(async {
        match catalog_client().ping().await {
            Ok(status) => log::debug!("Keep-alive ping answered with HTTP {}", status),
            Err(e) => log::debug!("Keep-alive ping sent, error ignored: {}", e),
        }
    });
}

/// Run the keep-alive for the lifetime of the current owner
pub fn use_keep_alive(period_ms: u32) {
    let task = StoredValue::new_local(Some(KeepAlive::start(period_ms)));
    on_cleanup(move || {
        if let Some(Some(task)) = task.try_update_value(|t| t.take()) {
            task.cancel();
        }
    });
}
