//! Change feed listener: a polling floor plus a push invalidation channel.
//!
//! Both triggers do the same thing, refresh now. The timer fires every
//! [`POLL_INTERVAL_MS`] regardless of push-channel health; the push
//! channel turns server-side changes into immediate refreshes. Event
//! payloads are never inspected: a message means only "something changed,
//! re-fetch", so no ordering or sequence numbers are needed.

use wasm_bindgen_futures::spawn_local;

use crate::app::{self, AppContext};
use crate::config::{EVENTS_ENDPOINT, POLL_INTERVAL_MS};

/// Start both refresh triggers. Called once at startup.
pub fn start(ctx: AppContext) {
    start_polling(ctx);
    start_push_channel(ctx);
}

fn start_polling(ctx: AppContext) {
    spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
            app::refresh(ctx).await;
        }
    });
}

/// Subscribe to the server-sent event stream. Best-effort: if the channel
/// cannot be opened the client degrades to polling only.
fn start_push_channel(ctx: AppContext) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;
        use web_sys::{EventSource, MessageEvent};

        let source = match EventSource::new(EVENTS_ENDPOINT) {
            Ok(source) => source,
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("treegrid: push channel unavailable, polling only: {err:?}").into(),
                );
                return;
            }
        };

        let on_message = Closure::wrap(Box::new(move |_: MessageEvent| {
            spawn_local(async move { app::refresh(ctx).await });
        }) as Box<dyn Fn(MessageEvent)>);
        source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();

        // The EventSource reconnects on its own; keep it for the lifetime
        // of the page.
        std::mem::forget(source);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ctx;
}
