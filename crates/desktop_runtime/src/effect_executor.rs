//! Drains queued [`RuntimeEffect`] intents and performs them against the
//! browser.

use leptos::*;

use crate::{audio::SoundService, reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Installs the executor effect. The queue is cleared before the batch is
/// processed so any dispatch performed while executing enqueues a fresh batch
/// instead of re-running this one.
pub fn run(context: DesktopRuntimeContext) {
    let sounds = SoundService::new();
    create_effect(move |_| {
        let batch = context.effects.get();
        if batch.is_empty() {
            return;
        }
        context.effects.set(Vec::new());
        for effect in batch {
            match effect {
                RuntimeEffect::PlaySound(sound) => sounds.play(sound),
                RuntimeEffect::OpenExternalUrl(url) => open_external_url(&url),
            }
        }
    });
}

fn open_external_url(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.open_with_url_and_target(url, "_blank") {
                logging::warn!("failed to open external url {url}: {err:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
    }
}
