//! Fake BIOS boot screen shown until the boot sequence completes.

use std::time::Duration;

use leptos::*;

use system_ui::{TerminalLine, TerminalSurface, TextTone};

use crate::{
    audio::SoundEffect, boot::BootPhase, reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

/// Black-screen pause between mount and the first transcript line.
const POWER_ON_DELAY_MS: u64 = 1_000;

/// Renders the boot transcript and owns every boot timer. Stage advances play
/// the boot tick; any keypress (or the final pause) completes the sequence.
#[component]
pub fn BootScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dispatch = runtime.dispatch;
    let boot = runtime.boot;

    let stage_timer = store_value(None::<leptos::leptos_dom::helpers::TimeoutHandle>);
    let clear_stage_timer = move || {
        if let Some(handle) = stage_timer.get_value() {
            handle.clear();
            stage_timer.set_value(None);
        }
    };

    match set_timeout_with_handle(
        move || {
            boot.update(|sequence| {
                sequence.power_on();
            });
        },
        Duration::from_millis(POWER_ON_DELAY_MS),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("boot power-on timer failed: {err:?}"),
    }

    // Re-arms after every phase change; the machine ignores stale callbacks.
    create_effect(move |_| {
        let sequence = boot.get();
        clear_stage_timer();
        let Some(delay_ms) = sequence.next_delay_ms() else {
            return;
        };
        let result = set_timeout_with_handle(
            move || {
                let mut next = boot.get_untracked();
                let advanced = next.advance_stage();
                let completed = !advanced && next.any_key();
                if advanced || completed {
                    boot.set(next);
                }
                if advanced {
                    dispatch.call(DesktopAction::PlaySound {
                        sound: SoundEffect::BootTick,
                    });
                }
            },
            Duration::from_millis(u64::from(delay_ms)),
        );
        match result {
            Ok(handle) => stage_timer.set_value(Some(handle)),
            Err(err) => logging::warn!("boot stage timer failed: {err:?}"),
        }
    });
    on_cleanup(clear_stage_timer);

    let keydown = window_event_listener(ev::keydown, move |_| {
        let mut next = boot.get_untracked();
        if next.any_key() {
            boot.set(next);
        }
    });
    on_cleanup(move || keydown.remove());

    let lines = Signal::derive(move || boot.get().visible_lines().to_vec());
    let awaiting_key = Signal::derive(move || boot.get().phase() == BootPhase::AwaitKey);
    let powered = Signal::derive(move || boot.get().phase() != BootPhase::Pending);

    view! {
        <TerminalSurface layout_class="boot-screen" role="status" aria_live="polite">
            <Show when=move || powered.get() fallback=|| ()>
                <TerminalLine tone=TextTone::Secondary>"RETRO BIOS v4.2"</TerminalLine>
            </Show>
            <For
                each=move || lines.get()
                key=|stage| stage.text
                let:stage
            >
                <TerminalLine tone=TextTone::Success>{stage.text}</TerminalLine>
            </For>
            <Show when=move || awaiting_key.get() fallback=|| ()>
                <TerminalLine tone=TextTone::Primary>
                    "PRESS ANY KEY TO CONTINUE..."
                    <span class="boot-cursor" data-ui-slot="cursor">"_"</span>
                </TerminalLine>
            </Show>
        </TerminalSurface>
    }
}
