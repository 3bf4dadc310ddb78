//! Fixed top bar: portfolio title, live clock, sound toggle.

use std::time::Duration;

use leptos::*;

use system_ui::{Icon, IconName, TaskbarButton, TaskbarSection};

use crate::{reducer::DesktopAction, runtime_context::use_desktop_runtime};

#[component]
pub fn TopBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dispatch = runtime.dispatch;

    let clock = create_rw_signal(clock_text());
    match set_interval_with_handle(
        move || clock.set(clock_text()),
        Duration::from_secs(1),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("clock interval failed: {err:?}"),
    }

    let audio_enabled = Signal::derive(move || runtime.state.get().audio_enabled);

    view! {
        <header class="top-bar" role="banner" aria-label="Top bar">
            <TaskbarSection ui_slot="title">
                <span data-ui-slot="site-title">"Yet another portfolio"</span>
            </TaskbarSection>
            <TaskbarSection ui_slot="status">
                <TaskbarButton
                    ui_slot="sound-toggle"
                    aria_label="Toggle sound"
                    aria_pressed=audio_enabled
                    on_click=Callback::new(move |_| {
                        let enabled = !runtime.state.get_untracked().audio_enabled;
                        dispatch.call(DesktopAction::SetAudioEnabled { enabled });
                    })
                >
                    {move || {
                        if audio_enabled.get() {
                            view! { <Icon icon=IconName::SpeakerOn/> }
                        } else {
                            view! { <Icon icon=IconName::SpeakerOff/> }
                        }
                    }}
                </TaskbarButton>
                <span data-ui-slot="clock" role="timer">{move || clock.get()}</span>
            </TaskbarSection>
        </header>
    }
}

/// Wall-clock snapshot formatted as a 12-hour `hh:mm AM/PM` string.
fn clock_text() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        let hours = now.get_hours();
        let minutes = now.get_minutes();
        let meridiem = if hours < 12 { "AM" } else { "PM" };
        let display_hours = match hours % 12 {
            0 => 12,
            h => h,
        };
        format!("{display_hours}:{minutes:02} {meridiem}")
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::from("12:00 AM")
    }
}
