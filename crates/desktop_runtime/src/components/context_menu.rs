//! Right-click desktop menu.

use leptos::*;

use desktop_app_contract::{WindowId, WindowOptions};
use system_ui::{IconName, MenuItem, MenuSeparator, MenuSurface};

use crate::{
    model::PointerPosition, reducer::DesktopAction, runtime_context::use_desktop_runtime,
};

#[component]
pub fn ContextMenu(
    /// Pointer position the menu opens at; `None` keeps it closed.
    anchor: RwSignal<Option<PointerPosition>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dispatch = runtime.dispatch;

    let audio_enabled = Signal::derive(move || runtime.state.get().audio_enabled);
    let style = Signal::derive(move || {
        anchor
            .get()
            .map(|at| format!("left: {}px; top: {}px;", at.x, at.y))
            .unwrap_or_default()
    });

    let open_app = move |id: &'static str| {
        anchor.set(None);
        dispatch.call(DesktopAction::OpenWindow {
            id: WindowId::from(id),
            options: WindowOptions::default(),
        });
    };

    view! {
        <Show when=move || anchor.get().is_some() fallback=|| ()>
            <MenuSurface
                id="desktop-context-menu"
                role="menu"
                aria_label="Desktop menu"
                style=style
                on_mousedown=Callback::new(|ev: ev::MouseEvent| ev.stop_propagation())
            >
                <MenuItem
                    leading_icon=IconName::Terminal
                    on_click=Callback::new(move |_| open_app("terminal"))
                >
                    "Open Terminal"
                </MenuItem>
                <MenuItem
                    leading_icon=IconName::ExplorerFolder
                    on_click=Callback::new(move |_| open_app("explorer"))
                >
                    "Open File Explorer"
                </MenuItem>
                <MenuSeparator/>
                <MenuItem
                    leading_icon=IconName::SpeakerOn
                    on_click=Callback::new(move |_| {
                        anchor.set(None);
                        let enabled = !runtime.state.get_untracked().audio_enabled;
                        dispatch.call(DesktopAction::SetAudioEnabled { enabled });
                    })
                >
                    {move || if audio_enabled.get() { "Sound Off" } else { "Sound On" }}
                </MenuItem>
                <MenuItem
                    leading_icon=IconName::ArrowRight
                    on_click=Callback::new(move |_| {
                        anchor.set(None);
                        refresh();
                    })
                >
                    "Refresh"
                </MenuItem>
            </MenuSurface>
        </Show>
    }
}

fn refresh() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
