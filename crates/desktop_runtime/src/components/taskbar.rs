//! Taskbar: start button, start menu, and one button per open window.

#[cfg(target_arch = "wasm32")]
use std::time::Duration;

use leptos::*;

use desktop_app_contract::{WindowId, WindowOptions};
use system_ui::{
    Icon, IconName, MenuItem, MenuSeparator, MenuSurface, TaskbarButton, TaskbarSection,
    Taskbar as TaskbarShell,
};

use crate::{reducer::DesktopAction, runtime_context::use_desktop_runtime};

#[component]
pub fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dispatch = runtime.dispatch;

    let start_menu_open = Signal::derive(move || runtime.state.get().start_menu_open);
    let buttons = Signal::derive(move || {
        runtime
            .state
            .get()
            .windows
            .iter()
            .map(|w| (w.id.clone(), w.title.clone(), w.icon))
            .collect::<Vec<_>>()
    });

    let open_from_menu = move |id: &'static str| {
        dispatch.call(DesktopAction::OpenWindow {
            id: WindowId::from(id),
            options: WindowOptions::default(),
        });
    };

    view! {
        <TaskbarShell
            aria_label="Taskbar"
            on_mousedown=Callback::new(|ev: ev::MouseEvent| ev.stop_propagation())
        >
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    id="start-button"
                    aria_haspopup="menu"
                    aria_expanded=start_menu_open
                    pressed=start_menu_open
                    on_click=Callback::new(move |_| {
                        dispatch.call(DesktopAction::ToggleStartMenu);
                    })
                >
                    <Icon icon=IconName::Launcher/>
                    <span data-ui-slot="start-label">"Start"</span>
                </TaskbarButton>
                <Show when=move || start_menu_open.get() fallback=|| ()>
                    <MenuSurface
                        id="start-menu"
                        role="menu"
                        aria_label="Start menu"
                        on_mousedown=Callback::new(|ev: ev::MouseEvent| ev.stop_propagation())
                    >
                        <MenuItem
                            leading_icon=IconName::Terminal
                            on_click=Callback::new(move |_| open_from_menu("terminal"))
                        >
                            "Terminal"
                        </MenuItem>
                        <MenuItem
                            leading_icon=IconName::ExplorerFolder
                            on_click=Callback::new(move |_| open_from_menu("explorer"))
                        >
                            "File Explorer"
                        </MenuItem>
                        <MenuItem
                            leading_icon=IconName::MusicNote
                            on_click=Callback::new(move |_| open_from_menu("mediaPlayer"))
                        >
                            "Media Player"
                        </MenuItem>
                        <MenuItem
                            leading_icon=IconName::Gamepad
                            on_click=Callback::new(move |_| open_from_menu("pacman"))
                        >
                            "Games"
                        </MenuItem>
                        <MenuSeparator/>
                        <MenuItem
                            leading_icon=IconName::Power
                            on_click=Callback::new(move |_| shut_down())
                        >
                            "Shut Down"
                        </MenuItem>
                    </MenuSurface>
                </Show>
            </TaskbarSection>
            <TaskbarSection ui_slot="windows" aria_label="Open windows">
                <For
                    each=move || buttons.get()
                    key=|(id, _, _)| id.clone()
                    let:entry
                >
                    {
                        let (id, title, icon) = entry;
                        let button_id = store_value(id);
                        let selected = Signal::derive(move || {
                            runtime.state.get().is_active(&button_id.get_value())
                        });
                        view! {
                            <TaskbarButton
                                title=title.clone()
                                selected=selected
                                on_click=Callback::new(move |_| {
                                    dispatch.call(DesktopAction::ToggleTaskbarWindow {
                                        id: button_id.get_value(),
                                    });
                                })
                            >
                                <Icon icon=icon/>
                                <span data-ui-slot="taskbar-label">{title}</span>
                            </TaskbarButton>
                        }
                    }
                </For>
            </TaskbarSection>
        </TaskbarShell>
    }
}

/// Fades the page out, then reloads. A reload is a full session reset.
fn shut_down() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body
                .style()
                .set_property("transition", "opacity 1s ease-out");
            let _ = body.style().set_property("opacity", "0");
        }
        set_timeout(
            || {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            },
            Duration::from_millis(1_000),
        );
    }
}
