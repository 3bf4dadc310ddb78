//! A single managed window: chrome, drag/resize wiring, and the content
//! mount.

use leptos::*;

use desktop_app_contract::{AppHost, WindowId, WindowPosition, WindowSize};
use system_ui::{
    Icon, IconName, ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};

use crate::{
    model::{PointerPosition, ResizeEdge, TASKBAR_HEIGHT_PX, TOP_BAR_HEIGHT_PX},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

const RESIZE_EDGES: [(&str, ResizeEdge); 8] = [
    ("n", ResizeEdge::North),
    ("s", ResizeEdge::South),
    ("e", ResizeEdge::East),
    ("w", ResizeEdge::West),
    ("ne", ResizeEdge::NorthEast),
    ("nw", ResizeEdge::NorthWest),
    ("se", ResizeEdge::SouthEast),
    ("sw", ResizeEdge::SouthWest),
];

#[component]
pub fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dispatch = runtime.dispatch;
    let id = store_value(window_id);

    // The record can lag the render list by a frame while `For` settles, so
    // every lookup tolerates a missing window.
    let window = Signal::derive(move || runtime.state.get().window(&id.get_value()).cloned());
    let focused = Signal::derive(move || runtime.state.get().is_active(&id.get_value()));
    let title = Signal::derive(move || {
        window
            .get()
            .map(|w| w.title.clone())
            .unwrap_or_default()
    });
    let icon = create_memo(move |_| window.get().map(|w| w.icon).unwrap_or(IconName::Launcher));
    let style = Signal::derive(move || {
        window
            .get()
            .map(|w| {
                format!(
                    "left: {}px; top: {}px; width: {}px; height: {}px;",
                    w.position.x, w.position.y, w.size.width, w.size.height
                )
            })
            .unwrap_or_default()
    });

    // Pre-maximize geometry lives here, not in session state.
    let restore_geometry = create_rw_signal(None::<(WindowPosition, WindowSize)>);
    let maximized = Signal::derive(move || restore_geometry.get().is_some());

    let activate = move || {
        if !focused.get_untracked() {
            dispatch.call(DesktopAction::ActivateWindow { id: id.get_value() });
        }
    };

    let toggle_maximize = move || {
        if let Some((position, size)) = restore_geometry.get_untracked() {
            restore_geometry.set(None);
            dispatch.call(DesktopAction::UpdateWindowPosition {
                id: id.get_value(),
                position,
            });
            dispatch.call(DesktopAction::UpdateWindowSize {
                id: id.get_value(),
                size,
            });
        } else if let Some(current) = window.get_untracked() {
            restore_geometry.set(Some((current.position, current.size)));
            let viewport = viewport_size();
            dispatch.call(DesktopAction::UpdateWindowPosition {
                id: id.get_value(),
                position: WindowPosition {
                    x: 0,
                    y: TOP_BAR_HEIGHT_PX,
                },
            });
            dispatch.call(DesktopAction::UpdateWindowSize {
                id: id.get_value(),
                size: WindowSize {
                    width: viewport.width,
                    height: viewport.height - TOP_BAR_HEIGHT_PX - TASKBAR_HEIGHT_PX,
                },
            });
        }
        dispatch.call(DesktopAction::PlaySound {
            sound: crate::audio::SoundEffect::Maximize,
        });
    };

    let begin_move = move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() || ev.button() != 0 || maximized.get_untracked() {
            return;
        }
        try_set_pointer_capture(&ev);
        dispatch.call(DesktopAction::BeginMove {
            id: id.get_value(),
            pointer: pointer_from(&ev),
        });
    };

    let host = AppHost::new(Callback::new(move |command| {
        dispatch.call(DesktopAction::HandleAppCommand { command });
    }));
    // Keyed on content alone so focus changes never remount the app view.
    let content = create_memo(move |_| window.get().map(|w| w.content));
    let body = move || {
        content
            .get()
            .map(|content| crate::apps::render_window_contents(&id.get_value(), &content, host))
    };

    view! {
        <WindowFrame
            style=style
            aria_label=title
            focused=focused
            minimized=false
            maximized=maximized
            on_pointerdown=Callback::new(move |_| activate())
        >
            <WindowTitleBar
                on_pointerdown=Callback::new(begin_move)
                on_dblclick=Callback::new(move |_| toggle_maximize())
            >
                <WindowTitle>
                    {move || view! { <Icon icon=icon.get()/> }}
                    <span data-ui-slot="window-title-text">{move || title.get()}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        aria_label="Minimize window"
                        on_pointerdown=Callback::new(stop_pointer_event)
                        on_click=Callback::new(move |ev: ev::MouseEvent| {
                            ev.stop_propagation();
                            dispatch.call(DesktopAction::MinimizeWindow { id: id.get_value() });
                        })
                    >
                        <Icon icon=IconName::WindowMinimize/>
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label="Maximize window"
                        on_pointerdown=Callback::new(stop_pointer_event)
                        on_click=Callback::new(move |ev: ev::MouseEvent| {
                            ev.stop_propagation();
                            toggle_maximize();
                        })
                    >
                        {move || {
                            if maximized.get() {
                                view! { <Icon icon=IconName::WindowRestore/> }
                            } else {
                                view! { <Icon icon=IconName::WindowMaximize/> }
                            }
                        }}
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label="Close window"
                        on_pointerdown=Callback::new(stop_pointer_event)
                        on_click=Callback::new(move |ev: ev::MouseEvent| {
                            ev.stop_propagation();
                            dispatch.call(DesktopAction::CloseWindow { id: id.get_value() });
                        })
                    >
                        <Icon icon=IconName::Dismiss/>
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>{body}</WindowBody>
            {RESIZE_EDGES
                .into_iter()
                .map(|(token, edge)| {
                    view! {
                        <ResizeHandle
                            edge=token
                            on_pointerdown=Callback::new(move |ev: web_sys::PointerEvent| {
                                if !ev.is_primary() || ev.button() != 0 {
                                    return;
                                }
                                ev.stop_propagation();
                                try_set_pointer_capture(&ev);
                                dispatch
                                    .call(DesktopAction::BeginResize {
                                        id: id.get_value(),
                                        edge,
                                        pointer: pointer_from(&ev),
                                    });
                            })
                        />
                    }
                })
                .collect_view()}
        </WindowFrame>
    }
}

fn pointer_from(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_pointer_event(ev: web_sys::PointerEvent) {
    ev.stop_propagation();
}

/// Keeps move/resize pointer events flowing to the captured element even when
/// the pointer outruns the window chrome.
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        if let Some(target) = ev.target() {
            if let Ok(element) = target.dyn_into::<web_sys::Element>() {
                let _ = element.set_pointer_capture(ev.pointer_id());
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ev;
    }
}

fn viewport_size() -> WindowSize {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window.inner_width().ok().and_then(|v| v.as_f64());
            let height = window.inner_height().ok().and_then(|v| v.as_f64());
            if let (Some(width), Some(height)) = (width, height) {
                return WindowSize {
                    width: width as i32,
                    height: height as i32,
                };
            }
        }
    }
    WindowSize {
        width: 1024,
        height: 768,
    }
}
