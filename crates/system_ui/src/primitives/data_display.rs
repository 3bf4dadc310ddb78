use super::*;

#[component]
/// Shared terminal surface root.
pub fn TerminalSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_live: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-surface"
            node_ref=node_ref
            role=role
            aria-live=aria_live
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared terminal transcript container.
pub fn TerminalTranscript(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-transcript", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-transcript"
            role=role
            aria-label=move || aria_label.get()
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared terminal line surface.
pub fn TerminalLine(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-line", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-line"
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared terminal prompt row.
pub fn TerminalPrompt(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-prompt", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-prompt"
            role=role
        >
            {children()}
        </div>
    }
}
