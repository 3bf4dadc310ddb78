//! Terminal app: a flavor-text command prompt for exploring the portfolio.

use leptos::*;

use desktop_app_contract::AppHost;
use system_ui::{TerminalLine, TerminalPrompt, TerminalSurface, TerminalTranscript, TextTone};

mod interpreter;

use interpreter::{interpret, CommandEffect, CommandHistory, LineTone, OutputLine, BANNER};

fn tone_for(tone: LineTone) -> TextTone {
    match tone {
        LineTone::Normal => TextTone::Primary,
        LineTone::Muted => TextTone::Secondary,
        LineTone::Accent => TextTone::Accent,
        LineTone::Error => TextTone::Danger,
    }
}

/// Local date string for the `date` command.
fn date_text() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        String::from(js_sys::Date::new_0().to_date_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::from("Thu Jan 01 1970")
    }
}

#[component]
pub fn TerminalApp(host: AppHost) -> impl IntoView {
    let next_line_id = store_value(0u64);
    let stamp = move |line: OutputLine| {
        let id = next_line_id.get_value();
        next_line_id.set_value(id + 1);
        (id, line)
    };

    let banner: Vec<(u64, OutputLine)> = BANNER
        .iter()
        .map(|text| stamp(OutputLine::muted(*text)))
        .collect();
    let transcript = create_rw_signal(banner);
    let input = create_rw_signal(String::new());
    let history = store_value(CommandHistory::new());
    let input_ref = create_node_ref::<html::Input>();

    let submit = move |line: String| {
        let echo = stamp(OutputLine::accent(format!("C:\\> {line}")));
        let result = interpret(&line, &date_text());
        if result.effect == CommandEffect::Clear {
            transcript.set(Vec::new());
            return;
        }
        let mut appended = vec![echo];
        appended.extend(result.lines.into_iter().map(stamp));
        transcript.update(|lines| lines.extend(appended));
        if let CommandEffect::OpenWindow(id) = result.effect {
            host.open_window(id);
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        host.play_sound("keypress");
        match ev.key().as_str() {
            "Enter" => {
                let line = input.get_untracked();
                history.update_value(|h| h.push(&line));
                input.set(String::new());
                submit(line);
            }
            "ArrowUp" => {
                ev.prevent_default();
                let recalled = history
                    .try_update_value(|h| h.previous().map(str::to_string))
                    .flatten();
                if let Some(recalled) = recalled {
                    input.set(recalled);
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                let recalled = history
                    .try_update_value(|h| h.next().map(str::to_string))
                    .flatten();
                input.set(recalled.unwrap_or_default());
            }
            _ => {}
        }
    };

    let focus_input = move |_| {
        if let Some(field) = input_ref.get_untracked() {
            let _ = field.focus();
        }
    };

    view! {
        <TerminalSurface role="log" aria_live="polite" on_click=Callback::new(focus_input)>
            <TerminalTranscript aria_label="Terminal output">
                <For
                    each=move || transcript.get()
                    key=|(id, _)| *id
                    let:entry
                >
                    <TerminalLine tone=tone_for(entry.1.tone)>{entry.1.text}</TerminalLine>
                </For>
            </TerminalTranscript>
            <TerminalPrompt>
                <span data-ui-slot="prompt-label">"C:\\>"</span>
                <input
                    type="text"
                    data-ui-slot="prompt-input"
                    autocomplete="off"
                    spellcheck="false"
                    node_ref=input_ref
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </TerminalPrompt>
        </TerminalSurface>
    }
}
