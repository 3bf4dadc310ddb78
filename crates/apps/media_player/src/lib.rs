//! Media player app: a fake winamp for an imaginary chiptune collection.

use std::time::Duration;

use leptos::*;

use desktop_app_contract::AppHost;
use system_ui::{Button, ButtonVariant, Icon, IconName, RangeField};

mod playlist;

use playlist::{format_duration, PlayerState, PLAYLIST};

#[component]
pub fn MediaPlayerApp(host: AppHost) -> impl IntoView {
    let state = create_rw_signal(PlayerState::new());
    let position = create_rw_signal(0.0_f64);
    let audio = store_value(None::<web_sys::HtmlAudioElement>);

    // Mirror the pure state onto the audio element. Source only changes when
    // the track does, so seeking and volume edits do not restart playback.
    let last_track = store_value(usize::MAX);
    create_effect(move |_| {
        let snapshot = state.get();
        #[cfg(target_arch = "wasm32")]
        {
            if audio.get_value().is_none() {
                audio.set_value(web_sys::HtmlAudioElement::new().ok());
            }
            if let Some(element) = audio.get_value() {
                if last_track.get_value() != snapshot.track {
                    last_track.set_value(snapshot.track);
                    element.set_src(snapshot.current().audio_url);
                    position.set(0.0);
                }
                element.set_volume(snapshot.effective_volume());
                if snapshot.playing {
                    let _ = element.play();
                } else {
                    let _ = element.pause();
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if last_track.get_value() != snapshot.track {
                last_track.set_value(snapshot.track);
                position.set(0.0);
            }
        }
    });

    // Playback clock. Reads the element on wasm, simulates elsewhere; rolls
    // to the next track at the end either way.
    match set_interval_with_handle(
        move || {
            let snapshot = state.get_untracked();
            if !snapshot.playing {
                return;
            }
            let duration = f64::from(snapshot.current().duration_secs);
            let mut now = position.get_untracked() + 1.0;
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(element) = audio.get_value() {
                    now = element.current_time();
                }
            }
            if now >= duration {
                state.update(|s| s.next());
            } else {
                position.set(now);
            }
        },
        Duration::from_secs(1),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("playback clock failed: {err:?}"),
    }

    let seek = Callback::new(move |target: f64| {
        position.set(target);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(element) = audio.get_value() {
                element.set_current_time(target);
            }
        }
    });

    let control = move |label: &'static str, icon: Signal<IconName>, action: Callback<()>| {
        view! {
            <Button
                variant=ButtonVariant::Standard
                ui_slot="player-control"
                aria_label=label
                on_click=Callback::new(move |_| {
                    host.play_sound("click");
                    action.call(());
                })
            >
                {move || view! { <Icon icon=icon.get()/> }}
            </Button>
        }
    };

    let current = Signal::derive(move || *state.get().current());
    let duration = Signal::derive(move || f64::from(current.get().duration_secs));

    view! {
        <div class="media-player" data-ui-slot="media-player">
            <img
                data-ui-slot="album-art"
                src=move || current.get().art_url
                alt=move || format!("{} album art", current.get().title)
            />
            <div data-ui-slot="track-info">
                <span data-ui-slot="track-title">{move || current.get().title}</span>
                <span data-ui-slot="track-artist">{move || current.get().artist}</span>
            </div>
            <div data-ui-slot="seek-row">
                <span>{move || format_duration(position.get() as u32)}</span>
                <RangeField
                    min=0.0
                    max=duration
                    step=1.0
                    value=Signal::derive(move || position.get())
                    on_input=seek
                />
                <span>{move || format_duration(current.get().duration_secs)}</span>
            </div>
            <div data-ui-slot="player-controls">
                {control(
                    "Previous track",
                    Signal::derive(|| IconName::ArrowLeft),
                    Callback::new(move |_| state.update(|s| s.previous())),
                )}
                {control(
                    "Play or pause",
                    Signal::derive(move || {
                        if state.get().playing { IconName::SpeakerOn } else { IconName::MusicNote }
                    }),
                    Callback::new(move |_| state.update(|s| s.toggle_play())),
                )}
                {control(
                    "Next track",
                    Signal::derive(|| IconName::ArrowRight),
                    Callback::new(move |_| state.update(|s| s.next())),
                )}
                {control(
                    "Mute",
                    Signal::derive(move || {
                        if state.get().muted { IconName::SpeakerOff } else { IconName::SpeakerOn }
                    }),
                    Callback::new(move |_| state.update(|s| s.toggle_mute())),
                )}
                <RangeField
                    min=0.0
                    max=1.0
                    step=0.01
                    value=Signal::derive(move || state.get().volume)
                    on_input=Callback::new(move |volume| {
                        state.update(|s| s.set_volume(volume));
                    })
                />
            </div>
            <ol data-ui-slot="playlist">
                {PLAYLIST
                    .iter()
                    .enumerate()
                    .map(|(index, track)| {
                        view! {
                            <li>
                                <Button
                                    variant=ButtonVariant::Quiet
                                    ui_slot="playlist-entry"
                                    selected=Signal::derive(move || state.get().track == index)
                                    on_click=Callback::new(move |_| {
                                        host.play_sound("click");
                                        state.update(|s| {
                                            s.track = index;
                                            s.playing = true;
                                        });
                                    })
                                >
                                    <span data-ui-slot="entry-title">{track.title}</span>
                                    <span data-ui-slot="entry-meta">
                                        {format!(
                                            "{} - {}",
                                            track.artist,
                                            format_duration(track.duration_secs),
                                        )}
                                    </span>
                                </Button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}
