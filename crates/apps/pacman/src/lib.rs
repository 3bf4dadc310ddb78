//! Pac-Man app: arrow-key maze game with a persisted high score.

use std::time::Duration;

use leptos::*;

use desktop_app_contract::AppHost;
use system_ui::{Button, ButtonVariant};

mod game;
mod score;

use game::{is_wall, Direction, GameState, GameStatus, Position, GRID};
use score::{load_high_score, store_high_score};

/// World step cadence.
const TICK_MS: u64 = 200;

#[component]
pub fn PacmanApp(host: AppHost) -> impl IntoView {
    let game = create_rw_signal(GameState::new());
    let high_score = create_rw_signal(load_high_score());
    let finish_handled = store_value(false);

    let keydown = window_event_listener(ev::keydown, move |ev| {
        let direction = match ev.key().as_str() {
            "ArrowUp" => Direction::Up,
            "ArrowDown" => Direction::Down,
            "ArrowLeft" => Direction::Left,
            "ArrowRight" => Direction::Right,
            _ => return,
        };
        ev.prevent_default();
        game.update(|g| g.set_direction(direction));
    });
    on_cleanup(move || keydown.remove());

    match set_interval_with_handle(
        move || {
            game.update(|g| g.tick());
            let snapshot = game.get_untracked();
            let finished =
                matches!(snapshot.status, GameStatus::GameOver | GameStatus::Won);
            if !finished || finish_handled.get_value() {
                return;
            }
            finish_handled.set_value(true);
            if snapshot.score > high_score.get_untracked() {
                high_score.set(snapshot.score);
                if let Err(err) = store_high_score(snapshot.score) {
                    logging::warn!("{err}");
                }
            }
            host.play_sound(if snapshot.status == GameStatus::GameOver {
                "error"
            } else {
                "double-click"
            });
        },
        Duration::from_millis(TICK_MS),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("game tick failed: {err:?}"),
    }

    let restart = move |_| {
        finish_handled.set_value(false);
        game.set(GameState::new());
    };

    let status = Signal::derive(move || game.get().status);

    view! {
        <div class="pacman" data-ui-slot="pacman">
            <div data-ui-slot="score-row">
                <span>{move || format!("SCORE {:05}", game.get().score)}</span>
                <span>{move || format!("HIGH {:05}", high_score.get())}</span>
            </div>
            <div class="pacman-maze" data-ui-slot="maze" role="img" aria-label="Pac-Man maze">
                {(0..GRID)
                    .map(|y| {
                        view! {
                            <div data-ui-slot="maze-row">
                                {(0..GRID)
                                    .map(|x| {
                                        let at = Position { x, y };
                                        view! {
                                            <div
                                                class="maze-cell"
                                                data-cell=move || cell_kind(&game.get(), at)
                                            ></div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match status.get() {
                GameStatus::Ready => view! {
                    <div data-ui-slot="game-banner">"READY! Press an arrow key."</div>
                }
                    .into_view(),
                GameStatus::Playing => ().into_view(),
                GameStatus::GameOver => banner("GAME OVER", restart).into_view(),
                GameStatus::Won => banner("YOU WIN!", restart).into_view(),
            }}
        </div>
    }
}

fn cell_kind(game: &GameState, at: Position) -> &'static str {
    if is_wall(at) {
        "wall"
    } else if game.pacman == at {
        "pacman"
    } else if game.ghosts.contains(&at) {
        "ghost"
    } else if game.has_pellet(at) {
        "pellet"
    } else {
        "empty"
    }
}

fn banner(message: &'static str, restart: impl Fn(ev::MouseEvent) + 'static) -> impl IntoView {
    view! {
        <div data-ui-slot="game-banner">
            <span>{message}</span>
            <Button
                variant=ButtonVariant::Primary
                ui_slot="game-restart"
                on_click=Callback::new(restart)
            >
                "Play Again"
            </Button>
        </div>
    }
}
