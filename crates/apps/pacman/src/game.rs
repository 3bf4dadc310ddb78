//! Pure Pac-Man game logic: maze, movement, pellets, ghosts, win/lose.
//!
//! The maze is a deterministic 21 by 21 pillar grid: solid border, a wall
//! pillar on every even interior coordinate, corridors everywhere else. Every
//! corridor cell starts with a pellet except the spawn cells.

/// Maze edge length in cells.
pub const GRID: usize = 21;

/// Points per pellet.
pub const PELLET_SCORE: u32 = 10;

const PACMAN_SPAWN: Position = Position { x: 1, y: 1 };
const GHOST_SPAWNS: [Position; 2] = [
    Position { x: 19, y: 19 },
    Position { x: 1, y: 19 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    fn distance(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the first arrow key.
    Ready,
    Playing,
    GameOver,
    Won,
}

/// Whole game state; advanced one cell per [`GameState::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pellets: Vec<bool>,
    pub pacman: Position,
    pub direction: Direction,
    pub ghosts: [Position; 2],
    pub score: u32,
    pub status: GameStatus,
}

/// Walls are a pure function of the coordinates.
pub fn is_wall(position: Position) -> bool {
    let Position { x, y } = position;
    x == 0 || y == 0 || x == GRID - 1 || y == GRID - 1 || (x % 2 == 0 && y % 2 == 0)
}

fn index(position: Position) -> usize {
    position.y * GRID + position.x
}

fn step_from(position: Position, direction: Direction) -> Option<Position> {
    let (dx, dy) = direction.delta();
    let x = position.x.checked_add_signed(dx)?;
    let y = position.y.checked_add_signed(dy)?;
    let next = Position { x, y };
    if x >= GRID || y >= GRID || is_wall(next) {
        return None;
    }
    Some(next)
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh maze with a full pellet field, ready for the first key.
    pub fn new() -> Self {
        let mut pellets = vec![false; GRID * GRID];
        for y in 0..GRID {
            for x in 0..GRID {
                let at = Position { x, y };
                pellets[index(at)] = !is_wall(at);
            }
        }
        pellets[index(PACMAN_SPAWN)] = false;
        for spawn in GHOST_SPAWNS {
            pellets[index(spawn)] = false;
        }

        Self {
            pellets,
            pacman: PACMAN_SPAWN,
            direction: Direction::Right,
            ghosts: GHOST_SPAWNS,
            score: 0,
            status: GameStatus::Ready,
        }
    }

    pub fn has_pellet(&self, position: Position) -> bool {
        self.pellets[index(position)]
    }

    pub fn pellets_remaining(&self) -> usize {
        self.pellets.iter().filter(|p| **p).count()
    }

    /// Points the direction Pac-Man moves on the next tick; the first arrow
    /// key also starts a ready game.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        if self.status == GameStatus::Ready {
            self.status = GameStatus::Playing;
        }
    }

    /// Advances the world one cell: Pac-Man first, then the ghosts. No-op
    /// outside the playing state.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        if let Some(next) = step_from(self.pacman, self.direction) {
            self.pacman = next;
            if self.pellets[index(next)] {
                self.pellets[index(next)] = false;
                self.score += PELLET_SCORE;
            }
        }
        if self.caught() {
            self.status = GameStatus::GameOver;
            return;
        }

        let target = self.pacman;
        for ghost in self.ghosts.iter_mut() {
            *ghost = chase_step(*ghost, target);
        }
        if self.caught() {
            self.status = GameStatus::GameOver;
            return;
        }

        if self.pellets_remaining() == 0 {
            self.status = GameStatus::Won;
        }
    }

    fn caught(&self) -> bool {
        self.ghosts.contains(&self.pacman)
    }

    #[cfg(test)]
    pub(crate) fn clear_pellets(&mut self) {
        self.pellets.iter_mut().for_each(|p| *p = false);
    }
}

/// Greedy chase: the neighboring corridor cell closest to the target.
fn chase_step(ghost: Position, target: Position) -> Position {
    Direction::ALL
        .iter()
        .filter_map(|direction| step_from(ghost, *direction))
        .min_by_key(|next| next.distance(target))
        .unwrap_or(ghost)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn maze_has_solid_border_and_pillar_grid() {
        for at in 0..GRID {
            assert!(is_wall(Position { x: at, y: 0 }));
            assert!(is_wall(Position { x: at, y: GRID - 1 }));
            assert!(is_wall(Position { x: 0, y: at }));
            assert!(is_wall(Position { x: GRID - 1, y: at }));
        }
        assert!(is_wall(Position { x: 2, y: 2 }));
        assert!(!is_wall(Position { x: 1, y: 1 }));
        assert!(!is_wall(Position { x: 2, y: 1 }));
    }

    #[test]
    fn fresh_game_leaves_spawn_cells_empty() {
        let game = GameState::new();
        assert_eq!(game.status, GameStatus::Ready);
        assert!(!game.has_pellet(game.pacman));
        for ghost in game.ghosts {
            assert!(!game.has_pellet(ghost));
        }
        // 441 cells minus 80 border walls, 81 pillars, 3 spawns.
        assert_eq!(game.pellets_remaining(), 277);
    }

    #[test]
    fn first_arrow_key_starts_the_game() {
        let mut game = GameState::new();
        game.tick();
        assert_eq!(game.pacman, Position { x: 1, y: 1 });

        game.set_direction(Direction::Right);
        assert_eq!(game.status, GameStatus::Playing);
        game.tick();
        assert_eq!(game.pacman, Position { x: 2, y: 1 });
    }

    #[test]
    fn eating_a_pellet_scores_and_consumes_it() {
        let mut game = GameState::new();
        game.set_direction(Direction::Right);
        game.tick();
        assert_eq!(game.score, PELLET_SCORE);
        assert!(!game.has_pellet(Position { x: 2, y: 1 }));

        // Walking back over the eaten cell scores nothing.
        game.set_direction(Direction::Left);
        game.tick();
        assert_eq!(game.score, PELLET_SCORE);
    }

    #[test]
    fn walls_block_movement() {
        let mut game = GameState::new();
        game.set_direction(Direction::Up);
        game.tick();
        // Border wall above the spawn; Pac-Man stays put.
        assert_eq!(game.pacman, Position { x: 1, y: 1 });
        assert_eq!(game.score, 0);
    }

    #[test]
    fn ghosts_close_in_on_pacman() {
        let mut game = GameState::new();
        let before: Vec<usize> = game
            .ghosts
            .iter()
            .map(|g| g.distance(game.pacman))
            .collect();
        game.set_direction(Direction::Right);
        game.tick();
        for (ghost, was) in game.ghosts.iter().zip(before) {
            assert!(ghost.distance(game.pacman) <= was + 1);
        }
    }

    #[test]
    fn touching_a_ghost_ends_the_game() {
        let mut game = GameState::new();
        game.set_direction(Direction::Right);
        game.ghosts[0] = Position { x: 3, y: 1 };
        game.tick();
        // Ghost steps from (3,1) toward Pac-Man at (2,1).
        assert_eq!(game.status, GameStatus::GameOver);
    }

    #[test]
    fn clearing_every_pellet_wins() {
        let mut game = GameState::new();
        game.set_direction(Direction::Right);
        game.clear_pellets();
        // Keep the ghosts out of reach for the deciding tick.
        game.ghosts = [Position { x: 19, y: 19 }, Position { x: 17, y: 19 }];
        game.tick();
        assert_eq!(game.status, GameStatus::Won);
    }

    #[test]
    fn finished_games_ignore_further_ticks() {
        let mut game = GameState::new();
        game.set_direction(Direction::Right);
        game.ghosts[0] = game.pacman;
        game.tick();
        assert_eq!(game.status, GameStatus::GameOver);

        let frozen = game.clone();
        game.tick();
        assert_eq!(game, frozen);
    }
}
