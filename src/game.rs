use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::apple;
use crate::config::GridSize;
use crate::error::ConfigError;
use crate::input::{Direction, direction_change_is_valid};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
    /// The snake covers every cell; no apple can be placed.
    Victory,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// What a single call to [`Game::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Nothing happened: the game is over or no direction was chosen yet.
    Idle,
    Moved,
    Ate,
    Collided,
    Won,
}

/// Read-only projection handed to the presentation layer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RenderState {
    pub grid: GridSize,
    /// Segments behind the head, tail first.
    pub body: Vec<Position>,
    pub head: Position,
    pub apple: Option<Position>,
    pub game_over: bool,
    pub victory: bool,
    pub awaiting_input: bool,
    pub score: u32,
    pub length: usize,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    grid: GridSize,
    snake: Snake,
    apple: Option<Position>,
    direction: Option<Direction>,
    pending_direction: Option<Direction>,
    status: GameStatus,
    rng: R,
}

impl Game<StdRng> {
    /// Creates a deterministic game for tests and reproducible simulations.
    pub fn with_seed(grid: GridSize, seed: u64) -> Result<Self, ConfigError> {
        Self::new(grid, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Starts a game with a one-cell snake on a random cell.
    pub fn new(grid: GridSize, mut rng: R) -> Result<Self, ConfigError> {
        grid.validate()?;

        let head = apple::random_cell(&mut rng, grid);
        let mut game = Self {
            grid,
            snake: Snake::new(head),
            apple: None,
            direction: None,
            pending_direction: None,
            status: GameStatus::Playing,
            rng,
        };
        game.place_apple();

        Ok(game)
    }

    /// Builds a game from explicit state.
    ///
    /// `direction` becomes both the committed and the pending direction.
    /// With no apple given, one is placed at random.
    pub fn from_parts(
        grid: GridSize,
        snake: Snake,
        apple: Option<Position>,
        direction: Option<Direction>,
        rng: R,
    ) -> Result<Self, ConfigError> {
        grid.validate()?;

        if let Some(segment) = snake.segments().find(|segment| !segment.is_within_bounds(grid)) {
            return Err(ConfigError::OutOfBounds {
                position: *segment,
                grid,
            });
        }

        if let Some(apple) = apple {
            if !apple.is_within_bounds(grid) {
                return Err(ConfigError::OutOfBounds {
                    position: apple,
                    grid,
                });
            }
            if snake.occupies(apple) {
                return Err(ConfigError::AppleOnSnake(apple));
            }
        }

        let mut game = Self {
            grid,
            snake,
            apple,
            direction,
            pending_direction: direction,
            status: GameStatus::Playing,
            rng,
        };
        if game.apple.is_none() {
            game.place_apple();
        }

        Ok(game)
    }

    /// Queues `direction` for the next tick.
    ///
    /// Ignored after the game has ended and when it would reverse the snake
    /// onto itself. Returns whether the direction was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.pending_direction = Some(direction);
        true
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status.is_terminal() {
            return TickOutcome::Idle;
        }
        let Some(direction) = self.pending_direction else {
            return TickOutcome::Idle;
        };

        self.direction = Some(direction);
        let next = self.snake.head().step(direction, self.grid);
        let grows = self.apple == Some(next);

        if self.snake.would_collide(next, grows) {
            self.status = GameStatus::GameOver;
            log::debug!(
                "snake hit itself at ({}, {}) with score {}",
                next.x,
                next.y,
                self.score()
            );
            return TickOutcome::Collided;
        }

        self.snake.advance(next, grows);
        if !grows {
            return TickOutcome::Moved;
        }

        if self.place_apple() {
            TickOutcome::Ate
        } else {
            TickOutcome::Won
        }
    }

    /// Puts a fresh apple on a free cell. Returns false when the board is full,
    /// which ends the game as a win.
    pub fn place_apple(&mut self) -> bool {
        self.apple = apple::spawn_position(&mut self.rng, self.grid, &self.snake);

        match self.apple {
            Some(apple) => {
                log::debug!("apple placed at ({}, {})", apple.x, apple.y);
                true
            }
            None => {
                self.status = GameStatus::Victory;
                log::debug!(
                    "board full at length {}, no apple to place",
                    self.snake.len()
                );
                false
            }
        }
    }

    /// Rebuilds the game from scratch on the same grid.
    ///
    /// Afterwards the game waits for a direction again, which is the cue for
    /// the driver to stop its tick clock.
    pub fn reset(&mut self) {
        let head = apple::random_cell(&mut self.rng, self.grid);
        self.snake = Snake::new(head);
        self.direction = None;
        self.pending_direction = None;
        self.status = GameStatus::Playing;
        self.place_apple();

        log::debug!("game reset, head at ({}, {})", head.x, head.y);
    }

    /// Snapshot of everything the presentation layer draws.
    #[must_use]
    pub fn render_state(&self) -> RenderState {
        RenderState {
            grid: self.grid,
            body: self.snake.body().copied().collect(),
            head: self.snake.head(),
            apple: self.apple,
            game_over: self.status == GameStatus::GameOver,
            victory: self.status == GameStatus::Victory,
            awaiting_input: self.is_awaiting_input(),
            score: self.score(),
            length: self.snake.len(),
        }
    }
}

impl<R> Game<R> {
    /// Snake length minus the head, never negative.
    #[must_use]
    pub fn score(&self) -> u32 {
        u32::try_from(self.snake.len().saturating_sub(1)).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// True while the game is live but no direction has been chosen yet.
    #[must_use]
    pub fn is_awaiting_input(&self) -> bool {
        self.status == GameStatus::Playing && self.pending_direction.is_none()
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn apple(&self) -> Option<Position> {
        self.apple
    }

    /// Direction used by the most recent move.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Direction the next tick will move in.
    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }
}
