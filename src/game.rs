use log::{debug, info};

use crate::config::{Rules, START_SEGMENTS};
use crate::food::FoodPlacer;
use crate::input::{direction_change_is_valid, Direction, GameInput};
use crate::snake::{Cell, Snake};

/// Current high-level lifecycle state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Initialized, waiting for the first start.
    Idle,
    Running,
    Ended,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell and no food can be placed.
    BoardFull,
}

/// Result of advancing the game by one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    Continue,
    GameOver(DeathReason),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    /// `None` only after the snake has filled the board.
    pub food: Option<Cell>,
    pub direction: Direction,
    pub pending_direction: Direction,
    pub score: u32,
    pub status: GameStatus,
    pub tick_count: u64,
    pub death_reason: Option<DeathReason>,
    rules: Rules,
    placer: FoodPlacer,
}

impl GameState {
    /// Creates an idle, fully initialized game with an entropy-seeded placer.
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        Self::with_placer(rules, FoodPlacer::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(rules: Rules, seed: u64) -> Self {
        Self::with_placer(rules, FoodPlacer::with_seed(seed))
    }

    fn with_placer(rules: Rules, placer: FoodPlacer) -> Self {
        let mut state = Self {
            snake: Snake::from_segments(START_SEGMENTS.to_vec()),
            food: None,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            status: GameStatus::Idle,
            tick_count: 0,
            death_reason: None,
            rules,
            placer,
        };
        state.reset();
        state
    }

    #[must_use]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Start is offered whenever no game is in progress.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.status != GameStatus::Running
    }

    /// Restart is only offered once a game has ended.
    #[must_use]
    pub fn can_restart(&self) -> bool {
        self.status == GameStatus::Ended
    }

    /// Begins a fresh game. No-op while a game is running.
    ///
    /// Returns true when a new game was started.
    pub fn start(&mut self) -> bool {
        if !self.can_start() {
            return false;
        }

        self.reset();
        self.status = GameStatus::Running;
        info!("game started on a {0}x{0} grid", self.rules.grid.size());
        true
    }

    /// Begins a fresh game after a game over. No-op in any other status.
    pub fn restart(&mut self) -> bool {
        if !self.can_restart() {
            return false;
        }

        self.start()
    }

    /// Buffers a direction for the next tick.
    ///
    /// Requests that reverse the current direction are dropped; the check is
    /// against the committed direction, not the pending one.
    pub fn set_pending_direction(&mut self, requested: Direction) -> bool {
        if !direction_change_is_valid(self.direction, requested) {
            debug!("ignored reversal {requested:?} while moving {:?}", self.direction);
            return false;
        }

        self.pending_direction = requested;
        true
    }

    /// Applies one external input event. `Quit` is left to the caller.
    pub fn apply_input(&mut self, input: GameInput) -> bool {
        match input {
            GameInput::Direction(direction) => {
                self.is_running() && self.set_pending_direction(direction)
            }
            GameInput::Start => self.start(),
            GameInput::Restart => self.restart(),
            GameInput::Quit => false,
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status == GameStatus::Ended {
            if let Some(reason) = self.death_reason {
                return TickOutcome::GameOver(reason);
            }
        }

        self.tick_count += 1;
        self.direction = self.pending_direction;

        let new_head = self.snake.head().step(self.direction);
        if !self.rules.grid.is_in_bounds(new_head) {
            return self.end(DeathReason::WallCollision);
        }

        // The tail still counts: the body is checked before it moves.
        if self.snake.occupies(new_head) {
            return self.end(DeathReason::SelfCollision);
        }

        self.snake.push_head(new_head);

        if self.food == Some(new_head) {
            self.score = self.score.saturating_add(self.rules.food_reward);
            debug!("food eaten at {new_head:?}, score {}", self.score);

            self.food = self.placer.place(self.rules.grid, &self.snake);
            if self.food.is_none() {
                return self.end(DeathReason::BoardFull);
            }
        } else {
            self.snake.drop_tail();
        }

        TickOutcome::Continue
    }

    fn end(&mut self, reason: DeathReason) -> TickOutcome {
        self.status = GameStatus::Ended;
        self.death_reason = Some(reason);
        info!(
            "game over ({reason:?}) after {} ticks, score {}",
            self.tick_count, self.score
        );
        TickOutcome::GameOver(reason)
    }

    fn reset(&mut self) {
        self.snake = Snake::from_segments(START_SEGMENTS.to_vec());
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.tick_count = 0;
        self.death_reason = None;
        self.food = self.placer.place(self.rules.grid, &self.snake);
    }
}
