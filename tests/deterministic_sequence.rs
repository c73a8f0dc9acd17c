use snake::config::Rules;
use snake::game::{DeathReason, GameState, GameStatus, TickOutcome};
use snake::input::{Direction, GameInput};
use snake::snake::{Cell, Snake};

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = GameState::new_with_seed(Rules::default(), 42);
    assert!(state.apply_input(GameInput::Start));

    state.snake = Snake::from_segments(vec![Cell::new(17, 1), Cell::new(16, 1)]);
    state.food = Some(Cell::new(18, 1));

    assert_eq!(state.tick(), TickOutcome::Continue);
    assert_eq!(state.score, 10);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.head(), Cell::new(18, 1));
    let relocated = state.food.expect("board has room");
    assert!(!state.snake.occupies(relocated));
    state.food = Some(Cell::new(0, 19));

    state.apply_input(GameInput::Direction(Direction::Up));
    assert_eq!(state.tick(), TickOutcome::Continue);
    assert_eq!(state.snake.head(), Cell::new(18, 0));
    assert_eq!(state.snake.len(), 3);

    assert_eq!(
        state.tick(),
        TickOutcome::GameOver(DeathReason::WallCollision)
    );
    assert_eq!(state.status, GameStatus::Ended);
    assert_eq!(state.snake.head(), Cell::new(18, 0));

    // Directions are ignored once the game is over; restart resets everything.
    assert!(!state.apply_input(GameInput::Direction(Direction::Left)));
    assert!(state.apply_input(GameInput::Restart));
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.head(), Cell::new(10, 10));
}

#[test]
fn same_seed_replays_the_same_game() {
    let play = |seed: u64| {
        let mut state = GameState::new_with_seed(Rules::default(), seed);
        state.start();
        let mut foods = vec![state.food];
        for _ in 0..5 {
            let food = state.food.expect("board has room");
            let (start, direction) = if food.x > 0 {
                (Cell::new(food.x - 1, food.y), Direction::Right)
            } else {
                (Cell::new(food.x + 1, food.y), Direction::Left)
            };
            state.snake = Snake::new(start);
            state.direction = direction;
            state.pending_direction = direction;
            assert_eq!(state.tick(), TickOutcome::Continue);
            foods.push(state.food);
        }
        foods
    };

    assert_eq!(play(7), play(7));
}
