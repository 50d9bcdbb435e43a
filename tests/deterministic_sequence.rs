use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use torus_snake::config::GridSize;
use torus_snake::game::{Game, GameStatus, TickOutcome};
use torus_snake::input::Direction;
use torus_snake::snake::{Position, Snake};

fn grid(width: u16, height: u16) -> GridSize {
    GridSize::try_new(width, height).expect("valid grid")
}

#[test]
fn four_by_four_walk_eats_the_apple_on_the_second_tick() {
    let bounds = grid(4, 4);
    let mut game = Game::from_parts(
        bounds,
        Snake::new(Position::new(0, 0)),
        Some(Position::new(2, 0)),
        Some(Direction::Right),
        StdRng::seed_from_u64(42),
    )
    .expect("valid game");

    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(game.snake().head(), Position::new(1, 0));
    assert_eq!(game.snake().len(), 1);
    assert_eq!(game.score(), 0);

    assert_eq!(game.tick(), TickOutcome::Ate);
    assert_eq!(game.snake().head(), Position::new(2, 0));
    assert_eq!(game.snake().len(), 2);
    assert_eq!(game.score(), 1);

    let apple = game.apple().expect("apple respawned");
    assert_ne!(apple, Position::new(1, 0));
    assert_ne!(apple, Position::new(2, 0));
    assert!(apple.is_within_bounds(bounds));
}

#[test]
fn wrap_around_row_then_collision_and_reset() {
    let bounds = grid(4, 3);
    let mut game = Game::from_parts(
        bounds,
        Snake::new(Position::new(3, 1)),
        Some(Position::new(0, 1)),
        Some(Direction::Right),
        StdRng::seed_from_u64(7),
    )
    .expect("valid game");

    // Right edge wraps onto the apple at the left edge.
    assert_eq!(game.tick(), TickOutcome::Ate);
    assert_eq!(game.snake().head(), Position::new(0, 1));
    assert_eq!(game.snake().len(), 2);

    // Reversing into the neck is refused.
    assert!(!game.set_direction(Direction::Left));
    assert_eq!(game.pending_direction(), Some(Direction::Right));

    game.reset();
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.snake().len(), 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.tick(), TickOutcome::Idle);
}

#[test]
fn random_play_keeps_engine_invariants() {
    let directions = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    for seed in 0..20 {
        let bounds = grid(5, 4);
        let mut game = Game::with_seed(bounds, seed).expect("valid grid");
        let mut steering = StdRng::seed_from_u64(seed + 1000);
        let mut previous_score = game.score();

        for _ in 0..400 {
            if game.status().is_terminal() {
                break;
            }

            let direction = directions[steering.gen_range(0..directions.len())];
            game.set_direction(direction);

            let length_before = game.snake().len();
            let apple_before = game.apple();
            let outcome = game.tick();
            let length_after = game.snake().len();

            match outcome {
                TickOutcome::Ate | TickOutcome::Won => {
                    assert_eq!(length_after, length_before + 1);
                    assert_eq!(Some(game.snake().head()), apple_before);
                }
                TickOutcome::Moved | TickOutcome::Collided | TickOutcome::Idle => {
                    assert_eq!(length_after, length_before);
                }
            }

            assert_eq!(game.score() as usize, length_after - 1);
            assert!(game.score() >= previous_score);
            previous_score = game.score();

            if let Some(apple) = game.apple() {
                assert!(!game.snake().occupies(apple));
            }
            assert!(
                game.snake()
                    .segments()
                    .all(|segment| segment.is_within_bounds(bounds))
            );
        }
    }
}

#[test]
fn tiny_board_is_played_to_victory() {
    let bounds = grid(3, 1);
    let mut game = Game::from_parts(
        bounds,
        Snake::new(Position::new(0, 0)),
        Some(Position::new(1, 0)),
        Some(Direction::Right),
        StdRng::seed_from_u64(3),
    )
    .expect("valid game");

    assert_eq!(game.tick(), TickOutcome::Ate);
    // The only free cell left is (2, 0), straight ahead.
    assert_eq!(game.apple(), Some(Position::new(2, 0)));

    assert_eq!(game.tick(), TickOutcome::Won);
    assert_eq!(game.status(), GameStatus::Victory);
    assert_eq!(game.apple(), None);
    assert_eq!(game.score(), 2);
    assert!(game.render_state().victory);
}
