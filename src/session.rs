use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::TickRate;
use crate::game::{Game, TickOutcome};
use crate::input::GameInput;

/// What handling one input did to the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionEvent {
    /// The input changed nothing (rejected turn, speed already at a limit).
    Ignored,
    DirectionQueued,
    /// First accepted direction after a start or reset; the clock now runs.
    Started,
    Reset,
    SpeedChanged(TickRate),
    Quit,
}

/// Drives a [`Game`] from discrete inputs and a fixed-rate clock.
///
/// The clock is stopped until the first accepted direction, stops again on
/// reset and stops by itself once the game reaches a terminal state.
#[derive(Debug, Clone)]
pub struct Session<R> {
    game: Game<R>,
    tick_rate: TickRate,
    running: bool,
    last_tick: Option<Instant>,
    tick_count: u64,
}

impl<R: Rng> Session<R> {
    #[must_use]
    pub fn new(game: Game<R>, tick_rate: TickRate) -> Self {
        Self {
            game,
            tick_rate,
            running: false,
            last_tick: None,
            tick_count: 0,
        }
    }

    /// Applies one input event. `now` anchors the clock when it starts.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) -> SessionEvent {
        match input {
            GameInput::Direction(direction) => {
                if !self.game.set_direction(direction) {
                    return SessionEvent::Ignored;
                }
                if self.running {
                    return SessionEvent::DirectionQueued;
                }

                self.running = true;
                self.last_tick = Some(now);
                log::info!("clock started at {} ticks/s", self.tick_rate.get());
                SessionEvent::Started
            }
            GameInput::Reset => {
                self.game.reset();
                self.stop_clock();
                self.tick_count = 0;
                log::info!("session reset");
                SessionEvent::Reset
            }
            GameInput::SpeedUp => self.change_speed(self.tick_rate.faster()),
            GameInput::SpeedDown => self.change_speed(self.tick_rate.slower()),
            GameInput::Quit => SessionEvent::Quit,
        }
    }

    /// Ticks the game once if the clock runs and a full interval has passed.
    pub fn tick_if_due(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.running {
            return None;
        }

        let last_tick = self.last_tick.unwrap_or(now);
        if now.saturating_duration_since(last_tick) < self.tick_interval() {
            return None;
        }

        self.last_tick = Some(now);
        self.tick_count += 1;
        let outcome = self.game.tick();

        match outcome {
            TickOutcome::Collided => {
                log::info!(
                    "game over after {} ticks, score {}",
                    self.tick_count,
                    self.game.score()
                );
                self.stop_clock();
            }
            TickOutcome::Won => {
                log::info!(
                    "board filled after {} ticks, score {}",
                    self.tick_count,
                    self.game.score()
                );
                self.stop_clock();
            }
            TickOutcome::Idle if self.game.status().is_terminal() => self.stop_clock(),
            _ => {}
        }

        Some(outcome)
    }

    /// Time left until the next tick, or `None` while the clock is stopped.
    #[must_use]
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        let elapsed = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        Some(self.tick_interval().saturating_sub(elapsed))
    }

    fn change_speed(&mut self, tick_rate: TickRate) -> SessionEvent {
        if tick_rate == self.tick_rate {
            return SessionEvent::Ignored;
        }

        self.tick_rate = tick_rate;
        log::info!("tick rate set to {} ticks/s", tick_rate.get());
        SessionEvent::SpeedChanged(tick_rate)
    }

    fn stop_clock(&mut self) {
        self.running = false;
        self.last_tick = None;
    }
}

impl<R> Session<R> {
    #[must_use]
    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    #[must_use]
    pub fn tick_rate(&self) -> TickRate {
        self.tick_rate
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_rate.interval()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{Session, SessionEvent};
    use crate::config::{GridSize, MAX_TICK_RATE, TickRate};
    use crate::game::{Game, TickOutcome};
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    fn rate(ticks_per_second: u32) -> TickRate {
        TickRate::try_new(ticks_per_second).expect("valid rate")
    }

    fn straight_session(direction: Option<Direction>) -> Session<StdRng> {
        let grid = GridSize::try_new(8, 3).expect("valid grid");
        let snake = Snake::from_segments(
            vec![Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
            grid,
        )
        .expect("valid snake");
        let game = Game::from_parts(
            grid,
            snake,
            Some(Position::new(6, 0)),
            direction,
            StdRng::seed_from_u64(9),
        )
        .expect("valid game");

        Session::new(game, rate(5))
    }

    #[test]
    fn clock_starts_on_first_direction() {
        let start = Instant::now();
        let mut session = Session::new(
            Game::with_seed(GridSize::default(), 1).expect("valid grid"),
            rate(5),
        );

        assert!(!session.is_running());
        assert_eq!(session.tick_if_due(start + Duration::from_secs(5)), None);

        let event = session.handle_input(GameInput::Direction(Direction::Left), start);
        assert_eq!(event, SessionEvent::Started);
        assert!(session.is_running());

        let event = session.handle_input(GameInput::Direction(Direction::Up), start);
        assert_eq!(event, SessionEvent::DirectionQueued);
    }

    #[test]
    fn ticks_only_after_a_full_interval() {
        let start = Instant::now();
        let mut session = straight_session(Some(Direction::Right));
        session.handle_input(GameInput::Direction(Direction::Down), start);

        assert_eq!(session.tick_if_due(start + Duration::from_millis(150)), None);
        assert_eq!(
            session.tick_if_due(start + Duration::from_millis(200)),
            Some(TickOutcome::Moved)
        );
        assert_eq!(session.tick_if_due(start + Duration::from_millis(250)), None);
        assert_eq!(session.tick_count(), 1);
        assert_eq!(
            session.time_until_tick(start + Duration::from_millis(250)),
            Some(Duration::from_millis(150))
        );
    }

    #[test]
    fn reset_stops_the_clock() {
        let start = Instant::now();
        let mut session = straight_session(Some(Direction::Right));
        session.handle_input(GameInput::Direction(Direction::Up), start);
        session.tick_if_due(start + Duration::from_millis(200));

        assert_eq!(
            session.handle_input(GameInput::Reset, start),
            SessionEvent::Reset
        );

        assert!(!session.is_running());
        assert_eq!(session.tick_count(), 0);
        assert!(session.game().is_awaiting_input());
        assert_eq!(session.game().snake().len(), 1);
        assert_eq!(session.time_until_tick(start), None);
    }

    #[test]
    fn game_over_stops_the_clock() {
        let start = Instant::now();
        let mut session = straight_session(None);
        session.handle_input(GameInput::Direction(Direction::Left), start);

        assert_eq!(
            session.tick_if_due(start + Duration::from_millis(200)),
            Some(TickOutcome::Collided)
        );
        assert!(!session.is_running());
        assert_eq!(session.tick_if_due(start + Duration::from_secs(10)), None);

        // Directions are ignored until reset.
        assert_eq!(
            session.handle_input(GameInput::Direction(Direction::Up), start),
            SessionEvent::Ignored
        );
    }

    #[test]
    fn rejected_reverse_does_not_start_the_clock() {
        let start = Instant::now();
        let mut session = straight_session(Some(Direction::Right));

        assert_eq!(
            session.handle_input(GameInput::Direction(Direction::Left), start),
            SessionEvent::Ignored
        );
        assert!(!session.is_running());
    }

    #[test]
    fn speed_changes_are_clamped() {
        let start = Instant::now();
        let mut session = Session::new(
            Game::with_seed(GridSize::default(), 2).expect("valid grid"),
            rate(1),
        );

        assert_eq!(
            session.handle_input(GameInput::SpeedDown, start),
            SessionEvent::Ignored
        );
        assert_eq!(session.tick_rate().get(), 1);

        assert_eq!(
            session.handle_input(GameInput::SpeedUp, start),
            SessionEvent::SpeedChanged(rate(2))
        );
        assert_eq!(session.tick_interval(), Duration::from_millis(500));

        let mut session = Session::new(
            Game::with_seed(GridSize::default(), 2).expect("valid grid"),
            rate(MAX_TICK_RATE),
        );
        assert_eq!(
            session.handle_input(GameInput::SpeedUp, start),
            SessionEvent::Ignored
        );
    }

    #[test]
    fn quit_is_reported_without_side_effects() {
        let start = Instant::now();
        let mut session = straight_session(Some(Direction::Right));
        let before = session.game().render_state();

        assert_eq!(session.handle_input(GameInput::Quit, start), SessionEvent::Quit);
        assert_eq!(session.game().render_state(), before);
    }
}
