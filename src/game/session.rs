//! The game-state machine: difficulty menu, playing and loss screens.
//!
//! A [`GameSession`] owns everything that lives for the whole process (best
//! scores, the chosen difficulty) as well as the current [`Round`]. It only
//! consumes already-decoded [`Intent`]s and tick signals, so it can be
//! driven by any event loop and tested without a terminal.

use std::time::Duration;

use tracing::{debug, info};

use super::{
    action::Intent,
    config::{Difficulty, GameConfig},
    engine::{GameEngine, StepResult},
    menu::{DifficultyMenu, MenuButton},
    scores::BestScores,
    state::{BOARD_HEIGHT, BOARD_WIDTH, Position, Round},
};

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    ChoosingDifficulty,
    Playing,
    Lost,
}

/// What the driver should do after an intent has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub board_width: i32,
    pub board_height: i32,
    pub snake: Vec<Position>,
    pub food: Position,
    pub score: u32,
    pub state: GameState,
    pub difficulty: Difficulty,
    /// Best score for the current difficulty, only set on the loss screen
    pub best_score: Option<u32>,
    /// Menu entries, only set while choosing a difficulty
    pub menu: Option<Vec<MenuButton>>,
}

pub struct GameSession {
    engine: GameEngine,
    state: GameState,
    menu: DifficultyMenu,
    difficulty: Difficulty,
    round: Round,
    scores: BestScores,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }

    pub fn with_engine(mut engine: GameEngine) -> Self {
        let round = engine.reset();
        Self {
            engine,
            state: GameState::ChoosingDifficulty,
            menu: DifficultyMenu::new(),
            difficulty: Difficulty::Easy,
            round,
            scores: BestScores::new(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn menu(&self) -> &DifficultyMenu {
        &self.menu
    }

    pub fn scores(&self) -> &BestScores {
        &self.scores
    }

    /// Simulation rate the driver should tick at for the active difficulty
    pub fn ticks_per_second(&self) -> u32 {
        self.engine
            .config()
            .tick_rates
            .for_difficulty(self.difficulty)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second().max(1)
    }

    /// Feed a batch of queued intents; stops early on quit
    pub fn handle_intents<I>(&mut self, intents: I) -> Control
    where
        I: IntoIterator<Item = Intent>,
    {
        for intent in intents {
            if self.handle_intent(intent) == Control::Quit {
                return Control::Quit;
            }
        }
        Control::Continue
    }

    /// Apply one intent to the current screen. Intents that mean nothing on
    /// the current screen are ignored.
    pub fn handle_intent(&mut self, intent: Intent) -> Control {
        if intent == Intent::Quit {
            info!(state = ?self.state, "quit requested");
            return Control::Quit;
        }

        match self.state {
            GameState::ChoosingDifficulty => match intent {
                Intent::MoveUp => self.menu.select_previous(),
                Intent::MoveDown => self.menu.select_next(),
                Intent::Confirm => {
                    self.difficulty = self.menu.selected_difficulty();
                    info!(difficulty = ?self.difficulty, "difficulty chosen");
                    self.start_round();
                }
                _ => {}
            },
            GameState::Playing => {
                if let Some(direction) = intent.direction() {
                    if !self.round.snake.turn(direction) {
                        debug!(?direction, "reversal ignored");
                    }
                }
            }
            GameState::Lost => match intent {
                Intent::Restart => self.start_round(),
                Intent::ChangeDifficulty => {
                    self.menu.reset();
                    self.state = GameState::ChoosingDifficulty;
                }
                _ => {}
            },
        }

        Control::Continue
    }

    /// Advance the round by one tick. Does nothing outside of play.
    pub fn tick(&mut self) -> Option<StepResult> {
        if self.state != GameState::Playing {
            return None;
        }

        let result = self.engine.step(&mut self.round);
        if result.terminated {
            self.finish_round(&result);
        }
        Some(result)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            snake: self.round.snake.body.clone(),
            food: self.round.food,
            score: self.round.score,
            state: self.state,
            difficulty: self.difficulty,
            best_score: (self.state == GameState::Lost)
                .then(|| self.scores.get(self.difficulty)),
            menu: (self.state == GameState::ChoosingDifficulty).then(|| self.menu.buttons()),
        }
    }

    fn start_round(&mut self) {
        self.round = self.engine.reset();
        self.state = GameState::Playing;
    }

    fn finish_round(&mut self, result: &StepResult) {
        let new_best = self.scores.record(self.difficulty, self.round.score);
        self.state = GameState::Lost;
        info!(
            difficulty = ?self.difficulty,
            score = self.round.score,
            steps = self.round.steps,
            best = self.scores.get(self.difficulty),
            new_best,
            collision = ?result.collision_type,
            board_filled = result.board_filled,
            "round over"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionType, Direction, Snake};

    fn session() -> GameSession {
        GameSession::with_engine(GameEngine::with_seed(GameConfig::default(), 42))
    }

    /// Put the session into play with a hand-built round
    fn playing(snake: Snake, food: Position) -> GameSession {
        let mut session = session();
        session.handle_intent(Intent::Confirm);
        session.round = Round::new(snake, food);
        session
    }

    fn lose(session: &mut GameSession) {
        session.round.snake = Snake::new(Position::new(0, 5), Direction::Left, 1);
        session.tick();
        assert_eq!(session.state(), GameState::Lost);
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        assert_eq!(session.state(), GameState::ChoosingDifficulty);
        assert_eq!(session.menu().selected_index(), 0);
        for difficulty in Difficulty::ALL {
            assert_eq!(session.scores().get(difficulty), 0);
        }
    }

    #[test]
    fn test_menu_confirm_starts_play() {
        let mut session = session();
        session.handle_intent(Intent::MoveDown);
        session.handle_intent(Intent::MoveDown);
        session.handle_intent(Intent::Confirm);

        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_eq!(session.ticks_per_second(), 15);
        assert_eq!(session.round().score, 0);
        assert!(session.round().is_alive);
    }

    #[test]
    fn test_menu_ignores_other_intents() {
        let mut session = session();
        session.handle_intent(Intent::MoveLeft);
        session.handle_intent(Intent::MoveRight);
        session.handle_intent(Intent::Restart);
        session.handle_intent(Intent::ChangeDifficulty);

        assert_eq!(session.state(), GameState::ChoosingDifficulty);
        assert_eq!(session.menu().selected_index(), 0);
    }

    #[test]
    fn test_menu_wraps_from_top() {
        let mut session = session();
        session.handle_intent(Intent::MoveUp);
        assert_eq!(session.menu().selected_index(), 2);
    }

    #[test]
    fn test_no_ticks_outside_play() {
        let mut session = session();
        let before = session.round().clone();
        assert!(session.tick().is_none());
        assert_eq!(session.round(), &before);
    }

    #[test]
    fn test_eating_food_scores_and_grows() {
        let mut session = playing(
            Snake::new(Position::new(5, 5), Direction::Right, 1),
            Position::new(6, 5),
        );

        let result = session.tick().unwrap();

        assert!(result.ate_food);
        let round = session.round();
        assert_eq!(round.snake.head(), Position::new(6, 5));
        assert_eq!(round.snake.len(), 2);
        assert_eq!(round.score, 1);
        assert_ne!(round.food, Position::new(6, 5));
        assert!(!round.snake.contains(round.food));
    }

    #[test]
    fn test_plain_move_drops_tail() {
        let mut session = playing(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(30, 20),
        );

        session.tick();

        assert_eq!(
            session.round().snake.body,
            vec![Position::new(6, 5), Position::new(5, 5), Position::new(4, 5)]
        );
        assert_eq!(session.round().score, 0);
        assert_eq!(session.state(), GameState::Playing);
    }

    #[test]
    fn test_leaving_board_loses() {
        let mut session = playing(
            Snake::new(Position::new(0, 5), Direction::Left, 1),
            Position::new(30, 20),
        );

        let result = session.tick().unwrap();

        assert_eq!(result.collision_type, Some(CollisionType::Wall));
        assert_eq!(session.state(), GameState::Lost);
    }

    #[test]
    fn test_reversal_intent_ignored() {
        let mut session = playing(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(30, 20),
        );

        session.handle_intent(Intent::MoveLeft);
        assert_eq!(session.round().snake.direction, Direction::Right);

        session.handle_intent(Intent::MoveDown);
        assert_eq!(session.round().snake.direction, Direction::Down);
    }

    #[test]
    fn test_playing_ignores_screen_intents() {
        let mut session = playing(
            Snake::new(Position::new(5, 5), Direction::Right, 1),
            Position::new(30, 20),
        );

        session.handle_intent(Intent::Restart);
        session.handle_intent(Intent::ChangeDifficulty);
        session.handle_intent(Intent::Confirm);

        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.round().snake.head(), Position::new(5, 5));
    }

    #[test]
    fn test_loss_records_best_score() {
        let mut session = playing(
            Snake::new(Position::new(5, 5), Direction::Right, 1),
            Position::new(6, 5),
        );
        session.tick();
        lose(&mut session);

        assert_eq!(session.scores().get(Difficulty::Easy), 1);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.state, GameState::Lost);
        assert_eq!(snapshot.best_score, Some(1));
        assert!(snapshot.menu.is_none());
    }

    #[test]
    fn test_filling_board_ends_round_and_records_score() {
        let mut body = vec![Position::new(1, 0)];
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let pos = Position::new(x, y);
                if pos != Position::new(0, 0) && pos != Position::new(1, 0) {
                    body.push(pos);
                }
            }
        }
        let mut session = playing(
            Snake {
                body,
                direction: Direction::Left,
            },
            Position::new(0, 0),
        );
        session.round.score = 40;

        let result = session.tick().unwrap();

        assert!(result.board_filled);
        assert_eq!(session.state(), GameState::Lost);
        assert_eq!(session.scores().get(Difficulty::Easy), 41);
        assert!(session.tick().is_none());
    }

    #[test]
    fn test_lower_score_keeps_best() {
        let mut session = playing(
            Snake::new(Position::new(5, 5), Direction::Right, 1),
            Position::new(6, 5),
        );
        session.tick();
        lose(&mut session);

        session.handle_intent(Intent::Restart);
        lose(&mut session);

        assert_eq!(session.round().score, 0);
        assert_eq!(session.scores().get(Difficulty::Easy), 1);
    }

    #[test]
    fn test_restart_keeps_difficulty() {
        let mut session = session();
        session.handle_intent(Intent::MoveDown);
        session.handle_intent(Intent::Confirm);
        lose(&mut session);

        session.handle_intent(Intent::Restart);

        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.difficulty(), Difficulty::Medium);
        assert_eq!(session.round().snake.body, vec![Position::new(20, 20)]);
        assert_eq!(session.round().score, 0);
    }

    #[test]
    fn test_change_difficulty_returns_to_menu() {
        let mut session = playing(
            Snake::new(Position::new(5, 5), Direction::Right, 1),
            Position::new(6, 5),
        );
        session.tick();
        lose(&mut session);

        session.handle_intent(Intent::ChangeDifficulty);

        assert_eq!(session.state(), GameState::ChoosingDifficulty);
        assert_eq!(session.menu().selected_index(), 0);
        assert_eq!(session.scores().get(Difficulty::Easy), 1);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.best_score, None);
        let menu = snapshot.menu.unwrap();
        assert_eq!(menu.len(), 3);
        assert!(menu[0].selected);
    }

    #[test]
    fn test_lost_ignores_moves() {
        let mut session = playing(
            Snake::new(Position::new(5, 5), Direction::Right, 1),
            Position::new(30, 20),
        );
        lose(&mut session);

        session.handle_intent(Intent::MoveUp);
        session.handle_intent(Intent::Confirm);
        assert_eq!(session.state(), GameState::Lost);
    }

    #[test]
    fn test_quit_from_any_state() {
        let mut session = session();
        assert_eq!(session.handle_intent(Intent::Quit), Control::Quit);

        session.handle_intent(Intent::Confirm);
        assert_eq!(session.handle_intent(Intent::Quit), Control::Quit);

        lose(&mut session);
        assert_eq!(session.handle_intent(Intent::Quit), Control::Quit);
    }

    #[test]
    fn test_handle_intents_stops_at_quit() {
        let mut session = session();
        let control = session.handle_intents([Intent::Quit, Intent::Confirm]);

        assert_eq!(control, Control::Quit);
        assert_eq!(session.state(), GameState::ChoosingDifficulty);

        let control = session.handle_intents([Intent::MoveDown, Intent::Confirm]);
        assert_eq!(control, Control::Continue);
        assert_eq!(session.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_tick_interval_follows_difficulty() {
        let mut session = session();
        assert_eq!(session.tick_interval(), Duration::from_millis(200));

        session.handle_intent(Intent::MoveDown);
        session.handle_intent(Intent::Confirm);
        assert_eq!(session.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_snapshot_while_playing() {
        let session = playing(
            Snake::new(Position::new(5, 5), Direction::Right, 2),
            Position::new(30, 20),
        );

        let snapshot = session.snapshot();
        assert_eq!(snapshot.board_width, 36);
        assert_eq!(snapshot.board_height, 24);
        assert_eq!(snapshot.snake, vec![Position::new(5, 5), Position::new(4, 5)]);
        assert_eq!(snapshot.food, Position::new(30, 20));
        assert_eq!(snapshot.state, GameState::Playing);
        assert_eq!(snapshot.best_score, None);
        assert!(snapshot.menu.is_none());
    }
}
