use super::{
    config::GameConfig,
    state::{BOARD_HEIGHT, BOARD_WIDTH, CollisionType, Position, Round, Snake},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the round has ended
    pub terminated: bool,
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// The snake covers every cell, which ends the round with no collision
    pub board_filled: bool,
}

/// The game engine that advances a round by one tick
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh round
    pub fn reset(&mut self) -> Round {
        let snake = Snake::new(
            self.config.start,
            self.config.start_direction,
            self.config.initial_snake_length,
        );

        let food = self.spawn_food_avoid_snake(&snake);

        Round::new(snake, food)
    }

    /// Execute one step of the game
    ///
    /// Direction changes are not part of a step; they are applied to the
    /// snake as intents arrive.
    pub fn step(&mut self, round: &mut Round) -> StepResult {
        if !round.is_alive {
            return StepResult {
                terminated: true,
                ate_food: false,
                collision_type: None,
                board_filled: false,
            };
        }

        let new_head = round.snake.head().moved_in_direction(round.snake.direction);

        if let Some(collision_type) = self.check_collision(&round.snake, new_head) {
            round.is_alive = false;
            round.steps += 1;

            return StepResult {
                terminated: true,
                ate_food: false,
                collision_type: Some(collision_type),
                board_filled: false,
            };
        }

        let ate_food = new_head == round.food;

        // Move snake (grow if ate food)
        round.snake.move_snake(ate_food);

        round.steps += 1;

        if ate_food {
            round.score += 1;

            // No free cell left to place food on
            if round.snake.len() >= (BOARD_WIDTH * BOARD_HEIGHT) as usize {
                round.is_alive = false;
                return StepResult {
                    terminated: true,
                    ate_food,
                    collision_type: None,
                    board_filled: true,
                };
            }

            round.food = self.spawn_food_avoid_snake(&round.snake);
        }

        StepResult {
            terminated: false,
            ate_food,
            collision_type: None,
            board_filled: false,
        }
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, snake: &Snake, pos: Position) -> Option<CollisionType> {
        if !pos.is_in_bounds() {
            return Some(CollisionType::Wall);
        }

        if snake.occupies_after_move(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Spawn food at a random empty position
    fn spawn_food_avoid_snake(&mut self, snake: &Snake) -> Position {
        loop {
            let x = self.rng.gen_range(0..BOARD_WIDTH);
            let y = self.rng.gen_range(0..BOARD_HEIGHT);
            let pos = Position::new(x, y);

            if !snake.contains(pos) {
                return pos;
            }
        }
    }
}
