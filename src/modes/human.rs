use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::VecDeque;
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};
use tracing::{info, warn};

use crate::game::{Control, GameConfig, GameSession, GameState, Intent};
use crate::input::InputHandler;
use crate::render::Renderer;

pub struct HumanMode {
    session: GameSession,
    renderer: Renderer,
    input_handler: InputHandler,
    pending: VecDeque<Intent>,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            session: GameSession::new(config),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            pending: VecDeque::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!("terminal ready");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = make_tick_timer(self.session.tick_interval());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => warn!(?err, "failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.session.state() == GameState::Playing {
                        self.session.tick();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    let snapshot = self.session.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            let round_started = self.apply_pending();

            if self.should_quit {
                break;
            }

            // Every round gets a full period before its first move
            if round_started {
                tick_timer = make_tick_timer(self.session.tick_interval());
                info!(tick_rate = self.session.ticks_per_second(), "round started");
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if let Some(intent) = self.input_handler.handle_key_event(key) {
                self.pending.push_back(intent);
            }
        }
    }

    /// Hand queued intents to the session. Returns true if they started a
    /// new round.
    fn apply_pending(&mut self) -> bool {
        let was_playing = self.session.state() == GameState::Playing;
        if self.session.handle_intents(self.pending.drain(..)) == Control::Quit {
            self.should_quit = true;
        }
        !was_playing && self.session.state() == GameState::Playing
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Interval for game ticks, first firing one period from now. A slow frame
/// delays the next tick instead of bursting several to catch up.
fn make_tick_timer(period: Duration) -> Interval {
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}
