use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, MenuButton, Position, Snapshot};

/// Draws a [`Snapshot`]; holds no game state of its own
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot), chunks[0]);

        let body = match snapshot.state {
            GameState::ChoosingDifficulty => self.render_menu(snapshot),
            GameState::Playing => self.render_grid(snapshot),
            GameState::Lost => self.render_game_over(snapshot),
        };
        frame.render_widget(body, chunks[1]);

        frame.render_widget(self.render_controls(snapshot.state), chunks[2]);
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let head = snapshot.snake.first().copied();
        let mut lines = Vec::new();

        for y in 0..snapshot.board_height {
            let mut spans = Vec::new();

            for x in 0..snapshot.board_width {
                let pos = Position::new(x, y);

                let cell = if Some(pos) == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snapshot.snake.contains(&pos) {
                    Span::styled("■ ", Style::default().fg(Color::Green))
                } else if pos == snapshot.food {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_menu(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "CHOOSE YOUR DIFFICULTY LEVEL FOR YOUR GAME:",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for button in snapshot.menu.iter().flatten() {
            text.push(self.render_button(button));
            text.push(Line::from(""));
        }

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(" Snake "),
        )
    }

    fn render_button(&self, button: &MenuButton) -> Line<'_> {
        let background = if button.selected {
            Color::Red
        } else {
            Color::DarkGray
        };

        Line::from(Span::styled(
            format!("{:^20}", button.label),
            Style::default().fg(Color::White).bg(background),
        ))
    }

    fn render_stats(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        // Nothing has been picked yet while the menu is up
        if snapshot.state != GameState::ChoosingDifficulty {
            spans.push(Span::raw("    "));
            spans.push(Span::styled("Difficulty: ", Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(
                snapshot.difficulty.label(),
                Style::default().fg(Color::White),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_game_over(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let best = snapshot.best_score.unwrap_or(snapshot.score);
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "YOU LOST!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Your best score is: ", Style::default().fg(Color::White)),
                Span::styled(
                    best.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press SPACE to play again.",
                Style::default().fg(Color::Red),
            )),
            Line::from(Span::styled(
                "Press ESC to change difficulty.",
                Style::default().fg(Color::Red),
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, state: GameState) -> Paragraph<'_> {
        let hint = match state {
            GameState::ChoosingDifficulty => vec![
                Span::styled("↑↓", Style::default().fg(Color::Cyan)),
                Span::raw(" to choose | "),
                Span::styled("Enter", Style::default().fg(Color::Cyan)),
                Span::raw(" to start | "),
            ],
            GameState::Playing => vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
            ],
            GameState::Lost => vec![
                Span::styled("Space", Style::default().fg(Color::Cyan)),
                Span::raw(" to replay | "),
                Span::styled("Esc", Style::default().fg(Color::Cyan)),
                Span::raw(" for menu | "),
            ],
        };

        let mut spans = hint;
        spans.push(Span::styled("Q", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" to quit"));

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
