//! Unscramble screen renderer
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::core::renderer::GameRenderer;
use crate::game::state::GameUiState;

pub struct UnscrambleRenderer {
    max_words: usize,
}

impl UnscrambleRenderer {
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }

    fn render_final_score(&self, frame: &mut Frame, score: u32) {
        let popup = centered(frame.area(), 40, 9);
        let lines = vec![
            Line::from(""),
            Line::styled("Congratulations!", Style::default().add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::from(format!("You scored: {score}")),
            Line::from(""),
            Line::styled(
                "Enter: Play Again   Esc: Exit",
                Style::default().fg(Color::Gray),
            ),
        ];
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::bordered().title(" Game Over ")),
            popup,
        );
    }
}

impl GameRenderer<GameUiState> for UnscrambleRenderer {
    fn render(&self, frame: &mut Frame, state: &GameUiState, input: &str) -> Option<(u16, u16)> {
        let [title_area, card_area, hints_area, score_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Length(2),
            Constraint::Length(3),
        ])
        .areas(frame.area());

        let title = Paragraph::new("Unscramble")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::bordered());
        frame.render_widget(title, title_area);

        let (label, label_style) = if state.is_guessed_word_wrong {
            ("Wrong Guess!", Style::default().fg(Color::Red))
        } else {
            ("Enter your word", Style::default().fg(Color::Gray))
        };
        let card_lines = vec![
            Line::from(""),
            Line::styled(
                state.current_scrambled_word.as_str(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
            Line::from(""),
            Line::from("Unscramble the word using all the letters.").alignment(Alignment::Center),
            Line::from(""),
            Line::styled(label, label_style),
            Line::from(format!("> {input}")),
        ];
        let card = Block::bordered().title(format!(
            " {}/{} ",
            state.current_word_count, self.max_words
        ));
        let inner = card.inner(card_area);
        frame.render_widget(Paragraph::new(card_lines).block(card), card_area);

        let hints = Paragraph::new("Enter: submit   Tab: skip   Esc: quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(hints, hints_area);

        let score = Paragraph::new(format!("Score: {}", state.score))
            .alignment(Alignment::Center)
            .block(Block::bordered());
        frame.render_widget(score, score_area);

        if state.is_game_over {
            self.render_final_score(frame, state.score);
            return None;
        }

        let typed = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
        let x = inner
            .x
            .saturating_add(2)
            .saturating_add(typed)
            .min(inner.right().saturating_sub(1));
        Some((x, inner.y + 6))
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
