use arrowword_engine::Difficulty;
use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::{Line, Span, Text},
    widgets::{Block, Padding, Paragraph},
};

use crate::view::widgets::{KeyBinding, KeyBindingDisplay, style};

const KEY_BINDINGS: &[KeyBinding] = &[
    ("↑↓", "choose"),
    ("1-3", "pick"),
    ("Enter", "start"),
    ("q", "quit"),
];

/// Difficulty selection shown before the first board is generated.
#[derive(Debug)]
pub struct StartMenuScreen {
    cursor: usize,
    chosen: Option<Difficulty>,
    is_exiting: bool,
}

impl Default for StartMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl StartMenuScreen {
    pub fn new() -> Self {
        let cursor = Difficulty::ALL
            .iter()
            .position(|d| *d == Difficulty::default())
            .unwrap_or(0);
        Self {
            cursor,
            chosen: None,
            is_exiting: false,
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn chosen(&self) -> Option<Difficulty> {
        self.chosen
    }

    pub fn handle_event(&mut self, event: &Event) {
        let Some(event) = event.as_key_event() else {
            return;
        };
        let last = Difficulty::ALL.len() - 1;
        match event.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => self.cursor = (self.cursor + 1).min(last),
            KeyCode::Char(ch @ '1'..='3') => {
                let number = ch.to_digit(10).unwrap_or(1);
                self.cursor = usize::try_from(number - 1).unwrap_or(0).min(last);
                self.chosen = Some(Difficulty::ALL[self.cursor]);
            }
            KeyCode::Enter => self.chosen = Some(Difficulty::ALL[self.cursor]),
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let mut lines = vec![
            Line::styled("Fill the board before the AI does.", style::DIM),
            Line::from(""),
        ];
        for (index, difficulty) in Difficulty::ALL.into_iter().enumerate() {
            let description = match difficulty {
                Difficulty::Easy => "AI fills one cell per turn",
                Difficulty::Medium => "AI fills one or two cells per turn",
                Difficulty::Hard => "AI fills two to four cells per turn",
            };
            let label_style = if index == self.cursor {
                style::SELECTED
            } else {
                style::DEFAULT
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {}. {:<8}", index + 1, difficulty.to_string()), label_style),
                Span::styled(format!("  {description}"), style::DIM),
            ]));
        }
        let menu = Paragraph::new(Text::from(lines)).block(
            Block::bordered()
                .title(Line::from(" ARROWWORD ").centered())
                .padding(Padding::symmetric(2, 1))
                .style(style::DEFAULT),
        );

        let [menu_area, help_area] = frame.area().layout(
            &Layout::vertical([Constraint::Length(9), Constraint::Length(1)]).flex(Flex::Center),
        );
        let [menu_area] = menu_area
            .layout(&Layout::horizontal([Constraint::Length(60)]).flex(Flex::Center));
        frame.render_widget(menu, menu_area);
        frame.render_widget(KeyBindingDisplay::new(KEY_BINDINGS), help_area);
    }
}
