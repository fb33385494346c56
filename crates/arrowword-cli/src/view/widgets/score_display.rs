use std::iter;

use arrowword_engine::{GameSession, Owner, SessionState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::style;

/// Scores of both sides plus the state of the board.
pub struct ScoreDisplay<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ScoreDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap_or(u16::MAX)
            + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    LabelValue(&'static str, Style, &'static dyn Fn(&GameSession) -> String),
}

const ROWS: &[Row] = &[
    Row::LabelValue("YOU:", style::PLAYER_FG, &|session| {
        session.scores().side(Owner::Player).score().to_string()
    }),
    Row::LabelValue("AI:", style::AI_FG, &|session| {
        session.scores().side(Owner::Ai).score().to_string()
    }),
    Row::Empty,
    Row::LabelValue("TURN:", style::DEFAULT, &|session| {
        match session.state() {
            SessionState::PlayerTurn => "you".to_owned(),
            SessionState::AiTurn { .. } => "AI".to_owned(),
            SessionState::Finished => "-".to_owned(),
        }
    }),
    Row::LabelValue("LEVEL:", style::DEFAULT, &|session| session.difficulty().to_string()),
    Row::LabelValue("OPEN:", style::DEFAULT, &|session| session.open_cell_count().to_string()),
    Row::LabelValue("WORDS:", style::DEFAULT, &|session| {
        format!(
            "{}/{}",
            session.completed_words().count(),
            session.words().len()
        )
    }),
];

impl Widget for ScoreDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::LabelValue(label, value_style, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style::DEFAULT)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.session), value_style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
