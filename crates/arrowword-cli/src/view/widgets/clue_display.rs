use arrowword_engine::{Cell, Direction, FillState, Position, Puzzle};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt as _, Paragraph, Widget, Wrap},
};

use crate::view::widgets::style;

/// Hints relevant to the cell under the cursor.
///
/// On a clue cell this lists the cell's hints; on a letter cell, the hints
/// of the words running through it.
#[derive(Debug)]
pub struct ClueDisplay<'a> {
    puzzle: &'a Puzzle,
    fill: &'a FillState,
    cursor: Position,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ClueDisplay<'a> {
    pub fn new(puzzle: &'a Puzzle, fill: &'a FillState, cursor: Position) -> Self {
        Self {
            puzzle,
            fill,
            cursor,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let arrow = |direction: Direction| match direction {
            Direction::Horizontal => "→ ",
            Direction::Vertical => "↓ ",
        };
        match self.puzzle.board().get(self.cursor) {
            Some(Cell::Clue(hints)) => Direction::ALL
                .into_iter()
                .filter_map(|direction| {
                    let hint = hints.get(direction)?;
                    Some(Line::from(vec![
                        Span::styled(arrow(direction), style::DIM),
                        Span::styled(hint.to_owned(), style::DEFAULT),
                    ]))
                })
                .collect(),
            Some(Cell::Letter { .. }) => self
                .puzzle
                .words_at(self.cursor)
                .map(|word| {
                    let solved = word.positions().all(|pos| self.fill.contains(pos));
                    let mut spans = vec![
                        Span::styled(arrow(word.direction), style::DIM),
                        Span::styled(word.hint.clone(), style::DEFAULT),
                        Span::styled(format!(" ({})", word.len()), style::DIM),
                    ];
                    if solved {
                        spans.push(Span::styled(format!(" = {}", word.display), style::GOOD));
                    }
                    Line::from(spans)
                })
                .collect(),
            _ => vec![Line::styled("-", style::DIM)],
        }
    }
}

impl Widget for ClueDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
