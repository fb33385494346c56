use arrowword_engine::{Cell, Direction, FillState, Owner, Position, Puzzle};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::style;

const CELL_WIDTH: u16 = 3;

/// The board with the fill overlay and an optional cursor.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    puzzle: &'a Puzzle,
    fill: &'a FillState,
    cursor: Option<Position>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(puzzle: &'a Puzzle, fill: &'a FillState) -> Self {
        Self {
            puzzle,
            fill,
            cursor: None,
            block: None,
        }
    }

    pub fn cursor(self, cursor: Position) -> Self {
        Self {
            cursor: Some(cursor),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        let cols = u16::try_from(self.puzzle.board().cols()).unwrap_or(u16::MAX);
        cols.saturating_mul(CELL_WIDTH) + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        let rows = u16::try_from(self.puzzle.board().rows()).unwrap_or(u16::MAX);
        rows + super::block_vertical_margin(self.block.as_ref())
    }

    fn cell_face(&self, pos: Position, cell: &Cell) -> (String, Style) {
        let (text, style) = match cell {
            Cell::Filler | Cell::Empty => ("   ".to_owned(), style::FILLER),
            Cell::Clue(hints) => {
                let right = hints.get(Direction::Horizontal).is_some();
                let down = hints.get(Direction::Vertical).is_some();
                let arrows = match (right, down) {
                    (true, true) => "→↓ ",
                    (true, false) => " → ",
                    (false, true) => " ↓ ",
                    (false, false) => "   ",
                };
                (arrows.to_owned(), style::CLUE)
            }
            Cell::Letter { .. } => match self.fill.get(pos) {
                Some(filled) => {
                    let style = match filled.owner {
                        Owner::Player => style::PLAYER,
                        Owner::Ai => style::AI,
                    };
                    (format!(" {} ", filled.letter), style)
                }
                None => (" · ".to_owned(), style::OPEN),
            },
        };
        if self.cursor == Some(pos) {
            (text, style.patch(style::CURSOR))
        } else {
            (text, style)
        }
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let board = self.puzzle.board();
        let horizontal = Layout::horizontal((0..board.cols()).map(|_| Constraint::Length(CELL_WIDTH)))
            .flex(Flex::Center);
        let vertical = Layout::vertical((0..board.rows()).map(|_| Constraint::Length(1)));

        let rows = vertical.split(area);
        for (row_area, (row, cells)) in rows.iter().zip(board.row_slices().enumerate()) {
            let cell_areas = horizontal.split(*row_area);
            for (cell_area, (col, cell)) in cell_areas.iter().zip(cells.iter().enumerate()) {
                let (text, style) = self.cell_face(Position::new(row, col), cell);
                Line::styled(text, style).render(*cell_area, buf);
            }
        }
    }
}
