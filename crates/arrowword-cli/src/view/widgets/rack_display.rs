use arrowword_engine::{RACK_SIZE, Rack};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::style;

const TILE_WIDTH: u16 = 4;

/// The player's tiles, numbered for selection with the digit keys.
#[derive(Debug)]
pub struct RackDisplay<'a> {
    rack: &'a Rack,
    active: bool,
    block: Option<BlockWidget<'a>>,
}

impl<'a> RackDisplay<'a> {
    pub fn new(rack: &'a Rack) -> Self {
        Self {
            rack,
            active: true,
            block: None,
        }
    }

    /// Dims the tiles while the player cannot use them.
    pub fn active(self, active: bool) -> Self {
        Self { active, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        TILE_WIDTH * u16::try_from(RACK_SIZE).unwrap_or(u16::MAX)
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for RackDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let mut tiles = vec![];
        let mut numbers = vec![];
        for (index, tile) in self.rack.tiles().iter().enumerate() {
            let tile_style = if !self.active {
                style::DIM
            } else if self.rack.selected() == Some(index) {
                style::SELECTED
            } else {
                style::DEFAULT
            };
            tiles.push(Span::styled(format!("[{tile}]"), tile_style));
            tiles.push(Span::raw(" "));
            numbers.push(Span::styled(format!(" {} ", index + 1), style::DIM));
            numbers.push(Span::raw(" "));
        }

        let [tiles_area, numbers_area] =
            area.layout(&Layout::vertical([Constraint::Length(1), Constraint::Length(1)]));
        Line::from(tiles).centered().render(tiles_area, buf);
        Line::from(numbers).centered().render(numbers_area, buf);
    }
}
