use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    board_display::*, clue_display::*, key_binding_display::*, rack_display::*,
    score_display::*,
};

mod board_display;
mod clue_display;
mod key_binding_display;
mod rack_display;
mod score_display;

mod color {
    use ratatui::style::Color;

    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const GRAY: Color = Color::Rgb(110, 110, 110);
    pub const DARK_GRAY: Color = Color::Rgb(45, 45, 45);
    pub const YELLOW: Color = Color::Rgb(255, 215, 0);
    pub const NAVY: Color = Color::Rgb(20, 40, 90);
    pub const BLUE: Color = Color::Rgb(40, 110, 220);
    pub const RED: Color = Color::Rgb(200, 50, 50);
    pub const GREEN: Color = Color::Rgb(40, 170, 80);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const DIM: Style = fg_bg(color::GRAY, color::BLACK);
    pub const FILLER: Style = fg_bg(color::DARK_GRAY, color::DARK_GRAY);
    pub const CLUE: Style = fg_bg(color::YELLOW, color::NAVY);
    pub const OPEN: Style = fg_bg(color::GRAY, color::BLACK);
    pub const PLAYER: Style = fg_bg(color::WHITE, color::BLUE);
    pub const AI: Style = fg_bg(color::WHITE, color::RED);
    pub const CURSOR: Style = fg_bg(color::BLACK, color::YELLOW);
    pub const SELECTED: Style = fg_bg(color::BLACK, color::GREEN).add_modifier(Modifier::BOLD);
    pub const GOOD: Style = Style::new().fg(color::GREEN);
    pub const BAD: Style = Style::new().fg(color::RED);
    pub const PLAYER_FG: Style = Style::new().fg(color::BLUE);
    pub const AI_FG: Style = Style::new().fg(color::RED);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
