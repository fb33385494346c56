use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Keys paired with what they do.
pub type KeyBinding<'a> = (&'a str, &'a str);

/// One centered help line.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding<'a>],
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self { bindings }
    }
}

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const DESCRIPTION_STYLE: Style = Style::new().fg(Color::DarkGray);

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans = self
            .bindings
            .iter()
            .enumerate()
            .flat_map(|(i, (key, desc))| {
                let separator = if i == 0 { "" } else { "  " };
                [
                    Span::raw(separator),
                    Span::styled(*key, KEY_STYLE),
                    Span::styled(format!(" {desc}"), DESCRIPTION_STYLE),
                ]
            })
            .collect::<Vec<_>>();
        Line::from(spans).centered().render(area, buf);
    }
}
