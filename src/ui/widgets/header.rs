use crate::app::Screen;
use crate::ui::colors::current as current_colors;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Festive title bar. The santa-hat artwork of the app becomes a glyph in a
/// terminal; the subtitle tracks the current screen.
pub fn render(f: &mut Frame, area: Rect, screen: Screen) {
    let colors = current_colors();
    let subtitle = match screen {
        Screen::Collecting => "Participants",
        Screen::Results => "Results",
    };
    let p = Paragraph::new(Span::raw(format!(" 🎅 Secret Santa — {} ", subtitle)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(colors.header_style),
        )
        .style(colors.header_style);
    f.render_widget(p, area);
}
