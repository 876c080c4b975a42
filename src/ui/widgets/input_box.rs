use crate::ui::colors::current as current_colors;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Name entry line. Shows placeholder text while the buffer is empty.
pub fn render(f: &mut Frame, area: Rect, buffer: &str) {
    let colors = current_colors();
    let (text, style) = if buffer.is_empty() {
        ("Enter participant name".to_string(), colors.placeholder_style)
    } else {
        (buffer.to_string(), colors.name_style)
    };
    let p = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Add participant (Enter)")
            .style(colors.input_block_style),
    );
    f.render_widget(p, area);
}
