use crate::ui::colors::current as current_colors;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the participant roster, one row per name in insertion order.
/// When the list outgrows the viewport the tail stays visible, so the name
/// just added is always on screen.
pub fn render(f: &mut Frame, area: Rect, names: &[String]) {
    let colors = current_colors();
    let height = area.height.saturating_sub(2) as usize;
    let start = names.len().saturating_sub(height.max(1));
    let items: Vec<ListItem> = names[start..]
        .iter()
        .map(|s| ListItem::new(s.clone()))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Participants")
            .style(colors.list_block_style),
    );
    f.render_widget(list, area);
}
