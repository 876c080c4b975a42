use crate::app::ResultRow;
use crate::ui::colors::{current as current_colors, present_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the assignment set, one "GIVER buys a 🎁 for RECIPIENT" row per
/// participant, in shuffle order. `offset` is the scroll position; it is
/// clamped here as well so a stale offset can never panic the renderer.
pub fn render(f: &mut Frame, area: Rect, rows: &[ResultRow], offset: usize) {
    let colors = current_colors();
    let height = (area.height.saturating_sub(2) as usize).max(1);
    let offset = offset.min(rows.len().saturating_sub(1));
    let items: Vec<ListItem> = rows
        .iter()
        .skip(offset)
        .take(height)
        .map(|row| {
            let line = Line::from(vec![
                Span::styled(row.assignment.giver.clone(), colors.name_style),
                Span::raw(" buys a "),
                Span::styled(row.present.glyph(), present_style(row.present)),
                Span::raw(" for "),
                Span::styled(row.assignment.recipient.clone(), colors.name_style),
            ]);
            ListItem::new(line)
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Results")
            .style(colors.list_block_style),
    );
    f.render_widget(list, area);
}
