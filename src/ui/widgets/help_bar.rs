use crate::app::Screen;
use crate::ui::colors::current as current_colors;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};

/// One-line key legend at the bottom of the screen, per screen mode.
pub fn render(f: &mut Frame, area: Rect, screen: Screen) {
    let text = match screen {
        Screen::Collecting => "type a name  Enter:add  F2:draw names  Backspace:edit  Esc:quit",
        Screen::Results => "Enter/r:draw again  a:add participants  ↑/↓:scroll  q/Esc:quit",
    };
    let colors = current_colors();
    let p = Paragraph::new(text).style(colors.help_style);
    f.render_widget(p, area);
}
