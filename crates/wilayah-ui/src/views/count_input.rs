//! The count form at the bottom of the screen.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::{BrowserState, Focus};

/// Render the count input and its hint line.
pub fn render(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let focused = state.focus == Focus::CountInput;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut input_line = vec![Span::raw(state.input.as_str())];
    if focused {
        input_line.push(Span::styled("_", Style::default().fg(Color::DarkGray)));
    }

    // The submit hint doubles as the original's button label, which turns
    // into "Loading..." while the province fetch is in flight.
    let submit_label = if state.provinces.is_loading() {
        "Loading..."
    } else {
        "Submit"
    };
    let hint = Line::styled(
        format!("Enter: {submit_label}  Tab: pindah fokus  Esc: keluar"),
        Style::default().fg(Color::DarkGray),
    );

    let form = Paragraph::new(vec![Line::from(input_line), hint]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Masukkan jumlah provinsi yang ingin ditampilkan (1-32)"),
    );
    frame.render_widget(form, area);
}
