//! One selectable region list panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use wilayah_core::Region;

/// Everything a panel needs from the browser state.
pub struct Panel<'a, T> {
    pub title: &'a str,

    /// Panel-wide indicator shown instead of rows while the level loads.
    pub loading_label: &'a str,
    pub loading: bool,

    pub rows: &'a [T],

    /// Id of the selected row for this level, if any.
    pub selected_id: Option<&'a str>,

    /// Cursor position inside `rows`.
    pub cursor: usize,

    /// Whether this panel has keyboard focus.
    pub focused: bool,
}

/// Render one region panel.
///
/// `row_label` produces the display text for a row; the regency panel uses
/// it to substitute a row-local loading label while districts are fetched.
pub fn render<T: Region>(
    frame: &mut Frame,
    area: Rect,
    panel: Panel<'_, T>,
    row_label: impl Fn(&T) -> String,
) {
    let border_style = if panel.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(panel.title);

    if panel.loading {
        frame.render_widget(Paragraph::new(panel.loading_label).block(block), area);
        return;
    }

    if panel.rows.is_empty() {
        frame.render_widget(Paragraph::new("Belum ada data").block(block), area);
        return;
    }

    let items: Vec<ListItem<'_>> = panel
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut style = Style::default();
            if panel.selected_id == Some(row.id()) {
                style = style.bg(Color::Green).fg(Color::Black);
            }
            if panel.focused && i == panel.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(row_label(row)).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
