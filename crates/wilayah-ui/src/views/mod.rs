//! Rendering for the region browser.
//!
//! One screen: a header, the three region panels (hidden until the menu is
//! revealed), and the count form at the bottom, mirroring the original
//! widget's layout.

mod count_input;
mod region_panel;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::Frame;

use crate::model::{BrowserState, Focus};

/// Render the whole screen.
pub fn render(frame: &mut Frame, state: &BrowserState) {
    let area = frame.area();

    if state.menu_visible {
        let [header, provinces, regencies, districts, form] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Min(3),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .areas(area);

        render_header(frame, header);
        render_panels(frame, state, provinces, regencies, districts);
        count_input::render(frame, form, state);
    } else {
        let [header, _, form] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .areas(area);

        render_header(frame, header);
        count_input::render(frame, form, state);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Line::styled("Daftar Provinsi", Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(header, area);
}

fn render_panels(
    frame: &mut Frame,
    state: &BrowserState,
    provinces: Rect,
    regencies: Rect,
    districts: Rect,
) {
    region_panel::render(
        frame,
        provinces,
        region_panel::Panel {
            title: "Provinsi",
            loading_label: "Loading provinsi...",
            loading: state.provinces.is_loading(),
            rows: state.visible_provinces(),
            selected_id: state.selected_province.as_deref(),
            cursor: state.province_cursor,
            focused: state.focus == Focus::Provinces,
        },
        |row| row.name.clone(),
    );

    // While the district fetch is in flight the selected regency row shows
    // a row-local loading label instead of its name.
    let district_loading = state.districts.is_loading();
    let selected_regency = state.selected_regency.clone();
    region_panel::render(
        frame,
        regencies,
        region_panel::Panel {
            title: "Kabupaten",
            loading_label: "Loading kabupaten...",
            loading: state.regencies.is_loading(),
            rows: state.regencies.rows(),
            selected_id: state.selected_regency.as_deref(),
            cursor: state.regency_cursor,
            focused: state.focus == Focus::Regencies,
        },
        move |row| {
            if district_loading && selected_regency.as_deref() == Some(row.id.as_str()) {
                "Loading...".to_string()
            } else {
                row.name.clone()
            }
        },
    );

    region_panel::render(
        frame,
        districts,
        region_panel::Panel {
            title: "Kecamatan",
            loading_label: "Loading kecamatan...",
            loading: state.districts.is_loading(),
            rows: state.districts.rows(),
            selected_id: state.selected_district.as_deref(),
            cursor: state.district_cursor,
            focused: state.focus == Focus::Districts,
        },
        |row| row.name.clone(),
    );
}
