use ratatui::{widgets::Block, Frame};

use crate::state::model::FitView;

use super::{layout, theme::Theme, widgets};

/// Draws the entire UI.
pub fn draw(f: &mut Frame, view: &FitView<'_>, show_logs: bool) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let regions = layout::split(area, show_logs);

    f.render_widget(widgets::header(view), regions.header);
    f.render_widget(widgets::chart(view), regions.chart);
    f.render_widget(widgets::params(view), regions.params);

    if let Some(events) = regions.events {
        f.render_widget(widgets::logs(view), events);
    }
}
