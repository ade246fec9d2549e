use ratatui::layout::{Constraint, Direction, Layout, Rect};

const HEADER_HEIGHT: u16 = 4;
const EVENTS_HEIGHT: u16 = 8;
const PARAMS_WIDTH: u16 = 28;

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy)]
pub struct Regions {
    pub header: Rect,
    pub chart: Rect,
    pub params: Rect,
    pub events: Option<Rect>,
}

/// Splits the screen into the overview header, the chart with the
/// parameter panel on its right, and the events panel when it is shown.
pub fn split(area: Rect, show_events: bool) -> Regions {
    let mut rows = vec![Constraint::Length(HEADER_HEIGHT), Constraint::Min(10)];
    if show_events {
        rows.push(Constraint::Length(EVENTS_HEIGHT));
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows)
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(PARAMS_WIDTH)])
        .split(rows[1]);

    Regions {
        header: rows[0],
        chart: cols[0],
        params: cols[1],
        events: rows.get(2).copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_panel_is_optional() {
        let area = Rect::new(0, 0, 100, 40);

        let without = split(area, false);
        assert!(without.events.is_none());
        assert_eq!(without.params.width, PARAMS_WIDTH);

        let with = split(area, true);
        assert_eq!(with.events.map(|r| r.height), Some(EVENTS_HEIGHT));
        assert!(with.chart.height < without.chart.height);
    }
}
