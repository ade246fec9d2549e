use line_fit::{IterationLimit, Phase};
use ratatui::{
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
};

use crate::state::model::FitView;

use super::theme::Theme;

pub fn header<'a>(view: &FitView<'_>) -> Paragraph<'a> {
    let (phase, phase_style) = phase_label(view);

    let line1 = Line::from(vec![
        Span::styled("Gradient Descent Line Fit", Theme::title()),
        Span::styled("  |  ", Theme::muted()),
        Span::styled(phase, phase_style),
    ]);

    let iterations = match view.limit {
        IterationLimit::Limited(limit) => format!("{} / {limit}", view.iterations),
        IterationLimit::Unbounded => view.iterations.to_string(),
    };

    let line2 = Line::from(vec![
        Span::styled(
            format!(
                "Elapsed: {:02}:{:02}  |  Iterations: {iterations}  |  Learning rate: {}",
                view.elapsed.as_secs() / 60,
                view.elapsed.as_secs() % 60,
                view.learning_rate,
            ),
            Theme::text(),
        ),
        Span::styled("    q quit  space pause  l events", Theme::muted()),
    ]);

    Paragraph::new(vec![line1, line2])
        .block(panel(" Overview "))
        .wrap(Wrap { trim: true })
}

pub fn chart<'a>(view: &'a FitView<'_>) -> Chart<'a> {
    let datasets = vec![
        Dataset::default()
            .name("samples")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Theme::samples())
            .data(view.points),
        Dataset::default()
            .name("fit")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Theme::fitted())
            .data(&view.fitted),
    ];

    let [x0, x1] = view.bounds.x;
    let [y0, y1] = view.bounds.y;

    Chart::new(datasets)
        .block(panel(" Fit "))
        .style(Theme::base())
        .x_axis(
            Axis::default()
                .title(Span::styled(view.x_label, Theme::dim()))
                .style(Theme::dim())
                .bounds(view.bounds.x)
                .labels(axis_labels(x0, x1)),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(view.y_label, Theme::dim()))
                .style(Theme::dim())
                .bounds(view.bounds.y)
                .labels(axis_labels(y0, y1)),
        )
}

pub fn params<'a>(view: &FitView<'_>) -> Paragraph<'a> {
    let value_style = if view.loss.is_finite() {
        Theme::text()
    } else {
        Theme::error()
    };

    let mut lines = vec![
        Line::styled(format!("m = {:.2}", view.slope), value_style),
        Line::styled(format!("b = {:.2}", view.intercept), value_style),
        Line::styled(format!("MSE = {:.2}", view.loss), value_style),
        Line::styled(format!("Iterations = {}", view.iterations), value_style),
    ];

    if view.x_offset != 0.0 {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("fitted on x - {}", view.x_offset),
            Theme::muted(),
        ));
    }

    if !view.loss.is_finite() {
        lines.push(Line::from(""));
        lines.push(Line::styled("diverged: lower -lr", Theme::error()));
    }

    Paragraph::new(lines)
        .block(panel(" Parameters "))
        .wrap(Wrap { trim: true })
}

pub fn logs<'a>(view: &FitView<'a>) -> Paragraph<'a> {
    let tail = view.logs.iter().rev().take(6).rev();

    let lines = tail
        .map(|l| {
            Line::from(vec![
                Span::styled(format!("[{}] ", l.level), Theme::dim()),
                Span::styled(l.message.as_str(), Theme::text()),
            ])
        })
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .block(panel(" Events "))
        .wrap(Wrap { trim: true })
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(title, Theme::title()))
}

fn phase_label(view: &FitView<'_>) -> (&'static str, Style) {
    if view.paused {
        return ("PAUSED", Theme::warn());
    }

    match view.phase {
        Phase::Running { .. } => ("RUNNING", Theme::text()),
        Phase::Unbounded => ("RUNNING (no limit)", Theme::text()),
        Phase::Complete => ("COMPLETE", Theme::ok()),
        Phase::Stopped => ("STOPPED", Theme::warn()),
    }
}

fn axis_labels<'a>(low: f64, high: f64) -> Vec<Span<'a>> {
    let mid = (low + high) / 2.0;
    [low, mid, high]
        .into_iter()
        .map(|v| Span::styled(format!("{v:.1}"), Theme::dim()))
        .collect()
}
