use ratatui::style::{Color, Modifier, Style};

/// Colors of the fit display: green on black, magenta samples, cyan line.
pub struct Theme;

impl Theme {
    const BG: Color = Color::Rgb(0, 0, 0);
    const GREEN: Color = Color::Rgb(57, 255, 20);
    const GREEN_DIM: Color = Color::Rgb(0, 190, 0);
    const GREY: Color = Color::Rgb(80, 90, 80);

    const SAMPLE: Color = Color::Rgb(255, 0, 255);
    const LINE: Color = Color::Rgb(0, 255, 255);
    const YELLOW: Color = Color::Rgb(255, 255, 0);
    const RED: Color = Color::Rgb(255, 70, 70);

    /// Full-screen background.
    pub fn base() -> Style {
        Style::default().fg(Self::GREEN).bg(Self::BG)
    }

    pub fn border() -> Style {
        Self::base()
    }

    pub fn title() -> Style {
        Self::text().add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::GREEN)
    }

    /// Axis labels and titles.
    pub fn dim() -> Style {
        Style::default().fg(Self::GREEN_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::GREY)
    }

    /// A limited run that reached its limit.
    pub fn ok() -> Style {
        Self::title()
    }

    /// Paused or stopped.
    pub fn warn() -> Style {
        Style::default().fg(Self::YELLOW).add_modifier(Modifier::BOLD)
    }

    /// Non-finite parameters.
    pub fn error() -> Style {
        Style::default().fg(Self::RED).add_modifier(Modifier::BOLD)
    }

    pub fn samples() -> Style {
        Style::default().fg(Self::SAMPLE)
    }

    pub fn fitted() -> Style {
        Style::default().fg(Self::LINE).add_modifier(Modifier::BOLD)
    }
}
