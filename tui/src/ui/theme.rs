use ratatui::style::{Color, Modifier, Style};

/// Warm brick theme.
///
/// - sand foreground on near-black
/// - brick red for focus and titles
/// - green/red for accepted and rejected estimates
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(18, 14, 12);
    pub const FG_SAND: Color = Color::Rgb(235, 214, 176);
    pub const FG_DIM: Color = Color::Rgb(170, 150, 120);
    pub const FG_MUTED: Color = Color::Rgb(95, 85, 75);

    pub const ACCENT_BRICK: Color = Color::Rgb(214, 96, 60);
    pub const ACCENT_GREEN: Color = Color::Rgb(120, 200, 110);
    pub const ACCENT_RED: Color = Color::Rgb(255, 80, 80);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG_SAND).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_DIM).bg(Self::BG)
    }

    /// Border of the panel holding the focus.
    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::ACCENT_BRICK)
            .bg(Self::BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT_BRICK)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG_SAND)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Selected list row.
    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::BG)
            .bg(Self::ACCENT_BRICK)
            .add_modifier(Modifier::BOLD)
    }

    pub fn gauge() -> Style {
        Style::default().fg(Self::ACCENT_BRICK).bg(Self::FG_MUTED)
    }

    pub fn ok() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }
}
