use ratatui::style::{Color, Modifier, Style};

/// Warm copper-on-charcoal theme.
///
/// Base aesthetic:
/// - amber foreground on a near-black background
/// - green/red/cyan accents reserved for recommendation tones
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(18, 14, 10);
    pub const FG_AMBER: Color = Color::Rgb(255, 183, 77);
    pub const FG_DIM: Color = Color::Rgb(190, 130, 50);
    pub const FG_MUTED: Color = Color::Rgb(110, 95, 75);

    // Recommendation tones
    pub const TONE_OK: Color = Color::Rgb(80, 250, 123);
    pub const TONE_ERROR: Color = Color::Rgb(255, 85, 85);
    pub const TONE_INFO: Color = Color::Rgb(100, 220, 220);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG_AMBER).bg(Self::BG)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::FG_AMBER).bg(Self::BG)
    }

    /// Titles (bold amber).
    pub fn title() -> Style {
        Style::default()
            .fg(Self::FG_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    /// Regular text.
    pub fn text() -> Style {
        Style::default().fg(Self::FG_AMBER)
    }

    /// Secondary/dim text.
    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// Muted/disabled text.
    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Selected control highlight.
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::FG_AMBER)
            .bg(Color::Rgb(45, 32, 18))
            .add_modifier(Modifier::BOLD)
    }

    pub fn ok() -> Style {
        Style::default()
            .fg(Self::TONE_OK)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::TONE_ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn info() -> Style {
        Style::default().fg(Self::TONE_INFO)
    }
}
