use ratatui::style::{Color, Modifier, Style};
use searchviz_steps::CellState;

const SKY_BLUE: Color = Color::Rgb(135, 206, 235);

/// Colours for bars and chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub idle: Color,
    pub candidate: Color,
    pub in_range: Color,
    pub eliminated: Color,
    pub found: Color,
    pub not_found: Color,
    pub header: Style,
    pub label: Style,
    pub status: Style,
    pub warning: Style,
    pub empty: Style,
}

impl Theme {
    #[must_use]
    pub fn bar_color(&self, state: CellState) -> Color {
        match state {
            CellState::Idle => self.idle,
            CellState::Candidate => self.candidate,
            CellState::InRange => self.in_range,
            CellState::Eliminated => self.eliminated,
            CellState::Found => self.found,
            CellState::NotFound => self.not_found,
        }
    }

    #[must_use]
    pub fn bar_style(&self, state: CellState) -> Style {
        Style::new().fg(self.bar_color(state))
    }

    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    #[must_use]
    pub fn label_style(&self) -> Style {
        self.label
    }

    #[must_use]
    pub fn status_style(&self) -> Style {
        self.status
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        self.warning
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
    pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
    pub const fn new(name: &'static str, theme: Theme) -> Self {
        Self {
            name,
            theme,
            aliases: &[],
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

/// Default palette: sky blue bars with a yellow probe. Eliminated bars turn
/// gray, a match turns green and an exhausted run turns red.
pub const CLASSIC: Theme = Theme {
    idle: SKY_BLUE,
    candidate: Color::Yellow,
    in_range: SKY_BLUE,
    eliminated: Color::DarkGray,
    found: Color::Green,
    not_found: Color::Red,
    header: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    label: Style::new().fg(Color::Black).bg(SKY_BLUE),
    status: Style::new().fg(Color::Gray),
    warning: Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD),
    empty: Style::new().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
};

/// High-contrast variant relying on the terminal's base colours only.
pub const MONO: Theme = Theme {
    idle: Color::Gray,
    candidate: Color::White,
    in_range: Color::Gray,
    eliminated: Color::DarkGray,
    found: Color::White,
    not_found: Color::DarkGray,
    header: Style::new().add_modifier(Modifier::BOLD),
    label: Style::new().add_modifier(Modifier::REVERSED),
    status: Style::new(),
    warning: Style::new().add_modifier(Modifier::BOLD.union(Modifier::UNDERLINED)),
    empty: Style::new().add_modifier(Modifier::DIM),
};

const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition::new("classic", CLASSIC).with_aliases(&["default"]),
    ThemeDefinition::new("mono", MONO).with_aliases(&["monochrome"]),
];

#[must_use]
pub fn default_theme() -> Theme {
    CLASSIC
}

/// Look up a built-in theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    let name = name.trim();
    BUILT_IN_DEFINITIONS
        .iter()
        .find(|definition| definition.matches(name))
        .map(|definition| definition.theme)
}

/// Names of the built-in themes, in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILT_IN_DEFINITIONS.iter().map(|definition| definition.name)
}
