use ratatui::style::{Color, Modifier, Style};
use std::fmt;

/// Presentation mode of the whole screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Stable value stored under the `theme` preference key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `light`/`dark` is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colors for one presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub block_fill: Color,
    pub highlight: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(0xfa, 0xfa, 0xfa),
    text: Color::Rgb(0x0a, 0x0a, 0x0a),
    muted: Color::Rgb(0x4b, 0x55, 0x63),
    accent: Color::Rgb(0x37, 0x41, 0x51),
    border: Color::Rgb(0xd4, 0xd4, 0xd4),
    block_fill: Color::Rgb(0xf0, 0xf0, 0xf0),
    highlight: Color::Rgb(0xe5, 0xe5, 0xe5),
};

const DARK: Palette = Palette {
    background: Color::Rgb(0x0a, 0x0a, 0x0a),
    text: Color::Rgb(0xfa, 0xfa, 0xfa),
    muted: Color::Rgb(0x9c, 0xa3, 0xaf),
    accent: Color::Rgb(0xe5, 0xe7, 0xeb),
    border: Color::Rgb(0x40, 0x40, 0x40),
    block_fill: Color::Rgb(0x17, 0x17, 0x17),
    highlight: Color::Rgb(0x26, 0x26, 0x26),
};

impl Palette {
    /// Root style applied to the whole frame.
    pub fn root(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::DIM)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }
}
