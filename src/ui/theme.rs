use ratatui::style::Color;

/// Presentation palette, toggled at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub border: Color,
    pub highlight: Color,
    pub star: Color,
    pub ok: Color,
    pub error: Color,
}

pub const DARK: Theme = Theme {
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    accent: Color::Rgb(0x3b, 0x82, 0xf6),
    accent_soft: Color::Rgb(0x93, 0xc5, 0xfd),
    border: Color::Rgb(0x40, 0x40, 0x40),
    highlight: Color::Rgb(0x26, 0x26, 0x26),
    star: Color::Rgb(0xfa, 0xcc, 0x15),
    ok: Color::Rgb(0x22, 0xc5, 0x5e),
    error: Color::Rgb(0xef, 0x44, 0x44),
};

pub const LIGHT: Theme = Theme {
    text: Color::Rgb(0x1f, 0x29, 0x37),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    accent: Color::Rgb(0x25, 0x63, 0xeb),
    accent_soft: Color::Rgb(0x1d, 0x4e, 0xd8),
    border: Color::Rgb(0xd1, 0xd5, 0xdb),
    highlight: Color::Rgb(0xe5, 0xe7, 0xeb),
    star: Color::Rgb(0xca, 0x8a, 0x04),
    ok: Color::Rgb(0x16, 0xa3, 0x4a),
    error: Color::Rgb(0xdc, 0x26, 0x26),
};

pub fn theme(mode: ThemeMode) -> &'static Theme {
    match mode {
        ThemeMode::Dark => &DARK,
        ThemeMode::Light => &LIGHT,
    }
}
