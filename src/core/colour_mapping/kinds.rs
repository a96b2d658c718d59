#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourMapKind {
    #[default]
    Rainbow,
    Rgb,
    VividRainbow,
    SmoothRgb,
}

impl ColourMapKind {
    pub const ALL: &'static [Self] = &[
        Self::Rainbow,
        Self::Rgb,
        Self::VividRainbow,
        Self::SmoothRgb,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rainbow => "rainbow",
            Self::Rgb => "rgb",
            Self::VividRainbow => "vivid rainbow",
            Self::SmoothRgb => "smooth rgb",
        }
    }
}

impl std::fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).name())
    }
}
