use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Palette colors
    pub red: Color,
    pub amber: Color,
    pub green: Color,

    // Semantic colors
    pub selection: Color,
    pub heading: Color,
    pub current: Color,
    pub upcoming: Color,
    pub tentative: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Near-black noir palette with a single warm accent
        Self {
            bg0: Color::Rgb(0x0a, 0x0a, 0x0a),
            bg1: Color::Rgb(0x14, 0x14, 0x14),
            bg2: Color::Rgb(0x22, 0x22, 0x22),
            fg0: Color::Rgb(0xe8, 0xe4, 0xdc),
            fg1: Color::Rgb(0xc9, 0xc4, 0xba),
            grey0: Color::Rgb(0x6a, 0x66, 0x60),
            grey1: Color::Rgb(0x8c, 0x87, 0x7f),
            red: Color::Rgb(0xc4, 0x5a, 0x4e),
            amber: Color::Rgb(0xd6, 0xa2, 0x4e),
            green: Color::Rgb(0x8f, 0xb5, 0x6f),
            selection: Color::Rgb(0x2e, 0x2a, 0x24),
            heading: Color::Rgb(0xe8, 0xe4, 0xdc),
            current: Color::Rgb(0x8f, 0xb5, 0x6f),
            upcoming: Color::Rgb(0xd6, 0xa2, 0x4e),
            tentative: Color::Rgb(0x8c, 0x87, 0x7f),
            accent: Color::Rgb(0xb8, 0x8a, 0x4a),
        }
    }
}
