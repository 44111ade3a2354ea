use pillpager_core::Rgb;
use ratatui::style::Color;

/// Map an indicator color onto the terminal palette
#[inline]
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Colors of the demo screen around the indicator
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,
    pub fg0: Color,
    pub grey0: Color,
    pub grey2: Color,
    pub accent: Color,
    /// Backgrounds cycled through by carousel pages
    pub pages: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            pages: vec![
                Color::Rgb(0x7d, 0xae, 0xa3),
                Color::Rgb(0xa9, 0xb6, 0x65),
                Color::Rgb(0xd3, 0x86, 0x9b),
                Color::Rgb(0xe7, 0x8a, 0x4e),
                Color::Rgb(0xea, 0x69, 0x62),
            ],
        }
    }
}

impl Theme {
    /// Background of the page at `index`
    pub fn page_color(&self, index: usize) -> Color {
        if self.pages.is_empty() {
            return self.bg1;
        }
        self.pages[index % self.pages.len()]
    }
}
