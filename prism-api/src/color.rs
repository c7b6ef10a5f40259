//! Text colors.

use std::fmt;

/// One of the sixteen legacy chat colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    #[rustfmt::skip]
    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Black       => "black",
            NamedColor::DarkBlue    => "dark_blue",
            NamedColor::DarkGreen   => "dark_green",
            NamedColor::DarkAqua    => "dark_aqua",
            NamedColor::DarkRed     => "dark_red",
            NamedColor::DarkPurple  => "dark_purple",
            NamedColor::Gold        => "gold",
            NamedColor::Gray        => "gray",
            NamedColor::DarkGray    => "dark_gray",
            NamedColor::Blue        => "blue",
            NamedColor::Green       => "green",
            NamedColor::Aqua        => "aqua",
            NamedColor::Red         => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow      => "yellow",
            NamedColor::White       => "white",
        }
    }

    #[rustfmt::skip]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black       => (0x00, 0x00, 0x00),
            NamedColor::DarkBlue    => (0x00, 0x00, 0xaa),
            NamedColor::DarkGreen   => (0x00, 0xaa, 0x00),
            NamedColor::DarkAqua    => (0x00, 0xaa, 0xaa),
            NamedColor::DarkRed     => (0xaa, 0x00, 0x00),
            NamedColor::DarkPurple  => (0xaa, 0x00, 0xaa),
            NamedColor::Gold        => (0xff, 0xaa, 0x00),
            NamedColor::Gray        => (0xaa, 0xaa, 0xaa),
            NamedColor::DarkGray    => (0x55, 0x55, 0x55),
            NamedColor::Blue        => (0x55, 0x55, 0xff),
            NamedColor::Green       => (0x55, 0xff, 0x55),
            NamedColor::Aqua        => (0x55, 0xff, 0xff),
            NamedColor::Red         => (0xff, 0x55, 0x55),
            NamedColor::LightPurple => (0xff, 0x55, 0xff),
            NamedColor::Yellow      => (0xff, 0xff, 0x55),
            NamedColor::White       => (0xff, 0xff, 0xff),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.name() == name)
    }
}

/// The color of a component: a named color or an arbitrary RGB value.
///
/// A named color and an RGB value with the same channels are different
/// colors; only the named form survives a round trip as a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    Named(NamedColor),
    Rgb(u8, u8, u8),
}

impl TextColor {
    pub const BLACK: TextColor = TextColor::Named(NamedColor::Black);
    pub const DARK_BLUE: TextColor = TextColor::Named(NamedColor::DarkBlue);
    pub const DARK_GREEN: TextColor = TextColor::Named(NamedColor::DarkGreen);
    pub const DARK_AQUA: TextColor = TextColor::Named(NamedColor::DarkAqua);
    pub const DARK_RED: TextColor = TextColor::Named(NamedColor::DarkRed);
    pub const DARK_PURPLE: TextColor = TextColor::Named(NamedColor::DarkPurple);
    pub const GOLD: TextColor = TextColor::Named(NamedColor::Gold);
    pub const GRAY: TextColor = TextColor::Named(NamedColor::Gray);
    pub const DARK_GRAY: TextColor = TextColor::Named(NamedColor::DarkGray);
    pub const BLUE: TextColor = TextColor::Named(NamedColor::Blue);
    pub const GREEN: TextColor = TextColor::Named(NamedColor::Green);
    pub const AQUA: TextColor = TextColor::Named(NamedColor::Aqua);
    pub const RED: TextColor = TextColor::Named(NamedColor::Red);
    pub const LIGHT_PURPLE: TextColor = TextColor::Named(NamedColor::LightPurple);
    pub const YELLOW: TextColor = TextColor::Named(NamedColor::Yellow);
    pub const WHITE: TextColor = TextColor::Named(NamedColor::White);

    /// Build a color from a packed `0xRRGGBB` value.
    pub const fn from_u32(value: u32) -> Self {
        TextColor::Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            TextColor::Named(named) => named.rgb(),
            TextColor::Rgb(r, g, b) => (r, g, b),
        }
    }

    pub const fn to_u32(self) -> u32 {
        let (r, g, b) = self.rgb();
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }

    /// Parse a named color or a `#rrggbb` hex string.
    pub fn parse(input: &str) -> Option<Self> {
        if let Some(named) = NamedColor::from_name(input) {
            return Some(TextColor::Named(named));
        }
        Self::from_hex(input)
    }

    /// Parse a `#rrggbb` hex string.
    pub fn from_hex(input: &str) -> Option<Self> {
        let hex = input.strip_prefix('#')?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(Self::from_u32)
    }

    pub fn as_hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub const fn named(self) -> Option<NamedColor> {
        match self {
            TextColor::Named(named) => Some(named),
            TextColor::Rgb(..) => None,
        }
    }

    /// The named color closest to this one.
    ///
    /// Distance is squared euclidean distance in RGB space; ties resolve to the
    /// earlier named color.
    pub fn nearest_named(self) -> NamedColor {
        if let TextColor::Named(named) = self {
            return named;
        }
        let (r, g, b) = self.rgb();
        let distance = |named: &NamedColor| {
            let (nr, ng, nb) = named.rgb();
            let dr = r as i32 - nr as i32;
            let dg = g as i32 - ng as i32;
            let db = b as i32 - nb as i32;
            dr * dr + dg * dg + db * db
        };
        NamedColor::ALL
            .into_iter()
            .min_by_key(distance)
            .unwrap_or(NamedColor::White)
    }
}

impl From<NamedColor> for TextColor {
    fn from(named: NamedColor) -> Self {
        TextColor::Named(named)
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextColor::Named(named) => f.write_str(named.name()),
            TextColor::Rgb(..) => f.write_str(&self.as_hex()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_and_hex() {
        assert_eq!(TextColor::parse("red"), Some(TextColor::RED));
        assert_eq!(TextColor::parse("#ff8800"), Some(TextColor::Rgb(0xff, 0x88, 0x00)));
        assert_eq!(TextColor::parse("#FF8800"), Some(TextColor::Rgb(0xff, 0x88, 0x00)));
        assert_eq!(TextColor::parse("#ff88"), None);
        assert_eq!(TextColor::parse("crimson"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TextColor::DARK_AQUA.to_string(), "dark_aqua");
        assert_eq!(TextColor::from_u32(0x0a0b0c).to_string(), "#0a0b0c");
    }

    #[test]
    fn test_nearest_named() {
        assert_eq!(TextColor::Rgb(0xfe, 0x50, 0x50).nearest_named(), NamedColor::Red);
        assert_eq!(TextColor::Rgb(1, 1, 1).nearest_named(), NamedColor::Black);
        assert_eq!(TextColor::GOLD.nearest_named(), NamedColor::Gold);
    }

    #[test]
    fn test_packed_value() {
        assert_eq!(TextColor::RED.to_u32(), 0xff5555);
        assert_eq!(TextColor::from_u32(0x123456).rgb(), (0x12, 0x34, 0x56));
    }
}
