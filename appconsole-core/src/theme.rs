//! Palette derivation from one base color
//!
//! The console and the previews are themed from a single primary color.
//! Lighter and darker shades are mixed towards white/black; the text color
//! on top of the base is picked by relative luminance.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Primary color used when the app configuration has none.
pub const DEFAULT_PRIMARY: &str = "#1e88e5";

/// sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (the `#` is optional).
    pub fn parse_hex(input: &str) -> CoreResult<Self> {
        let hex = input.trim().trim_start_matches('#');
        let invalid = || CoreError::ValidationError(format!("Invalid color: '{input}'"));
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear interpolation towards `other`; `amount` is clamped to 0..=1.
    pub fn mix(self, other: Rgb, amount: f32) -> Rgb {
        let t = amount.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| {
            let v = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
            // Clamped to 0..=255 above, so the cast cannot truncate.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let v = v.round().clamp(0.0, 255.0) as u8;
            v
        };
        Rgb::new(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }

    /// WCAG relative luminance (0 = black, 1 = white).
    pub fn luminance(self) -> f32 {
        let linear = |c: u8| {
            let c = f32::from(c) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// Readable text color on top of this one.
    pub fn contrast_text(self) -> Rgb {
        if self.luminance() > 0.45 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Shades derived from one base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub base: Rgb,
    pub light: Rgb,
    pub lighter: Rgb,
    /// Near-white tint for backgrounds.
    pub surface: Rgb,
    pub dark: Rgb,
    pub darker: Rgb,
    pub contrast_text: Rgb,
}

impl Palette {
    pub fn from_base(base: Rgb) -> Self {
        Self {
            base,
            light: base.mix(Rgb::WHITE, 0.25),
            lighter: base.mix(Rgb::WHITE, 0.5),
            surface: base.mix(Rgb::WHITE, 0.9),
            dark: base.mix(Rgb::BLACK, 0.2),
            darker: base.mix(Rgb::BLACK, 0.4),
            contrast_text: base.contrast_text(),
        }
    }

    /// Global style overrides as CSS custom properties, for the web app
    /// and exported themes.
    pub fn css_overrides(&self) -> String {
        let vars = [
            ("--primary", self.base),
            ("--primary-light", self.light),
            ("--primary-lighter", self.lighter),
            ("--primary-surface", self.surface),
            ("--primary-dark", self.dark),
            ("--primary-darker", self.darker),
            ("--primary-contrast", self.contrast_text),
        ];
        let mut css = String::from(":root {\n");
        for (name, color) in vars {
            css.push_str(&format!("  {name}: {color};\n"));
        }
        css.push_str("}\n");
        css.push_str(&format!(
            "a, .text-primary {{ color: {}; }}\n.bg-primary {{ background-color: {}; color: {}; }}\n",
            self.base, self.base, self.contrast_text
        ));
        css
    }
}

/// Palette for a hex color.
pub fn derive_palette(hex: &str) -> CoreResult<Palette> {
    Rgb::parse_hex(hex).map(Palette::from_base)
}

/// Palette for an optional configured color; invalid or missing colors use
/// [`DEFAULT_PRIMARY`].
pub fn palette_or_default(hex: Option<&str>) -> Palette {
    hex.and_then(|h| match derive_palette(h) {
        Ok(p) => Some(p),
        Err(e) => {
            log::warn!("{e}, using default theme color");
            None
        }
    })
    .unwrap_or_else(|| Palette::from_base(Rgb::new(0x1e, 0x88, 0xe5)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_forms() {
        assert_eq!(Rgb::parse_hex("#1e88e5").unwrap(), Rgb::new(0x1e, 0x88, 0xe5));
        assert_eq!(Rgb::parse_hex("fff").unwrap(), Rgb::WHITE);
        assert_eq!(Rgb::parse_hex(" #000000 ").unwrap(), Rgb::BLACK);
        for bad in ["", "#12", "#12345g", "#1234567", "+1+2+3"] {
            assert!(Rgb::parse_hex(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn hex_roundtrip() {
        assert_eq!(Rgb::parse_hex(DEFAULT_PRIMARY).unwrap().to_hex(), DEFAULT_PRIMARY);
    }

    #[test]
    fn shades_are_ordered_by_luminance() {
        let p = derive_palette("#1e88e5").unwrap();
        let l = |c: Rgb| c.luminance();
        assert!(l(p.darker) < l(p.dark));
        assert!(l(p.dark) < l(p.base));
        assert!(l(p.base) < l(p.light));
        assert!(l(p.light) < l(p.lighter));
        assert!(l(p.lighter) < l(p.surface));
    }

    #[test]
    fn contrast_text_choice() {
        assert_eq!(Rgb::parse_hex("#ffeb3b").unwrap().contrast_text(), Rgb::BLACK);
        assert_eq!(Rgb::parse_hex("#0d47a1").unwrap().contrast_text(), Rgb::WHITE);
    }

    #[test]
    fn mix_extremes() {
        let c = Rgb::new(10, 20, 30);
        assert_eq!(c.mix(Rgb::WHITE, 0.0), c);
        assert_eq!(c.mix(Rgb::WHITE, 1.0), Rgb::WHITE);
        assert_eq!(c.mix(Rgb::WHITE, 7.0), Rgb::WHITE);
    }

    #[test]
    fn css_contains_every_variable() {
        let css = derive_palette("#1e88e5").unwrap().css_overrides();
        assert!(css.contains("--primary: #1e88e5;"));
        assert!(css.contains("--primary-contrast:"));
        assert!(css.starts_with(":root {"));
    }

    #[test]
    fn invalid_configured_color_uses_default() {
        let p = palette_or_default(Some("not-a-color"));
        assert_eq!(p.base.to_hex(), DEFAULT_PRIMARY);
        assert_eq!(palette_or_default(None), p);
    }
}
