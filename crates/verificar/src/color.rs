//! Canonical CSS color model and comparator.
//!
//! Browsers report the same color in different shapes depending on the
//! engine: `rgba(0, 128, 0, 1)`, `rgb(0, 128, 0)`, `#008000`, or `green`.
//! [`Rgba`] normalizes every supported representation into one 4-channel
//! value so checks compare colors by what they denote, never by how the
//! engine chose to spell them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::result::{VerifyError, VerifyResult};

/// Canonical RGBA color
///
/// Channels are 0-255 for red/green/blue and 0.0-1.0 for alpha. Two values
/// are equal iff all four channels match after normalization; the source
/// representation is never part of identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0.0-1.0)
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    /// Opaque black
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
    };

    /// Opaque white
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 1.0,
    };

    /// Create a new RGBA color
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 1.0)
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Whether the color is fully transparent
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.a == 0.0
    }

    /// Parse a CSS color string into its canonical value
    ///
    /// Supported grammars:
    /// - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
    /// - Functional: `rgb(r, g, b)`, `rgba(r, g, b, a)` with integer or
    ///   percentage channels
    /// - Recognized named colors and `transparent`
    ///
    /// Alpha defaults to fully opaque when the representation omits it.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::UnparsableColor`] if the string matches no
    /// supported grammar.
    pub fn parse(raw: &str) -> VerifyResult<Self> {
        let s = raw.trim();

        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        if s.starts_with('#') {
            return parse_hex(s);
        }
        if s.starts_with("rgb(") || s.starts_with("rgba(") {
            return parse_rgb(s);
        }
        if let Some(named) = lookup_named(s) {
            return Ok(named);
        }

        Err(VerifyError::UnparsableColor {
            value: raw.to_string(),
        })
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 1.0 {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

fn unparsable(s: &str) -> VerifyError {
    VerifyError::UnparsableColor {
        value: s.to_string(),
    }
}

/// Parse `#RGB`, `#RGBA`, `#RRGGBB`, or `#RRGGBBAA`
fn parse_hex(s: &str) -> VerifyResult<Rgba> {
    let hex = &s[1..];
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(unparsable(s));
    }

    let wide = |i: usize| u8::from_str_radix(&hex[i..=i].repeat(2), 16).map_err(|_| unparsable(s));
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| unparsable(s));

    let (r, g, b, a) = match hex.len() {
        3 => (wide(0)?, wide(1)?, wide(2)?, 1.0),
        4 => (wide(0)?, wide(1)?, wide(2)?, f32::from(wide(3)?) / 255.0),
        6 => (pair(0)?, pair(2)?, pair(4)?, 1.0),
        8 => (pair(0)?, pair(2)?, pair(4)?, f32::from(pair(6)?) / 255.0),
        _ => return Err(unparsable(s)),
    };

    Ok(Rgba::new(r, g, b, a))
}

/// Parse `rgb(...)` or `rgba(...)`
fn parse_rgb(s: &str) -> VerifyResult<Rgba> {
    let open = s.find('(').ok_or_else(|| unparsable(s))?;
    let close = s.find(')').ok_or_else(|| unparsable(s))?;
    if close < open || !s[close + 1..].trim().is_empty() {
        return Err(unparsable(s));
    }

    let parts: Vec<&str> = s[open + 1..close].split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(unparsable(s));
    }

    let r = parse_channel(parts[0]).ok_or_else(|| unparsable(s))?;
    let g = parse_channel(parts[1]).ok_or_else(|| unparsable(s))?;
    let b = parse_channel(parts[2]).ok_or_else(|| unparsable(s))?;
    let a = if parts.len() == 4 {
        let a = parts[3].parse::<f32>().map_err(|_| unparsable(s))?;
        if !(0.0..=1.0).contains(&a) {
            return Err(unparsable(s));
        }
        a
    } else {
        1.0
    };

    Ok(Rgba::new(r, g, b, a))
}

/// Parse one functional-notation channel (`128` or `50%`)
fn parse_channel(s: &str) -> Option<u8> {
    if let Some(percent) = s.strip_suffix('%') {
        let value = percent.parse::<f32>().ok()?;
        if !(0.0..=100.0).contains(&value) {
            return None;
        }
        Some((value / 100.0 * 255.0).round() as u8)
    } else {
        s.parse::<u8>().ok()
    }
}

/// Recognized CSS named colors
///
/// The basic keyword set plus the extended names that show up in computed
/// styles in practice. Lookup is case-insensitive.
fn lookup_named(s: &str) -> Option<Rgba> {
    let name = s.to_ascii_lowercase();
    let (r, g, b) = match name.as_str() {
        "black" => (0, 0, 0),
        "silver" => (192, 192, 192),
        "gray" | "grey" => (128, 128, 128),
        "white" => (255, 255, 255),
        "maroon" => (128, 0, 0),
        "red" => (255, 0, 0),
        "purple" => (128, 0, 128),
        "fuchsia" | "magenta" => (255, 0, 255),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "olive" => (128, 128, 0),
        "yellow" => (255, 255, 0),
        "navy" => (0, 0, 128),
        "blue" => (0, 0, 255),
        "teal" => (0, 128, 128),
        "aqua" | "cyan" => (0, 255, 255),
        "orange" => (255, 165, 0),
        "brown" => (165, 42, 42),
        "coral" => (255, 127, 80),
        "crimson" => (220, 20, 60),
        "darkblue" => (0, 0, 139),
        "darkgray" | "darkgrey" => (169, 169, 169),
        "darkgreen" => (0, 100, 0),
        "darkorange" => (255, 140, 0),
        "darkred" => (139, 0, 0),
        "dimgray" | "dimgrey" => (105, 105, 105),
        "gold" => (255, 215, 0),
        "hotpink" => (255, 105, 180),
        "indigo" => (75, 0, 130),
        "ivory" => (255, 255, 240),
        "khaki" => (240, 230, 140),
        "lavender" => (230, 230, 250),
        "lightblue" => (173, 216, 230),
        "lightgray" | "lightgrey" => (211, 211, 211),
        "lightgreen" => (144, 238, 144),
        "lightyellow" => (255, 255, 224),
        "pink" => (255, 192, 203),
        "plum" => (221, 160, 221),
        "salmon" => (250, 128, 114),
        "skyblue" => (135, 206, 235),
        "slategray" | "slategrey" => (112, 128, 144),
        "tan" => (210, 180, 140),
        "tomato" => (255, 99, 71),
        "turquoise" => (64, 224, 208),
        "violet" => (238, 130, 238),
        "wheat" => (245, 222, 179),
        _ => return None,
    };
    Some(Rgba::rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parse_tests {
        use super::*;

        #[test]
        fn test_parse_hex_long_form() {
            assert_eq!(Rgba::parse("#008000").unwrap(), Rgba::rgb(0, 128, 0));
        }

        #[test]
        fn test_parse_hex_short_form() {
            assert_eq!(Rgba::parse("#f00").unwrap(), Rgba::rgb(255, 0, 0));
        }

        #[test]
        fn test_parse_hex_with_alpha() {
            let color = Rgba::parse("#ff000080").unwrap();
            assert_eq!((color.r, color.g, color.b), (255, 0, 0));
            assert!((color.a - 128.0 / 255.0).abs() < f32::EPSILON);
        }

        #[test]
        fn test_parse_rgb_function() {
            assert_eq!(
                Rgba::parse("rgb(0, 128, 0)").unwrap(),
                Rgba::rgb(0, 128, 0)
            );
        }

        #[test]
        fn test_parse_rgba_function() {
            assert_eq!(
                Rgba::parse("rgba(10, 20, 30, 0.5)").unwrap(),
                Rgba::new(10, 20, 30, 0.5)
            );
        }

        #[test]
        fn test_parse_percentage_channels() {
            assert_eq!(
                Rgba::parse("rgb(100%, 0%, 50%)").unwrap(),
                Rgba::rgb(255, 0, 128)
            );
        }

        #[test]
        fn test_parse_named_color() {
            assert_eq!(Rgba::parse("green").unwrap(), Rgba::rgb(0, 128, 0));
            assert_eq!(Rgba::parse("Red").unwrap(), Rgba::rgb(255, 0, 0));
        }

        #[test]
        fn test_parse_transparent() {
            assert_eq!(Rgba::parse("transparent").unwrap(), Rgba::TRANSPARENT);
        }

        #[test]
        fn test_parse_surrounding_whitespace() {
            assert_eq!(Rgba::parse("  #fff ").unwrap(), Rgba::WHITE);
        }

        #[test]
        fn test_parse_rejects_garbage() {
            for bad in ["", "nonsense", "#12", "#12345", "rgb(1,2)", "rgb(300, 0, 0)"] {
                let err = Rgba::parse(bad).unwrap_err();
                assert!(
                    matches!(err, VerifyError::UnparsableColor { .. }),
                    "{bad} should be unparsable"
                );
            }
        }

        #[test]
        fn test_parse_rejects_out_of_range_alpha() {
            assert!(Rgba::parse("rgba(0, 0, 0, 1.5)").is_err());
        }
    }

    mod equality_tests {
        use super::*;

        #[test]
        fn test_equality_is_representation_independent() {
            let forms = ["rgb(0, 128, 0)", "rgb(0,128,0)", "#008000", "green"];
            for a in forms {
                for b in forms {
                    assert_eq!(
                        Rgba::parse(a).unwrap(),
                        Rgba::parse(b).unwrap(),
                        "{a} and {b} should denote the same color"
                    );
                }
            }
        }

        #[test]
        fn test_alpha_defaults_to_opaque() {
            assert_eq!(
                Rgba::parse("rgb(1, 2, 3)").unwrap(),
                Rgba::parse("rgba(1, 2, 3, 1.0)").unwrap()
            );
        }

        #[test]
        fn test_alpha_participates_in_identity() {
            assert_ne!(
                Rgba::parse("rgba(1, 2, 3, 0.5)").unwrap(),
                Rgba::parse("rgb(1, 2, 3)").unwrap()
            );
        }
    }

    mod display_tests {
        use super::*;

        #[test]
        fn test_display_opaque() {
            assert_eq!(Rgba::rgb(0, 128, 0).to_string(), "rgb(0, 128, 0)");
        }

        #[test]
        fn test_display_with_alpha() {
            assert_eq!(
                Rgba::new(0, 0, 0, 0.5).to_string(),
                "rgba(0, 0, 0, 0.5)"
            );
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_hex_and_functional_forms_agree(r: u8, g: u8, b: u8) {
                let hex = format!("#{r:02x}{g:02x}{b:02x}");
                let functional = format!("rgb({r}, {g}, {b})");
                prop_assert_eq!(
                    Rgba::parse(&hex).unwrap(),
                    Rgba::parse(&functional).unwrap()
                );
            }

            #[test]
            fn prop_equality_is_symmetric(r: u8, g: u8, b: u8) {
                let a = Rgba::parse(&format!("rgb({r}, {g}, {b})")).unwrap();
                let b = Rgba::parse(&format!("#{r:02x}{g:02x}{b:02x}")).unwrap();
                prop_assert_eq!(a == b, b == a);
            }
        }
    }
}
