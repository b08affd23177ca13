use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0, a: 1.0 }
    }
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 1.0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value, a: 1.0 }
    }

    /// Parse a hex color string (#RGB or #RRGGBB format). The leading `#` is optional.
    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(format!("Invalid hex color: {}", s));
        }

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color::rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color::rgb(r, g, b))
            }
            _ => Err(format!("Invalid hex color length: expected 3 or 6, got {}", hex.len())),
        }
    }

    /// Parse an `rgba(r,g,b,a)` or `rgb(r,g,b)` functional color.
    pub fn parse_functional(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let inner = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| format!("Not a functional color: {}", s))?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let channel = |p: &str| {
            p.parse::<u8>()
                .map_err(|e| format!("Invalid color channel '{}': {}", p, e))
        };
        match parts.as_slice() {
            [r, g, b] => Ok(Color::rgb(channel(r)?, channel(g)?, channel(b)?)),
            [r, g, b, a] => {
                let a = a
                    .parse::<f32>()
                    .map_err(|e| format!("Invalid alpha '{}': {}", a, e))
                    .and_then(checked_alpha)?;
                Ok(Color::rgba(channel(r)?, channel(g)?, channel(b)?, a))
            }
            _ => Err(format!("Expected 3 or 4 channels, got {}", parts.len())),
        }
    }

    /// Parses any supported notation.
    pub fn parse(s: &str) -> Result<Color, String> {
        let trimmed = s.trim();
        if trimmed.starts_with("rgb") {
            Self::parse_functional(trimmed)
        } else {
            Self::parse_hex(trimmed)
        }
    }

    /// Catalog colors are free text; anything unparseable yields `fallback`.
    pub fn parse_or(s: &str, fallback: Color) -> Color {
        Self::parse(s).unwrap_or(fallback)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_rgba_string(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 1.0 {
            f.write_str(&self.to_hex())
        } else {
            f.write_str(&self.to_rgba_string())
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Alpha must be a finite value in `0..=1`.
fn checked_alpha(a: f32) -> Result<f32, String> {
    if (0.0..=1.0).contains(&a) {
        Ok(a)
    } else {
        Err(format!("Alpha out of range: {}", a))
    }
}

fn default_one() -> f32 {
    1.0
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8, #[serde(default = "default_one")] a: f32 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b, a } => {
                let a = checked_alpha(a).map_err(de::Error::custom)?;
                Ok(Color { r, g, b, a })
            }
        }
    }
}
