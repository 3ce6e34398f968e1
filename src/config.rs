/// Panel color configuration that can be loaded from JSON
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::format::PixelFormat;
use crate::named;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColorConfig {
    pub pixel_format: PixelFormat,
    #[serde(with = "hex_color")]
    pub foreground: u32,
    #[serde(with = "hex_color")]
    pub background: u32,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            pixel_format: PixelFormat::Rgb565,
            foreground: named::WHITE,
            background: named::BLACK,
        }
    }
}

impl ColorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse color config")?;
        log::debug!(
            "Loaded color config: {:?}, fg {}, bg {}",
            config.pixel_format,
            crate::format::to_hex(config.foreground),
            crate::format::to_hex(config.background)
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self).context("Failed to serialize color config")?;
        log::debug!("Serialized color config ({} bytes)", json.len());
        Ok(json)
    }

    pub fn foreground_pixel(&self) -> u16 {
        self.pixel_format.encode(self.foreground)
    }

    pub fn background_pixel(&self) -> u16 {
        self.pixel_format.encode(self.background)
    }
}

/// Colors are written as `#RRGGBB` and read from anything `parse_color`
/// accepts, or a plain integer
mod hex_color {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::format::{parse_color, to_hex};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Value(u32),
        Text(String),
    }

    pub fn serialize<S: Serializer>(rgb: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex(*rgb))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Value(rgb) if rgb <= 0x00FF_FFFF => Ok(rgb),
            Repr::Value(rgb) => Err(de::Error::custom(format!(
                "color 0x{:X} does not fit in 24 bits",
                rgb
            ))),
            Repr::Text(text) => parse_color(&text).map_err(|e| de::Error::custom(format!("{:#}", e))),
        }
    }
}
