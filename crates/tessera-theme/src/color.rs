use tessera_engine::paint::{Channel, Rgba};

use crate::cursor::ThemeCursor;
use crate::error::ThemeError;
use crate::gradient::{parse_linear_gradient, parse_radial_gradient, LinearGradient, RadialGradient};
use crate::number::optional_f64;

/// A color defined relative to another theme color.
///
/// Each present channel is a factor applied to the base color's channel
/// when the theme is used, not when it is parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaledColor {
    /// Name of the base color.
    pub from: String,
    pub r: Option<f64>,
    pub g: Option<f64>,
    pub b: Option<f64>,
    pub a: Option<f64>,
}

impl ScaledColor {
    pub fn get(&self, channel: Channel) -> Option<f64> {
        match channel {
            Channel::R => self.r,
            Channel::G => self.g,
            Channel::B => self.b,
            Channel::A => self.a,
        }
    }

    fn set(&mut self, channel: Channel, value: f64) {
        let slot = match channel {
            Channel::R => &mut self.r,
            Channel::G => &mut self.g,
            Channel::B => &mut self.b,
            Channel::A => &mut self.a,
        };
        *slot = Some(value);
    }

    /// Applies the channel factors to `base`. Absent channels are kept.
    pub fn apply(&self, base: Rgba) -> Rgba {
        let mut out = base;
        for channel in Channel::ALL {
            if let Some(factor) = self.get(channel) {
                out.set(channel, Rgba::channel_from_fraction(base.fraction(channel) * factor));
            }
        }
        out
    }
}

/// Parsed `<color>` element.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    Rgb(Rgba),
    Scaled(ScaledColor),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
}

impl ColorValue {
    pub fn kind(&self) -> &'static str {
        match self {
            ColorValue::Rgb(_) => "rgb",
            ColorValue::Scaled(_) => "scaled",
            ColorValue::LinearGradient(_) => "linear_gradient",
            ColorValue::RadialGradient(_) => "radial_gradient",
        }
    }
}

/// Parses the `<color>` element at `cursor`.
///
/// - `type="linear_gradient"` / `type="radial_gradient"`: a gradient.
/// - a non-empty `scale` attribute: a [`ScaledColor`] based on that color,
///   channel values stored as given.
/// - otherwise an explicit color. `<r>`, `<g>`, `<b>`, `<a>` are fractions;
///   values above 1 are clamped, negative values are an error, and absent
///   channels keep the opaque black default.
pub fn parse_color(cursor: &ThemeCursor<'_>) -> Result<ColorValue, ThemeError> {
    match cursor.attribute("type") {
        "linear_gradient" => return parse_linear_gradient(cursor).map(ColorValue::LinearGradient),
        "radial_gradient" => return parse_radial_gradient(cursor).map(ColorValue::RadialGradient),
        "" | "rgb" => {}
        other => return Err(ThemeError::UnknownColorType(other.to_string())),
    }

    let scale = cursor.attribute("scale");
    if !scale.is_empty() {
        let mut scaled = ScaledColor { from: scale.to_string(), ..ScaledColor::default() };
        for channel in Channel::ALL {
            if let Some(v) = optional_f64(cursor, channel.name())? {
                scaled.set(channel, v);
            }
        }
        return Ok(ColorValue::Scaled(scaled));
    }

    let mut rgb = Rgba::default();
    for channel in Channel::ALL {
        let Some(v) = optional_f64(cursor, channel.name())? else {
            continue;
        };
        if v < 0.0 {
            return Err(ThemeError::NegativeChannel { element: channel.name().to_string(), value: v });
        }
        if v > 1.0 {
            log::debug!("<{}> {} clamped to 1", channel.name(), v);
        }
        rgb.set(channel, Rgba::channel_from_fraction(v.min(1.0)));
    }
    Ok(ColorValue::Rgb(rgb))
}
