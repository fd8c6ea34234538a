/// Straight-alpha RGBA color with 16-bit integer channels.
///
/// Invariant:
/// - every channel is in `0..=Rgba::MAX`.
///
/// The default value is opaque black.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rgba {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

/// Selects one channel of an [`Rgba`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Channel {
    R,
    G,
    B,
    A,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::R, Channel::G, Channel::B, Channel::A];

    /// Element name used for this channel in theme files.
    pub fn name(self) -> &'static str {
        match self {
            Channel::R => "r",
            Channel::G => "g",
            Channel::B => "b",
            Channel::A => "a",
        }
    }
}

impl Rgba {
    /// Largest channel value.
    pub const MAX: u16 = u16::MAX;

    pub const BLACK: Rgba = Rgba::new(0, 0, 0, Self::MAX);
    pub const WHITE: Rgba = Rgba::new(Self::MAX, Self::MAX, Self::MAX, Self::MAX);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from straight 8-bit sRGB bytes (`0`–`255`).
    ///
    /// Each byte is replicated into both halves of the channel, so `0xff`
    /// maps exactly to [`Rgba::MAX`].
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn widen(v: u8) -> u16 {
            (v as u16) << 8 | v as u16
        }
        Self::new(widen(r), widen(g), widen(b), widen(a))
    }

    /// Converts a fraction in `[0, 1]` into a channel value.
    ///
    /// Values outside the range are clamped; NaN maps to zero.
    #[inline]
    pub fn channel_from_fraction(v: f64) -> u16 {
        if v.is_nan() {
            return 0;
        }
        (v.clamp(0.0, 1.0) * Self::MAX as f64).round() as u16
    }

    /// Returns a channel as a fraction in `[0, 1]`.
    #[inline]
    pub fn fraction(self, channel: Channel) -> f64 {
        self.get(channel) as f64 / Self::MAX as f64
    }

    #[inline]
    pub fn get(self, channel: Channel) -> u16 {
        match channel {
            Channel::R => self.r,
            Channel::G => self.g,
            Channel::B => self.b,
            Channel::A => self.a,
        }
    }

    #[inline]
    pub fn set(&mut self, channel: Channel, value: u16) {
        match channel {
            Channel::R => self.r = value,
            Channel::G => self.g = value,
            Channel::B => self.b = value,
            Channel::A => self.a = value,
        }
    }

    /// Builder-style variant of [`set`](Self::set).
    #[inline]
    pub fn with(mut self, channel: Channel, value: u16) -> Self {
        self.set(channel, value);
        self
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == Self::MAX
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn default_is_opaque_black() {
        let c = Rgba::default();
        assert_eq!(c, Rgba::new(0, 0, 0, Rgba::MAX));
        assert!(c.is_opaque());
    }

    // ── fractions ─────────────────────────────────────────────────────────

    #[test]
    fn fraction_endpoints() {
        assert_eq!(Rgba::channel_from_fraction(0.0), 0);
        assert_eq!(Rgba::channel_from_fraction(1.0), Rgba::MAX);
    }

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(Rgba::channel_from_fraction(7.5), Rgba::MAX);
        assert_eq!(Rgba::channel_from_fraction(-1.0), 0);
        assert_eq!(Rgba::channel_from_fraction(f64::NAN), 0);
    }

    #[test]
    fn fraction_midpoint_rounds() {
        assert_eq!(Rgba::channel_from_fraction(0.5), 32768);
    }

    #[test]
    fn fraction_of_channel() {
        assert_eq!(Rgba::WHITE.fraction(Channel::G), 1.0);
        assert_eq!(Rgba::BLACK.fraction(Channel::R), 0.0);
    }

    // ── bytes ─────────────────────────────────────────────────────────────

    #[test]
    fn from_u8_widens() {
        let c = Rgba::from_u8(0xff, 0x00, 0x80, 0xff);
        assert_eq!(c.r, Rgba::MAX);
        assert_eq!(c.g, 0);
        assert_eq!(c.b, 0x8080);
        assert!(c.is_opaque());
    }

    #[test]
    fn set_single_channel() {
        let c = Rgba::BLACK.with(Channel::B, 42);
        assert_eq!(c, Rgba::new(0, 0, 42, Rgba::MAX));
    }
}
