//! Colors, urgency levels, and the per-card palette.

use caredeck_motion::Lerp;

/// RGBA color, channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}

impl Lerp for Color {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self(
            self.0.lerp(&target.0, fraction),
            self.1.lerp(&target.1, fraction),
            self.2.lerp(&target.2, fraction),
            self.3.lerp(&target.3, fraction),
        )
    }
}

/// How serious a swipe action's effect is. Gates whether a triggered
/// action needs explicit confirmation before its effect runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Urgency {
    #[default]
    Normal,
    High,
    Critical,
}

/// Accent colors per urgency, passed into each card explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UrgencyPalette {
    /// Card accent at rest and while no candidate is active.
    pub idle: Color,
    pub normal: Color,
    pub high: Color,
    pub critical: Color,
    /// Halo color for pulsing alert cards.
    pub glow: Color,
}

impl UrgencyPalette {
    pub fn accent_for(&self, urgency: Urgency) -> Color {
        match urgency {
            Urgency::Normal => self.normal,
            Urgency::High => self.high,
            Urgency::Critical => self.critical,
        }
    }
}

impl Default for UrgencyPalette {
    fn default() -> Self {
        Self {
            idle: Color::from_rgb_u8(0xEC, 0xEF, 0xF4),
            normal: Color::from_rgb_u8(0x2E, 0xA4, 0x6B),
            high: Color::from_rgb_u8(0xE8, 0x9C, 0x1C),
            critical: Color::from_rgb_u8(0xD6, 0x3A, 0x3A),
            glow: Color::from_rgba_u8(0xD6, 0x3A, 0x3A, 0x66),
        }
    }
}
