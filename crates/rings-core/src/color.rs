//! Hex colour parsing for panel edits.
//!
//! Colours travel through the panel as `#RRGGBB` strings and are stored on
//! lights and materials as normalized RGB.

/// Linear 0..1 RGB triple.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (leading `#` optional, case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex_to_rgb(hex)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Pack into a vec4-friendly array with `w` in the last lane.
    pub fn extend(self, w: f32) -> [f32; 4] {
        [self.r, self.g, self.b, w]
    }

    pub fn scaled(self, k: f32) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    /// Format as lowercase `#rrggbb`, rounding each channel.
    pub fn to_hex(self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

/// Convert a `#RRGGBB` string to normalized RGB; `None` when malformed.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(
        channel(0)? as f32 / 255.0,
        channel(2)? as f32 / 255.0,
        channel(4)? as f32 / 255.0,
    ))
}

/// Overwrite `target` with the parsed colour. Malformed input leaves it untouched.
///
/// Returns whether the target changed.
pub fn assign_hex(target: &mut Rgb, hex: &str) -> bool {
    match hex_to_rgb(hex) {
        Some(rgb) => {
            *target = rgb;
            true
        }
        None => {
            log::warn!("[panel] ignoring malformed colour {:?}", hex);
            false
        }
    }
}
