//! Color helpers shared by themes, the resolver and the animation manager.
//!
//! Colors are plain [Color] values (straight, non-premultiplied sRGB with alpha).
//! Every helper here is a pure function, so callers can compose them freely.

use vello::peniko::Color;

/// Parse a hex color string with optional alpha channel.
///
/// Supports both RGB and RGBA formats:
/// - `#rrggbb` - 6 characters, opaque (alpha = 255)
/// - `#rrggbbaa` - 8 characters, with alpha channel
///
/// Returns [None] for anything else, including strings without the leading `#`,
/// so that theme documents can tell a color literal apart from a key alias.
pub fn parse_hex_color(text: &str) -> Option<Color> {
    let hex = text.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();
    match hex.len() {
        6 => Some(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, 255)),
        8 => Some(Color::from_rgba8(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        _ => None,
    }
}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when it is not fully opaque.
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = rgba8(color);
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Quantize a color to 8-bit channels.
pub fn rgba8(color: Color) -> [u8; 4] {
    color
        .components
        .map(|component| (component.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Returns `color` with its alpha channel replaced by `alpha` (0.0 to 1.0).
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    let [r, g, b, _] = color.components;
    Color::new([r, g, b, alpha.clamp(0.0, 1.0)])
}

/// Returns `color` made fully transparent, keeping its RGB channels.
pub fn transparent(color: Color) -> Color {
    with_alpha(color, 0.0)
}

/// RGB channels of `rgb_source` combined with the alpha channel of `alpha_source`.
pub fn rgb_with_alpha_of(rgb_source: Color, alpha_source: Color) -> Color {
    with_alpha(rgb_source, alpha_source.components[3])
}

/// Component-wise linear interpolation, alpha included.
///
/// `t` is clamped to `[0.0, 1.0]`; `t == 1.0` returns `end` exactly.
pub fn lerp_color(start: Color, end: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        return end;
    }
    let mut components = [0.0; 4];
    for (index, component) in components.iter_mut().enumerate() {
        *component = lerp(start.components[index], end.components[index], t);
    }
    Color::new(components)
}

fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Lighten a color by a percentage factor in HSV space, keeping its alpha.
///
/// `factor` is expressed in percent: `110` brightens by 10%. When the value
/// channel overflows, the overflow is taken out of the saturation instead, so
/// saturated colors drift towards white rather than clipping.
pub fn lighter(color: Color, factor: u32) -> Color {
    let [r, g, b, a] = color.components;
    let (h, s, v) = rgb_to_hsv(r, g, b);

    let mut v = v * factor as f32 / 100.0;
    let mut s = s;
    if v > 1.0 {
        s = (s - (v - 1.0)).max(0.0);
        v = 1.0;
    }

    let (r, g, b) = hsv_to_rgb(h, s, v);
    Color::new([r, g, b, a])
}

fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta <= f32::EPSILON {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max <= f32::EPSILON { 0.0 } else { delta / max };

    (h, s, max)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    (r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        assert_eq!(
            parse_hex_color("#FF0000"),
            Some(Color::from_rgba8(255, 0, 0, 255))
        );
        assert_eq!(
            parse_hex_color("#ff000080"),
            Some(Color::from_rgba8(255, 0, 0, 128))
        );
    }

    #[test]
    fn rejects_aliases_and_garbage() {
        assert_eq!(parse_hex_color("primaryColor"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color("ff0000"), None);
    }

    #[test]
    fn hex_formatting_drops_opaque_alpha() {
        assert_eq!(to_hex(Color::from_rgba8(24, 144, 255, 255)), "#1890ff");
        assert_eq!(to_hex(Color::from_rgba8(0, 0, 0, 32)), "#00000020");
    }

    #[test]
    fn transparent_keeps_rgb() {
        let color = Color::from_rgba8(10, 20, 30, 255);
        let clear = transparent(color);
        assert_eq!(rgba8(clear), [10, 20, 30, 0]);
    }

    #[test]
    fn lerp_hits_both_ends() {
        let start = Color::from_rgba8(0, 0, 0, 0);
        let end = Color::from_rgba8(255, 255, 255, 255);
        assert_eq!(lerp_color(start, end, 0.0), start);
        assert_eq!(lerp_color(start, end, 1.0), end);
        assert_eq!(rgba8(lerp_color(start, end, 0.5)), [128, 128, 128, 128]);
    }

    #[test]
    fn lighter_brightens_value() {
        let color = Color::from_rgba8(100, 50, 50, 200);
        let light = rgba8(lighter(color, 110));
        assert_eq!(light, [110, 55, 55, 200]);
    }

    #[test]
    fn lighter_desaturates_on_overflow() {
        let light = rgba8(lighter(Color::from_rgba8(255, 0, 0, 255), 110));
        assert_eq!(light[0], 255);
        assert!(light[1] > 0 && light[1] == light[2]);
    }
}
