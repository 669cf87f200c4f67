#![cfg_attr(not(feature = "gpui"), allow(dead_code))]

/// Parses `#rgb`, `#rrggbb`, `#rrggbbaa` or `transparent` into a hex value
/// and alpha component.
///
/// Theme tokens such as `gray.500` are not colors and yield `None`.
pub fn parse_hex(value: &str) -> Option<(u32, f32)> {
    if value == "transparent" {
        return Some((0, 0.));
    }

    let digits = value.strip_prefix('#')?;
    if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        3 => {
            let expanded: String = digits.chars().flat_map(|ch| [ch, ch]).collect();
            Some((u32::from_str_radix(&expanded, 16).ok()?, 1.))
        }
        6 => Some((u32::from_str_radix(digits, 16).ok()?, 1.)),
        8 => {
            let rgba = u32::from_str_radix(digits, 16).ok()?;
            Some((rgba >> 8, (rgba & 0xff) as f32 / 255.))
        }
        _ => None,
    }
}

/// Creates an RGBA color from a hex value and alpha component.
#[cfg(feature = "gpui")]
pub fn rgb_a(hex: u32, a: f32) -> gpui::Rgba {
    let [_, r, g, b] = hex.to_be_bytes().map(|b| (b as f32) / 255.0);
    gpui::Rgba { r, g, b, a }
}
