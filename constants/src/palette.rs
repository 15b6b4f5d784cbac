use bevy::color::Color;

/// One colour per section, mirrored by the page stylesheet.
pub const SECTION_COLORS: [[u8; 3]; 5] = [
    [0xff, 0x6b, 0x6b], // red
    [0x4e, 0xcd, 0xc4], // teal
    [0x45, 0xb7, 0xd1], // blue
    [0x96, 0xce, 0xb4], // green
    [0xfe, 0xca, 0x57], // yellow
];

/// Label placeholders are plain white.
pub const LABEL_COLOR: [u8; 3] = [0xff, 0xff, 0xff];

/// The accent point light reuses the first section colour.
pub const ACCENT_LIGHT_COLOR: [u8; 3] = SECTION_COLORS[0];

pub fn section_color(index: usize) -> Color {
    let [r, g, b] = SECTION_COLORS[index % SECTION_COLORS.len()];
    Color::srgb_u8(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SECTION_COUNT;

    #[test]
    fn one_colour_per_section() {
        assert_eq!(SECTION_COLORS.len(), SECTION_COUNT);
    }

    #[test]
    fn out_of_range_indices_wrap() {
        assert_eq!(section_color(0), section_color(SECTION_COLORS.len()));
    }
}
