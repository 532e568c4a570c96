use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Caller-side palettes for the renderer handoff
// ---------------------------------------------------------------------------
//
// The core does not decide point colors; it only offers palettes and the
// index-to-color cycling the renderer handoff needs.

/// The matplotlib "tab10" categorical palette.
pub const TAB10: [Srgb<u8>; 10] = [
    Srgb::new(31, 119, 180),
    Srgb::new(255, 127, 14),
    Srgb::new(44, 160, 44),
    Srgb::new(214, 39, 40),
    Srgb::new(148, 103, 189),
    Srgb::new(140, 86, 75),
    Srgb::new(227, 119, 194),
    Srgb::new(127, 127, 127),
    Srgb::new(188, 189, 34),
    Srgb::new(23, 190, 207),
];

const FALLBACK_GRAY: Srgb<u8> = Srgb::new(128, 128, 128);

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Srgb<u8>> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Srgb::new(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Colour for the group at `index`, cycling through the palette the way the
/// rendering scripts cycle a colormap. An empty palette yields gray.
pub fn color_for_index(palette: &[Srgb<u8>], index: usize) -> Srgb<u8> {
    if palette.is_empty() {
        return FALLBACK_GRAY;
    }
    palette[index % palette.len()]
}

/// `#rrggbb` string for renderers that take hex colours.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting() {
        assert_eq!(to_hex(Srgb::new(31, 119, 180)), "#1f77b4");
        assert_eq!(to_hex(Srgb::new(0, 0, 0)), "#000000");
    }

    #[test]
    fn index_cycles_through_the_palette() {
        assert_eq!(color_for_index(&TAB10, 0), TAB10[0]);
        assert_eq!(color_for_index(&TAB10, 10), TAB10[0]);
        assert_eq!(color_for_index(&TAB10, 13), TAB10[3]);
        assert_eq!(color_for_index(&[], 5), FALLBACK_GRAY);
    }

    #[test]
    fn generated_palette_has_distinct_entries() {
        let palette = generate_palette(8);
        assert_eq!(palette.len(), 8);
        for i in 0..palette.len() {
            for j in (i + 1)..palette.len() {
                assert_ne!(palette[i], palette[j]);
            }
        }
        assert!(generate_palette(0).is_empty());
    }
}
