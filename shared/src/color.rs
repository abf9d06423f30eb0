//! Dominant color extraction and naming
//!
//! Works on raw RGBA pixels so it can run on a cutout straight out of the
//! segmentation step; fully transparent pixels (the removed background) are
//! ignored.

use std::collections::HashMap;

use crate::models::DominantColor;

/// How many dominant colors are reported per item
pub const DOMINANT_COLOR_COUNT: usize = 3;

// 4 bits per channel when bucketing pixels into swatches
const QUANT_SHIFT: u32 = 4;

struct Swatch {
    population: u64,
    r_sum: u64,
    g_sum: u64,
    b_sum: u64,
}

/// Extracts up to [`DOMINANT_COLOR_COUNT`] dominant colors from an RGBA
/// buffer. Percentages are relative to the reported swatches and clamped to
/// [0, 100]. Returns an empty list for an empty or fully transparent buffer.
pub fn dominant_colors(rgba: &[u8]) -> Vec<DominantColor> {
    let mut buckets: HashMap<u16, Swatch> = HashMap::new();

    for pixel in rgba.chunks_exact(4) {
        let (r, g, b, a) = (pixel[0], pixel[1], pixel[2], pixel[3]);
        if a == 0 {
            continue;
        }
        let key = (u16::from(r >> QUANT_SHIFT) << 8)
            | (u16::from(g >> QUANT_SHIFT) << 4)
            | u16::from(b >> QUANT_SHIFT);
        let swatch = buckets.entry(key).or_insert(Swatch {
            population: 0,
            r_sum: 0,
            g_sum: 0,
            b_sum: 0,
        });
        swatch.population += 1;
        swatch.r_sum += u64::from(r);
        swatch.g_sum += u64::from(g);
        swatch.b_sum += u64::from(b);
    }

    let mut swatches: Vec<Swatch> = buckets.into_values().collect();
    swatches.sort_by(|a, b| b.population.cmp(&a.population));
    swatches.truncate(DOMINANT_COLOR_COUNT);

    let total: u64 = swatches.iter().map(|s| s.population).sum();
    if total == 0 {
        return Vec::new();
    }

    swatches
        .iter()
        .map(|swatch| {
            let r = (swatch.r_sum / swatch.population) as u8;
            let g = (swatch.g_sum / swatch.population) as u8;
            let b = (swatch.b_sum / swatch.population) as u8;
            DominantColor {
                hex: hex_color(r, g, b),
                name: color_name(r, g, b),
                percentage: (swatch.population as f32 / total as f32 * 100.0).clamp(0.0, 100.0),
            }
        })
        .collect()
}

/// Uppercase CSS-style hex, e.g. "#A0B1C2"
pub fn hex_color(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Human-readable color name from HSV bucketing
pub fn color_name(r: u8, g: u8, b: u8) -> String {
    let (hue, saturation, value) = rgb_to_hsv(r, g, b);

    // Achromatic colors
    if saturation < 0.1 {
        let name = if value < 0.15 {
            "Black"
        } else if value < 0.4 {
            "Dark Gray"
        } else if value < 0.65 {
            "Gray"
        } else if value < 0.85 {
            "Light Gray"
        } else {
            "White"
        };
        return name.to_string();
    }

    // Pastel/muted shades get a prefix
    let prefix = if value < 0.3 {
        "Dark "
    } else if saturation < 0.3 && value > 0.7 {
        "Light "
    } else {
        ""
    };

    let base = if hue < 15.0 {
        "Red"
    } else if hue < 40.0 {
        "Orange"
    } else if hue < 65.0 {
        "Yellow"
    } else if hue < 160.0 {
        "Green"
    } else if hue < 195.0 {
        "Teal"
    } else if hue < 250.0 {
        "Blue"
    } else if hue < 290.0 {
        "Purple"
    } else if hue < 330.0 {
        "Pink"
    } else {
        "Red"
    };

    format!("{}{}", prefix, base)
}

/// Hue in [0, 360), saturation and value in [0, 1]
fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = f32::from(r) / 255.0;
    let g = f32::from(g) / 255.0;
    let b = f32::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    (hue, saturation, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixels(colors: &[([u8; 4], usize)]) -> Vec<u8> {
        let mut out = Vec::new();
        for (rgba, count) in colors {
            for _ in 0..*count {
                out.extend_from_slice(rgba);
            }
        }
        out
    }

    #[test]
    fn names_primary_colors() {
        assert_eq!(color_name(255, 0, 0), "Red");
        assert_eq!(color_name(0, 128, 255), "Blue");
        assert_eq!(color_name(255, 165, 0), "Orange");
    }

    #[test]
    fn names_achromatic_ramp() {
        assert_eq!(color_name(0, 0, 0), "Black");
        assert_eq!(color_name(80, 80, 80), "Dark Gray");
        assert_eq!(color_name(128, 128, 128), "Gray");
        assert_eq!(color_name(200, 200, 200), "Light Gray");
        assert_eq!(color_name(255, 255, 255), "White");
    }

    #[test]
    fn dark_shades_get_prefixed() {
        assert_eq!(color_name(60, 0, 0), "Dark Red");
    }

    #[test]
    fn hex_is_uppercase_with_leading_zeroes() {
        assert_eq!(hex_color(255, 0, 10), "#FF000A");
        assert_eq!(hex_color(0, 0, 0), "#000000");
    }

    #[test]
    fn dominant_colors_ranks_by_population() {
        let buffer = pixels(&[([200, 16, 16, 255], 100), ([16, 16, 200, 255], 50)]);
        let colors = dominant_colors(&buffer);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].name, "Red");
        assert_eq!(colors[1].name, "Blue");
        assert!((colors[0].percentage - 66.666).abs() < 0.1);
        assert!((colors[1].percentage - 33.333).abs() < 0.1);
    }

    #[test]
    fn transparent_pixels_are_ignored() {
        let buffer = pixels(&[([200, 16, 16, 0], 100), ([16, 16, 200, 255], 10)]);
        let colors = dominant_colors(&buffer);
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].name, "Blue");
        assert_eq!(colors[0].percentage, 100.0);
    }

    #[test]
    fn empty_buffer_yields_no_colors() {
        assert!(dominant_colors(&[]).is_empty());
    }
}
