//! Validation utilities for WardrobeScan
//!
//! Items arrive from the mobile clients and from the analysis pipeline;
//! these checks gate what is accepted into the wardrobe store.

use crate::models::ClothingCategory;

/// Warmth scores rate insulation from 1 (very light) to 5 (very warm)
pub fn validate_warmth_score(score: i32) -> Result<(), &'static str> {
    if !(1..=5).contains(&score) {
        return Err("Warmth score must be between 1 and 5");
    }
    Ok(())
}

/// Category strings must resolve to one of the six fixed categories
pub fn validate_category(category: &str) -> Result<(), &'static str> {
    category
        .parse::<ClothingCategory>()
        .map(|_| ())
        .map_err(|_| "Unknown clothing category")
}

/// Hex colors are written as "#RRGGBB"
pub fn validate_hex_color(hex: &str) -> Result<(), &'static str> {
    let digits = hex
        .strip_prefix('#')
        .ok_or("Hex color must start with '#'")?;
    if digits.len() != 6 {
        return Err("Hex color must have six digits");
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("Hex color must be hexadecimal");
    }
    Ok(())
}

/// Model confidences are reported in [0, 1]
pub fn validate_confidence(confidence: f32) -> Result<(), &'static str> {
    if !(0.0..=1.0).contains(&confidence) {
        return Err("Confidence must be between 0 and 1");
    }
    Ok(())
}

/// Outfit ratings: 0 = unrated, 1-5 stars
pub fn validate_rating(rating: i32) -> Result<(), &'static str> {
    if !(0..=5).contains(&rating) {
        return Err("Rating must be between 0 and 5");
    }
    Ok(())
}

/// GPS coordinates within valid ranges
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), &'static str> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warmth_score_bounds() {
        assert!(validate_warmth_score(1).is_ok());
        assert!(validate_warmth_score(3).is_ok());
        assert!(validate_warmth_score(5).is_ok());
        assert!(validate_warmth_score(0).is_err());
        assert!(validate_warmth_score(6).is_err());
    }

    #[test]
    fn test_category_is_case_insensitive() {
        assert!(validate_category("top").is_ok());
        assert!(validate_category("OUTERWEAR").is_ok());
        assert!(validate_category("Shoes").is_ok());
        assert!(validate_category("hat").is_err());
        assert!(validate_category("").is_err());
    }

    #[test]
    fn test_hex_color_format() {
        assert!(validate_hex_color("#FF0000").is_ok());
        assert!(validate_hex_color("#a0b1c2").is_ok());
        assert!(validate_hex_color("FF0000").is_err());
        assert!(validate_hex_color("#FFF").is_err());
        assert!(validate_hex_color("#GG0000").is_err());
    }

    #[test]
    fn test_confidence_bounds() {
        assert!(validate_confidence(0.0).is_ok());
        assert!(validate_confidence(0.6).is_ok());
        assert!(validate_confidence(1.0).is_ok());
        assert!(validate_confidence(-0.1).is_err());
        assert!(validate_confidence(1.1).is_err());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(0).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(-1).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_coordinate_ranges() {
        assert!(validate_coordinates(32.08, 34.78).is_ok());
        assert!(validate_coordinates(-90.0, 180.0).is_ok());
        assert!(validate_coordinates(90.5, 0.0).is_err());
        assert!(validate_coordinates(0.0, -180.5).is_err());
    }
}
