//! WebAssembly module for WardrobeScan
//!
//! Provides client-side computation for:
//! - Outfit suggestions
//! - Label-to-category mapping
//! - Color naming and extraction
//! - Weather classification

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Generate up to three outfit suggestions from JSON-encoded items and
/// weather. Returns a JSON array of outfit candidates.
#[wasm_bindgen]
pub fn suggest_outfits(
    items_json: &str,
    weather_json: &str,
    occasion: &str,
) -> Result<String, JsValue> {
    let items: Vec<ClothingItem> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid items JSON: {}", e)))?;
    let weather: WeatherSnapshot = serde_json::from_str(weather_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weather JSON: {}", e)))?;

    let outfits = shared::suggestion::suggest(
        &items,
        &weather,
        Occasion::from_str_or_default(occasion),
    );
    serde_json::to_string(&outfits).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Same as [`suggest_outfits`], but with a caller-provided seed so the
/// output is reproducible
#[wasm_bindgen]
pub fn suggest_outfits_seeded(
    items_json: &str,
    weather_json: &str,
    occasion: &str,
    seed: u32,
) -> Result<String, JsValue> {
    let items: Vec<ClothingItem> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid items JSON: {}", e)))?;
    let weather: WeatherSnapshot = serde_json::from_str(weather_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weather JSON: {}", e)))?;

    let mut rng = StdRng::seed_from_u64(u64::from(seed));
    let outfits = shared::suggestion::suggest_with_rng(
        &items,
        &weather,
        Occasion::from_str_or_default(occasion),
        &mut rng,
    );
    serde_json::to_string(&outfits).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Map a single vision label to a clothing category name
#[wasm_bindgen]
pub fn map_clothing_label(label: &str) -> Option<String> {
    shared::labeling::map_label(label).map(|category| category.to_string())
}

/// Map a JSON array of labels (sorted by confidence) to the best category.
/// Returns a JSON object {"category", "label"} or "null".
#[wasm_bindgen]
pub fn best_category_match(labels_json: &str) -> Result<String, JsValue> {
    let labels: Vec<String> = serde_json::from_str(labels_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid labels JSON: {}", e)))?;

    let result = shared::labeling::best_match(&labels)
        .map(|(category, label)| {
            serde_json::json!({
                "category": category.as_str(),
                "label": label,
            })
            .to_string()
        })
        .unwrap_or_else(|| "null".to_string());
    Ok(result)
}

/// Human-readable name for an RGB color
#[wasm_bindgen]
pub fn name_color(r: u8, g: u8, b: u8) -> String {
    shared::color::color_name(r, g, b)
}

/// Hex rendering of an RGB color
#[wasm_bindgen]
pub fn color_hex(r: u8, g: u8, b: u8) -> String {
    shared::color::hex_color(r, g, b)
}

/// Extract dominant colors from raw RGBA pixels. Returns a JSON array.
#[wasm_bindgen]
pub fn extract_dominant_colors(rgba: &[u8]) -> Result<String, JsValue> {
    let colors = shared::color::dominant_colors(rgba);
    serde_json::to_string(&colors).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Classify weather into the bucket the suggestion rules react to:
/// "rainy", "snowy", "cold", "hot" or "mild"
#[wasm_bindgen]
pub fn classify_weather(temperature: f64, condition: &str) -> String {
    let snapshot = WeatherSnapshot {
        temperature,
        feels_like: temperature,
        condition: condition.to_string(),
        description: String::new(),
        wind_speed: 0.0,
        humidity: 0,
        icon: String::new(),
        city: String::new(),
    };

    let kind = if snapshot.is_rainy() {
        "rainy"
    } else if snapshot.is_snowy() {
        "snowy"
    } else if snapshot.is_cold() {
        "cold"
    } else if snapshot.is_hot() {
        "hot"
    } else {
        "mild"
    };
    kind.to_string()
}

/// Validate a warmth score (1-5)
#[wasm_bindgen]
pub fn validate_warmth(score: i32) -> bool {
    shared::validation::validate_warmth_score(score).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn items_json() -> String {
        let top = ClothingItem {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            category: "top".to_string(),
            subcategory: None,
            labels: vec![],
            colors: vec![],
            image_url: String::new(),
            cutout_url: String::new(),
            season: "all".to_string(),
            warmth_score: 3,
            waterproof: false,
            breathable: true,
            user_notes: String::new(),
            confidence: 0.0,
            created_at: None,
            updated_at: None,
        };
        let mut bottom = top.clone();
        bottom.id = Uuid::new_v4();
        bottom.category = "bottom".to_string();
        serde_json::to_string(&vec![top, bottom]).unwrap()
    }

    fn weather_json() -> String {
        r#"{
            "temperature": 22.0,
            "feels_like": 22.0,
            "condition": "Clear",
            "description": "clear sky",
            "wind_speed": 3.0,
            "humidity": 50,
            "icon": "",
            "city": "Tel Aviv"
        }"#
        .to_string()
    }

    #[test]
    fn test_suggest_outfits_seeded() {
        let items = items_json();
        let weather = weather_json();
        let outfits = suggest_outfits_seeded(&items, &weather, "work", 42).unwrap();
        let parsed: Vec<OutfitCandidate> = serde_json::from_str(&outfits).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].occasion, "work");
        assert_eq!(parsed[0].weather_summary, "22°C, Clear");
    }

    #[test]
    fn test_map_clothing_label() {
        assert_eq!(map_clothing_label("jacket"), Some("outerwear".to_string()));
        assert_eq!(map_clothing_label("banana"), None);
    }

    #[test]
    fn test_best_category_match() {
        let result = best_category_match(r#"["person", "jeans"]"#).unwrap();
        assert!(result.contains("bottom"));
        assert!(result.contains("jeans"));

        let miss = best_category_match(r#"["person"]"#).unwrap();
        assert_eq!(miss, "null");
    }

    #[test]
    fn test_classify_weather() {
        assert_eq!(classify_weather(15.0, "Rain"), "rainy");
        assert_eq!(classify_weather(-2.0, "Snow"), "snowy");
        assert_eq!(classify_weather(5.0, "Clouds"), "cold");
        assert_eq!(classify_weather(35.0, "Clear"), "hot");
        assert_eq!(classify_weather(22.0, "Clear"), "mild");
    }

    #[test]
    fn test_name_color() {
        assert_eq!(name_color(255, 0, 0), "Red");
        assert_eq!(name_color(0, 0, 0), "Black");
    }

    #[test]
    fn test_validate_warmth() {
        assert!(validate_warmth(3));
        assert!(!validate_warmth(0));
        assert!(!validate_warmth(6));
    }
}
