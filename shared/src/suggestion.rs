//! Rule-based outfit suggestion engine
//!
//! Rules:
//! - Rain: prefer waterproof outerwear and waterproof shoes
//! - Cold (<10°C): require warm items (warmth score >= 4), add outerwear
//! - Hot (>28°C): prefer breathable, light items (warmth score <= 2)
//! - Occasion only labels the output; it never filters
//!
//! The engine is a pure function of its inputs plus a random source used to
//! vary which of the equally-eligible items are combined. Callers that need
//! reproducible output pass a seeded generator to [`suggest_with_rng`].

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{ClothingCategory, ClothingItem, Occasion, OutfitCandidate, WeatherSnapshot};

/// Minimum warmth score kept when it is cold
pub const MIN_WARMTH_COLD: i32 = 4;

/// Maximum warmth score kept when it is hot
pub const MAX_WARMTH_HOT: i32 = 2;

/// Upper bound on returned candidates
pub const SUGGESTIONS_COUNT: usize = 3;

const RAINY_ACCESSORY_LABELS: &[&str] = &["umbrella", "rain hat", "waterproof"];
const COLD_ACCESSORY_LABELS: &[&str] = &["scarf", "glove", "gloves", "beanie", "hat"];
const HOT_ACCESSORY_LABELS: &[&str] = &["sunglasses", "hat", "cap"];

/// Generates up to [`SUGGESTIONS_COUNT`] outfit suggestions using ambient
/// randomness. See [`suggest_with_rng`] for the full contract.
pub fn suggest(
    items: &[ClothingItem],
    weather: &WeatherSnapshot,
    occasion: Occasion,
) -> Vec<OutfitCandidate> {
    suggest_with_rng(items, weather, occasion, &mut rand::thread_rng())
}

/// Generates up to [`SUGGESTIONS_COUNT`] outfit suggestions.
///
/// Returns an empty list only for an empty wardrobe; every other degenerate
/// input degrades gracefully (a strategy is skipped or an optional component
/// omitted) rather than failing.
pub fn suggest_with_rng<R: Rng + ?Sized>(
    items: &[ClothingItem],
    weather: &WeatherSnapshot,
    occasion: Occasion,
    rng: &mut R,
) -> Vec<OutfitCandidate> {
    if items.is_empty() {
        return Vec::new();
    }

    let bucket = |category: ClothingCategory| -> Vec<&ClothingItem> {
        items
            .iter()
            .filter(|item| item.category_enum() == Some(category))
            .collect()
    };

    let tops = bucket(ClothingCategory::Top);
    let bottoms = bucket(ClothingCategory::Bottom);
    let outerwear = bucket(ClothingCategory::Outerwear);
    let dresses = bucket(ClothingCategory::Dress);
    let shoes = bucket(ClothingCategory::Shoes);
    let accessories = bucket(ClothingCategory::Accessory);

    // Filter items by weather conditions
    let filtered_tops = filter_by_weather(&tops, weather);
    let filtered_bottoms = filter_by_weather(&bottoms, weather);
    let filtered_outerwear = filter_by_weather(&outerwear, weather);
    let filtered_dresses = filter_by_weather(&dresses, weather);
    let filtered_shoes = filter_shoes(&shoes, weather);

    let weather_summary = weather.summary();
    let mut outfits = Vec::new();

    // Strategy 1: top + bottom combinations
    for top in sample(&filtered_tops, SUGGESTIONS_COUNT, rng) {
        let Some(bottom) = filtered_bottoms.choose(rng) else {
            continue;
        };
        let mut item_ids = vec![top.id, bottom.id];

        // Add outerwear if cold or rainy
        if weather.is_cold() || weather.is_rainy() {
            if let Some(jacket) = pick_outerwear(&filtered_outerwear, weather) {
                item_ids.push(jacket.id);
            }
        }

        // Add shoes
        if let Some(shoe) = filtered_shoes.choose(rng) {
            item_ids.push(shoe.id);
        }

        // Add weather-appropriate accessory
        if let Some(accessory) = pick_accessory(&accessories, weather) {
            item_ids.push(accessory.id);
        }

        outfits.push(OutfitCandidate {
            item_ids,
            occasion: occasion.tag().to_string(),
            weather_summary: weather_summary.clone(),
        });
    }

    // Strategy 2: dress combinations (if available and weather-appropriate)
    if outfits.len() < SUGGESTIONS_COUNT && !filtered_dresses.is_empty() && !weather.is_cold() {
        for dress in sample(&filtered_dresses, SUGGESTIONS_COUNT - outfits.len(), rng) {
            let mut item_ids = vec![dress.id];

            if let Some(shoe) = filtered_shoes.choose(rng) {
                item_ids.push(shoe.id);
            }

            if weather.is_rainy() {
                if let Some(jacket) = pick_outerwear(&filtered_outerwear, weather) {
                    item_ids.push(jacket.id);
                }
            }

            outfits.push(OutfitCandidate {
                item_ids,
                occasion: occasion.tag().to_string(),
                weather_summary: weather_summary.clone(),
            });
        }
    }

    outfits.truncate(SUGGESTIONS_COUNT);
    outfits
}

/// Keeps the items wearable in the given weather. Falls back to the original
/// bucket when the filter empties it, so strict weather never blocks outfit
/// generation on its own.
pub fn filter_by_weather<'a>(
    items: &[&'a ClothingItem],
    weather: &WeatherSnapshot,
) -> Vec<&'a ClothingItem> {
    let filtered: Vec<&ClothingItem> = items
        .iter()
        .copied()
        .filter(|item| {
            if weather.is_cold() {
                item.warmth_score >= MIN_WARMTH_COLD
            } else if weather.is_hot() {
                item.warmth_score <= MAX_WARMTH_HOT && item.breathable
            } else {
                true
            }
        })
        .collect();

    if filtered.is_empty() {
        items.to_vec()
    } else {
        filtered
    }
}

/// Prefers waterproof shoes in rain or snow; a wardrobe without any still
/// returns the full bucket.
pub fn filter_shoes<'a>(
    shoes: &[&'a ClothingItem],
    weather: &WeatherSnapshot,
) -> Vec<&'a ClothingItem> {
    if weather.is_rainy() || weather.is_snowy() {
        let waterproof: Vec<&ClothingItem> =
            shoes.iter().copied().filter(|s| s.waterproof).collect();
        if !waterproof.is_empty() {
            return waterproof;
        }
    }
    shoes.to_vec()
}

/// Picks a single outerwear item for the current weather.
///
/// Rain prefers the warmest waterproof item; cold takes the warmest overall;
/// mild weather takes the first in list order. Warmth ties resolve to the
/// first maximum in input order.
pub fn pick_outerwear<'a>(
    outerwear: &[&'a ClothingItem],
    weather: &WeatherSnapshot,
) -> Option<&'a ClothingItem> {
    if weather.is_rainy() {
        warmest(outerwear.iter().copied().filter(|o| o.waterproof))
            .or_else(|| outerwear.first().copied())
    } else if weather.is_cold() {
        warmest(outerwear.iter().copied())
    } else {
        outerwear.first().copied()
    }
}

/// First max in input order
fn warmest<'a>(items: impl Iterator<Item = &'a ClothingItem>) -> Option<&'a ClothingItem> {
    items.fold(None, |best: Option<&ClothingItem>, item| match best {
        None => Some(item),
        Some(b) if item.warmth_score > b.warmth_score => Some(item),
        _ => best,
    })
}

/// At most one accessory per outfit, conditioned on the weather state with
/// precedence rainy > cold > hot. Mild weather never gets an accessory.
fn pick_accessory<'a>(
    accessories: &[&'a ClothingItem],
    weather: &WeatherSnapshot,
) -> Option<&'a ClothingItem> {
    let wanted = if weather.is_rainy() {
        RAINY_ACCESSORY_LABELS
    } else if weather.is_cold() {
        COLD_ACCESSORY_LABELS
    } else if weather.is_hot() {
        HOT_ACCESSORY_LABELS
    } else {
        return None;
    };

    accessories
        .iter()
        .copied()
        .find(|item| has_any_label(item, wanted))
}

fn has_any_label(item: &ClothingItem, wanted: &[&str]) -> bool {
    item.labels
        .iter()
        .any(|label| wanted.contains(&label.to_lowercase().as_str()))
}

/// Uniform sample of up to `count` items, in shuffled order
fn sample<'a, R: Rng + ?Sized>(
    items: &[&'a ClothingItem],
    count: usize,
    rng: &mut R,
) -> Vec<&'a ClothingItem> {
    let mut pool = items.to_vec();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}
