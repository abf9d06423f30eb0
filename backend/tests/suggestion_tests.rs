//! Outfit suggestion engine tests
//!
//! Covers the weather filters, the outerwear/accessory pickers, both
//! assembly strategies, and the engine-wide guarantees (at most three
//! candidates, graceful degradation, summary formatting).

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

use shared::models::{ClothingItem, Occasion, WeatherSnapshot};
use shared::suggestion::{
    filter_by_weather, filter_shoes, pick_outerwear, suggest, suggest_with_rng,
};

fn item(category: &str, warmth_score: i32, waterproof: bool, breathable: bool) -> ClothingItem {
    ClothingItem {
        id: Uuid::new_v4(),
        user_id: Uuid::nil(),
        category: category.to_string(),
        subcategory: None,
        labels: Vec::new(),
        colors: Vec::new(),
        image_url: String::new(),
        cutout_url: String::new(),
        season: "all".to_string(),
        warmth_score,
        waterproof,
        breathable,
        user_notes: String::new(),
        confidence: 0.0,
        created_at: None,
        updated_at: None,
    }
}

fn labeled_accessory(labels: &[&str]) -> ClothingItem {
    let mut accessory = item("accessory", 1, false, true);
    accessory.labels = labels.iter().map(|l| l.to_string()).collect();
    accessory
}

fn weather(temperature: f64, condition: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature,
        feels_like: temperature,
        condition: condition.to_string(),
        description: String::new(),
        wind_speed: 3.0,
        humidity: 50,
        icon: String::new(),
        city: String::new(),
    }
}

fn sunny() -> WeatherSnapshot {
    weather(22.0, "Clear")
}

fn rainy() -> WeatherSnapshot {
    weather(15.0, "Rain")
}

fn cold() -> WeatherSnapshot {
    weather(5.0, "Clouds")
}

fn hot() -> WeatherSnapshot {
    weather(35.0, "Clear")
}

/// The fixture wardrobe used across the scenario tests
struct Wardrobe {
    items: Vec<ClothingItem>,
    rain_jacket: Uuid,
    winter_coat: Uuid,
    umbrella: Uuid,
    scarf: Uuid,
}

fn full_wardrobe() -> Wardrobe {
    let light_top = item("top", 1, false, true);
    let warm_top = item("top", 5, false, false);
    let jeans = item("bottom", 3, false, true);
    let warm_pants = item("bottom", 5, false, false);
    let rain_jacket = item("outerwear", 3, true, true);
    let winter_coat = item("outerwear", 5, false, false);
    let sneakers = item("shoes", 2, false, true);
    let rain_boots = item("shoes", 3, true, false);
    let umbrella = labeled_accessory(&["umbrella"]);
    let scarf = labeled_accessory(&["scarf"]);

    Wardrobe {
        rain_jacket: rain_jacket.id,
        winter_coat: winter_coat.id,
        umbrella: umbrella.id,
        scarf: scarf.id,
        items: vec![
            light_top, warm_top, jeans, warm_pants, rain_jacket, winter_coat, sneakers,
            rain_boots, umbrella, scarf,
        ],
    }
}

mod engine_scenarios {
    use super::*;

    #[test]
    fn empty_wardrobe_returns_no_suggestions() {
        let outfits = suggest(&[], &sunny(), Occasion::Casual);
        assert!(outfits.is_empty());
    }

    #[test]
    fn sunny_weather_returns_outfits() {
        let wardrobe = full_wardrobe();
        let outfits = suggest(&wardrobe.items, &sunny(), Occasion::Casual);
        assert!(!outfits.is_empty());
        assert!(outfits.len() <= 3);
    }

    #[test]
    fn single_top_and_bottom_yields_exactly_one_outfit() {
        let top = item("top", 3, false, true);
        let bottom = item("bottom", 3, false, true);
        let items = vec![top.clone(), bottom.clone()];

        let outfits = suggest(&items, &sunny(), Occasion::Casual);

        assert_eq!(outfits.len(), 1);
        assert!(outfits[0].item_ids.contains(&top.id));
        assert!(outfits[0].item_ids.contains(&bottom.id));
        assert_eq!(outfits[0].occasion, "casual");
        assert_eq!(outfits[0].weather_summary, "22°C, Clear");
    }

    #[test]
    fn occasion_labels_every_outfit() {
        let wardrobe = full_wardrobe();
        let outfits = suggest(&wardrobe.items, &sunny(), Occasion::Work);
        assert!(!outfits.is_empty());
        for outfit in &outfits {
            assert_eq!(outfit.occasion, "work");
        }
    }

    #[test]
    fn going_out_tag_is_snake_cased() {
        let wardrobe = full_wardrobe();
        let outfits = suggest(&wardrobe.items, &sunny(), Occasion::GoingOut);
        for outfit in &outfits {
            assert_eq!(outfit.occasion, "going_out");
        }
    }

    #[test]
    fn weather_summary_is_set_on_every_outfit() {
        let wardrobe = full_wardrobe();
        let outfits = suggest(&wardrobe.items, &sunny(), Occasion::Casual);
        for outfit in &outfits {
            assert_eq!(outfit.weather_summary, "22°C, Clear");
        }
    }

    #[test]
    fn at_most_three_suggestions_from_a_large_wardrobe() {
        let mut items = Vec::new();
        for _ in 0..10 {
            items.push(item("top", 3, false, true));
        }
        for _ in 0..5 {
            items.push(item("bottom", 3, false, true));
        }
        let outfits = suggest(&items, &sunny(), Occasion::Casual);
        assert_eq!(outfits.len(), 3);
    }

    #[test]
    fn tops_without_bottoms_yield_nothing() {
        let items = vec![item("top", 3, false, true), item("top", 2, false, true)];
        let outfits = suggest(&items, &sunny(), Occasion::Casual);
        assert!(outfits.is_empty());
    }

    #[test]
    fn unknown_categories_are_silently_excluded() {
        let top = item("top", 3, false, true);
        let bottom = item("bottom", 3, false, true);
        let mystery = item("cape", 3, false, true);
        let items = vec![top, bottom, mystery.clone()];

        let outfits = suggest(&items, &sunny(), Occasion::Casual);

        assert_eq!(outfits.len(), 1);
        assert!(!outfits[0].item_ids.contains(&mystery.id));
    }

    #[test]
    fn cold_outfits_include_the_warmest_outerwear() {
        let wardrobe = full_wardrobe();
        let mut rng = StdRng::seed_from_u64(7);
        let outfits = suggest_with_rng(&wardrobe.items, &cold(), Occasion::Casual, &mut rng);

        assert!(!outfits.is_empty());
        for outfit in &outfits {
            assert!(outfit.item_ids.contains(&wardrobe.winter_coat));
            assert!(!outfit.item_ids.contains(&wardrobe.rain_jacket));
        }
    }

    #[test]
    fn rainy_outfits_carry_the_waterproof_jacket_and_umbrella() {
        let wardrobe = full_wardrobe();
        let mut rng = StdRng::seed_from_u64(7);
        let outfits = suggest_with_rng(&wardrobe.items, &rainy(), Occasion::Casual, &mut rng);

        assert!(!outfits.is_empty());
        for outfit in &outfits {
            assert!(outfit.item_ids.contains(&wardrobe.rain_jacket));
            assert!(outfit.item_ids.contains(&wardrobe.umbrella));
            assert!(!outfit.item_ids.contains(&wardrobe.scarf));
        }
    }

    #[test]
    fn cold_outfits_pick_the_scarf_accessory() {
        let wardrobe = full_wardrobe();
        let mut rng = StdRng::seed_from_u64(7);
        let outfits = suggest_with_rng(&wardrobe.items, &cold(), Occasion::Casual, &mut rng);

        assert!(!outfits.is_empty());
        for outfit in &outfits {
            assert!(outfit.item_ids.contains(&wardrobe.scarf));
        }
    }

    #[test]
    fn mild_outfits_have_no_accessory() {
        let wardrobe = full_wardrobe();
        let mut rng = StdRng::seed_from_u64(7);
        let outfits = suggest_with_rng(&wardrobe.items, &sunny(), Occasion::Casual, &mut rng);

        assert!(!outfits.is_empty());
        for outfit in &outfits {
            assert!(!outfit.item_ids.contains(&wardrobe.umbrella));
            assert!(!outfit.item_ids.contains(&wardrobe.scarf));
        }
    }

    #[test]
    fn dresses_fill_in_when_tops_run_out() {
        let dress = item("dress", 2, false, true);
        let shoes = item("shoes", 2, false, true);
        let items = vec![dress.clone(), shoes.clone()];

        let outfits = suggest(&items, &sunny(), Occasion::Casual);

        assert_eq!(outfits.len(), 1);
        assert_eq!(outfits[0].item_ids[0], dress.id);
        assert!(outfits[0].item_ids.contains(&shoes.id));
    }

    #[test]
    fn no_dress_outfits_in_cold_weather() {
        let items = vec![item("dress", 2, false, true), item("shoes", 2, false, true)];
        let outfits = suggest(&items, &cold(), Occasion::Casual);
        assert!(outfits.is_empty());
    }

    #[test]
    fn seeded_rng_makes_suggestions_reproducible() {
        let wardrobe = full_wardrobe();
        let first = suggest_with_rng(
            &wardrobe.items,
            &sunny(),
            Occasion::Casual,
            &mut StdRng::seed_from_u64(42),
        );
        let second = suggest_with_rng(
            &wardrobe.items,
            &sunny(),
            Occasion::Casual,
            &mut StdRng::seed_from_u64(42),
        );
        assert_eq!(first, second);
    }
}

mod weather_filters {
    use super::*;

    #[test]
    fn rainy_weather_prefers_waterproof_shoes() {
        let sneakers = item("shoes", 2, false, true);
        let rain_boots = item("shoes", 3, true, false);
        let filtered = filter_shoes(&[&sneakers, &rain_boots], &rainy());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, rain_boots.id);
    }

    #[test]
    fn snowy_weather_prefers_waterproof_shoes() {
        let sneakers = item("shoes", 2, false, true);
        let boots = item("shoes", 4, true, false);
        let filtered = filter_shoes(&[&sneakers, &boots], &weather(-2.0, "Snow"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, boots.id);
    }

    #[test]
    fn rain_without_waterproof_shoes_returns_the_bucket_unchanged() {
        let sneakers = item("shoes", 2, false, true);
        let loafers = item("shoes", 2, false, true);
        let filtered = filter_shoes(&[&sneakers, &loafers], &rainy());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn sunny_weather_does_not_filter_shoes() {
        let sneakers = item("shoes", 2, false, true);
        let rain_boots = item("shoes", 3, true, false);
        let filtered = filter_shoes(&[&sneakers, &rain_boots], &sunny());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn cold_weather_keeps_only_warm_items() {
        let light_top = item("top", 1, false, true);
        let warm_top = item("top", 5, false, false);
        let filtered = filter_by_weather(&[&light_top, &warm_top], &cold());
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].warmth_score >= 4);
    }

    #[test]
    fn hot_weather_keeps_light_breathable_items_only() {
        let light_top = item("top", 1, false, true);
        let warm_top = item("top", 5, false, false);
        let filtered = filter_by_weather(&[&light_top, &warm_top], &hot());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, light_top.id);
    }

    #[test]
    fn too_strict_filters_fall_back_to_the_full_bucket() {
        let light_top = item("top", 1, false, true);
        let lighter_top = item("top", 2, false, true);
        let filtered = filter_by_weather(&[&light_top, &lighter_top], &cold());
        assert_eq!(filtered.len(), 2);
    }
}

mod outerwear_picks {
    use super::*;

    #[test]
    fn cold_weather_picks_the_warmest() {
        let a = item("outerwear", 3, false, true);
        let b = item("outerwear", 5, false, false);
        let c = item("outerwear", 2, false, true);
        let picked = pick_outerwear(&[&a, &b, &c], &cold()).expect("an item should be picked");
        assert_eq!(picked.id, b.id);
    }

    #[test]
    fn rainy_weather_prefers_waterproof_over_warmth() {
        let winter_coat = item("outerwear", 5, false, false);
        let rain_jacket = item("outerwear", 3, true, true);
        let picked =
            pick_outerwear(&[&winter_coat, &rain_jacket], &rainy()).expect("an item should be picked");
        assert_eq!(picked.id, rain_jacket.id);
    }

    #[test]
    fn rain_without_waterproof_takes_the_first_in_order() {
        let first = item("outerwear", 2, false, true);
        let second = item("outerwear", 5, false, false);
        let picked = pick_outerwear(&[&first, &second], &rainy()).expect("an item should be picked");
        assert_eq!(picked.id, first.id);
    }

    #[test]
    fn mild_weather_takes_the_first_in_order() {
        let first = item("outerwear", 2, false, true);
        let second = item("outerwear", 5, false, false);
        let picked = pick_outerwear(&[&first, &second], &sunny()).expect("an item should be picked");
        assert_eq!(picked.id, first.id);
    }

    #[test]
    fn empty_outerwear_picks_nothing() {
        assert!(pick_outerwear(&[], &cold()).is_none());
    }
}

// ============================================================================
// Property tests
// ============================================================================

fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("top".to_string()),
        Just("bottom".to_string()),
        Just("outerwear".to_string()),
        Just("dress".to_string()),
        Just("shoes".to_string()),
        Just("accessory".to_string()),
        Just("gadget".to_string()),
    ]
}

fn arb_item() -> impl Strategy<Value = ClothingItem> {
    (arb_category(), 1..=5, any::<bool>(), any::<bool>()).prop_map(
        |(category, warmth, waterproof, breathable)| {
            item(&category, warmth, waterproof, breathable)
        },
    )
}

fn arb_weather() -> impl Strategy<Value = WeatherSnapshot> {
    (
        -15.0..45.0f64,
        prop_oneof![
            Just("Clear".to_string()),
            Just("Clouds".to_string()),
            Just("Rain".to_string()),
            Just("Drizzle".to_string()),
            Just("Thunderstorm".to_string()),
            Just("Snow".to_string()),
        ],
    )
        .prop_map(|(temperature, condition)| weather(temperature, &condition))
}

proptest! {
    /// At most three candidates, whatever the wardrobe and conditions
    #[test]
    fn suggestion_count_is_bounded(
        items in proptest::collection::vec(arb_item(), 0..30),
        snapshot in arb_weather(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let outfits = suggest_with_rng(&items, &snapshot, Occasion::Casual, &mut rng);
        prop_assert!(outfits.len() <= 3);
        if items.is_empty() {
            prop_assert!(outfits.is_empty());
        }
    }

    /// A wardrobe with at least one top and one bottom always produces
    /// something to wear
    #[test]
    fn top_and_bottom_guarantee_a_suggestion(
        extra in proptest::collection::vec(arb_item(), 0..20),
        snapshot in arb_weather(),
        seed in any::<u64>(),
    ) {
        let mut items = vec![
            item("top", 3, false, true),
            item("bottom", 3, false, true),
        ];
        items.extend(extra);

        let mut rng = StdRng::seed_from_u64(seed);
        let outfits = suggest_with_rng(&items, &snapshot, Occasion::Casual, &mut rng);
        prop_assert!(!outfits.is_empty());
    }

    /// Every candidate's summary is "<truncated temp>°C, <condition>"
    #[test]
    fn weather_summary_format_is_stable(
        items in proptest::collection::vec(arb_item(), 1..20),
        snapshot in arb_weather(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let outfits = suggest_with_rng(&items, &snapshot, Occasion::Work, &mut rng);
        let expected = format!("{}°C, {}", snapshot.temperature as i32, snapshot.condition);
        for outfit in &outfits {
            prop_assert_eq!(&outfit.weather_summary, &expected);
            prop_assert_eq!(outfit.occasion.as_str(), "work");
            prop_assert!(!outfit.item_ids.is_empty());
        }
    }
}
