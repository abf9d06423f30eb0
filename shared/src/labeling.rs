//! Deterministic mapping from vision-model labels to clothing categories
//!
//! The table covers the labels the stock labeling model emits for clothing;
//! swapping in a custom model only means extending it.

use crate::models::ClothingCategory;

const LABEL_TABLE: &[(&str, ClothingCategory)] = &[
    // Tops
    ("shirt", ClothingCategory::Top),
    ("t-shirt", ClothingCategory::Top),
    ("blouse", ClothingCategory::Top),
    ("polo shirt", ClothingCategory::Top),
    ("tank top", ClothingCategory::Top),
    ("crop top", ClothingCategory::Top),
    ("sweater", ClothingCategory::Top),
    ("hoodie", ClothingCategory::Top),
    ("sweatshirt", ClothingCategory::Top),
    ("jersey", ClothingCategory::Top),
    ("top", ClothingCategory::Top),
    ("sleeve", ClothingCategory::Top),
    ("turtleneck", ClothingCategory::Top),
    ("cardigan", ClothingCategory::Top),
    ("vest", ClothingCategory::Top),
    // Bottoms
    ("jeans", ClothingCategory::Bottom),
    ("pants", ClothingCategory::Bottom),
    ("trousers", ClothingCategory::Bottom),
    ("shorts", ClothingCategory::Bottom),
    ("skirt", ClothingCategory::Bottom),
    ("leggings", ClothingCategory::Bottom),
    ("denim", ClothingCategory::Bottom),
    ("chinos", ClothingCategory::Bottom),
    ("sweatpants", ClothingCategory::Bottom),
    // Outerwear
    ("jacket", ClothingCategory::Outerwear),
    ("coat", ClothingCategory::Outerwear),
    ("blazer", ClothingCategory::Outerwear),
    ("parka", ClothingCategory::Outerwear),
    ("windbreaker", ClothingCategory::Outerwear),
    ("raincoat", ClothingCategory::Outerwear),
    ("overcoat", ClothingCategory::Outerwear),
    ("trench coat", ClothingCategory::Outerwear),
    ("bomber jacket", ClothingCategory::Outerwear),
    ("leather jacket", ClothingCategory::Outerwear),
    ("down jacket", ClothingCategory::Outerwear),
    // Dresses
    ("dress", ClothingCategory::Dress),
    ("gown", ClothingCategory::Dress),
    ("sundress", ClothingCategory::Dress),
    ("cocktail dress", ClothingCategory::Dress),
    ("maxi dress", ClothingCategory::Dress),
    ("jumpsuit", ClothingCategory::Dress),
    ("romper", ClothingCategory::Dress),
    // Shoes
    ("shoe", ClothingCategory::Shoes),
    ("shoes", ClothingCategory::Shoes),
    ("sneaker", ClothingCategory::Shoes),
    ("sneakers", ClothingCategory::Shoes),
    ("boot", ClothingCategory::Shoes),
    ("boots", ClothingCategory::Shoes),
    ("sandal", ClothingCategory::Shoes),
    ("sandals", ClothingCategory::Shoes),
    ("heel", ClothingCategory::Shoes),
    ("heels", ClothingCategory::Shoes),
    ("loafer", ClothingCategory::Shoes),
    ("slipper", ClothingCategory::Shoes),
    ("footwear", ClothingCategory::Shoes),
    ("running shoe", ClothingCategory::Shoes),
    ("high heel", ClothingCategory::Shoes),
    // Accessories
    ("hat", ClothingCategory::Accessory),
    ("cap", ClothingCategory::Accessory),
    ("scarf", ClothingCategory::Accessory),
    ("glove", ClothingCategory::Accessory),
    ("gloves", ClothingCategory::Accessory),
    ("belt", ClothingCategory::Accessory),
    ("tie", ClothingCategory::Accessory),
    ("bow tie", ClothingCategory::Accessory),
    ("watch", ClothingCategory::Accessory),
    ("sunglasses", ClothingCategory::Accessory),
    ("glasses", ClothingCategory::Accessory),
    ("bag", ClothingCategory::Accessory),
    ("handbag", ClothingCategory::Accessory),
    ("backpack", ClothingCategory::Accessory),
    ("purse", ClothingCategory::Accessory),
    ("jewelry", ClothingCategory::Accessory),
    ("necklace", ClothingCategory::Accessory),
    ("bracelet", ClothingCategory::Accessory),
    ("earring", ClothingCategory::Accessory),
    ("ring", ClothingCategory::Accessory),
    ("wallet", ClothingCategory::Accessory),
    ("umbrella", ClothingCategory::Accessory),
    ("headband", ClothingCategory::Accessory),
    ("beanie", ClothingCategory::Accessory),
    // Generic clothing labels that need context
    ("clothing", ClothingCategory::Top),
    ("fashion", ClothingCategory::Top),
    ("textile", ClothingCategory::Top),
    ("fabric", ClothingCategory::Top),
];

/// Maps a single label to a category. Returns `None` for unknown labels, in
/// which case the caller should prompt the user to choose.
pub fn map_label(label: &str) -> Option<ClothingCategory> {
    let needle = label.trim().to_lowercase();
    LABEL_TABLE
        .iter()
        .find(|(known, _)| *known == needle)
        .map(|(_, category)| *category)
}

/// Maps a list of labels (assumed sorted by confidence descending) to the
/// category of the first label that maps, together with that label.
pub fn best_match(labels: &[String]) -> Option<(ClothingCategory, &str)> {
    labels
        .iter()
        .find_map(|label| map_label(label).map(|category| (category, label.as_str())))
}

/// All known labels for a category
pub fn labels_for_category(category: ClothingCategory) -> Vec<&'static str> {
    LABEL_TABLE
        .iter()
        .filter(|(_, c)| *c == category)
        .map(|(label, _)| *label)
        .collect()
}
