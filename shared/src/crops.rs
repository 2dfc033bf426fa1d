//! Crop display helpers

/// Fallback glyph for crops without a dedicated one
pub const DEFAULT_CROP_EMOJI: &str = "🌿";

/// Emoji shown beside a crop name on cards and the detail header
pub fn crop_emoji(crop_name: &str) -> &'static str {
    match crop_name {
        "Wheat" => "🌾",
        "Rice" => "🌱",
        "Maize" => "🌽",
        "Barley" => "🌾",
        "Soybean" => "🫘",
        "Cotton" => "🧵",
        "Sugarcane" => "🥃",
        "Potato" => "🥔",
        "Tomato" => "🍅",
        "Onion" => "🧅",
        "Chilli" => "🌶️",
        "Peas" => "🥗",
        "Lentils" => "🟤",
        "Millet" => "🍚",
        "Groundnut" => "🥜",
        _ => DEFAULT_CROP_EMOJI,
    }
}
