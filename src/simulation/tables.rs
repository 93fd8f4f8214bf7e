//! Text pools and numeric helpers used when synthesizing records

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::model::Category;

const FITNESS_TITLES: &[&str] = &["Workout Session", "Training Day", "Gym Time", "Fitness Tips"];
const LIFESTYLE_TITLES: &[&str] = &["Daily Vibe", "Life Update", "Casual Moment", "Behind Scenes"];
const ART_TITLES: &[&str] = &["New Creation", "Art Process", "Creative Session", "Artistic Vision"];
const MUSIC_TITLES: &[&str] = &["New Track", "Studio Session", "Live Performance", "Music Moment"];
const GAMING_TITLES: &[&str] = &["Gaming Session", "New Game", "Epic Win", "Game Review"];
const DEFAULT_TITLES: &[&str] = &["New Post", "Update", "Fresh Content", "Latest"];

/// Post descriptions; the empty entry means "no description"
pub const DESCRIPTIONS: &[&str] = &[
    "Check out my latest content!",
    "Hope you enjoy this one ❤️",
    "What do you think about this?",
    "Been working on this for a while...",
    "Exclusive content just for you!",
    "",
];

/// Tags that may be appended after the category and kind
pub const PROMO_TAGS: &[&str] = &["new", "exclusive", "hot", "trending", "premium", "special"];

/// Title pool for a category. Every category maps to a non-empty pool.
pub fn title_pool(category: Category) -> &'static [&'static str] {
    match category {
        Category::Fitness => FITNESS_TITLES,
        Category::Lifestyle => LIFESTYLE_TITLES,
        Category::Art => ART_TITLES,
        Category::Music => MUSIC_TITLES,
        Category::Gaming => GAMING_TITLES,
        Category::Cooking
        | Category::Fashion
        | Category::Photography
        | Category::Education
        | Category::Entertainment => DEFAULT_TITLES,
    }
}

/// Uniform pick from a non-empty slice
pub fn pick<T: Copy>(items: &[T], rng: &mut ChaCha8Rng) -> T {
    items[rng.gen_range(0..items.len())]
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Round a currency amount to whole cents
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Uniform price of the form `N.99` with `N` drawn from `[low, high)`
pub fn price_ending_99(low: u32, high: u32, rng: &mut ChaCha8Rng) -> f64 {
    rng.gen_range(low..high) as f64 + 0.99
}
