//! Content synthesis for a creator whose posting decision came up positive

use chrono::{DateTime, Utc};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::types::ContentId;
use crate::model::{Content, ContentKind, Creator};
use crate::simulation::state::CreatorState;
use crate::simulation::tables::{self, pick, price_ending_99};

/// Share of posts that are locked behind a payment
const LOCKED_PROBABILITY: f64 = 0.4;
/// Upper bound of the view-count jitter, as a fraction of expected views
const VIEW_JITTER: f64 = 0.5;
const MIN_LIKE_RATE: f64 = 0.10;
const MAX_LIKE_RATE: f64 = 0.30;
/// Most promotional tags appended to a post
const MAX_PROMO_TAGS: usize = 3;

/// Build one post for `creator`, numbered by the state's current post count
pub fn synthesize_content(
    creator: &Creator,
    state: &CreatorState,
    now: DateTime<Utc>,
    rng: &mut ChaCha8Rng,
) -> Content {
    let id = ContentId::new(&creator.id, state.post_count);
    let kind = pick(&ContentKind::ALL, rng);

    let view_count = view_count(creator.subscriber_count, state.engagement_rate, rng);
    let like_count = like_count(view_count, rng);

    let is_locked = rng.gen::<f64>() < LOCKED_PROBABILITY;
    let price = if is_locked {
        price_ending_99(5, 30, rng)
    } else {
        0.0
    };

    let media_url = kind
        .media_extension()
        .map(|ext| format!("https://cdn.platform.com/{}/{}.{}", kind, id, ext));

    let title = pick(tables::title_pool(creator.category), rng).to_string();
    let description = Some(pick(tables::DESCRIPTIONS, rng))
        .filter(|d| !d.is_empty())
        .map(str::to_string);
    let tags = generate_tags(creator, kind, rng);

    Content {
        id,
        creator_id: creator.id.clone(),
        title,
        description,
        kind,
        media_url,
        price,
        is_locked,
        view_count,
        like_count,
        created_at: now,
        updated_at: now,
        tags,
    }
}

/// Expected views are `subscribers * engagement`, inflated by up to 50%.
/// Every post is seen at least once.
fn view_count(subscribers: u64, engagement_rate: f64, rng: &mut ChaCha8Rng) -> u64 {
    let expected = subscribers as f64 * engagement_rate;
    let jitter = 1.0 + rng.gen::<f64>() * VIEW_JITTER;
    ((expected * jitter).round() as u64).max(1)
}

/// Likes are a fraction of views strictly below one, so `likes < views`
/// whenever `views > 0`.
fn like_count(views: u64, rng: &mut ChaCha8Rng) -> u64 {
    let rate = rng.gen_range(MIN_LIKE_RATE..MAX_LIKE_RATE);
    (views as f64 * rate).floor() as u64
}

fn generate_tags(creator: &Creator, kind: ContentKind, rng: &mut ChaCha8Rng) -> Vec<String> {
    let mut tags = vec![creator.category.to_string(), kind.to_string()];

    let extra = rng.gen_range(0..=MAX_PROMO_TAGS);
    for _ in 0..extra {
        let tag = pick(tables::PROMO_TAGS, rng);
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }

    tags
}
