use crate::domain::model::Creature;

pub const DEFAULT_PAGE_SIZE: usize = 10;
/// The catalog is browsed up to the first 600 creatures.
pub const DEFAULT_MAX_PAGES: usize = 60;
pub const MAX_PAGES_LIMIT: usize = 1000;
/// Random opponents are drawn from the first generation.
pub const RANDOM_ID_RANGE: std::ops::RangeInclusive<u32> = 1..=151;

pub fn offset(page: usize, limit: usize) -> usize {
    page.saturating_sub(1) * limit
}

pub fn total_pages(count: usize, limit: usize, max_pages: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    let capped = count.min(max_pages.saturating_mul(limit));
    capped.div_ceil(limit).min(max_pages)
}

/// Keeps a requested page inside `1..=total_pages` (page 1 when empty).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Case-insensitive substring filter on names; an empty term keeps everything.
pub fn filter_by_name(creatures: Vec<Creature>, term: &str) -> Vec<Creature> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return creatures;
    }
    creatures
        .into_iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}
