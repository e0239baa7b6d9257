use crate::constants::{ALTERNATE_IMAGE_HOST, DEFAULT_IMAGE_EXTENSION};
use crate::types::RawCategory;
use crate::urls::derive_image_url;

/// Resolves the image for a category.
///
/// Parent categories derive their image from their catalog URL on the
/// alternate asset host; leaf categories use the meta description verbatim.
pub fn resolve_image(category: &RawCategory) -> String {
    if !category.children.is_empty() {
        return derive_image_url(
            category.url.as_deref().unwrap_or_default(),
            ALTERNATE_IMAGE_HOST,
            DEFAULT_IMAGE_EXTENSION,
        );
    }
    category.meta_description.clone().unwrap_or_default()
}

/// Resolves the display order from the title, falling back to the id.
///
/// The numeric part is everything before the first `#` (the whole title when
/// there is none). A title of `"0"` is a valid order, not a fallback trigger.
pub fn resolve_order(category: &RawCategory) -> i64 {
    let title = match category.title.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => return category.id,
    };
    let numeric_part = title.split('#').next().unwrap_or(title);
    parse_order(numeric_part).unwrap_or(category.id)
}

/// A category is flagged for the home view by a `#` anywhere in its title.
pub fn is_home_category(category: &RawCategory) -> bool {
    category
        .title
        .as_deref()
        .is_some_and(|title| title.contains('#'))
}

// Whitespace-tolerant numeric parse: integer first, then a finite float
// truncated toward zero ("2.5" orders before "3").
fn parse_order(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok().or_else(|| {
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|value| value as i64)
    })
}
