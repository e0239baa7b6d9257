use unicode_normalization::UnicodeNormalization;
use url::Url;

use crate::constants::IMAGE_PATH_PREFIX;

/// Derives a canonical image URL on `target_host` from the final path segment
/// of `source_url`.
///
/// Fails soft: anything that is not an absolute http(s) URL with a non-empty
/// final path segment yields an empty string. The segment is NFD-decomposed
/// and combining diacritical marks are stripped, so accented characters fold
/// to their base ASCII letters (`świece` becomes `swiece`).
pub fn derive_image_url(source_url: &str, target_host: &str, extension: &str) -> String {
    let parsed = match Url::parse(source_url) {
        Ok(url) => url,
        Err(_) => return String::new(),
    };
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return String::new();
    }

    let image_name = match parsed.path_segments().and_then(|segments| segments.last()) {
        Some(segment) if !segment.is_empty() => segment,
        _ => return String::new(),
    };

    // Url stores the path percent-encoded; decode before folding accents
    let image_name = match urlencoding::decode(image_name) {
        Ok(decoded) => decoded,
        Err(_) => return String::new(),
    };

    let normalized: String = image_name
        .nfd()
        .filter(|c| !is_combining_diacritical(*c))
        .collect();

    format!("{target_host}/{IMAGE_PATH_PREFIX}/{normalized}.{extension}")
}

// Combining Diacritical Marks block, the accents NFD splits off of Latin letters
fn is_combining_diacritical(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
