/// Image hosting and home-selection constants to ensure consistency across the codebase.

// Asset hosts for derived category images
pub const DEFAULT_IMAGE_HOST: &str = "https://testprovider.com";
pub const ALTERNATE_IMAGE_HOST: &str = "https://anotherprovider.com";

// Derived image URLs are always <host>/<prefix>/<name>.<extension>
pub const IMAGE_PATH_PREFIX: &str = "categories";
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

// Home-selection thresholds: show everything below the limit, otherwise the
// flagged categories, otherwise the first few by display order
pub const HOME_SHOW_ALL_LIMIT: usize = 5;
pub const HOME_FALLBACK_COUNT: usize = 3;
