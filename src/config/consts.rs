// src/config/consts.rs

// Site
pub const SITE_ORIGIN: &str = "https://tic80.com";
pub const CART_LINK_PREFIX: &str = "/play?cart=";
pub const CART_EXT: &str = ".tic";
pub const DEFAULT_LISTING_URL: &str = "https://tic80.com/play?cat=0&sort=2&page=0";

// Net
pub const USER_AGENT: &str = concat!("tic_scrape/", env!("CARGO_PKG_VERSION"));

// Output
pub const DEFAULT_FOLDER: &str = "tic_files";
pub const GAMELIST_FILE: &str = "gamelist.xml";
pub const IMAGES_SUBDIR: &str = "images";
pub const FALLBACK_IMAGE_EXT: &str = "png";

// Record defaults
pub const NO_DESCRIPTION: &str = "No description available";
pub const UNKNOWN_AUTHOR: &str = "Unknown author";
