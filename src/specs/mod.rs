// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific parsers for the cartridge site. Each parser focuses on a single
//! page kind and encodes *where the ground truth lives in the HTML*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched markup (`listing`, `detail`).
//! - **Selector choice** for the cart tiles and the download anchor.
//! - **Metadata tag shapes** (`meta`), kept apart so site drift touches one file.
//!
//! ## What does **not** live here
//! - **Fetching** – `core::net` (`Fetch`).
//! - **Writing files / gamelist** – `file` and `store`.
//! - **Sequencing and error policy** – `runner` decides skip vs. abort.
//!
//! ## Typical call chain
//! ```text
//! runner::run → Fetch::get_text(listing) → specs::listing::extract_links
//!            ↘ per link: Fetch::get_text(detail) → specs::detail::extract_detail
//! ```
//!
//! ## Testing notes
//! - Specs are tested **offline** against inline HTML snippets.
pub mod detail;
pub mod listing;
pub mod meta;

pub use detail::{extract_detail, DetailInfo};
pub use listing::extract_links;
