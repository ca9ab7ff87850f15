// src/specs/meta.rs
//! Where a detail page keeps its descriptive metadata.
//!
//! The site has changed these tags before (and the author tag carries a
//! "by " convention), so the shapes live in one place. A format change on
//! the site means editing `TIC80`, nothing else.

use scraper::{ElementRef, Selector};

use crate::config::consts::{NO_DESCRIPTION, UNKNOWN_AUTHOR};
use crate::core::html::{first_content, try_selector};
use crate::core::sanitize::strip_prefix_ci;
use crate::error::ScrapeError;

/// Selector strings must be valid CSS; `compile` checks them.
#[derive(Clone, Copy, Debug)]
pub struct MetaTags {
    /// Social-preview image, `content` is a URL (possibly relative)
    pub image: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    /// Stripped from the front of the author text
    pub author_prefix: &'static str,
}

pub const TIC80: MetaTags = MetaTags {
    image: r#"meta[property="og:image"]"#,
    description: r#"meta[name="description"]"#,
    author: r#"meta[name="author"]"#,
    author_prefix: "by ",
};

impl MetaTags {
    pub fn compile(&self) -> Result<MetaSelectors, ScrapeError> {
        Ok(MetaSelectors {
            image: try_selector(self.image)?,
            description: try_selector(self.description)?,
            author: try_selector(self.author)?,
            author_prefix: self.author_prefix,
        })
    }
}

/// `MetaTags` with every selector parsed.
#[derive(Debug)]
pub struct MetaSelectors {
    image: Selector,
    description: Selector,
    author: Selector,
    author_prefix: &'static str,
}

impl MetaSelectors {
    pub fn image_href(&self, root: ElementRef<'_>) -> Option<String> {
        first_content(root, &self.image)
    }

    /// Falls back to "No description available".
    pub fn description(&self, root: ElementRef<'_>) -> String {
        first_content(root, &self.description)
            .unwrap_or_else(|| s!(NO_DESCRIPTION))
    }

    /// Falls back to "Unknown author". A bare "by " also counts as missing.
    pub fn author(&self, root: ElementRef<'_>) -> String {
        first_content(root, &self.author)
            .map(|raw| strip_prefix_ci(&raw, self.author_prefix))
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| s!(UNKNOWN_AUTHOR))
    }
}
