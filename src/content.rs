use std::collections::HashMap;
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;
use yew::prelude::*;

use crate::reveal::mapper::{RevealConfig, RevealOverride};

const CONTENT_JSON: &str = include_str!("../static/content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product slug `{0}`")]
    DuplicateSlug(String),
    #[error("reveal override for `{section}` has an out-of-range `{field}`")]
    InvalidReveal { section: String, field: &'static str },
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Service {
    pub title: String,
    pub icon: String,
    pub summary: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Product {
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Post {
    pub title: String,
    pub date: chrono::NaiveDate,
    pub excerpt: String,
}

/// A retired design of the site, shown in the museum.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Exhibit {
    pub name: String,
    pub year: i32,
    pub summary: String,
    pub notes: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub museum: Vec<Exhibit>,
    /// Per-section overrides of the built-in reveal presets.
    #[serde(default)]
    pub reveal: HashMap<String, RevealOverride>,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::parse(CONTENT_JSON)
    }

    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let mut content: SiteContent = serde_json::from_str(raw)?;
        let mut seen = Vec::with_capacity(content.products.len());
        for product in &content.products {
            if seen.contains(&product.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(product.slug.clone()));
            }
            seen.push(product.slug.as_str());
        }
        for (section, patch) in &content.reveal {
            if let Some(field) = patch.invalid_field() {
                return Err(ContentError::InvalidReveal {
                    section: section.clone(),
                    field,
                });
            }
        }
        content.posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(content)
    }

    pub fn product(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// `preset` with the section's overrides from content applied on top.
    pub fn reveal_for(&self, section: &str, preset: RevealConfig) -> RevealConfig {
        match self.reveal.get(section) {
            Some(patch) => patch.apply(preset),
            None => preset,
        }
    }
}

/// Site content provided by the app root.
#[hook]
pub fn use_site_content() -> Rc<SiteContent> {
    use_context::<Rc<SiteContent>>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let content = SiteContent::load().expect("bundled content");
        assert!(!content.services.is_empty());
        assert!(!content.metrics.is_empty());
        assert!(!content.testimonials.is_empty());
        assert!(!content.museum.is_empty());
        for product in &content.products {
            assert_eq!(content.product(&product.slug), Some(product));
        }
    }

    #[test]
    fn posts_are_newest_first() {
        let content = SiteContent::parse(
            r#"{"posts": [
                {"title": "old", "date": "2021-03-01", "excerpt": ""},
                {"title": "new", "date": "2024-11-20", "excerpt": ""}
            ]}"#,
        )
        .expect("valid");
        assert_eq!(content.posts[0].title, "new");
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let raw = r#"{"products": [
            {"slug": "a", "name": "A", "tagline": "", "description": ""},
            {"slug": "a", "name": "B", "tagline": "", "description": ""}
        ]}"#;
        match SiteContent::parse(raw) {
            Err(ContentError::DuplicateSlug(slug)) => assert_eq!(slug, "a"),
            other => panic!("expected duplicate slug, got {other:?}"),
        }
    }

    #[test]
    fn bad_json_is_a_parse_error() {
        assert!(matches!(SiteContent::parse("{"), Err(ContentError::Parse(_))));
    }

    #[test]
    fn reveal_overrides() {
        let content = SiteContent::parse(r#"{"reveal": {"metrics": {"threshold": 0.5, "multiplier": 3}}}"#)
            .expect("valid");
        let preset = RevealConfig::new(0.1, 8.0).with_offset(20.0);
        let metrics = content.reveal_for("metrics", preset);
        assert_eq!(metrics.threshold, 0.5);
        assert_eq!(metrics.multiplier, 3.0);
        assert_eq!(metrics.start_offset, 20.0);
        assert_eq!(content.reveal_for("services", preset), preset);
    }

    #[test]
    fn out_of_range_reveal_is_rejected() {
        let raw = r#"{"reveal": {"metrics": {"threshold": 1.5, "multiplier": -3}}}"#;
        match SiteContent::parse(raw) {
            Err(ContentError::InvalidReveal { section, field }) => {
                assert_eq!(section, "metrics");
                assert_eq!(field, "threshold");
            }
            other => panic!("expected invalid reveal, got {other:?}"),
        }
        let raw = r#"{"reveal": {"footer": {"translate_scale": -1}}}"#;
        assert!(matches!(
            SiteContent::parse(raw),
            Err(ContentError::InvalidReveal { field: "translate_scale", .. })
        ));
    }
}
