use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

const CATALOG_FILE: &str = "projects.json";
const PLACEHOLDER_DESCRIPTION: &str = "Project description goes here.";

pub static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let catalog = Catalog::load().unwrap_or_else(|e| {
        log::error!("project catalog unavailable: {e}");
        Catalog::default()
    });
    for slug in catalog.duplicate_slugs() {
        log::warn!("duplicate project slug in catalog: {slug}");
    }
    catalog
});

#[derive(Embed)]
#[folder = "data"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Project not found: {0}")]
    NotFound(String),
    #[error("Catalog file missing: {0}")]
    MissingData(String),
    #[error("Couldn't parse project catalog: {0}")]
    Parse(String),
}

/// Either a single block of text or an ordered list of paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Paragraphs(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category: String,
    pub color: String,
    #[serde(default)]
    pub text_color: Option<String>,
    pub image: String,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub awards: Option<String>,
    #[serde(default)]
    pub designed_at: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub protected: bool,
    #[serde(default)]
    pub icon_color: Option<String>,
}

impl Project {
    pub fn href(&self) -> String {
        format!("/projects/{}", self.slug)
    }

    /// `color` is authored as a tailwind arbitrary value, e.g. `bg-[#e4e1da]`.
    pub fn background_color(&self) -> String {
        self.color.replace("bg-[", "").replace(']', "")
    }

    pub fn text_class(&self) -> &str {
        self.text_color.as_deref().unwrap_or_default()
    }

    pub fn paragraphs(&self) -> Vec<String> {
        match &self.description {
            Some(Description::Text(t)) => vec![t.clone()],
            Some(Description::Paragraphs(ps)) => ps.clone(),
            None => vec![PLACEHOLDER_DESCRIPTION.to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let projects = serde_json::from_str::<Vec<Project>>(content)
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self { projects })
    }

    /// Reads the catalog embedded from `data/projects.json`.
    pub fn load() -> Result<Self, CatalogError> {
        let file = Assets::get(CATALOG_FILE)
            .ok_or_else(|| CatalogError::MissingData(CATALOG_FILE.to_string()))?;
        let content = std::str::from_utf8(&file.data)
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_json(content)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn find(&self, slug: &str) -> Result<&Project, CatalogError> {
        self.projects
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| CatalogError::NotFound(slug.to_string()))
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.slug.as_str())
    }

    pub fn duplicate_slugs(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for slug in self.slugs() {
            if !seen.insert(slug) && !dupes.contains(&slug) {
                dupes.push(slug);
            }
        }
        dupes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"[
        {
            "id": "1",
            "slug": "first",
            "title": "First",
            "category": "Brand",
            "color": "bg-[#101010]",
            "textColor": "text-white",
            "image": "/images/first.jpg",
            "description": ["One.", "Two."],
            "designedAt": "Studio"
        },
        {
            "id": "2",
            "slug": "second",
            "title": "Second",
            "category": "Product",
            "color": "bg-[#fafafa]",
            "image": "/images/second.jpg",
            "description": "Single block.",
            "protected": true,
            "iconColor": "#000"
        },
        {
            "id": "3",
            "slug": "third",
            "title": "Third",
            "category": "App",
            "color": "bg-[#cccccc]",
            "image": "/images/third.jpg",
            "gallery": ["/images/third-1.jpg", "/images/third-2.jpg"]
        }
    ]"##;

    #[test]
    fn test_parse_keeps_catalog_order() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let slugs: Vec<&str> = catalog.slugs().collect();
        assert_eq!(slugs, vec!["first", "second", "third"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_optional_fields() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let first = catalog.find("first").unwrap();
        assert_eq!(first.text_class(), "text-white");
        assert_eq!(first.designed_at.as_deref(), Some("Studio"));
        assert!(!first.protected);
        assert!(first.gallery.is_empty());

        let second = catalog.find("second").unwrap();
        assert!(second.protected);
        assert_eq!(second.icon_color.as_deref(), Some("#000"));
        assert_eq!(second.text_class(), "");

        let third = catalog.find("third").unwrap();
        assert_eq!(third.gallery.len(), 2);
    }

    #[test]
    fn test_find_missing_slug() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(
            catalog.find("nope"),
            Err(CatalogError::NotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_paragraphs() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.find("first").unwrap().paragraphs(), vec!["One.", "Two."]);
        assert_eq!(catalog.find("second").unwrap().paragraphs(), vec!["Single block."]);
        assert_eq!(
            catalog.find("third").unwrap().paragraphs(),
            vec![PLACEHOLDER_DESCRIPTION]
        );
    }

    #[test]
    fn test_background_color_and_href() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let first = catalog.find("first").unwrap();
        assert_eq!(first.background_color(), "#101010");
        assert_eq!(first.href(), "/projects/first");
    }

    #[test]
    fn test_malformed_catalog() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
        // a record without the required slug is rejected as a whole
        assert!(Catalog::from_json(r#"[{"id": "1"}]"#).is_err());
    }

    #[test]
    fn test_duplicate_slugs() {
        let mut catalog = Catalog::from_json(SAMPLE).unwrap();
        assert!(catalog.duplicate_slugs().is_empty());
        let copy = catalog.projects()[0].clone();
        catalog.projects.push(copy.clone());
        catalog.projects.push(copy);
        assert_eq!(catalog.duplicate_slugs(), vec!["first"]);
        // first match wins
        assert_eq!(catalog.find("first").unwrap().id, "1");
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::load().expect("embedded catalog should parse");
        assert!(!catalog.is_empty());
        assert!(catalog.duplicate_slugs().is_empty());
        assert!(catalog.projects().iter().any(|p| p.protected));
    }
}
