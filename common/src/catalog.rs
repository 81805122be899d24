//! The built-in template catalog and its category filtering.
//!
//! The catalog is a fixed, ordered list; filtering never reorders it. The
//! picker UI builds its grid from [`filter_templates`] and the customizer
//! works on clones of the entries, so the catalog itself stays immutable.

use crate::model::template::{Template, TemplateCategory};

/// Filter applied to the catalog: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(TemplateCategory),
}

impl CategoryFilter {
    /// Parses the filter strings used by the UI buttons. Unknown strings are
    /// rejected rather than falling back to `All`.
    pub fn parse(raw: &str) -> Option<CategoryFilter> {
        match raw {
            "all" => Some(CategoryFilter::All),
            "academic" => Some(CategoryFilter::Only(TemplateCategory::Academic)),
            "professional" => Some(CategoryFilter::Only(TemplateCategory::Professional)),
            "creative" => Some(CategoryFilter::Only(TemplateCategory::Creative)),
            _ => None,
        }
    }

    pub fn matches(&self, template: &Template) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => template.category == *category,
        }
    }
}

/// The five built-in templates, in catalog order.
pub fn builtin_templates() -> Vec<Template> {
    fn entry(
        id: &str,
        name: &str,
        category: TemplateCategory,
        primary: &str,
        secondary: &str,
        font: &str,
        border: &str,
    ) -> Template {
        Template {
            id: id.to_string(),
            name: name.to_string(),
            category,
            thumbnail: format!("assets/templates/{}.jpg", id),
            primary_color: primary.to_string(),
            secondary_color: secondary.to_string(),
            font: font.to_string(),
            border: border.to_string(),
        }
    }

    vec![
        entry(
            "classic",
            "Classic",
            TemplateCategory::Academic,
            "#4361ee",
            "#3f37c9",
            "Inter",
            "classic",
        ),
        entry(
            "modern",
            "Modern",
            TemplateCategory::Professional,
            "#4cc9f0",
            "#4895ef",
            "Roboto",
            "modern",
        ),
        entry(
            "elegant",
            "Elegant",
            TemplateCategory::Professional,
            "#7209b7",
            "#b5179e",
            "Playfair Display",
            "elegant",
        ),
        entry(
            "creative",
            "Creative",
            TemplateCategory::Creative,
            "#f72585",
            "#b5179e",
            "Montserrat",
            "modern",
        ),
        entry(
            "minimal",
            "Minimal",
            TemplateCategory::Professional,
            "#212529",
            "#6c757d",
            "Inter",
            "modern",
        ),
    ]
}

/// Returns the catalog entries matching `filter`, in catalog order.
pub fn filter_templates(catalog: &[Template], filter: CategoryFilter) -> Vec<Template> {
    catalog
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect()
}

/// String-level variant used where the filter arrives as raw text. An
/// unknown filter yields an empty result set.
pub fn filter_templates_by_name(catalog: &[Template], raw: &str) -> Vec<Template> {
    match CategoryFilter::parse(raw) {
        Some(filter) => filter_templates(catalog, filter),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_full_catalog_in_order() {
        let catalog = builtin_templates();
        let filtered = filter_templates(&catalog, CategoryFilter::All);
        assert_eq!(filtered, catalog);
    }

    #[test]
    fn category_filters_return_only_matching_entries() {
        let catalog = builtin_templates();
        for category in [
            TemplateCategory::Academic,
            TemplateCategory::Professional,
            TemplateCategory::Creative,
        ] {
            let filtered = filter_templates(&catalog, CategoryFilter::Only(category));
            assert!(!filtered.is_empty());
            assert!(filtered.iter().all(|t| t.category == category));
        }
    }

    #[test]
    fn filtering_preserves_catalog_order() {
        let catalog = builtin_templates();
        let professional =
            filter_templates(&catalog, CategoryFilter::Only(TemplateCategory::Professional));
        let ids: Vec<&str> = professional.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["modern", "elegant", "minimal"]);
    }

    #[test]
    fn unknown_filter_yields_empty_set() {
        let catalog = builtin_templates();
        assert!(CategoryFilter::parse("vintage").is_none());
        assert!(filter_templates_by_name(&catalog, "vintage").is_empty());
        assert_eq!(filter_templates_by_name(&catalog, "all").len(), catalog.len());
    }
}
