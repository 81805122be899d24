use serde::{Deserialize, Serialize};

/// Category a template belongs to. Used by the catalog filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Academic,
    Professional,
    Creative,
}

impl TemplateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Academic => "academic",
            TemplateCategory::Professional => "professional",
            TemplateCategory::Creative => "creative",
        }
    }
}

/// A named visual style applied to a certificate preview.
///
/// Catalog entries are immutable; the working template a user customizes is a
/// clone of one of them, replaced wholesale on selection or merged with edited
/// attributes via [`Template::customized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: TemplateCategory,
    pub thumbnail: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub font: String,
    /// Opaque border style id (`classic`, `modern`, `elegant`).
    pub border: String,
}

/// The four editable attributes of a template, as read from the
/// customization controls. Any string is accepted; color format and font
/// availability are not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateCustomization {
    pub primary_color: String,
    pub secondary_color: String,
    pub font: String,
    pub border: String,
}

impl TemplateCustomization {
    /// Snapshots a template's editable attributes, i.e. what the controls
    /// show right after the template is selected.
    pub fn of(template: &Template) -> Self {
        Self {
            primary_color: template.primary_color.clone(),
            secondary_color: template.secondary_color.clone(),
            font: template.font.clone(),
            border: template.border.clone(),
        }
    }
}

impl Template {
    /// Returns a copy of this template with the editable attributes replaced
    /// by `customization`. Identity fields (`id`, `name`, `category`,
    /// `thumbnail`) are untouched.
    pub fn customized(&self, customization: &TemplateCustomization) -> Template {
        Template {
            primary_color: customization.primary_color.clone(),
            secondary_color: customization.secondary_color.clone(),
            font: customization.font.clone(),
            border: customization.border.clone(),
            ..self.clone()
        }
    }
}
