//! Component descriptors and route entries produced by the code model.
//!
//! The model answers in one of two JSON shapes: the multi-component shape
//! (`componentName`, `typescript`, `html`, `scss`) and the older
//! single-component shape (`component_name`, `component_ts`, ...). Both are
//! folded into the same structs here through serde aliases, so nothing past
//! deserialization needs to know which shape arrived.

use serde::{Deserialize, Deserializer, Serialize};

/// Name used when a descriptor arrives without one.
pub const DEFAULT_COMPONENT_NAME: &str = "generated-component";

/// One generated UI component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Free-form component name, in any case convention.
    #[serde(
        alias = "componentName",
        alias = "component_name",
        default = "default_component_name",
        deserialize_with = "name_or_default"
    )]
    pub name: String,
    /// Component class source.
    #[serde(
        alias = "typescript",
        alias = "component_ts",
        default,
        deserialize_with = "string_or_empty"
    )]
    pub source: String,
    /// Component template markup.
    #[serde(
        alias = "html",
        alias = "component_html",
        default,
        deserialize_with = "string_or_empty"
    )]
    pub template: String,
    /// Component stylesheet.
    #[serde(
        alias = "scss",
        alias = "component_scss",
        default,
        deserialize_with = "string_or_empty"
    )]
    pub style: String,
}

impl ComponentDescriptor {
    /// Create a descriptor from its four parts.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        template: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            template: template.into(),
            style: style.into(),
        }
    }
}

/// A route binding a URL path to a component by its original name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// URL path; empty for the default route.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub path: String,
    /// Name of the component, matched exactly against [`ComponentDescriptor::name`].
    #[serde(
        rename = "componentName",
        alias = "component_name",
        alias = "component",
        default,
        deserialize_with = "string_or_empty"
    )]
    pub component_name: String,
}

impl RouteEntry {
    /// Create a route entry.
    #[must_use]
    pub fn new(path: impl Into<String>, component_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            component_name: component_name.into(),
        }
    }
}

fn default_component_name() -> String {
    DEFAULT_COMPONENT_NAME.to_string()
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn name_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_component_name))
}
