use crate::shared::error::BuildMetaError;
use crate::shared::Result;

/// Maximum length for component names (security limit)
const MAX_COMPONENT_NAME_LENGTH: usize = 255;

/// NewType wrapper for component name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(name: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(BuildMetaError::InvalidComponent {
                reason: "component name is empty".to_string(),
            }
            .into());
        }

        if name.len() > MAX_COMPONENT_NAME_LENGTH {
            return Err(BuildMetaError::InvalidComponent {
                reason: format!(
                    "component name is too long ({} bytes, maximum {})",
                    name.len(),
                    MAX_COMPONENT_NAME_LENGTH
                ),
            }
            .into());
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(BuildMetaError::InvalidComponent {
                reason: format!("component name contains invalid characters: {}", name),
            }
            .into());
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A name/value property pair attached to a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A named, versioned artifact with an ordered property list.
///
/// The version field is opaque: FIPS-encoded suffixes (and anything else
/// an upstream ecosystem embeds) pass through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: ComponentName,
    version: String,
    properties: Vec<Property>,
}

impl Component {
    pub fn new(name: ComponentName, version: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            name,
            version: version.into(),
            properties,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}
