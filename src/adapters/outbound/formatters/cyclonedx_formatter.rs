use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{
    document, Component as DomainComponent, Property as DomainProperty, SbomDocument,
};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: String,
    #[serde(rename = "specVersion")]
    spec_version: String,
    version: u32,
    metadata: Metadata,
    components: Vec<Component>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    component: Component,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: String,
    name: String,
    version: String,
    properties: Vec<Property>,
}

#[derive(Debug, Serialize)]
struct Property {
    name: String,
    value: String,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.6 JSON format
///
/// This adapter implements the SbomFormatter port for CycloneDX format.
/// The output carries no serial number or generation timestamp, so
/// identical documents serialize to byte-identical JSON.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, sbom: &SbomDocument) -> Result<String> {
        let bom = Bom {
            bom_format: document::BOM_FORMAT.to_string(),
            spec_version: document::SPEC_VERSION.to_string(),
            version: document::DOCUMENT_VERSION,
            metadata: Metadata {
                component: self.build_component(sbom.root()),
            },
            components: vec![self.build_component(sbom.root())],
        };

        serde_json::to_string_pretty(&bom).map_err(Into::into)
    }
}

impl CycloneDxFormatter {
    /// Build the serialized component from the domain component
    fn build_component(&self, component: &DomainComponent) -> Component {
        Component {
            component_type: "library".to_string(),
            name: component.name().to_string(),
            version: component.version().to_string(),
            properties: component
                .properties()
                .iter()
                .map(|p| self.build_property(p))
                .collect(),
        }
    }

    fn build_property(&self, property: &DomainProperty) -> Property {
        Property {
            name: property.name().to_string(),
            value: property.value().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::services::SbomGenerator;

    #[test]
    fn test_format_basic() {
        let sbom = SbomGenerator::generate("test-package", "1.0.0", false, None).unwrap();
        let formatter = CycloneDxFormatter::new();

        let result = formatter.format(&sbom);

        assert!(result.is_ok());
        let json = result.unwrap();
        assert!(json.contains("\"bomFormat\": \"CycloneDX\""));
        assert!(json.contains("\"specVersion\": \"1.6\""));
        assert!(json.contains("\"name\": \"test-package\""));
        assert!(json.contains("\"version\": \"1.0.0\""));
        assert!(json.contains("\"openssl:fips_enabled\""));
        assert!(json.contains("\"value\": \"false\""));
    }

    #[test]
    fn test_format_fips_properties() {
        let sbom = SbomGenerator::generate("openssl", "3.4.1", true, Some("4985")).unwrap();
        let formatter = CycloneDxFormatter::new();

        let json = formatter.format(&sbom).unwrap();
        assert!(json.contains("\"openssl:fips_certificate\""));
        assert!(json.contains("\"value\": \"4985\""));
        assert!(json.contains("\"openssl:fips_enabled\""));
        assert!(json.contains("\"value\": \"true\""));
    }

    #[test]
    fn test_format_root_component_in_metadata_and_components() {
        let sbom = SbomGenerator::generate("openssl", "3.4.1", false, None).unwrap();
        let json = CycloneDxFormatter::new().format(&sbom).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["metadata"]["component"]["name"], "openssl");
        assert_eq!(parsed["components"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["components"][0]["name"], "openssl");
        assert_eq!(parsed["components"][0]["type"], "library");
    }

    #[test]
    fn test_format_preserves_fips_version_suffix() {
        let version = "3.4.1+fips.20251013120000.abc12345";
        let sbom = SbomGenerator::generate("openssl", version, true, None).unwrap();
        let json = CycloneDxFormatter::new().format(&sbom).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["metadata"]["component"]["version"], version);
    }

    #[test]
    fn test_format_is_deterministic() {
        let formatter = CycloneDxFormatter::new();
        let first = formatter
            .format(&SbomGenerator::generate("openssl", "3.4.1", true, Some("4985")).unwrap())
            .unwrap();
        let second = formatter
            .format(&SbomGenerator::generate("openssl", "3.4.1", true, Some("4985")).unwrap())
            .unwrap();
        assert_eq!(first, second);
    }
}
