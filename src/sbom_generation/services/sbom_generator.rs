use crate::sbom_generation::domain::{Component, ComponentName, Property, SbomDocument};
use crate::shared::Result;

/// Namespace prefix keeping this tool's properties apart from other SBOM
/// tooling that annotates the same documents
const PROPERTY_NAMESPACE: &str = "openssl";

const FIPS_CERTIFICATE_KEY: &str = "fips_certificate";
const FIPS_ENABLED_KEY: &str = "fips_enabled";

/// SbomGenerator service - builds compliance documents for build artifacts
///
/// Pure business logic: given a component identity and its FIPS status,
/// produce a fresh document. Property order is insertion order and is
/// stable across calls with identical inputs.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates an SBOM document for a single named artifact.
    ///
    /// The version string is passed through verbatim, FIPS suffix and all;
    /// consumers that need its structure decode it separately. A FIPS
    /// build always carries the certificate property, with an empty value
    /// when no certificate id was supplied, so downstream scanners can key
    /// on the property's presence.
    ///
    /// # Errors
    /// Returns an error if `name` is empty or otherwise invalid.
    pub fn generate(
        name: &str,
        version: &str,
        is_fips: bool,
        fips_cert: Option<&str>,
    ) -> Result<SbomDocument> {
        let name = ComponentName::new(name)?;

        let mut properties = Vec::new();
        if is_fips {
            properties.push(Property::new(
                Self::property_name(FIPS_CERTIFICATE_KEY),
                fips_cert.unwrap_or(""),
            ));
            properties.push(Property::new(Self::property_name(FIPS_ENABLED_KEY), "true"));
        } else {
            properties.push(Property::new(
                Self::property_name(FIPS_ENABLED_KEY),
                "false",
            ));
        }

        Ok(SbomDocument::new(Component::new(name, version, properties)))
    }

    fn property_name(key: &str) -> String {
        format!("{}:{}", PROPERTY_NAMESPACE, key)
    }
}
