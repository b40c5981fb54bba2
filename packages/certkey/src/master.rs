//! Unified entry point

#[cfg(feature = "key")]
use certkey_key::{KeyMaterialGenerator, RandomSource, SymmetricKeySpec};

#[cfg(feature = "x509")]
use certkey_x509::AlternativeNames;

/// Entry point for both utilities
///
/// ```
/// # #[cfg(feature = "key")]
/// # {
/// use certkey::Certkey;
///
/// let key = Certkey::generate_key("HMACSHA256").unwrap();
/// assert_eq!(key.len(), 32);
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Certkey;

#[cfg(feature = "key")]
impl Certkey {
    /// Uninitialized generator for `algorithm`
    pub fn key_generator(algorithm: &str) -> certkey_key::Result<KeyMaterialGenerator> {
        KeyMaterialGenerator::for_algorithm(algorithm)
    }

    /// One default-size key from the system source
    pub fn generate_key(algorithm: &str) -> certkey_key::Result<SymmetricKeySpec> {
        Self::key_generator(algorithm)?.generate()
    }

    /// One default-size key drawn from `source`
    pub fn generate_key_with_source(
        algorithm: &str,
        source: impl RandomSource + 'static,
    ) -> certkey_key::Result<SymmetricKeySpec> {
        let mut generator = Self::key_generator(algorithm)?;
        generator.initialize(source);
        generator.generate()
    }
}

#[cfg(feature = "x509")]
impl Certkey {
    /// SubjectAltName entries of a DER or PEM certificate
    pub fn subject_alternative_names(
        certificate: &[u8],
    ) -> certkey_x509::Result<AlternativeNames> {
        let cert = certkey_x509::load_certificate(certificate)?;
        certkey_x509::subject_alternative_names(&cert)
    }

    /// IssuerAltName entries of a DER or PEM certificate
    pub fn issuer_alternative_names(
        certificate: &[u8],
    ) -> certkey_x509::Result<AlternativeNames> {
        let cert = certkey_x509::load_certificate(certificate)?;
        certkey_x509::issuer_alternative_names(&cert)
    }

    /// Decode an encoded extension value taken from elsewhere
    pub fn alternative_names(extension: Option<&[u8]>) -> certkey_x509::Result<AlternativeNames> {
        certkey_x509::get_alternative_names(extension)
    }
}
