//! Reserved error codes and markers shared by every service

/// Codes and literals with a fixed meaning in the response contract
pub mod error_codes {
    /// Prefix for a recognized failure code that has no translation in the catalog.
    ///
    /// `ND_404` means "404 is a known failure, but no text exists for it in this
    /// locale; the generic default text was used instead".
    pub const NOT_DEFINED_PREFIX: &str = "ND_";

    /// Sentinel code for request payloads that failed field validation
    pub const FIELD_VALIDATION: &str = "999";

    /// Module reported for field validation failures, raised by the service itself
    pub const SELF_MODULE: &str = "Self";

    /// Translation type stored for exception texts in the catalog table
    pub const TRANSLATION_TYPE_EXCEPTION: &str = "EX";

    /// Prefix of connection pools created for the translation catalog
    pub const POOL_NAME_PREFIX: &str = "GEH_";
}
