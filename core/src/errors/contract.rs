//! The contract every raiseable domain failure implements

use super::types::RestServiceError;

/// Identity of a domain failure.
///
/// Services usually implement this on an enum listing their failures:
///
/// ```
/// use rexh_core::errors::{RestServiceError, ServiceFailure};
///
/// enum OrderFailure {
///     ItemNotFound,
/// }
///
/// impl ServiceFailure for OrderFailure {
///     fn code(&self) -> &str {
///         match self {
///             OrderFailure::ItemNotFound => "404",
///         }
///     }
///
///     fn desc(&self) -> &str {
///         "Ordered item does not exist"
///     }
///
///     fn module(&self) -> &str {
///         "ORDER"
///     }
///
///     fn api(&self) -> &str {
///         "ORD"
///     }
/// }
///
/// fn find_item(name: &str) -> Result<(), RestServiceError> {
///     OrderFailure::ItemNotFound.raise_with([name])
/// }
///
/// let err = find_item("Widget").unwrap_err();
/// assert_eq!(err.parameters(), ["Widget".to_string()]);
/// ```
pub trait ServiceFailure {
    /// Code identifying the failure inside its module
    fn code(&self) -> &str;

    /// Description for developers; never shown to API consumers
    fn desc(&self) -> &str;

    /// Module of the service defining the failure
    fn module(&self) -> &str;

    /// Service defining the failure
    fn api(&self) -> &str;

    /// Positional parameters for the translated template
    fn parameters(&self) -> &[String] {
        &[]
    }

    /// Build the raiseable error, keeping this value's parameters
    fn exception(&self) -> RestServiceError {
        RestServiceError::new(self.code(), self.desc(), self.module(), self.api())
            .with_parameters(self.parameters().iter().cloned())
    }

    /// Build the raiseable error with `params` replacing any parameters
    fn exception_with<I, S>(&self, params: I) -> RestServiceError
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RestServiceError::new(self.code(), self.desc(), self.module(), self.api())
            .with_parameters(params)
    }

    /// Leave the normal flow with this failure
    fn raise<T>(&self) -> Result<T, RestServiceError>
    where
        Self: Sized,
    {
        Err(self.exception())
    }

    /// Leave the normal flow with this failure and `params`
    fn raise_with<T, I, S>(&self, params: I) -> Result<T, RestServiceError>
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Err(self.exception_with(params))
    }
}
