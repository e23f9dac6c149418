//! [`Error`]-related definitions.

use std::fmt;

use derive_more::Error as StdError;
use service::infra::database;
use tracerr::{Trace, Traced};

/// Defines an enum of page failures.
///
/// Every variant is annotated with the `#[code]` identifying it in the CLI
/// output, the `#[exit]` code the process terminates with and the
/// `#[message]` shown to the user, and converts into the matching [`Error`].
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_error {
    (
        enum $name:ident {
            $(
                #[code = $code:literal]
                #[exit = $exit_code:literal]
                #[message = $message:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        /// Page failure.
        #[derive(
            Clone,
            Copy,
            Debug,
            ::derive_more::Display,
            ::derive_more::Error
        )]
        pub enum $name {
            $(
                #[display($message)]
                #[doc = $message]
                $variant,
            )*
        }

        impl From<$name> for $crate::Error {
            fn from(err: $name) -> Self {
                match err {
                    $(
                        $name::$variant => {
                            Self::new($code, $exit_code, $message)
                        }
                    )*
                }
            }
        }
    };
}

/// Failure of a CLI invocation, reported to `stderr`.
///
/// Displayed as `error[CODE]: message`, followed by the trace of the failure
/// if it has one.
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// Identifier of this [`Error`] kind.
    pub code: Code,

    /// Code the process exits with.
    pub exit_code: u8,

    /// Trace of where this [`Error`] has happened.
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// Human-readable description.
    pub message: String,
}

impl Error {
    /// Creates a new untraced [`Error`].
    #[must_use]
    pub fn new(code: Code, exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            code,
            exit_code,
            backtrace: None,
            message: message.into(),
        }
    }

    /// Creates a new [`Error`] of an unexpected failure.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        Self::new("INTERNAL_ERROR", 1, msg.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if let Some(trace) = &self.backtrace {
            write!(f, "\n\n{trace}")?;
        }
        Ok(())
    }
}

/// Identifier of an [`Error`] kind, in `SCREAMING_SNAKE_CASE`.
pub type Code = &'static str;

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }
}

impl<E: AsError> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().try_as_error()?;
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for database::Error {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Mock(e) => Some(Error::new(
                "FIXTURES_UNAVAILABLE",
                3,
                format!("Mock data cannot be loaded: {e}"),
            )),
        }
    }
}
