//! Request binding for CUIT route and query parameters.
//!
//! A [`ModelBinder`] turns the raw value a web framework extracted for a named
//! field into either a [`CuitNumber`] or a field-level error carrying the
//! exact validation message. Failures never panic and never leave the binder;
//! the caller decides how to answer the request, typically by returning a
//! [`ValidationProblem`] with status 400.
//!
//! ```rust
//! use cuit_number::binding::{ModelBinder, ValidationProblem};
//!
//! let binder = ModelBinder::new("cuit");
//! let mut problem = ValidationProblem::new();
//!
//! let cuit = binder.bind_into(Some("20-31111111-8"), &mut problem);
//! assert!(cuit.is_none());
//! assert_eq!(
//!     problem.messages_for("cuit"),
//!     ["The CUIT's verification digit is wrong."]
//! );
//! ```

mod problem;

pub use problem::{
    FieldError, VALIDATION_PROBLEM_TITLE, VALIDATION_PROBLEM_TYPE, ValidationProblem,
};

use crate::codec::{CuitAdapter, RouteSegmentAdapter};
use crate::cuit::CuitNumber;
use log::debug;

/// Outcome of binding one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingResult {
    /// The value was a valid CUIT
    Bound(CuitNumber),
    /// No usable value and the field is optional
    NotProvided,
    /// The value was rejected
    Failed(FieldError),
}

impl BindingResult {
    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Bound(_))
    }

    /// The bound CUIT, if any.
    pub fn into_cuit(self) -> Option<CuitNumber> {
        match self {
            Self::Bound(cuit) => Some(cuit),
            _ => None,
        }
    }

    /// Convert into a result suitable for early return from a handler.
    pub fn into_result(self) -> Result<Option<CuitNumber>, ValidationProblem> {
        match self {
            Self::Bound(cuit) => Ok(Some(cuit)),
            Self::NotProvided => Ok(None),
            Self::Failed(error) => Err(error.into()),
        }
    }
}

/// Binds a single named field to a [`CuitNumber`].
///
/// The adapter is wired explicitly; it defaults to [`RouteSegmentAdapter`].
/// Any adapter that reads plain strings works, such as
/// [`PlainTextAdapter`](crate::codec::PlainTextAdapter) for query parameters.
#[derive(Debug, Clone)]
pub struct ModelBinder<A = RouteSegmentAdapter> {
    field: String,
    required: bool,
    adapter: A,
}

impl ModelBinder<RouteSegmentAdapter> {
    /// A required binder for a route segment named `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self::with_adapter(field, RouteSegmentAdapter::new())
    }
}

impl<A> ModelBinder<A>
where
    A: CuitAdapter<Raw = str>,
{
    /// A required binder that decodes through `adapter`.
    pub fn with_adapter(field: impl Into<String>, adapter: A) -> Self {
        Self {
            field: field.into(),
            required: true,
            adapter,
        }
    }

    /// Let missing or blank values bind to [`BindingResult::NotProvided`].
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Bind the raw value extracted for this field.
    ///
    /// Missing and whitespace-only values are treated alike: they fail with
    /// "The {field} field is required." on a required binder. Anything else,
    /// including a value made only of dashes, runs the CUIT validation rules.
    pub fn bind(&self, value: Option<&str>) -> BindingResult {
        let value = match value {
            Some(value) if !value.trim().is_empty() => value,
            _ if self.required => {
                debug!("Required field '{}' has no value", self.field);
                return BindingResult::Failed(FieldError::required(&self.field));
            }
            _ => return BindingResult::NotProvided,
        };

        match self.adapter.decode(value) {
            Ok(cuit) => BindingResult::Bound(cuit),
            Err(error) => {
                debug!(
                    "Rejected {} value {:?} for field '{}': {}",
                    self.adapter.boundary(),
                    value,
                    self.field,
                    error
                );
                BindingResult::Failed(FieldError::new(&self.field, error.to_string()))
            }
        }
    }

    /// Bind the value and record any failure in `problem`.
    pub fn bind_into(
        &self,
        value: Option<&str>,
        problem: &mut ValidationProblem,
    ) -> Option<CuitNumber> {
        match self.bind(value) {
            BindingResult::Bound(cuit) => Some(cuit),
            BindingResult::NotProvided => None,
            BindingResult::Failed(error) => {
                problem.add_error(error);
                None
            }
        }
    }
}
