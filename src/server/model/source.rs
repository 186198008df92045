//! Provenance of read results.
//!
//! Reads that may substitute fixture data return `Result<Sourced<T>, Error>`: `Live` when the
//! store answered, `Degraded` when fixture data stands in, and `Err` when neither could.

use std::fmt;

/// Why fixture data was served instead of store data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FallbackCause {
    /// The store returned an error.
    StoreUnavailable(String),
    /// The store answered but had no matching record.
    NotInStore,
}

impl FallbackCause {
    /// Short machine-readable label, used in the `x-fallback-cause` header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::StoreUnavailable(_) => "store-unavailable",
            Self::NotInStore => "not-in-store",
        }
    }
}

impl FallbackCause {
    /// Decides how a store lookup that found nothing may continue.
    ///
    /// `error` is the store error, or `None` when the store answered without a match.
    ///
    /// # Returns
    /// - `Ok(Some(cause))`: Fallback is enabled, fixtures may be served
    /// - `Ok(None)`: Fallback is disabled and the record does not exist
    /// - `Err(DbErr)`: Fallback is disabled and the store failed
    pub fn for_lookup(error: Option<sea_orm::DbErr>, fallback_enabled: bool) -> Result<Option<Self>, sea_orm::DbErr> {
        match error {
            Some(err) if !fallback_enabled => Err(err),
            Some(err) => Ok(Some(Self::from(&err))),
            None if fallback_enabled => Ok(Some(Self::NotInStore)),
            None => Ok(None),
        }
    }
}

impl fmt::Display for FallbackCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StoreUnavailable(reason) => write!(f, "store unavailable: {}", reason),
            Self::NotInStore => f.write_str("no matching record in store"),
        }
    }
}

impl From<&sea_orm::DbErr> for FallbackCause {
    fn from(err: &sea_orm::DbErr) -> Self {
        Self::StoreUnavailable(err.to_string())
    }
}

/// Read result tagged with where its data came from.
#[derive(Clone, Debug, PartialEq)]
pub enum Sourced<T> {
    /// Data read from the store.
    Live(T),
    /// Fixture data substituted for store data.
    Degraded {
        /// The fixture data.
        data: T,
        /// Why the store data could not be used.
        cause: FallbackCause,
    },
}

impl<T> Sourced<T> {
    /// Wraps fixture data with its cause.
    pub fn degraded(data: T, cause: FallbackCause) -> Self {
        Self::Degraded { data, cause }
    }

    /// Whether fixture data was substituted.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// The fallback cause, if any.
    pub fn cause(&self) -> Option<&FallbackCause> {
        match self {
            Self::Live(_) => None,
            Self::Degraded { cause, .. } => Some(cause),
        }
    }

    /// Borrows the data regardless of provenance.
    pub fn data(&self) -> &T {
        match self {
            Self::Live(data) => data,
            Self::Degraded { data, .. } => data,
        }
    }

    /// Discards provenance and returns the data.
    pub fn into_inner(self) -> T {
        match self {
            Self::Live(data) => data,
            Self::Degraded { data, .. } => data,
        }
    }

    /// Maps the data while keeping provenance.
    pub fn map<U, F>(self, f: F) -> Sourced<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Live(data) => Sourced::Live(f(data)),
            Self::Degraded { data, cause } => Sourced::Degraded {
                data: f(data),
                cause,
            },
        }
    }
}
