//! Service layer providing business-oriented operations on top of models.
//! - Separates delegation from data access.
//! - Reuses entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod cheese;
pub mod errors;
#[cfg(test)]
pub mod test_support;
