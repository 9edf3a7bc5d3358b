//! Canonical naming for interests and schools.
//!
//! A [`CanonicalTable`] holds the reference aliases and a [`Normalizer`] resolves
//! arbitrary strings against it.

pub(crate) mod normalize;
pub(crate) mod table;

pub use normalize::{Normalizer, title_case};
pub use table::{CanonicalTable, INTEREST_ALIASES, SCHOOL_ALIASES};
