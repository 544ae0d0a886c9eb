//! Traits which, typically, may be imported without concern: `use declarg::prelude::*`.

pub use crate::api::{Codec, Integral};
