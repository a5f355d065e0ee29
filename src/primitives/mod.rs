//! Fixed-size integer primitives and modular arithmetic.
//!
//! [`U256`] is the working type of the SM2 engine: field elements,
//! scalars and serialized coordinates all pass through it. [`U512`] holds
//! the untruncated product of a 256×256-bit multiplication on its way into
//! one of the two reduction paths, which are selected explicitly through
//! the [`Modulus`] tag.

pub mod modular;
pub mod u256;
pub mod u512;

pub use modular::Modulus;
pub use u256::U256;
pub use u512::U512;
