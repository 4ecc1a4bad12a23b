pub(crate) mod apint;
#[cfg(feature = "serde_support")]
mod serde;

pub use apint::ApInt;
