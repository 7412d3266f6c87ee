#![deny(unsafe_op_in_unsafe_fn)]

pub mod error;
pub mod handle;
pub mod host;
pub mod prelude;
pub mod window;
