pub mod kind;

pub use alg_error::{Error, ErrorKind};
