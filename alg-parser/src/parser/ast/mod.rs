pub mod compare;
pub mod func;
pub mod term;

pub use compare::{CmpOp, Compare, Range};
pub use func::Func;
pub use term::Term;
