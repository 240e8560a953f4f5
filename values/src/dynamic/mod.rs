mod object;
mod sequence;
mod value;

pub use object::{Object, Property};
pub use sequence::{Sequence, Slot};
pub use value::Value;
