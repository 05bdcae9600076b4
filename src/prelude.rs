pub use crate::access::{AccessMode, ReadOnly, ReadWrite, WriteOnly};
pub use crate::field::{BitField, Error as FieldError, Field};
pub use crate::register::Register;
