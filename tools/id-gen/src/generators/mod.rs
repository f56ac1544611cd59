//! Output generators for the ID model

pub mod c;
pub mod rust;
