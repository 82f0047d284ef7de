//! Tables and the typed fields they own.

mod field;
#[allow(clippy::module_inception)]
mod table;

pub use field::Field;
pub use table::Table;
