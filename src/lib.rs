mod category;
mod error;
mod layout;
pub mod query;
mod range;
mod scan;
pub mod table;
#[cfg(test)]
pub mod test;
pub mod ucd;

pub use self::category::*;
pub use self::error::*;
pub use self::layout::*;
pub use self::query::*;
pub use self::range::*;
pub use self::scan::*;
pub use self::table::*;
