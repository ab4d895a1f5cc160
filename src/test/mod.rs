
pub use self::parse::*;
pub use self::tables::*;
