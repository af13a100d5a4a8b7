mod line;

pub use self::line::*;

pub use super::geo::*;
