//! Generic field-of-view computation.

mod cast;
pub use cast::{cast, disc};

mod line;
pub use line::Line;
