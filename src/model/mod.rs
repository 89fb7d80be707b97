pub mod field;
pub mod predictions;
pub mod schedule;
pub mod strength;
pub mod tournament;

pub use field::*;
pub use predictions::*;
pub use schedule::*;
pub use strength::*;
pub use tournament::*;
