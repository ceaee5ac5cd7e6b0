pub mod format;
pub mod period;
pub mod shuffle;

pub use format::*;
pub use period::*;
pub use shuffle::*;
