pub mod list;
pub mod report;

pub use list::*;
pub use report::*;
