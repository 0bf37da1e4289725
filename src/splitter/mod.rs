mod options;
mod remove_empty;
mod scanner;

pub use options::SplitOptions;
pub use remove_empty::{RemoveEmpty, RemoveEmptySegments};
pub use scanner::{split, split_with, Splitter};
