mod char_set;
mod patterns;

pub use char_set::{trim_chars, trim_end_chars, trim_start_chars};
pub use patterns::{
    trim, trim_any, trim_boundary, trim_end, trim_end_any, trim_start, trim_start_any, Boundary,
};
