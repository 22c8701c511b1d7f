pub mod resume;

pub use resume::{RankedResume, Resume};
