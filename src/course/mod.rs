pub mod block;
pub mod ingest;
pub mod types;

pub use block::BlockKind;
pub use ingest::ingest;
pub use types::{ContentBlock, CourseData, CourseLanding};
