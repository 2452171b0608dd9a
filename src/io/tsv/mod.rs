mod writer;

pub use writer::{TSV_HEADER, write};
