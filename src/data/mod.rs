pub mod connectors;
pub mod generator;

pub use connectors::{InputFormat, RecordWriter, SequenceReader, SequenceValidator};
pub use generator::SequenceGenerator;
