mod reader;
mod sink;
mod types;
mod validator;

pub use reader::SequenceReader;
pub use sink::RecordWriter;
pub use types::InputFormat;
pub use validator::SequenceValidator;
