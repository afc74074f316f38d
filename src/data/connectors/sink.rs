use crate::error::Result;
use crate::types::ResultRecord;
use std::io::Write;

/// Writes result records as one JSON document per line.
pub struct RecordWriter {
    pretty: bool,
}

impl RecordWriter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn render(&self, record: &ResultRecord) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };
        Ok(json)
    }

    pub fn write<W: Write>(&self, record: &ResultRecord, mut out: W) -> Result<()> {
        writeln!(out, "{}", self.render(record)?)?;
        out.flush()?;
        Ok(())
    }
}
