use super::types::InputFormat;
use crate::error::{Result, RngbiasError};
use crate::types::{Sequence, FACES};
use std::io::Read;
use std::path::Path;

pub struct SequenceReader;

impl SequenceReader {
    /// Load a sequence from a file
    pub fn load<P: AsRef<Path>>(path: P, format: InputFormat) -> Result<Sequence> {
        let text = std::fs::read_to_string(&path).map_err(|e| {
            RngbiasError::Input(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::parse(&text, format)
    }

    /// Read a whole stream, typically stdin
    pub fn read<R: Read>(mut reader: R, format: InputFormat) -> Result<Sequence> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| RngbiasError::Input(format!("Failed to read input: {}", e)))?;
        Self::parse(&text, format)
    }

    pub fn parse(text: &str, format: InputFormat) -> Result<Sequence> {
        if text.trim().is_empty() {
            return Err(RngbiasError::Input("sequence is empty".to_string()));
        }

        match format.detect(text) {
            InputFormat::Digits => Self::parse_digits(text.trim()),
            _ => Self::parse_unit(text),
        }
    }

    fn parse_unit(text: &str) -> Result<Sequence> {
        let values = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(i, token)| {
                token.parse::<f64>().map_err(|_| {
                    RngbiasError::Input(format!("value {:?} at position {} is not a number", token, i))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Sequence::new(values))
    }

    fn parse_digits(text: &str) -> Result<Sequence> {
        let faces = text
            .chars()
            .enumerate()
            .map(|(i, c)| match c.to_digit(10) {
                Some(d) if (1..=FACES as u32).contains(&d) => Ok(d as u8),
                _ => Err(RngbiasError::Input(format!(
                    "invalid face {:?} at position {}, expected 1-{}",
                    c, i, FACES
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Sequence::from_faces(&faces))
    }
}
