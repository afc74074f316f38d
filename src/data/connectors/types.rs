use serde::{Deserialize, Serialize};

/// Text layout of an input sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// `digits` for a single all-digit token, `unit` otherwise
    Auto,
    /// Reals in [0, 1) separated by whitespace or commas
    Unit,
    /// One token of die faces `1`-`6`, e.g. `3616612`
    Digits,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Unit => "unit",
            Self::Digits => "digits",
        }
    }

    /// Settle `Auto` for a concrete input text.
    pub fn detect(self, text: &str) -> Self {
        match self {
            Self::Auto => {
                let trimmed = text.trim();
                if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
                    Self::Digits
                } else {
                    Self::Unit
                }
            }
            other => other,
        }
    }
}
