//! Input handling: tokenizing sheet text and mapping rows onto records.

mod record;
mod tokenizer;

pub use record::{FieldValue, MULTI_VALUE_SEPARATOR, Record, map_row};
pub use tokenizer::{FIELD_SEPARATOR, ROW_SEPARATOR, Tokenizer, tokenize};
