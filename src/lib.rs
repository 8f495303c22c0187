// Emotally: emoji category analysis for survey and LLM responses.
//
// This is the library root. The `emoji` module holds the core tokenizer
// and normalizer; everything else is tabular plumbing around it.

pub mod config;
pub mod emoji;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod table;
pub mod tally;
pub mod taxonomy;
