// Minimal HTML reading for table fragments
//
// Input is expected to be the rendered HTML returned by the Wiktionary API.
// Broken input is never an error; the tree is built as far as possible:
// - unclosed td / th / tr are closed by the next cell or row
// - end tags without a matching open element are ignored

pub mod tokenizer;
pub mod tree;
