//! Wire protocol spoken on stdin: `<COMMAND> <DATA>`.

pub mod command;
pub mod tokenizer;

pub use command::{Command, Request, REQUEST_TOKENS};
pub use tokenizer::{is_delimiter, TokenReader};
