// Internal modules
pub mod config;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod tokens;

// Re-export key types for library consumers
pub use lexical::{
    create_scanner, tokenize_file, tokenize_reader, tokenize_str, ScanError, ScanMetrics, Scanner,
};
pub use tokens::{Token, TokenKind};
