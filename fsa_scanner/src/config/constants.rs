pub mod compile_time {
    pub mod alphabet {
        /// Opens and closes a comment region
        pub const COMMENT_MARKER: u8 = b'!';

        /// Opening delimiters of a T1 token
        pub const QUOTE_MARKER: u8 = b'"';
        pub const HASH_MARKER: u8 = b'#';

        /// Inclusive bounds of the symbol range (`$ % & ' ( ) * + , - . /`)
        pub const SYMBOL_RANGE_START: u8 = b'$';
        pub const SYMBOL_RANGE_END: u8 = b'/';

        /// Whitespace accepted by the filter, matching C `isspace` in the "C" locale
        pub const WHITESPACE: [u8; 6] = [b' ', b'\t', b'\n', 0x0B, 0x0C, b'\r'];

        pub const NEWLINE: u8 = b'\n';
    }

    pub mod tokens {
        /// Text carried by the end-of-input token
        pub const EOF_TEXT: &str = "EOF";

        /// Line number of the first byte of every stream
        pub const INITIAL_LINE: u32 = 1;
    }

    pub mod automaton {
        /// Rows of the transition table
        pub const STATE_COUNT: usize = 6;

        /// Columns of the transition table
        pub const CATEGORY_COUNT: usize = 6;
    }

    pub mod logging {
        /// Events retained by an in-memory logger before the oldest are dropped
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Longest message accepted into a log event; longer ones are truncated
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 4096;
    }
}
