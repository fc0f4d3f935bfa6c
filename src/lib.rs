pub mod app;
pub mod cli;
pub mod config;
pub mod converter;
pub mod parser;
pub mod rules;
pub mod time;
pub mod version;
pub mod vocabulary;

use env_logger::Env;
use std::io::Write;

/// Initialise `env_logger` on stderr. `RUST_LOG` wins over `default_level`.
pub fn init_logger(default_level: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use config::Config;
pub use converter::{BritishSpokenTimeConverter, ConversionError, SpokenTimeConverter};
pub use parser::{parse_time, ParseError};
pub use rules::FormatRule;
pub use time::{Time, TimeError};
pub use vocabulary::{Period, VocabularyError};
