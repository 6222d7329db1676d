pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod parsers;
pub mod services;

pub use error::DictionaryError;
pub use model::entry::DictionaryEntry;
