pub mod abbreviations;
pub mod cleaning;
pub mod encoding;
pub mod importer;
pub mod pipeline;
pub mod search;
pub mod store;
