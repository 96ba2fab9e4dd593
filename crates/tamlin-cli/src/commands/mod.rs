pub mod dump;
pub mod header;
pub mod stats;
pub mod table_loader;
