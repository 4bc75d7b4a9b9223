pub mod cache;
pub mod corpus;
pub mod definition;
pub mod matcher;
pub mod settings;
