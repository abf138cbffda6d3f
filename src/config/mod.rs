//! Configuration and path management for fieldseal

pub mod paths;
pub mod settings;

pub use paths::FieldsealPaths;
pub use settings::Settings;
