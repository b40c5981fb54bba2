//! Alternative-name parsing
//!
//! - `core`: extension unwrap and the GeneralNames loop
//! - `general_name`: per-entry tag dispatch
//! - `name_extraction`: distinguished name rendering for directoryName

pub mod core;
pub mod general_name;
pub mod name_extraction;

pub use self::core::{decode_extension_value, get_alternative_names};
pub use general_name::decode_general_name;
pub use name_extraction::{attribute_label, render_distinguished_name, render_encoded_name};
