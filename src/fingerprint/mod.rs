// file: src/fingerprint/mod.rs
// description: content fingerprinting exports

pub mod digest;
pub mod html;
pub mod path_key;

pub use digest::content_digest;
pub use html::HtmlTextExtractor;
pub use path_key::path_key;
