//! Tool settings for hbr.
//!
//! Settings describe how hbr runs external programs, not how a video is
//! encoded; encoding options live in key files. They are read from an
//! optional YAML file (`<config dir>/hbr/settings.yaml`). Unknown fields are
//! ignored and every field has a default, so a missing file is equivalent to
//! an empty one.

mod model;
mod operations;
pub mod types;


pub use model::Settings;
pub use operations::default_settings_path;
pub use types::MessageLevel;
