pub mod export;
pub mod init;
pub mod render;
pub mod validate;

pub use export::{run_export, run_export_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::{run_render, run_render_impl};
pub use validate::{run_validate, run_validate_impl};
