mod config;
mod copy;
mod render;
mod toc;

pub use config::handle_config_command;
pub use copy::handle_copy_command;
pub use render::handle_render_command;
pub use toc::handle_toc_command;
