mod console_renderer;
mod http_repository_service;
mod in_memory_repository_service;

pub use console_renderer::*;
pub use http_repository_service::*;
pub use in_memory_repository_service::*;
