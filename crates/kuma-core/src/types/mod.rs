mod docker_host;
mod maintenance;
mod proxy;
mod settings;
mod status_page;
mod tag;

pub use docker_host::*;
pub use maintenance::*;
pub use proxy::*;
pub use settings::*;
pub use status_page::*;
pub use tag::*;
