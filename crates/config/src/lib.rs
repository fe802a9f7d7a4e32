mod config;
mod feeds;
mod nav;
mod pagination;
mod site;

pub mod verify;

pub use self::config::*;
pub use self::feeds::*;
pub use self::nav::*;
pub use self::pagination::*;
pub use self::site::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
type RelPath = relative_path::RelativePathBuf;
