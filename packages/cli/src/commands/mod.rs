pub mod init;
pub mod rank;
pub mod resolve;
pub mod watch;

pub use init::{init, InitArgs};
pub use rank::{rank, RankArgs};
pub use resolve::{resolve, ResolveArgs};
pub use watch::{watch, WatchArgs};
