pub mod config;
pub mod dispatch;
pub mod error;
pub mod history;
pub mod launcher;
pub mod parser;
pub mod recall;
pub mod repl;
pub mod util;

pub use config::ShellConfig;
pub use dispatch::{Dispatch, Dispatcher};
pub use error::{ShellError, ShellResult};
