pub mod format;
pub mod logging;
pub mod screen;
pub mod session;
