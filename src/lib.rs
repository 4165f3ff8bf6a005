pub mod calc;
pub mod format;
pub mod input;
pub mod logging;
pub mod session;
pub mod ui;
