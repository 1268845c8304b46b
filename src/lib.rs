//! kounti: a multi-digit counter in binary, octal, decimal or hexadecimal,
//! driven from a terminal control panel.

pub mod cli;
pub mod config;
pub mod logging;
pub mod numeral;
pub mod ui;
