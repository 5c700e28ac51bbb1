//! Console entry point and output printers.
pub mod app;
pub mod logger;
pub mod printer;
pub mod stdout;
