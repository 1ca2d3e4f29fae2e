//! Terminal form for picking a document and a target format
pub mod app;
pub mod browser;
pub mod form;
pub mod model;
#[allow(clippy::module_inception)]
pub mod shell;
pub mod ui;

#[cfg(test)]
pub mod tests;
