pub mod app;
pub mod codeviewer;
pub mod model;
pub mod outlineviewer;
pub mod ui;
#[allow(clippy::module_inception)]
pub mod viewer;
