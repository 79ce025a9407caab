pub mod app;
pub mod cli;
pub mod error;
pub mod event;
pub mod logging;
pub mod model;
pub mod paths;
pub mod view;
