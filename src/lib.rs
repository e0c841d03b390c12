#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::app::run_command;
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, outline::OutlineConfig};
pub use crate::core::{
    fizzbuzz::{classify, classify_all, classify_each},
    markup::{render, render_container, render_item},
    Classification, Container, ContainerKind, Item, ItemKind, Node, Render, Value,
};
pub use crate::utils::error::{KataError, Result};
