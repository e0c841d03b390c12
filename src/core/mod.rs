pub mod fizzbuzz;
pub mod markup;

pub use crate::domain::model::{Classification, Container, ContainerKind, Item, ItemKind, Node, Value};
pub use crate::domain::ports::{Render, Storage};
pub use crate::utils::error::Result;
