use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// Anything that can be turned into walkthrough markup.
pub trait Render {
    fn render(&self) -> String;
}
