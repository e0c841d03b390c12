use crate::core::Storage;
use crate::domain::model::Value;
use crate::utils::error::{KataError, Result};
use crate::utils::validation::validate_range;
use std::fs;
use std::path::Path;

/// Upper bound on how many values a single range token may expand to.
pub const MAX_RANGE_LEN: u128 = 1_000_000;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

/// Parses command-line tokens into classifier values.
///
/// `a..b` and `a..=b` both expand to the inclusive integer range, `a...b`
/// excludes `b`. Everything else goes through [`Value`]'s `FromStr`.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Value>> {
    let mut values = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        match split_range(token) {
            Some(range) => {
                let end = range.end.trim().parse::<i128>().map_err(|_| {
                    KataError::InvalidTokenError {
                        token: token.to_string(),
                        reason: "range bounds must be integers (a..b, a..=b, or a...b)"
                            .to_string(),
                    }
                })?;
                let end = if range.exclusive { end.saturating_sub(1) } else { end };
                if range.start <= end {
                    let len = range.start.abs_diff(end).saturating_add(1);
                    validate_range("range length", len, 1, MAX_RANGE_LEN)?;
                }
                values.extend((range.start..=end).map(Value::Integer));
            }
            None => values.push(token.parse::<Value>().unwrap_or_else(|e| match e {})),
        }
    }
    tracing::debug!("Parsed {} tokens into {} values", tokens.len(), values.len());
    Ok(values)
}

struct RangeToken<'a> {
    start: i128,
    end: &'a str,
    exclusive: bool,
}

/// Splits a range token when its start is an integer; anything else is not a range.
fn split_range(token: &str) -> Option<RangeToken<'_>> {
    let (start, rest) = token.split_once("..")?;
    let start = start.trim().parse::<i128>().ok()?;
    let (end, exclusive) = match rest.strip_prefix('.') {
        Some(end) => (end, true),
        None => (rest.strip_prefix('=').unwrap_or(rest), false),
    };
    Some(RangeToken {
        start,
        end,
        exclusive,
    })
}
