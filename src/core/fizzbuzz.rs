use crate::domain::model::{Classification, Value};

const SEPARATOR: &str = ", ";

fn divisible_by(n: i128, divisor: i128) -> bool {
    n.rem_euclid(divisor) == 0
}

/// Classifies one value. Only whole numbers are checked; floats and text
/// come back unchanged.
pub fn classify(value: impl Into<Value>) -> Classification {
    match value.into() {
        Value::Integer(n) if divisible_by(n, 15) => Classification::FizzBuzz,
        Value::Integer(n) if divisible_by(n, 3) => Classification::Fizz,
        Value::Integer(n) if divisible_by(n, 5) => Classification::Buzz,
        other => Classification::Passthrough(other),
    }
}

pub fn classify_each<I, T>(items: I) -> Vec<Classification>
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let results: Vec<Classification> = items.into_iter().map(classify).collect();
    tracing::debug!("Classified {} values", results.len());
    results
}

/// Classifies every item in order and joins the results with `", "`.
///
/// Accepts a single value (`[3]`, `Some(3)`), an array or `Vec`, a mixed
/// list built with [`values!`](crate::values), or an integer range.
pub fn classify_all<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    classify_each(items)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
