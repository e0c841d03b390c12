use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A classifier input, tagged at the call boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i128),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            // Debug keeps the fractional part, so 2.0 never prints like an integer
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for Value {
    type Err = std::convert::Infallible;

    /// 整數優先，其次十進位浮點數，其餘視為文字
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<i128>() {
            return Ok(Value::Integer(n));
        }
        if looks_decimal(s) {
            if let Ok(x) = s.parse::<f64>() {
                return Ok(Value::Float(x));
            }
        }
        Ok(Value::Text(s.to_string()))
    }
}

/// Digits, sign, point and exponent marker only. Keeps words such as
/// "nan" or "Infinity" as text.
fn looks_decimal(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
        && s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'))
}

macro_rules! integer_value {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Integer(i128::from(n))
            }
        })*
    };
}

integer_value!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

/// Builds a `Vec<Value>` from mixed literals: `values!["one", 2, 0.9]`.
#[macro_export]
macro_rules! values {
    ($($v:expr),* $(,)?) => {
        vec![$($crate::domain::model::Value::from($v)),*]
    };
}

#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Fizz,
    Buzz,
    FizzBuzz,
    Passthrough(Value),
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Fizz => f.write_str("Fizz"),
            Classification::Buzz => f.write_str("Buzz"),
            Classification::FizzBuzz => f.write_str("FizzBuzz"),
            Classification::Passthrough(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl PartialEq<&str> for Classification {
    fn eq(&self, other: &&str) -> bool {
        match self {
            Classification::Passthrough(Value::Text(s)) => s == other,
            Classification::Passthrough(_) => false,
            label => label.to_string() == *other,
        }
    }
}

impl PartialEq<i64> for Classification {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Classification::Passthrough(Value::Integer(n)) if *n == i128::from(*other))
    }
}

impl PartialEq<f64> for Classification {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Classification::Passthrough(Value::Float(x)) if x == other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Walkthrough,
    Section,
    ItemGroup,
}

impl ContainerKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ContainerKind::Walkthrough => "walkthrough",
            ContainerKind::Section => "section",
            ContainerKind::ItemGroup => "item_group",
        }
    }

    pub fn heading_level(&self) -> u8 {
        match self {
            ContainerKind::Walkthrough => 1,
            ContainerKind::Section => 2,
            ContainerKind::ItemGroup => 3,
        }
    }
}

/// Presentation format of a walkthrough item.
///
/// Kinds outside the known three are kept as `Unknown` and render as an
/// empty item rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemKind {
    Checkbox,
    Text,
    Radio,
    Unknown(String),
}

impl From<String> for ItemKind {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "checkbox" => ItemKind::Checkbox,
            "text" => ItemKind::Text,
            "radio" => ItemKind::Radio,
            _ => ItemKind::Unknown(s),
        }
    }
}

impl From<&str> for ItemKind {
    fn from(s: &str) -> Self {
        ItemKind::from(s.to_string())
    }
}

impl From<ItemKind> for String {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Checkbox => "checkbox".to_string(),
            ItemKind::Text => "text".to_string(),
            ItemKind::Radio => "radio".to_string(),
            ItemKind::Unknown(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub options: Vec<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: impl Into<ItemKind>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            options: Vec::new(),
        }
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Checkbox)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Text)
    }

    pub fn radio<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, ItemKind::Radio).with_options(options)
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extend(options.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub kind: ContainerKind,
    pub name: String,
    pub children: Vec<Node>,
}

impl Container {
    pub fn new(kind: ContainerKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn walkthrough(name: impl Into<String>) -> Self {
        Self::new(ContainerKind::Walkthrough, name)
    }

    pub fn section(name: impl Into<String>) -> Self {
        Self::new(ContainerKind::Section, name)
    }

    pub fn item_group(name: impl Into<String>) -> Self {
        Self::new(ContainerKind::ItemGroup, name)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Container(Container),
    Item(Item),
}

impl From<Container> for Node {
    fn from(c: Container) -> Self {
        Node::Container(c)
    }
}

impl From<Item> for Node {
    fn from(i: Item) -> Self {
        Node::Item(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from_str_prefers_integer() {
        assert_eq!("15".parse::<Value>().unwrap(), Value::Integer(15));
        assert_eq!("-3".parse::<Value>().unwrap(), Value::Integer(-3));
        assert_eq!("0.9".parse::<Value>().unwrap(), Value::Float(0.9));
        assert_eq!("one".parse::<Value>().unwrap(), Value::Text("one".to_string()));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::Float(0.9).to_string(), "0.9");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::from("fizzer").to_string(), "fizzer");
    }

    #[test]
    fn test_value_from_str_keeps_wide_integers() {
        assert_eq!(
            "18446744073709551615".parse::<Value>().unwrap(),
            Value::Integer(i128::from(u64::MAX))
        );
        assert_eq!(Value::from(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn test_value_from_str_keeps_float_words_as_text() {
        for word in ["nan", "NaN", "inf", "Infinity", "-infinity", "e", "1.2.3x"] {
            assert_eq!(word.parse::<Value>().unwrap(), Value::from(word), "{}", word);
        }
        assert_eq!("1e3".parse::<Value>().unwrap(), Value::Float(1000.0));
        assert_eq!("-.5".parse::<Value>().unwrap(), Value::Float(-0.5));
    }

    #[test]
    fn test_large_floats_use_exponent_form() {
        assert_eq!(Value::Float(1e20).to_string(), "1e20");
        assert_eq!(Value::Float(0.00001).to_string(), "1e-5");
    }

    #[test]
    fn test_values_macro_tags_each_literal() {
        let v = values!["one", 2, 0.9];
        assert_eq!(
            v,
            vec![
                Value::Text("one".to_string()),
                Value::Integer(2),
                Value::Float(0.9)
            ]
        );
    }

    #[test]
    fn test_item_kind_parsing_is_permissive() {
        assert_eq!(ItemKind::from("checkbox"), ItemKind::Checkbox);
        assert_eq!(ItemKind::from("Radio"), ItemKind::Radio);
        assert_eq!(
            ItemKind::from("slider"),
            ItemKind::Unknown("slider".to_string())
        );
        assert_eq!(String::from(ItemKind::Text), "text");
    }

    #[test]
    fn test_container_kind_heading_levels() {
        assert_eq!(ContainerKind::Walkthrough.heading_level(), 1);
        assert_eq!(ContainerKind::Section.css_class(), "section");
        assert_eq!(ContainerKind::ItemGroup.heading_level(), 3);
    }

    #[test]
    fn test_builders_keep_declaration_order() {
        let group = Container::item_group("Observed")
            .child(Item::checkbox("Unit Organizer"))
            .child(Item::checkbox("Lesson Organizer"));

        let names: Vec<_> = group
            .children
            .iter()
            .map(|n| match n {
                Node::Item(i) => i.name.as_str(),
                Node::Container(c) => c.name.as_str(),
            })
            .collect();
        assert_eq!(names, vec!["Unit Organizer", "Lesson Organizer"]);
    }
}
