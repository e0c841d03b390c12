use crate::domain::model::{Container, Item, ItemKind, Node};
use crate::domain::ports::Render;
use std::fmt::{self, Write};

struct ContainerOpen<'a> {
    name: &'a str,
    css_class: &'a str,
    heading_level: u8,
}

impl fmt::Display for ContainerOpen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_container_open(f, self.name, self.css_class, self.heading_level)
    }
}

struct ItemView<'a> {
    name: &'a str,
    kind: &'a ItemKind,
    options: &'a [String],
}

impl fmt::Display for ItemView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_item(f, self.name, self.kind, self.options)
    }
}

/// Renders a container wrapper around already-rendered children.
pub fn render_container(
    name: &str,
    css_class: &str,
    heading_level: u8,
    children: Option<&str>,
) -> String {
    let open = ContainerOpen {
        name,
        css_class,
        heading_level,
    };
    format!("{}{}</div>", open, children.unwrap_or_default())
}

pub fn render_item(name: &str, kind: &ItemKind, options: &[String]) -> String {
    ItemView {
        name,
        kind,
        options,
    }
    .to_string()
}

/// Depth-first, pre-order rendering of a walkthrough tree.
pub fn render(node: &Node) -> String {
    node.to_string()
}

fn write_container_open<W: Write>(
    out: &mut W,
    name: &str,
    css_class: &str,
    heading_level: u8,
) -> fmt::Result {
    write!(
        out,
        "<div class='{}'><h{level}>{}</h{level}>",
        css_class,
        name,
        level = heading_level
    )
}

fn write_container<W: Write>(out: &mut W, container: &Container) -> fmt::Result {
    write_container_open(
        out,
        &container.name,
        container.kind.css_class(),
        container.kind.heading_level(),
    )?;
    for child in &container.children {
        write_node(out, child)?;
    }
    out.write_str("</div>")
}

fn write_item<W: Write>(out: &mut W, name: &str, kind: &ItemKind, options: &[String]) -> fmt::Result {
    out.write_str("<div>")?;
    match kind {
        ItemKind::Checkbox => write!(out, "[ ] {}", name)?,
        ItemKind::Text => write!(out, "___ {}", name)?,
        ItemKind::Radio => {
            // "( ) opt " per option with the last trailing space dropped
            out.write_str(name)?;
            for option in options {
                write!(out, " ( ) {}", option)?;
            }
        }
        ItemKind::Unknown(other) => {
            tracing::debug!("Skipping item '{}' with unknown kind '{}'", name, other);
        }
    }
    out.write_str("</div>")
}

fn write_node<W: Write>(out: &mut W, node: &Node) -> fmt::Result {
    match node {
        Node::Container(c) => write_container(out, c),
        Node::Item(i) => write_item(out, &i.name, &i.kind, &i.options),
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self)
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_container(f, self)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = ItemView {
            name: &self.name,
            kind: &self.kind,
            options: &self.options,
        };
        fmt::Display::fmt(&view, f)
    }
}

impl Render for Node {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for Container {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for Item {
    fn render(&self) -> String {
        self.to_string()
    }
}
