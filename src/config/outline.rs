use crate::domain::model::{Container, Item, ItemKind, Node};
use crate::utils::error::{KataError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A walkthrough described as a TOML outline.
///
/// ```toml
/// [walkthrough]
/// name = "Sample Walkthrough"
///
/// [[walkthrough.sections]]
/// name = "Section A"
///
/// [[walkthrough.sections.item_groups]]
/// name = "Item Group A"
/// items = [
///   { name = "First Item", kind = "checkbox" },
///   { name = "Second Item", kind = "radio", options = ["First Value", "Second Value"] },
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineConfig {
    pub walkthrough: WalkthroughOutline,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkthroughOutline {
    pub name: String,
    #[serde(default)]
    pub sections: Vec<SectionOutline>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionOutline {
    pub name: String,
    #[serde(default)]
    pub item_groups: Vec<ItemGroupOutline>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemGroupOutline {
    pub name: String,
    #[serde(default)]
    pub items: Vec<ItemOutline>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemOutline {
    pub name: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutlineSummary {
    pub sections: usize,
    pub item_groups: usize,
    pub items: usize,
}

impl OutlineConfig {
    /// 從 TOML 檔案載入大綱
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KataError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析大綱
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SCHOOL_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KataError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn summary(&self) -> OutlineSummary {
        let sections = &self.walkthrough.sections;
        let groups = sections.iter().flat_map(|s| &s.item_groups);
        OutlineSummary {
            sections: sections.len(),
            item_groups: groups.clone().count(),
            items: groups.map(|g| g.items.len()).sum(),
        }
    }

    pub fn to_node(&self) -> Node {
        let walkthrough = Container::walkthrough(&self.walkthrough.name).children(
            self.walkthrough.sections.iter().map(|section| {
                Container::section(&section.name).children(section.item_groups.iter().map(
                    |group| {
                        Container::item_group(&group.name).children(group.items.iter().map(
                            |item| {
                                Item::new(&item.name, item.kind.clone())
                                    .with_options(item.options.iter().cloned())
                            },
                        ))
                    },
                ))
            }),
        );
        Node::Container(walkthrough)
    }
}

impl Validate for OutlineConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("walkthrough.name", &self.walkthrough.name)?;

        for (s, section) in self.walkthrough.sections.iter().enumerate() {
            validate_non_empty_string(&format!("walkthrough.sections[{}].name", s), &section.name)?;

            for (g, group) in section.item_groups.iter().enumerate() {
                let group_field = format!("walkthrough.sections[{}].item_groups[{}]", s, g);
                validate_non_empty_string(&format!("{}.name", group_field), &group.name)?;

                for (i, item) in group.items.iter().enumerate() {
                    validate_non_empty_string(
                        &format!("{}.items[{}].name", group_field, i),
                        &item.name,
                    )?;
                    if let ItemKind::Unknown(kind) = &item.kind {
                        tracing::warn!(
                            "Item '{}' has unknown kind '{}'; it will render empty",
                            item.name,
                            kind
                        );
                    }
                }
            }
        }

        Ok(())
    }
}
