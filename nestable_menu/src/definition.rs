//! Declarative menu descriptions.
//!
//! An [`OptionDef`] carries `action` and `children` as independent optional
//! fields, the way menus are written in JSON or TOML. Building the tree
//! resolves each definition into exactly one [`OptionKind`](crate::OptionKind) and
//! rejects options that set both.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};
use crate::option::{GroupedOptionList, MenuAction, MenuOption, drop_empty_groups};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionDef {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    /// Id looked up in the [`ActionRegistry`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<OptionsDef>,
}

impl OptionDef {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            subtext: None,
            action: None,
            children: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_children(mut self, children: OptionsDef) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }

    fn build(&self, actions: &ActionRegistry) -> Result<MenuOption> {
        let mut builder = MenuOption::builder(&self.label);
        if let Some(subtext) = &self.subtext {
            builder = builder.subtext(subtext);
        }
        if let Some(id) = &self.action {
            if self.children.is_some() {
                return Err(MenuError::InvalidOptionShape {
                    label: self.label.clone(),
                });
            }
            let action = actions.get(id).ok_or_else(|| MenuError::UnknownAction {
                label: self.label.clone(),
                action: id.clone(),
            })?;
            builder = builder.action_handle(action.clone());
        }
        if let Some(children) = &self.children {
            builder = builder.groups(children.build(actions)?);
        }
        builder.build()
    }
}

/// A menu level, either flat or split into divider-separated groups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionsDef {
    Grouped(Vec<Vec<OptionDef>>),
    Flat(Vec<OptionDef>),
}

impl OptionsDef {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the option tree, visiting every option before returning.
    /// Empty groups are dropped.
    pub fn build(&self, actions: &ActionRegistry) -> Result<GroupedOptionList> {
        let mut groups = match self {
            OptionsDef::Grouped(groups) => groups
                .iter()
                .map(|group| build_list(group, actions))
                .collect::<Result<GroupedOptionList>>()?,
            OptionsDef::Flat(options) => vec![build_list(options, actions)?],
        };
        drop_empty_groups(&mut groups);
        Ok(groups)
    }
}

fn build_list(options: &[OptionDef], actions: &ActionRegistry) -> Result<Vec<MenuOption>> {
    options.iter().map(|def| def.build(actions)).collect()
}

/// Maps action ids used in definitions to callbacks.
#[derive(Clone, Debug, Default)]
pub struct ActionRegistry {
    actions: HashMap<String, MenuAction>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, action: impl Fn() + 'static) -> &mut Self {
        self.actions.insert(id.into(), MenuAction::new(action));
        self
    }

    pub fn get(&self, id: &str) -> Option<&MenuAction> {
        self.actions.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.actions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
