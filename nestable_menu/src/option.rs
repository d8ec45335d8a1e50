//! Menu option tree nodes.

use std::fmt;
use std::rc::Rc;

use crate::error::{MenuError, Result};

/// One flat menu level, rendered without dividers.
pub type OptionList = Vec<MenuOption>;

/// A menu level made of groups; a divider is drawn between consecutive groups.
pub type GroupedOptionList = Vec<OptionList>;

/// Shared handle to the callback fired when an action option is selected.
#[derive(Clone)]
pub struct MenuAction(Rc<dyn Fn()>);

impl MenuAction {
    pub fn new(action: impl Fn() + 'static) -> Self {
        Self(Rc::new(action))
    }

    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MenuAction(..)")
    }
}

/// Two handles are equal when they share the same callback.
impl PartialEq for MenuAction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// What happens when an option is selected.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionKind {
    /// Runs the action and closes the whole menu.
    Action(MenuAction),
    /// Drills into a nested, non-empty option set.
    SubMenu(GroupedOptionList),
    /// Inert; selecting it does nothing.
    Leaf,
}

/// A node in the menu tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuOption {
    label: String,
    subtext: Option<String>,
    kind: OptionKind,
}

impl MenuOption {
    /// Starts the validated factory for an option.
    pub fn builder(label: impl Into<String>) -> MenuOptionBuilder {
        MenuOptionBuilder {
            label: label.into(),
            subtext: None,
            action: None,
            children: None,
        }
    }

    /// Creates an inert leaf.
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            subtext: None,
            kind: OptionKind::Leaf,
        }
    }

    /// Creates an option that fires `action` when selected.
    pub fn with_action(label: impl Into<String>, action: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            subtext: None,
            kind: OptionKind::Action(MenuAction::new(action)),
        }
    }

    /// Creates a sub-menu. Empty children yield an inert leaf.
    pub fn submenu(label: impl Into<String>, groups: GroupedOptionList) -> Self {
        Self {
            label: label.into(),
            subtext: None,
            kind: sub_menu_kind(groups),
        }
    }

    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn subtext(&self) -> Option<&str> {
        self.subtext.as_deref()
    }

    pub fn kind(&self) -> &OptionKind {
        &self.kind
    }

    pub fn action(&self) -> Option<&MenuAction> {
        match &self.kind {
            OptionKind::Action(action) => Some(action),
            _ => None,
        }
    }

    /// Nested groups, if this option opens a sub-menu.
    pub fn children(&self) -> Option<&[OptionList]> {
        match &self.kind {
            OptionKind::SubMenu(groups) => Some(groups),
            _ => None,
        }
    }

    pub fn has_children(&self) -> bool {
        matches!(self.kind, OptionKind::SubMenu(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, OptionKind::Leaf)
    }
}

/// Builder accepting the overlapping "action or children" fields and
/// resolving them into exactly one [`OptionKind`].
#[derive(Debug)]
pub struct MenuOptionBuilder {
    label: String,
    subtext: Option<String>,
    action: Option<MenuAction>,
    children: Option<GroupedOptionList>,
}

impl MenuOptionBuilder {
    pub fn subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }

    pub fn action(mut self, action: impl Fn() + 'static) -> Self {
        self.action = Some(MenuAction::new(action));
        self
    }

    pub fn action_handle(mut self, action: MenuAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Flat children, treated as a single group.
    pub fn options(mut self, options: OptionList) -> Self {
        self.children = Some(vec![options]);
        self
    }

    pub fn groups(mut self, groups: GroupedOptionList) -> Self {
        self.children = Some(groups);
        self
    }

    pub fn build(self) -> Result<MenuOption> {
        let kind = match (self.action, self.children) {
            (Some(_), Some(_)) => {
                return Err(MenuError::InvalidOptionShape { label: self.label });
            }
            (Some(action), None) => OptionKind::Action(action),
            (None, Some(groups)) => sub_menu_kind(groups),
            (None, None) => OptionKind::Leaf,
        };
        Ok(MenuOption {
            label: self.label,
            subtext: self.subtext,
            kind,
        })
    }
}

fn sub_menu_kind(mut groups: GroupedOptionList) -> OptionKind {
    drop_empty_groups(&mut groups);
    if groups.is_empty() {
        OptionKind::Leaf
    } else {
        OptionKind::SubMenu(groups)
    }
}

/// Empty groups would render as back-to-back dividers.
pub(crate) fn drop_empty_groups(groups: &mut GroupedOptionList) {
    groups.retain(|group| !group.is_empty());
}
