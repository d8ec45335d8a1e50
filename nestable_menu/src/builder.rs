use crate::option::{GroupedOptionList, MenuOption, OptionList};

/// Builder for constructing grouped menus declaratively.
#[derive(Debug, Default)]
pub struct MenuBuilder {
    groups: GroupedOptionList,
    current: OptionList,
}

impl MenuBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an inert item.
    pub fn leaf(self, label: impl Into<String>) -> Self {
        self.option(MenuOption::leaf(label))
    }

    /// Add an inert item with a secondary caption.
    pub fn item_with_subtext(self, label: impl Into<String>, subtext: impl Into<String>) -> Self {
        self.option(MenuOption::leaf(label).with_subtext(subtext))
    }

    /// Add an item that fires `action` and closes the menu.
    pub fn action(self, label: impl Into<String>, action: impl Fn() + 'static) -> Self {
        self.option(MenuOption::with_action(label, action))
    }

    /// Add a nested sub-menu.
    pub fn submenu(
        self,
        label: impl Into<String>,
        build: impl FnOnce(MenuBuilder) -> MenuBuilder,
    ) -> Self {
        let sub = build(MenuBuilder::new());
        self.option(MenuOption::submenu(label, sub.build()))
    }

    /// Add an already constructed option.
    pub fn option(mut self, option: MenuOption) -> Self {
        self.current.push(option);
        self
    }

    /// End the current group; following items render after a divider.
    pub fn divider(mut self) -> Self {
        let group = std::mem::take(&mut self.current);
        self.groups.push(group);
        self
    }

    /// Build into grouped options. Empty groups are dropped.
    pub fn build(mut self) -> GroupedOptionList {
        self.groups.push(self.current);
        self.groups.retain(|group| !group.is_empty());
        self.groups
    }
}
