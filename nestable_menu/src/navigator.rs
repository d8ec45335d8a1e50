//! Drill-down navigation state machine.
//!
//! The navigator owns an immutable option tree and a [`NavigationPath`]. The
//! visible slice of options and the breadcrumb title are re-derived from the
//! path on every call to [`MenuNavigator::current_view`]; nothing else is
//! stored.

use std::collections::HashSet;

use log::{debug, error, trace, warn};

use crate::definition::{ActionRegistry, OptionsDef};
use crate::error::{MenuError, Result};
use crate::option::{GroupedOptionList, MenuAction, OptionKind, OptionList, drop_empty_groups};
use crate::path::{Location, NavigationPath};

/// Presentation lifecycle of the menu the navigator drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuPhase {
    #[default]
    Closed,
    Open,
    /// Dismissal requested; the path is kept until the exit completes.
    Closing,
}

/// What the presentation layer has to do after a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The path grew by one; re-fetch the view.
    Navigated,
    /// An action fired; the whole menu must close.
    Closed,
    /// Inert item; nothing changed.
    Noop,
}

/// Result of [`MenuNavigator::activate`], which leaves running the action to
/// the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Activation {
    Navigated,
    Run(MenuAction),
    Noop,
}

/// Options visible at the current path, borrowed from the navigator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuView<'a> {
    pub visible_options: &'a [OptionList],
    /// Label of the option whose children are shown; `None` at root.
    pub breadcrumb_title: Option<&'a str>,
}

impl MenuView<'_> {
    pub fn has_back(&self) -> bool {
        self.breadcrumb_title.is_some()
    }
}

/// An empty menu by default.
#[derive(Debug, Default)]
pub struct MenuNavigator {
    root: GroupedOptionList,
    path: NavigationPath,
    phase: MenuPhase,
}

impl MenuNavigator {
    /// Creates a navigator after validating the whole tree. Empty root
    /// groups are dropped.
    pub fn new(mut root: GroupedOptionList) -> Result<Self> {
        drop_empty_groups(&mut root);
        validate_level(&root)?;
        Ok(Self {
            root,
            path: NavigationPath::new(),
            phase: MenuPhase::Closed,
        })
    }

    /// Builds the tree from a declarative description, resolving action ids
    /// through `actions`.
    pub fn from_definition(definition: &OptionsDef, actions: &ActionRegistry) -> Result<Self> {
        Self::new(definition.build(actions)?)
    }

    pub fn root(&self) -> &[OptionList] {
        &self.root
    }

    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.depth()
    }

    pub fn is_at_root(&self) -> bool {
        self.path.is_root()
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    pub fn current_view(&self) -> Result<MenuView<'_>> {
        let mut groups: &[OptionList] = &self.root;
        let mut title = None;
        for (depth, location) in self.path.iter().enumerate() {
            let option = groups
                .get(location.group_index)
                .and_then(|group| group.get(location.item_index))
                .ok_or_else(|| invalid_path(depth))?;
            let children = option.children().ok_or_else(|| invalid_path(depth))?;
            title = Some(option.label());
            groups = children;
        }
        trace!("Derived menu view at depth {}: {:?}", self.path.depth(), title);
        Ok(MenuView {
            visible_options: groups,
            breadcrumb_title: title,
        })
    }

    /// Resolves the option at the given coordinates of the current view.
    ///
    /// Sub-menus are entered immediately. For actions the phase moves to
    /// [`MenuPhase::Closing`] and the handle is returned without being
    /// invoked, so the caller may run it once the navigator is no longer
    /// borrowed.
    pub fn activate(&mut self, group_index: usize, item_index: usize) -> Result<Activation> {
        let view = self.current_view()?;
        let Some(option) = view
            .visible_options
            .get(group_index)
            .and_then(|group| group.get(item_index))
        else {
            warn!(
                "Rejected selection at ({}, {}) in menu of {} groups",
                group_index,
                item_index,
                view.visible_options.len()
            );
            return Err(MenuError::IndexOutOfRange {
                group_index,
                item_index,
            });
        };

        match option.kind() {
            OptionKind::Action(action) => {
                let action = action.clone();
                debug!("Option '{}' fired its action", option.label());
                self.phase = MenuPhase::Closing;
                Ok(Activation::Run(action))
            }
            OptionKind::SubMenu(_) => {
                debug!("Entering sub-menu '{}'", option.label());
                self.path.push(Location::new(group_index, item_index));
                Ok(Activation::Navigated)
            }
            OptionKind::Leaf => Ok(Activation::Noop),
        }
    }

    /// Selects an option: drills into sub-menus, runs actions (then reports
    /// [`SelectOutcome::Closed`]) and ignores inert leaves.
    pub fn select(&mut self, group_index: usize, item_index: usize) -> Result<SelectOutcome> {
        match self.activate(group_index, item_index)? {
            Activation::Navigated => Ok(SelectOutcome::Navigated),
            Activation::Run(action) => {
                action.invoke();
                Ok(SelectOutcome::Closed)
            }
            Activation::Noop => Ok(SelectOutcome::Noop),
        }
    }

    /// Leaves the current sub-menu. Does nothing at root.
    pub fn back(&mut self) {
        if self.path.pop().is_some() {
            debug!("Back to depth {}", self.path.depth());
        }
    }

    pub fn open(&mut self) {
        self.phase = MenuPhase::Open;
    }

    /// Starts dismissal. The path survives until [`Self::on_exit_complete`].
    pub fn close(&mut self) {
        if self.phase == MenuPhase::Open {
            self.phase = MenuPhase::Closing;
        }
    }

    /// Called once the close transition has finished; forgets the location.
    pub fn on_exit_complete(&mut self) {
        if !self.path.is_root() {
            debug!("Menu exited at depth {}, resetting to root", self.path.depth());
        }
        self.path.clear();
        self.phase = MenuPhase::Closed;
    }
}

fn invalid_path(depth: usize) -> MenuError {
    error!("Navigation path broken at depth {}", depth);
    MenuError::InvalidPath { depth }
}

fn validate_level(groups: &[OptionList]) -> Result<()> {
    let mut seen = HashSet::new();
    for option in groups.iter().flatten() {
        if !seen.insert(option.label()) {
            return Err(MenuError::DuplicateLabel {
                label: option.label().to_string(),
            });
        }
        if let Some(children) = option.children() {
            validate_level(children)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MenuBuilder;
    use crate::option::MenuOption;

    fn settings() -> GroupedOptionList {
        MenuBuilder::new()
            .leaf("Preferences")
            .divider()
            .submenu("Privacy", |b| b.leaf("Cookies").divider().leaf("Security"))
            .build()
    }

    #[test]
    fn starts_closed_at_root() {
        let navigator = MenuNavigator::new(settings()).unwrap();
        assert!(navigator.is_at_root());
        assert_eq!(navigator.phase(), MenuPhase::Closed);
    }

    #[test]
    fn empty_root_groups_are_dropped() {
        let root = vec![vec![], vec![MenuOption::leaf("Preferences")], vec![]];
        let navigator = MenuNavigator::new(root).unwrap();
        assert_eq!(navigator.root().len(), 1);
        assert_eq!(navigator.current_view().unwrap().visible_options.len(), 1);
    }

    #[test]
    fn duplicate_sibling_labels_are_rejected_across_groups() {
        let root = MenuBuilder::new().leaf("Same").divider().leaf("Same").build();
        assert!(matches!(
            MenuNavigator::new(root),
            Err(MenuError::DuplicateLabel { label }) if label == "Same"
        ));
    }

    #[test]
    fn duplicate_labels_in_nested_levels_are_rejected() {
        let root = MenuBuilder::new()
            .submenu("Outer", |b| b.leaf("Twice").leaf("Twice"))
            .build();
        assert!(matches!(
            MenuNavigator::new(root),
            Err(MenuError::DuplicateLabel { .. })
        ));
    }

    #[test]
    fn same_label_at_different_levels_is_allowed() {
        let root = MenuBuilder::new()
            .submenu("Privacy", |b| b.leaf("Privacy"))
            .build();
        assert!(MenuNavigator::new(root).is_ok());
    }

    #[test]
    fn activate_hands_back_action_without_running_it() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        let root = vec![vec![MenuOption::with_action("Log Out", move || {
            c.set(c.get() + 1)
        })]];
        let mut navigator = MenuNavigator::new(root).unwrap();
        navigator.open();

        let activation = navigator.activate(0, 0).unwrap();
        assert_eq!(calls.get(), 0);
        assert_eq!(navigator.phase(), MenuPhase::Closing);

        match activation {
            Activation::Run(action) => action.invoke(),
            other => panic!("Expected Run, got {:?}", other),
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn close_only_moves_an_open_menu_to_closing() {
        let mut navigator = MenuNavigator::new(settings()).unwrap();
        navigator.close();
        assert_eq!(navigator.phase(), MenuPhase::Closed);
        navigator.open();
        navigator.close();
        assert_eq!(navigator.phase(), MenuPhase::Closing);
    }

    #[test]
    fn corrupted_path_reports_invalid_path() {
        let mut navigator = MenuNavigator::new(settings()).unwrap();
        // "Preferences" is a leaf; no public operation can produce this.
        navigator.path.push(Location::new(0, 0));
        assert!(matches!(
            navigator.current_view(),
            Err(MenuError::InvalidPath { depth: 0 })
        ));
    }
}
