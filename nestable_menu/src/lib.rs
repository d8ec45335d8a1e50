//! Drill-down menu navigation.
//!
//! A [`MenuNavigator`] walks a tree of grouped [`MenuOption`]s. It tracks the
//! path of sub-menus the user has entered, derives the visible options and
//! breadcrumb title from that path, and turns select/back/close events into
//! path changes or fired actions. Rendering is left to the caller.

pub mod builder;
pub mod definition;
pub mod error;
pub mod navigator;
pub mod option;
pub mod path;

pub use builder::MenuBuilder;
pub use definition::{ActionRegistry, OptionDef, OptionsDef};
pub use error::{MenuError, Result};
pub use navigator::{Activation, MenuNavigator, MenuPhase, MenuView, SelectOutcome};
pub use option::{
    GroupedOptionList, MenuAction, MenuOption, MenuOptionBuilder, OptionKind, OptionList,
};
pub use path::{Location, NavigationPath};
