use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Invalid option shape: '{label}' defines both an action and sub-menu options")]
    InvalidOptionShape { label: String },
    #[error("Duplicate label: '{label}' appears more than once in one menu level")]
    DuplicateLabel { label: String },
    #[error("Unknown action '{action}' referenced by option '{label}'")]
    UnknownAction { label: String, action: String },
    #[error("Index out of range: no option at group {group_index}, item {item_index}")]
    IndexOutOfRange {
        group_index: usize,
        item_index: usize,
    },
    #[error("Invalid navigation path at depth {depth}")]
    InvalidPath { depth: usize },
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
