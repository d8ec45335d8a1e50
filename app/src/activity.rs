use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use nestable_menu::ActionRegistry;

/// Messages produced by menu actions, newest last.
#[derive(Clone, Default)]
pub struct ActivityLog {
    entries: Rc<RefCell<Vec<String>>>,
}

impl ActivityLog {
    pub fn record(&self, message: impl Into<String>) {
        let message = message.into();
        info!("{}", message);
        self.entries.borrow_mut().push(message);
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

/// Action ids the demo menu can reference, with the message each records.
const DEMO_ACTIONS: &[(&str, &str)] = &[
    ("open-preferences", "Opened preferences"),
    ("clear-cookies", "Cleared cookies"),
    ("export-user-data", "Exported user data"),
    ("account-security", "Opened account security"),
    ("cookie-settings", "Opened cookie settings"),
    ("log-out", "Logged out"),
];

pub fn demo_actions(activity: &ActivityLog) -> ActionRegistry {
    let mut actions = ActionRegistry::new();
    for &(id, message) in DEMO_ACTIONS {
        let activity = activity.clone();
        actions.register(id, move || activity.record(message));
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_demo_action_is_registered() {
        let actions = demo_actions(&ActivityLog::default());
        assert_eq!(actions.len(), DEMO_ACTIONS.len());
        assert!(actions.contains("log-out"));
    }

    #[test]
    fn invoking_action_records_message() {
        let activity = ActivityLog::default();
        let actions = demo_actions(&activity);
        actions.get("clear-cookies").unwrap().invoke();
        assert_eq!(activity.entries(), vec!["Cleared cookies".to_string()]);
    }
}
