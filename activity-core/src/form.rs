use serde::{Deserialize, Serialize};

/// What the next submit does. Held by the controller, not annotated onto the
/// form element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Update {
        id: u64,
    },
}

/// The named form controls, serialized as the JSON request body for both
/// create and update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub status: String,
}

/// A planned submit, ready for the HTTP layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    Create(FormFields),
    Update { id: u64, fields: FormFields },
}

impl FormMode {
    pub fn plan(self, fields: FormFields) -> SubmitAction {
        match self {
            FormMode::Create => SubmitAction::Create(fields),
            FormMode::Update { id } => SubmitAction::Update { id, fields },
        }
    }

    /// Mode after the submit resolves. Success consumes an update target;
    /// failure keeps it so the user can correct and resubmit.
    pub fn after_submit(self, success: bool) -> FormMode {
        if success {
            FormMode::Create
        } else {
            self
        }
    }
}

/// Deletes are gated on an explicit confirmation. Declining plans nothing:
/// no request leaves the client and no state changes.
pub fn plan_delete(id: u64, confirmed: bool) -> Option<u64> {
    confirmed.then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> FormFields {
        FormFields {
            name: "Standup".to_string(),
            description: "Daily".to_string(),
            activity_type: "meeting".to_string(),
            status: "active".to_string(),
        }
    }

    #[test]
    fn create_mode_plans_a_create() {
        assert_eq!(
            FormMode::Create.plan(fields()),
            SubmitAction::Create(fields())
        );
    }

    #[test]
    fn update_mode_plans_an_update_to_its_id() {
        assert_eq!(
            FormMode::Update { id: 9 }.plan(fields()),
            SubmitAction::Update {
                id: 9,
                fields: fields()
            }
        );
    }

    #[test]
    fn successful_submit_returns_to_create() {
        assert_eq!(
            FormMode::Update { id: 9 }.after_submit(true),
            FormMode::Create
        );
        assert_eq!(FormMode::Create.after_submit(true), FormMode::Create);
    }

    #[test]
    fn failed_update_keeps_its_target() {
        assert_eq!(
            FormMode::Update { id: 9 }.after_submit(false),
            FormMode::Update { id: 9 }
        );
    }

    #[test]
    fn declined_confirmation_plans_no_delete() {
        assert_eq!(plan_delete(9, false), None);
        assert_eq!(plan_delete(9, true), Some(9));
    }

    #[test]
    fn fields_serialize_with_the_wire_key_for_type() {
        let body = serde_json::to_value(fields()).expect("serialize");
        assert_eq!(body["type"], "meeting");
        assert!(body.get("activity_type").is_none());
    }
}
