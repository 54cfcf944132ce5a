/// Externally-originated change notifications, dispatched on `window` by
/// whatever transport the host page wires up. Only the event names are part
/// of the contract; detail payloads are logged, never rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

impl ChangeKind {
    pub const ALL: [ChangeKind; 3] = [ChangeKind::Created, ChangeKind::Updated, ChangeKind::Deleted];

    pub fn event_name(self) -> &'static str {
        match self {
            ChangeKind::Created => "activity:created",
            ChangeKind::Updated => "activity:updated",
            ChangeKind::Deleted => "activity:deleted",
        }
    }

    pub fn from_event_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.event_name() == name)
    }

    /// Informational banner shown when the event arrives. Each event also
    /// triggers exactly one unfiltered list reload.
    pub fn banner_message(self) -> &'static str {
        match self {
            ChangeKind::Created => "A new activity was created",
            ChangeKind::Updated => "An activity was updated",
            ChangeKind::Deleted => "An activity was deleted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_round_trip() {
        for kind in ChangeKind::ALL {
            assert_eq!(ChangeKind::from_event_name(kind.event_name()), Some(kind));
        }
        assert_eq!(ChangeKind::from_event_name("activity:archived"), None);
    }

    #[test]
    fn each_kind_has_a_distinct_informational_message() {
        assert_eq!(
            ChangeKind::Deleted.banner_message(),
            "An activity was deleted"
        );
        assert_ne!(
            ChangeKind::Created.banner_message(),
            ChangeKind::Updated.banner_message()
        );
    }
}
