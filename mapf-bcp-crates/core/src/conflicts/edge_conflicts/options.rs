use crate::conflicts::ConflictClass;

/// The options of the [`super::EdgeConflictHandler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeConflictOptions {
    /// Whether an agent waiting at an endpoint of an edge conflicts with the agents traversing it.
    pub wait_conflicts: bool,
    /// The number of cuts for which room is reserved when the handler is created.
    pub initial_cut_capacity: usize,
}

impl Default for EdgeConflictOptions {
    fn default() -> Self {
        Self {
            wait_conflicts: false,
            initial_cut_capacity: 5000,
        }
    }
}

impl EdgeConflictOptions {
    /// The default options for forbidding the conflicts of `class`.
    pub fn for_class(class: ConflictClass) -> Self {
        Self {
            wait_conflicts: class.models_waits(),
            ..Default::default()
        }
    }

    pub fn conflict_class(&self) -> ConflictClass {
        if self.wait_conflicts {
            ConflictClass::EdgeWait
        } else {
            ConflictClass::Edge
        }
    }
}
