/// Longest label a group keeps; longer names are cut
pub const MAX_LABEL_CHARS: usize = 10;

/// Handle to a [`PathGroup`]. Paths hold this, never the group itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(usize);

impl GroupId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathGroup {
    id: GroupId,
    label: String,
}

impl PathGroup {
    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// All groups of a board plus the one new strokes are assigned to
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    groups: Vec<PathGroup>,
    // Number of groups ever created; ids start at 1
    created: usize,
    active: Option<GroupId>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a group and make it the active one.
    ///
    /// Without a label the group is named `group<id>`.
    pub fn create(&mut self, label: Option<&str>) -> GroupId {
        self.created += 1;
        let id = GroupId(self.created);
        let label = match label {
            Some(label) => truncate_label(label),
            None => format!("group{id}"),
        };
        self.groups.push(PathGroup { id, label });
        self.active = Some(id);
        id
    }

    pub fn get(&self, id: GroupId) -> Option<&PathGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn contains(&self, id: GroupId) -> bool {
        self.get(id).is_some()
    }

    /// Returns false if there is no such group
    pub fn rename(&mut self, id: GroupId, label: &str) -> bool {
        match self.groups.iter_mut().find(|g| g.id == id) {
            Some(group) => {
                group.label = truncate_label(label);
                true
            }
            None => false,
        }
    }

    /// Returns false if there is no such group
    pub fn set_active(&mut self, id: GroupId) -> bool {
        if self.contains(id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    pub fn active(&self) -> Option<GroupId> {
        self.active
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn truncate_label(label: &str) -> String {
    label.chars().take(MAX_LABEL_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels_count_from_one() {
        let mut groups = GroupRegistry::new();
        let first = groups.create(None);
        let second = groups.create(None);
        assert_eq!(groups.get(first).unwrap().label(), "group1");
        assert_eq!(groups.get(second).unwrap().label(), "group2");
        assert_eq!(groups.active(), Some(second));
    }

    #[test]
    fn test_rename_truncates_and_keeps_id() {
        let mut groups = GroupRegistry::new();
        let id = groups.create(None);
        assert!(groups.rename(id, "a very long group name"));
        let group = groups.get(id).unwrap();
        assert_eq!(group.label(), "a very lon");
        assert_eq!(group.id(), id);
    }

    #[test]
    fn test_unknown_group_is_rejected() {
        let mut groups = GroupRegistry::new();
        let id = groups.create(None);
        let mut other = GroupRegistry::new();
        other.create(None);
        let foreign = other.create(None);

        assert!(!groups.set_active(foreign));
        assert!(!groups.rename(foreign, "x"));
        assert_eq!(groups.active(), Some(id));
    }
}
