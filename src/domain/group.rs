// SPDX-License-Identifier: MPL-2.0
//! Radio-style exclusive groups.
//!
//! An [`ExclusiveGroup`] is an ordered set of members of which at most one is
//! active. Once any member has been activated exactly one stays active:
//! there is no way back to the zero-active state. Groups that need toggle
//! semantics use [`Accordion`](super::accordion::Accordion) instead.
//!
//! Focus is tracked separately from activation. Keyboard navigation only
//! moves focus; activation requires an explicit [`ExclusiveGroup::activate`]
//! or [`GroupKey::Activate`].

/// Error returned when activating a value that is not part of the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("value is not a member of this group")]
pub struct NotAMember;

/// Keyboard intents understood by tab-like groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    /// ArrowRight / ArrowDown: next member, wrapping to the first.
    Next,
    /// ArrowLeft / ArrowUp: previous member, wrapping to the last.
    Previous,
    /// Home.
    First,
    /// End.
    Last,
    /// Enter / Space: activate the focused member.
    Activate,
}

/// Outcome of a keyboard intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome<K> {
    /// Focus moved to this member; activation unchanged.
    Focused(K),
    /// This member was focused and activated.
    Activated(K),
    /// The group is empty or nothing was focused.
    Ignored,
}

/// Ordered members with at most one active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusiveGroup<K> {
    members: Vec<K>,
    active: Option<usize>,
    focused: Option<usize>,
}

impl<K: Copy + PartialEq> ExclusiveGroup<K> {
    /// Creates a group with no active member.
    #[must_use]
    pub fn new(members: Vec<K>) -> Self {
        Self {
            members,
            active: None,
            focused: None,
        }
    }

    /// Creates a group with `initial` active, if it is a member.
    #[must_use]
    pub fn with_active(members: Vec<K>, initial: K) -> Self {
        let mut group = Self::new(members);
        group.active = group.index_of(initial);
        group
    }

    /// Makes `member` the only active member and focuses it.
    ///
    /// # Errors
    ///
    /// Returns [`NotAMember`] and leaves the group untouched when `member`
    /// does not belong to it.
    pub fn activate(&mut self, member: K) -> Result<K, NotAMember> {
        let index = self.index_of(member).ok_or(NotAMember)?;
        self.active = Some(index);
        self.focused = Some(index);
        Ok(member)
    }

    /// Moves focus to `member` without activating it.
    ///
    /// # Errors
    ///
    /// Returns [`NotAMember`] when `member` does not belong to the group.
    pub fn focus(&mut self, member: K) -> Result<K, NotAMember> {
        let index = self.index_of(member).ok_or(NotAMember)?;
        self.focused = Some(index);
        Ok(member)
    }

    /// Clears keyboard focus.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Applies a keyboard intent.
    ///
    /// Navigation starts from the focused member, falling back to the
    /// active one and then to the first member.
    pub fn handle_key(&mut self, key: GroupKey) -> KeyOutcome<K> {
        let len = self.members.len();
        if len == 0 {
            return KeyOutcome::Ignored;
        }
        let current = self.focused.or(self.active).unwrap_or(0);

        let target = match key {
            GroupKey::Next => (current + 1) % len,
            GroupKey::Previous => (current + len - 1) % len,
            GroupKey::First => 0,
            GroupKey::Last => len - 1,
            GroupKey::Activate => {
                let Some(index) = self.focused else {
                    return KeyOutcome::Ignored;
                };
                self.active = Some(index);
                return KeyOutcome::Activated(self.members[index]);
            }
        };

        self.focused = Some(target);
        KeyOutcome::Focused(self.members[target])
    }

    #[must_use]
    pub fn active(&self) -> Option<K> {
        self.active.map(|index| self.members[index])
    }

    #[must_use]
    pub fn focused(&self) -> Option<K> {
        self.focused.map(|index| self.members[index])
    }

    #[must_use]
    pub fn is_active(&self, member: K) -> bool {
        self.active() == Some(member)
    }

    #[must_use]
    pub fn is_focused(&self, member: K) -> bool {
        self.focused() == Some(member)
    }

    /// Number of active members (0 or 1).
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(self.active.is_some())
    }

    #[must_use]
    pub fn members(&self) -> &[K] {
        &self.members
    }

    #[must_use]
    pub fn contains(&self, member: K) -> bool {
        self.index_of(member).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn index_of(&self, member: K) -> Option<usize> {
        self.members.iter().position(|candidate| *candidate == member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> ExclusiveGroup<char> {
        ExclusiveGroup::with_active(vec!['a', 'b', 'c', 'd'], 'a')
    }

    #[test]
    fn activate_leaves_exactly_one_active() {
        let mut group = tabs();
        for member in ['c', 'b', 'd', 'd', 'a'] {
            group.activate(member).expect("member");
            assert_eq!(group.active(), Some(member));
            assert_eq!(group.active_count(), 1);
            let others = group
                .members()
                .iter()
                .filter(|m| **m != member)
                .filter(|m| group.is_active(**m))
                .count();
            assert_eq!(others, 0);
        }
    }

    #[test]
    fn activating_a_stranger_is_rejected_without_side_effects() {
        let mut group = tabs();
        group.activate('c').expect("member");

        assert_eq!(group.activate('z'), Err(NotAMember));
        assert_eq!(group.active(), Some('c'));
        assert_eq!(group.focused(), Some('c'));
    }

    #[test]
    fn rejection_reads_as_an_error() {
        let error: Box<dyn std::error::Error> = Box::new(NotAMember);
        assert_eq!(error.to_string(), "value is not a member of this group");
    }

    #[test]
    fn new_group_starts_without_active_member() {
        let group = ExclusiveGroup::new(vec![1, 2, 3]);
        assert_eq!(group.active(), None);
        assert_eq!(group.active_count(), 0);
    }

    #[test]
    fn with_unknown_initial_starts_inactive() {
        let group = ExclusiveGroup::with_active(vec![1, 2, 3], 9);
        assert_eq!(group.active(), None);
    }

    #[test]
    fn arrows_wrap_at_both_ends() {
        let mut group = tabs();
        group.focus('d').expect("member");
        assert_eq!(group.handle_key(GroupKey::Next), KeyOutcome::Focused('a'));
        assert_eq!(
            group.handle_key(GroupKey::Previous),
            KeyOutcome::Focused('d')
        );
    }

    #[test]
    fn home_and_end_jump_to_extremes() {
        let mut group = tabs();
        group.focus('b').expect("member");
        assert_eq!(group.handle_key(GroupKey::Last), KeyOutcome::Focused('d'));
        assert_eq!(group.handle_key(GroupKey::First), KeyOutcome::Focused('a'));
    }

    #[test]
    fn focus_movement_does_not_activate() {
        let mut group = tabs();
        group.handle_key(GroupKey::Next);
        group.handle_key(GroupKey::Next);

        assert_eq!(group.focused(), Some('c'));
        assert_eq!(group.active(), Some('a'));
    }

    #[test]
    fn navigation_starts_from_active_when_unfocused() {
        let mut group = ExclusiveGroup::with_active(vec![1, 2, 3], 2);
        assert_eq!(group.handle_key(GroupKey::Next), KeyOutcome::Focused(3));
    }

    #[test]
    fn activate_key_activates_focused_member() {
        let mut group = tabs();
        group.handle_key(GroupKey::Last);
        assert_eq!(
            group.handle_key(GroupKey::Activate),
            KeyOutcome::Activated('d')
        );
        assert_eq!(group.active(), Some('d'));
    }

    #[test]
    fn activate_key_without_focus_is_ignored() {
        let mut group = tabs();
        assert_eq!(group.handle_key(GroupKey::Activate), KeyOutcome::Ignored);
        assert_eq!(group.active(), Some('a'));
    }

    #[test]
    fn empty_group_ignores_keys() {
        let mut group: ExclusiveGroup<u8> = ExclusiveGroup::new(Vec::new());
        assert_eq!(group.handle_key(GroupKey::Next), KeyOutcome::Ignored);
        assert!(group.is_empty());
    }

    #[test]
    fn click_focuses_and_activates() {
        let mut group = tabs();
        group.activate('b').expect("member");
        assert!(group.is_focused('b'));
        assert!(group.is_active('b'));
    }
}
