// SPDX-License-Identifier: MPL-2.0
//! Per-container toggle groups for accordion headers.
//!
//! Each header belongs to exactly one container. Opening a header closes
//! its siblings in that container only; headers in other containers are not
//! affected. Activating an open header closes it, so a container may have
//! no open header at all. This differs on purpose from
//! [`ExclusiveGroup`](super::group::ExclusiveGroup), which never returns to
//! the zero-active state.

use super::group::NotAMember;

/// Result of activating a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    Expanded,
    Collapsed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Container<K> {
    headers: Vec<K>,
    open: Option<usize>,
}

/// A set of accordion containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion<K> {
    containers: Vec<Container<K>>,
    focused: Option<K>,
}

impl<K> Default for Accordion<K> {
    fn default() -> Self {
        Self {
            containers: Vec::new(),
            focused: None,
        }
    }
}

impl<K: Copy + PartialEq> Accordion<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a container holding `headers`, all collapsed.
    ///
    /// A header without an enclosing container is modelled as a container
    /// of one.
    pub fn add_container(&mut self, headers: Vec<K>) {
        self.containers.push(Container {
            headers,
            open: None,
        });
    }

    /// Toggles `header` and collapses its siblings.
    ///
    /// # Errors
    ///
    /// Returns [`NotAMember`] when the header belongs to no container.
    pub fn activate(&mut self, header: K) -> Result<Expansion, NotAMember> {
        let (container_index, header_index) = self.locate(header).ok_or(NotAMember)?;
        let container = &mut self.containers[container_index];
        self.focused = Some(header);

        if container.open == Some(header_index) {
            container.open = None;
            Ok(Expansion::Collapsed)
        } else {
            container.open = Some(header_index);
            Ok(Expansion::Expanded)
        }
    }

    /// Moves keyboard focus to `header`.
    ///
    /// # Errors
    ///
    /// Returns [`NotAMember`] when the header belongs to no container.
    pub fn focus(&mut self, header: K) -> Result<K, NotAMember> {
        self.locate(header).ok_or(NotAMember)?;
        self.focused = Some(header);
        Ok(header)
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Enter/Space on the focused header behaves like a click.
    pub fn activate_focused(&mut self) -> Option<(K, Expansion)> {
        let header = self.focused?;
        self.activate(header).ok().map(|expansion| (header, expansion))
    }

    #[must_use]
    pub fn focused(&self) -> Option<K> {
        self.focused
    }

    #[must_use]
    pub fn is_expanded(&self, header: K) -> bool {
        self.locate(header)
            .is_some_and(|(c, h)| self.containers[c].open == Some(h))
    }

    /// The open header of container `index`, if any.
    #[must_use]
    pub fn open_in(&self, index: usize) -> Option<K> {
        let container = self.containers.get(index)?;
        container.open.map(|h| container.headers[h])
    }

    /// Number of open headers in container `index`.
    #[must_use]
    pub fn open_count(&self, index: usize) -> usize {
        self.containers
            .get(index)
            .map_or(0, |container| usize::from(container.open.is_some()))
    }

    #[must_use]
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Headers of container `index` in display order.
    #[must_use]
    pub fn headers(&self, index: usize) -> &[K] {
        self.containers
            .get(index)
            .map_or(&[], |container| container.headers.as_slice())
    }

    fn locate(&self, header: K) -> Option<(usize, usize)> {
        self.containers
            .iter()
            .enumerate()
            .find_map(|(c, container)| {
                container
                    .headers
                    .iter()
                    .position(|candidate| *candidate == header)
                    .map(|h| (c, h))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq() -> Accordion<u32> {
        let mut accordion = Accordion::new();
        accordion.add_container(vec![1, 2, 3]);
        accordion.add_container(vec![10, 11]);
        accordion
    }

    #[test]
    fn starts_fully_collapsed() {
        let accordion = faq();
        assert_eq!(accordion.open_in(0), None);
        assert_eq!(accordion.open_in(1), None);
    }

    #[test]
    fn opening_collapses_siblings_in_same_container() {
        let mut accordion = faq();
        accordion.activate(1).expect("header");
        accordion.activate(3).expect("header");

        assert!(!accordion.is_expanded(1));
        assert!(accordion.is_expanded(3));
        assert_eq!(accordion.open_count(0), 1);
    }

    #[test]
    fn other_containers_are_untouched() {
        let mut accordion = faq();
        accordion.activate(10).expect("header");
        accordion.activate(2).expect("header");

        assert!(accordion.is_expanded(10));
        assert!(accordion.is_expanded(2));
    }

    #[test]
    fn reactivating_open_header_collapses_it() {
        let mut accordion = faq();
        assert_eq!(accordion.activate(2), Ok(Expansion::Expanded));
        assert_eq!(accordion.activate(2), Ok(Expansion::Collapsed));
        assert_eq!(accordion.open_count(0), 0);
    }

    #[test]
    fn unknown_header_is_rejected() {
        let mut accordion = faq();
        accordion.activate(1).expect("header");
        assert_eq!(accordion.activate(99), Err(NotAMember));
        assert!(accordion.is_expanded(1));
    }

    #[test]
    fn focused_header_toggles_on_activate() {
        let mut accordion = faq();
        accordion.focus(11).expect("header");
        assert_eq!(
            accordion.activate_focused(),
            Some((11, Expansion::Expanded))
        );
        assert_eq!(
            accordion.activate_focused(),
            Some((11, Expansion::Collapsed))
        );
    }

    #[test]
    fn activate_focused_without_focus_does_nothing() {
        let mut accordion = faq();
        assert_eq!(accordion.activate_focused(), None);
    }

    #[test]
    fn standalone_header_toggles_alone() {
        let mut accordion = Accordion::new();
        accordion.add_container(vec!['x']);
        accordion.activate('x').expect("header");
        assert!(accordion.is_expanded('x'));
        accordion.activate('x').expect("header");
        assert!(!accordion.is_expanded('x'));
    }
}
