#![forbid(unsafe_code)]

//! Partitioning of domain items into named, ordered classes.
//!
//! # Ordering
//!
//! Classes are sorted by name using plain byte-wise `str` ordering. Within a
//! class, members keep domain order and the first member represents the
//! class in the palette.

use crate::domain::{Classifier, PlayerId, ProductionQueue, SelectionDomain, SelectionItem};
use std::collections::BTreeMap;

/// One named partition of the domain set.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassGroup<I> {
    name: String,
    members: Vec<I>,
}

impl<I> ClassGroup<I> {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First member in domain order.
    #[must_use]
    pub fn representative(&self) -> &I {
        // A group is only created together with its first member.
        &self.members[0]
    }

    #[must_use]
    pub fn members(&self) -> &[I] {
        &self.members
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// The full ordered class list for one rebuild.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassGroups<I> {
    groups: Vec<ClassGroup<I>>,
}

impl<I> Default for ClassGroups<I> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<I: Clone> ClassGroups<I> {
    /// Group `items` by the classifier's class name.
    pub fn build<C>(items: &[I], classifier: &C) -> Self
    where
        C: Classifier<I> + ?Sized,
    {
        let mut by_name: BTreeMap<String, Vec<I>> = BTreeMap::new();
        for item in items {
            by_name
                .entry(classifier.class_of(item))
                .or_default()
                .push(item.clone());
        }
        Self {
            groups: by_name
                .into_iter()
                .map(|(name, members)| ClassGroup { name, members })
                .collect(),
        }
    }
}

impl<I> ClassGroups<I> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// True when at least one class exists.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ClassGroup<I>> {
        self.groups.get(index)
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ClassGroup<I>> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassGroup<I>> {
        self.groups.iter()
    }

    /// Class names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }
}

/// The player whose units the selection palette shows.
#[must_use]
pub fn viewing_player<D: SelectionDomain + ?Sized>(domain: &D) -> Option<PlayerId> {
    domain.render_player().or_else(|| domain.local_player())
}

/// Whether `item` may appear in the palette for `player`.
#[must_use]
pub fn is_valid_for<I: SelectionItem>(item: &I, player: Option<PlayerId>) -> bool {
    !item.is_dead() && item.is_in_world() && Some(item.owner()) == player
}

/// The live, valid foreground selection in domain order.
#[must_use]
pub fn valid_selection<D: SelectionDomain + ?Sized>(domain: &D) -> Vec<D::Item> {
    let player = viewing_player(domain);
    domain
        .items()
        .iter()
        .filter(|item| is_valid_for(*item, player))
        .cloned()
        .collect()
}

/// Valid members of `class` in the live selection.
#[must_use]
pub fn class_members<D, C>(domain: &D, classifier: &C, class: &str) -> Vec<D::Item>
where
    D: SelectionDomain + ?Sized,
    C: Classifier<D::Item> + ?Sized,
{
    valid_selection(domain)
        .into_iter()
        .filter(|item| classifier.class_of(item) == class)
        .collect()
}

/// Whether a queue contributes a tab: only while it can build something.
#[must_use]
pub fn contributes_tab<Q: ProductionQueue + ?Sized>(queue: &Q) -> bool {
    !queue.buildable_items().is_empty()
}
