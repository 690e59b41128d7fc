#![forbid(unsafe_code)]

//! Cycling the foreground selection through its classes.
//!
//! The foreground and background selections together make up the set of
//! candidates. Each activation brings one class to the foreground and
//! pushes every other class to the background, stepping alphabetically
//! through the classes and wrapping at the end.

use crate::domain::{Classifier, SelectionDomain, SelectionItem};
use std::collections::BTreeSet;

/// Advance the foreground to the next class. Returns `true` whenever the
/// hotkey is considered handled, which includes an empty candidate set.
pub fn cycle_subgroups<D, C>(domain: &mut D, classifier: &C) -> bool
where
    D: SelectionDomain + ?Sized,
    C: Classifier<D::Item> + ?Sized,
{
    let player = domain.local_player();
    let candidates: Vec<D::Item> = domain
        .items()
        .iter()
        .chain(domain.background_items())
        .filter(|item| Some(item.owner()) == player && item.is_in_world() && !item.is_dead())
        .cloned()
        .collect();
    if candidates.is_empty() {
        return true;
    }

    let classes: Vec<String> = candidates
        .iter()
        .map(|item| classifier.class_of(item))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let foreground: BTreeSet<String> = candidates
        .iter()
        .filter(|item| domain.contains(item))
        .map(|item| classifier.class_of(item))
        .collect();

    let current = foreground
        .first()
        .and_then(|first| classes.iter().position(|c| c == first));
    let next = match current {
        Some(i) if foreground.len() == 1 && classes.len() > 1 => Some(i + 1),
        other => other,
    };
    let Some(target) = next
        .and_then(|i| classes.get(i))
        .or_else(|| classes.first())
        .cloned()
    else {
        return true;
    };

    tracing::debug!(class = %target, classes = classes.len(), "cycle selection subgroup");
    let (promote, demote): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|item| classifier.class_of(item) == target);
    for item in &demote {
        domain.demote(item);
    }
    for item in promote {
        domain.add(item);
    }
    true
}
