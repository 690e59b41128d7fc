//! Fake game state shared by the integration tests.

#![allow(dead_code)]

use palette_widgets::{
    BuildableItem, Fingerprint, PlayerId, ProductionQueue, QueueId, QueueProvider, QueuedItem,
    SelectionDomain, SelectionItem,
};

pub const LOCAL: PlayerId = PlayerId(1);

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::new("palette_widgets=debug"))
        .try_init();
}

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: u32,
    pub class: String,
    pub owner: PlayerId,
}

impl SelectionItem for Actor {
    fn owner(&self) -> PlayerId {
        self.owner
    }

    fn is_dead(&self) -> bool {
        false
    }

    fn is_in_world(&self) -> bool {
        true
    }

    fn kind(&self) -> &str {
        &self.class
    }
}

pub fn class_of(actor: &Actor) -> String {
    actor.class.clone()
}

/// Actors of the local player, ids from 1, given as `(class, count)`.
pub fn actors(groups: &[(&str, usize)]) -> Vec<Actor> {
    groups
        .iter()
        .flat_map(|(class, count)| std::iter::repeat_n(*class, *count))
        .zip(1..)
        .map(|(class, id)| Actor {
            id,
            class: class.to_string(),
            owner: LOCAL,
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct World {
    pub selected: Vec<Actor>,
    pub background: Vec<Actor>,
    pub manual_edits: u64,
}

impl World {
    pub fn with_selection(selected: Vec<Actor>) -> Self {
        Self {
            selected,
            ..Self::default()
        }
    }

    pub fn selected_ids(&self) -> Vec<u32> {
        self.selected.iter().map(|a| a.id).collect()
    }
}

impl SelectionDomain for World {
    type Item = Actor;

    fn items(&self) -> &[Actor] {
        &self.selected
    }

    fn background_items(&self) -> &[Actor] {
        &self.background
    }

    fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(&self.selected_ids())
    }

    fn manual_fingerprint(&self) -> Fingerprint {
        Fingerprint(self.manual_edits)
    }

    fn local_player(&self) -> Option<PlayerId> {
        Some(LOCAL)
    }

    fn replace(&mut self, items: Vec<Actor>) {
        self.selected = items;
        self.manual_edits += 1;
    }

    fn remove(&mut self, item: &Actor) {
        self.selected.retain(|a| a != item);
        self.manual_edits += 1;
    }

    fn demote(&mut self, item: &Actor) {
        if let Some(pos) = self.selected.iter().position(|a| a == item) {
            self.background.push(self.selected.remove(pos));
        }
    }

    fn add(&mut self, item: Actor) {
        self.background.retain(|a| *a != item);
        if !self.selected.contains(&item) {
            self.selected.push(item);
        }
    }
}

#[derive(Debug, Clone)]
pub struct FakeQueue {
    pub id: QueueId,
    pub group: String,
    pub enabled: bool,
    pub buildable: Vec<String>,
    pub queued: Vec<QueuedItem>,
}

impl FakeQueue {
    pub fn new(id: u32, group: &str, buildable: &[&str]) -> Self {
        Self {
            id: QueueId(id),
            group: group.to_string(),
            enabled: true,
            buildable: buildable.iter().map(|s| s.to_string()).collect(),
            queued: Vec::new(),
        }
    }

    pub fn finished(mut self, name: &str) -> Self {
        self.queued.push(QueuedItem {
            name: name.to_string(),
            done: true,
        });
        self
    }
}

impl ProductionQueue for FakeQueue {
    fn id(&self) -> QueueId {
        self.id
    }

    fn group(&self) -> &str {
        &self.group
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn buildable_items(&self) -> Vec<BuildableItem> {
        self.buildable.iter().map(BuildableItem::new).collect()
    }

    fn all_queued(&self) -> Vec<QueuedItem> {
        self.queued.clone()
    }

    fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(&(&self.buildable, &self.queued))
    }

    fn start(&mut self, item: &str, count: u32) {
        for _ in 0..count {
            self.queued.push(QueuedItem {
                name: item.to_string(),
                done: false,
            });
        }
    }

    fn cancel(&mut self, item: &str, count: u32) {
        for _ in 0..count {
            if let Some(pos) = self.queued.iter().rposition(|q| q.name == item) {
                self.queued.remove(pos);
            }
        }
    }

    fn pick_up(&mut self, item: &str) -> bool {
        match self.queued.iter().position(|q| q.name == item && q.done) {
            Some(pos) => {
                self.queued.remove(pos);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct Production {
    pub queues: Vec<FakeQueue>,
}

impl QueueProvider for Production {
    type Queue = FakeQueue;

    fn queues(&self) -> &[FakeQueue] {
        &self.queues
    }

    fn queue_mut(&mut self, id: QueueId) -> Option<&mut FakeQueue> {
        self.queues.iter_mut().find(|q| q.id == id)
    }
}
