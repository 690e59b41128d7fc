//! In-memory domains for unit tests.

use crate::domain::{
    BuildableItem, Fingerprint, PlayerId, ProductionQueue, QueueId, QueueProvider, QueuedItem,
    SelectionDomain, SelectionItem,
};

pub(crate) const ME: PlayerId = PlayerId(1);

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Unit {
    pub id: u32,
    pub class: &'static str,
    pub owner: PlayerId,
    pub dead: bool,
}

impl Unit {
    pub fn new(id: u32, class: &'static str) -> Self {
        Self {
            id,
            class,
            owner: ME,
            dead: false,
        }
    }
}

impl SelectionItem for Unit {
    fn owner(&self) -> PlayerId {
        self.owner
    }

    fn is_dead(&self) -> bool {
        self.dead
    }

    fn is_in_world(&self) -> bool {
        true
    }

    fn kind(&self) -> &str {
        self.class
    }
}

pub(crate) fn by_class(unit: &Unit) -> String {
    unit.class.to_string()
}

/// Units `id` in classes given as `(class, count)`, ids counting from 1.
pub(crate) fn units(groups: &[(&'static str, usize)]) -> Vec<Unit> {
    let mut id = 0;
    let mut out = Vec::new();
    for (class, count) in groups {
        for _ in 0..*count {
            id += 1;
            out.push(Unit::new(id, *class));
        }
    }
    out
}

#[derive(Debug, Default)]
pub(crate) struct Selection {
    pub items: Vec<Unit>,
    pub background: Vec<Unit>,
    pub manual_edits: u64,
}

impl Selection {
    pub fn of(items: Vec<Unit>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(|u| u.id).collect()
    }
}

impl SelectionDomain for Selection {
    type Item = Unit;

    fn items(&self) -> &[Unit] {
        &self.items
    }

    fn background_items(&self) -> &[Unit] {
        &self.background
    }

    fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(&self.ids())
    }

    fn manual_fingerprint(&self) -> Fingerprint {
        Fingerprint(self.manual_edits)
    }

    fn local_player(&self) -> Option<PlayerId> {
        Some(ME)
    }

    fn replace(&mut self, items: Vec<Unit>) {
        self.items = items;
    }

    fn remove(&mut self, item: &Unit) {
        self.items.retain(|u| u != item);
    }

    fn demote(&mut self, item: &Unit) {
        if let Some(pos) = self.items.iter().position(|u| u == item) {
            let unit = self.items.remove(pos);
            self.background.push(unit);
        }
    }

    fn add(&mut self, item: Unit) {
        self.background.retain(|u| *u != item);
        if !self.items.contains(&item) {
            self.items.push(item);
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Queue {
    pub id: QueueId,
    pub group: &'static str,
    pub enabled: bool,
    pub buildable: Vec<&'static str>,
    pub queued: Vec<QueuedItem>,
    pub picked_up: Vec<String>,
}

impl Queue {
    pub fn new(id: u32, group: &'static str, buildable: &[&'static str]) -> Self {
        Self {
            id: QueueId(id),
            group,
            enabled: true,
            buildable: buildable.to_vec(),
            queued: Vec::new(),
            picked_up: Vec::new(),
        }
    }

    pub fn with_done(mut self, name: &str) -> Self {
        self.queued.push(QueuedItem {
            name: name.to_string(),
            done: true,
        });
        self
    }
}

impl ProductionQueue for Queue {
    fn id(&self) -> QueueId {
        self.id
    }

    fn group(&self) -> &str {
        self.group
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn buildable_items(&self) -> Vec<BuildableItem> {
        self.buildable.iter().map(|n| BuildableItem::new(*n)).collect()
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
                self.picked_up.push(item.to_string());
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Queues {
    pub queues: Vec<Queue>,
}

impl QueueProvider for Queues {
    type Queue = Queue;

    fn queues(&self) -> &[Queue] {
        &self.queues
    }

    fn queue_mut(&mut self, id: QueueId) -> Option<&mut Queue> {
        self.queues.iter_mut().find(|q| q.id == id)
    }
}
