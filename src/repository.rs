//! Generic CRUD engine shared by every entity collection.
//!
//! A [`Repository`] owns an insertion-ordered `Vec` of records and
//! funnels every mutation through a [`LifecyclePolicy`], so per-entity
//! behavior (timestamp stamping, audit side effects) is declared in
//! one named place instead of scattered across call sites.

use crate::ids::new_id;

/// A record that can live in a [`Repository`].
pub trait Entity: Clone {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// Lifecycle hooks attached to a repository. All methods default to
/// no-ops.
pub trait LifecyclePolicy<T: Entity> {
    /// May transform a record before insertion.
    fn on_create(&self, item: T) -> T {
        item
    }

    /// Observes a committed update. `prev` is the record before the
    /// patch, `next` the record as stored.
    fn on_update(&self, _id: &str, _prev: &T, _next: &T) {}

    /// Observes a removal. `removed` is `None` when no record matched;
    /// the hook still runs so cleanup keyed on id alone can fire.
    fn on_delete(&self, _id: &str, _removed: Option<&T>) {}
}

/// Policy with no lifecycle behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPolicy;

impl<T: Entity> LifecyclePolicy<T> for NoPolicy {}

/// An insertion-ordered collection of entities with uniform lifecycle
/// handling.
///
/// `create` always appends; nothing reorders records except explicit
/// bulk operations through [`Repository::items_mut`]. Id uniqueness is
/// guaranteed for generated ids; callers passing their own ids must
/// not hand-construct collisions.
#[derive(Debug, Clone)]
pub struct Repository<T: Entity, P: LifecyclePolicy<T> = NoPolicy> {
    items: Vec<T>,
    policy: P,
}

impl<T: Entity> Repository<T, NoPolicy> {
    pub fn new() -> Self {
        Self::with_policy(NoPolicy)
    }
}

impl<T: Entity> Default for Repository<T, NoPolicy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity, P: LifecyclePolicy<T>> Repository<T, P> {
    pub fn with_policy(policy: P) -> Self {
        Self {
            items: Vec::new(),
            policy,
        }
    }

    /// Insert a record, generating an id when the payload's is empty.
    /// The creation hook may transform the record first. Returns the
    /// record as stored.
    pub fn create(&mut self, mut payload: T) -> T {
        if payload.id().is_empty() {
            payload.set_id(new_id());
        }
        let item = self.policy.on_create(payload);
        self.items.push(item.clone());
        item
    }

    /// Patch the record with the given id. A missing id is a silent
    /// no-op returning `None`. The stored record keeps its id whatever
    /// the patch does.
    pub fn update(&mut self, id: &str, apply: impl FnOnce(&mut T)) -> Option<T> {
        let pos = self.items.iter().position(|it| it.id() == id)?;
        let prev = self.items[pos].clone();
        let mut next = prev.clone();
        apply(&mut next);
        next.set_id(id.to_string());
        self.items[pos] = next.clone();
        self.policy.on_update(id, &prev, &next);
        Some(next)
    }

    /// Remove the record with the given id, if any. The delete hook
    /// runs whether or not a record matched.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let removed = self
            .items
            .iter()
            .position(|it| it.id() == id)
            .map(|pos| self.items.remove(pos));
        self.policy.on_delete(id, removed.as_ref());
        removed
    }

    /// Replace the matching record wholesale when the payload's id is
    /// already present, create otherwise.
    pub fn upsert(&mut self, payload: T) -> T {
        if !payload.id().is_empty() {
            if let Some(pos) = self.items.iter().position(|it| it.id() == payload.id()) {
                let prev = self.items[pos].clone();
                self.items[pos] = payload.clone();
                self.policy.on_update(payload.id(), &prev, &payload);
                return payload;
            }
        }
        self.create(payload)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|it| it.id() == id)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Direct mutable access for bulk operations. Lifecycle hooks do
    /// not run on anything done through this.
    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Swap in a whole collection, bypassing lifecycle hooks.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: String,
        name: String,
        stamped: bool,
    }

    impl Widget {
        fn named(name: &str) -> Self {
            Self {
                id: String::new(),
                name: name.to_string(),
                stamped: false,
            }
        }
    }

    impl Entity for Widget {
        fn id(&self) -> &str {
            &self.id
        }
        fn set_id(&mut self, id: String) {
            self.id = id;
        }
    }

    #[derive(Default)]
    struct RecordingPolicy {
        updates: Rc<RefCell<Vec<String>>>,
        deletes: Rc<RefCell<Vec<(String, bool)>>>,
    }

    impl LifecyclePolicy<Widget> for RecordingPolicy {
        fn on_create(&self, mut item: Widget) -> Widget {
            item.stamped = true;
            item
        }

        fn on_update(&self, id: &str, prev: &Widget, next: &Widget) {
            assert_ne!(prev.name, next.name, "hook sees both sides of the patch");
            self.updates.borrow_mut().push(id.to_string());
        }

        fn on_delete(&self, id: &str, removed: Option<&Widget>) {
            self.deletes
                .borrow_mut()
                .push((id.to_string(), removed.is_some()));
        }
    }

    #[test]
    fn test_create_generates_id_and_appends() {
        let mut repo = Repository::new();
        let a = repo.create(Widget::named("a"));
        let b = repo.create(Widget::named("b"));
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(repo.items()[0].name, "a");
        assert_eq!(repo.items()[1].name, "b");
    }

    #[test]
    fn test_create_honors_caller_id() {
        let mut repo = Repository::new();
        let mut payload = Widget::named("fixed");
        payload.id = "w-1".to_string();
        let stored = repo.create(payload);
        assert_eq!(stored.id, "w-1");
    }

    #[test]
    fn test_create_hook_transforms() {
        let mut repo = Repository::with_policy(RecordingPolicy::default());
        let stored = repo.create(Widget::named("a"));
        assert!(stored.stamped);
        assert!(repo.items()[0].stamped);
    }

    #[test]
    fn test_update_patches_and_preserves_id() {
        let mut repo = Repository::new();
        let a = repo.create(Widget::named("a"));
        let updated = repo.update(&a.id, |w| {
            w.name = "a2".to_string();
            w.id = "hijack".to_string();
        });
        let updated = updated.unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.name, "a2");
        assert_eq!(repo.get(&a.id).unwrap().name, "a2");
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut repo = Repository::new();
        repo.create(Widget::named("a"));
        let before = repo.items().to_vec();
        assert!(repo.update("nope", |w| w.name = "x".to_string()).is_none());
        assert_eq!(repo.items(), &before[..]);
    }

    #[test]
    fn test_update_hook_fires() {
        let updates = Rc::new(RefCell::new(Vec::new()));
        let policy = RecordingPolicy {
            updates: updates.clone(),
            ..Default::default()
        };
        let mut repo = Repository::with_policy(policy);
        let a = repo.create(Widget::named("a"));
        repo.update(&a.id, |w| w.name = "a2".to_string());
        assert_eq!(updates.borrow().as_slice(), &[a.id]);
    }

    #[test]
    fn test_remove_returns_record() {
        let mut repo = Repository::new();
        let a = repo.create(Widget::named("a"));
        let removed = repo.remove(&a.id).unwrap();
        assert_eq!(removed.id, a.id);
        assert!(repo.is_empty());
        assert!(repo.remove(&a.id).is_none());
    }

    #[test]
    fn test_delete_hook_fires_even_when_absent() {
        let deletes = Rc::new(RefCell::new(Vec::new()));
        let policy = RecordingPolicy {
            deletes: deletes.clone(),
            ..Default::default()
        };
        let mut repo = Repository::with_policy(policy);
        let a = repo.create(Widget::named("a"));
        repo.remove(&a.id);
        repo.remove("ghost");
        let seen = deletes.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], (a.id.clone(), true));
        assert_eq!(seen[1], ("ghost".to_string(), false));
    }

    #[test]
    fn test_upsert_creates_then_replaces() {
        let mut repo = Repository::new();
        let created = repo.upsert(Widget::named("a"));
        assert_eq!(repo.len(), 1);

        let mut replacement = Widget::named("b");
        replacement.id = created.id.clone();
        repo.upsert(replacement);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(&created.id).unwrap().name, "b");
    }

    #[test]
    fn test_upsert_with_unknown_id_creates() {
        let mut repo = Repository::new();
        let mut payload = Widget::named("a");
        payload.id = "brand-new".to_string();
        repo.upsert(payload);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("brand-new").unwrap().name, "a");
    }

    #[test]
    fn test_replace_all_swaps_wholesale() {
        let mut repo = Repository::new();
        repo.create(Widget::named("a"));
        repo.replace_all(vec![Widget::named("x"), Widget::named("y")]);
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.items()[0].name, "x");
        repo.replace_all(Vec::new());
        assert!(repo.is_empty());
    }
}
