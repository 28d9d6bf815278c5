use std::{
    fmt, hash,
    sync::{Arc, LazyLock},
};

use crate::EventTypeId;

static ROOT: LazyLock<EventType> = LazyLock::new(|| {
    EventType(Arc::new(TypeNode {
        id: EventTypeId::mint(),
        name: Some("ROOT".to_owned()),
        super_type: None,
    }))
});

struct TypeNode {
    id: EventTypeId,
    name: Option<String>,
    super_type: Option<EventType>,
}

/// A node in the single-rooted tree of event types.
///
/// Event types are the keys of the dispatch registry and the basis of
/// ancestor-chain matching: a handler registered under a type receives
/// events of that type and of every type below it in the tree.
///
/// Every type except [the root](EventType::root) has exactly one supertype,
/// fixed at construction. The handle is cheap to clone; clones refer to the
/// same node. Identity, not name, is what makes two types equal: types are
/// compared by the [`EventTypeId`] minted when they were built, so two
/// independently constructed types never collide even if their names do.
///
/// The usual pattern is to build the tree once at startup and share the
/// handles process-wide:
///
/// ```rust
/// use std::sync::LazyLock;
/// use evoke::EventType;
///
/// static INPUT: LazyLock<EventType> = LazyLock::new(|| EventType::named("input"));
/// static KEY_PRESS: LazyLock<EventType> = LazyLock::new(|| INPUT.subtype_named("key-press"));
///
/// assert!(KEY_PRESS.descends_from(&INPUT));
/// assert!(INPUT.descends_from(&EventType::root()));
/// ```
#[derive(Clone)]
pub struct EventType(Arc<TypeNode>);

impl EventType {
    /// The root of the type tree, shared process-wide.
    ///
    /// Created once on first use and never torn down. It is the only type
    /// without a supertype, and the default type of [`Event::new`](crate::Event::new).
    pub fn root() -> EventType {
        ROOT.clone()
    }

    /// Creates an unnamed type directly under the root.
    pub fn new() -> EventType {
        Self::root().subtype()
    }

    /// Creates a named type directly under the root.
    pub fn named(name: impl Into<String>) -> EventType {
        Self::root().subtype_named(name)
    }

    /// Creates an unnamed subtype of this type.
    pub fn subtype(&self) -> EventType {
        self.child(None)
    }

    /// Creates a named subtype of this type.
    ///
    /// The name is for diagnostics only and carries no identity:
    ///
    /// ```rust
    /// # use evoke::EventType;
    /// let a = EventType::named("same");
    /// let b = EventType::named("same");
    /// assert_ne!(a, b);
    /// ```
    pub fn subtype_named(&self, name: impl Into<String>) -> EventType {
        self.child(Some(name.into()))
    }

    fn child(&self, name: Option<String>) -> EventType {
        EventType(Arc::new(TypeNode {
            id: EventTypeId::mint(),
            name,
            super_type: Some(self.clone()),
        }))
    }

    /// Returns this type's identity token.
    pub fn id(&self) -> EventTypeId {
        self.0.id
    }

    /// Returns the display name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// Returns the supertype. `None` only for [the root](EventType::root).
    pub fn super_type(&self) -> Option<&EventType> {
        self.0.super_type.as_ref()
    }

    /// Returns true for [the root](EventType::root).
    pub fn is_root(&self) -> bool {
        self.0.super_type.is_none()
    }

    /// Iterates over this type and all its ancestors, ending at the root.
    ///
    /// This is the exact visitation order of
    /// [`Dispatcher::dispatch`](crate::Dispatcher::dispatch).
    pub fn chain(&self) -> impl Iterator<Item = &EventType> {
        std::iter::successors(Some(self), |ty| ty.super_type())
    }

    /// Returns true if `ancestor` lies on this type's chain.
    ///
    /// Every type descends from itself and from the root.
    pub fn descends_from(&self, ancestor: &EventType) -> bool {
        self.chain().any(|ty| ty == ancestor)
    }
}

impl Default for EventType {
    fn default() -> Self {
        EventType::new()
    }
}

impl PartialEq for EventType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.id == other.0.id
    }
}

impl Eq for EventType {}

impl hash::Hash for EventType {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.id()),
        }
    }
}

impl fmt::Debug for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventType")
            .field("id", &self.0.id)
            .field("name", &self.0.name)
            .field("super", &self.super_type().map(|ty| ty.to_string()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_a_single_shared_node() {
        let a = EventType::root();
        let b = EventType::root();
        assert_eq!(a, b);
        assert_eq!(a.id(), b.id());
        assert!(a.is_root());
        assert!(a.super_type().is_none());
        assert_eq!(a.name(), Some("ROOT"));
    }

    #[test]
    fn new_hangs_directly_under_root() {
        let ty = EventType::new();
        assert!(!ty.is_root());
        assert_eq!(ty.super_type(), Some(&EventType::root()));
        assert_eq!(ty.name(), None);
    }

    #[test]
    fn named_types_with_equal_names_stay_distinct() {
        let a = EventType::named("collision");
        let b = EventType::named("collision");
        assert_eq!(a.name(), b.name());
        assert_ne!(a, b);
    }

    #[test]
    fn clones_are_the_same_type() {
        let ty = EventType::named("left");
        let clone = ty.clone();
        assert_eq!(ty, clone);
        assert_eq!(ty.id(), clone.id());
    }

    #[test]
    fn chain_walks_from_exact_type_to_root() {
        let parent = EventType::named("parent");
        let child = parent.subtype_named("child");
        let grandchild = child.subtype();

        let chain: Vec<&EventType> = grandchild.chain().collect();
        assert_eq!(
            chain,
            vec![&grandchild, &child, &parent, &EventType::root()]
        );
    }

    #[test]
    fn descends_from_covers_self_and_ancestors_only() {
        let parent = EventType::named("parent");
        let child = parent.subtype();
        let sibling = parent.subtype();

        assert!(child.descends_from(&child));
        assert!(child.descends_from(&parent));
        assert!(child.descends_from(&EventType::root()));
        assert!(!child.descends_from(&sibling));
        assert!(!parent.descends_from(&child));
    }

    #[test]
    fn display_prefers_the_name() {
        let named = EventType::named("key-press");
        assert_eq!(named.to_string(), "key-press");

        let unnamed = EventType::new();
        assert_eq!(unnamed.to_string(), unnamed.id().to_string());
    }
}
