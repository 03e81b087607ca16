//! Mansion map: a fixed binary tree of rooms.
//!
//! Rooms live in a contiguous arena and refer to each other through
//! [`RoomId`] indices. A [`MansionBuilder`] creates rooms and links each
//! parent to at most two children; [`MansionBuilder::build`] validates the
//! tree and freezes it into a [`MansionMap`], which only offers read access.
//!
//! The builder keeps the links a strict tree at every step: a room has at
//! most one parent, never links to itself, and never becomes its own
//! ancestor.

use std::fmt;

use tracing::debug;

use crate::error::WorldError;

/// Index of a room inside the arena that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(usize);

impl RoomId {
    /// Position of the room in its arena.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

/// Which child link to follow from a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The left child.
    Left,
    /// The right child.
    Right,
}

/// A room in the mansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    left: Option<RoomId>,
    right: Option<RoomId>,
    parent: Option<RoomId>,
}

impl Room {
    const fn new(name: String) -> Self {
        Self {
            name,
            left: None,
            right: None,
            parent: None,
        }
    }

    /// Display name of the room.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Left child, if any.
    pub const fn left(&self) -> Option<RoomId> {
        self.left
    }

    /// Right child, if any.
    pub const fn right(&self) -> Option<RoomId> {
        self.right
    }

    /// Child in the given direction, if any.
    pub const fn child(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Whether the room has no children at all.
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Mutable staging area for a mansion under construction.
#[derive(Debug, Default)]
pub struct MansionBuilder {
    rooms: Vec<Room>,
}

impl MansionBuilder {
    /// Create an empty builder.
    pub const fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Allocate a room with no children.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Exhausted`] if the arena cannot grow.
    pub fn create_room(&mut self, name: impl Into<String>) -> Result<RoomId, WorldError> {
        self.rooms
            .try_reserve(1)
            .map_err(|source| WorldError::Exhausted {
                what: "room",
                source,
            })?;
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(name.into()));
        Ok(id)
    }

    /// Set both children of `parent`, replacing any previous links.
    ///
    /// Either child may be absent. Children previously attached to `parent`
    /// but not named again are detached.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::RoomNotFound`] for ids from another builder,
    /// [`WorldError::SelfLink`], [`WorldError::AlreadyAttached`] or
    /// [`WorldError::Cycle`] if the link would break the tree shape.
    pub fn connect(
        &mut self,
        parent: RoomId,
        left: Option<RoomId>,
        right: Option<RoomId>,
    ) -> Result<(), WorldError> {
        let (old_left, old_right) = {
            let room = self.get(parent)?;
            (room.left, room.right)
        };

        if let Some(shared) = left.filter(|_| left == right) {
            return Err(WorldError::AlreadyAttached {
                child: shared,
                parent,
            });
        }
        for child in [left, right].into_iter().flatten() {
            self.check_link(parent, child)?;
        }

        for old in [old_left, old_right].into_iter().flatten() {
            self.get_mut(old)?.parent = None;
        }
        for child in [left, right].into_iter().flatten() {
            self.get_mut(child)?.parent = Some(parent);
        }
        let room = self.get_mut(parent)?;
        room.left = left;
        room.right = right;
        Ok(())
    }

    /// Freeze the rooms into an immutable map rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::RoomNotFound`] for a foreign root,
    /// [`WorldError::RootHasParent`] if the root is itself a child, or
    /// [`WorldError::Unreachable`] if some room hangs outside the tree.
    pub fn build(self, root: RoomId) -> Result<MansionMap, WorldError> {
        if let Some(parent) = self.get(root)?.parent {
            debug!(%root, %parent, "root room is attached below another room");
            return Err(WorldError::RootHasParent(root));
        }

        let mut seen = vec![false; self.rooms.len()];
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if let Some(flag) = seen.get_mut(id.0) {
                *flag = true;
            }
            let room = self.get(id)?;
            stack.extend(room.left);
            stack.extend(room.right);
        }
        if let Some(room) = self
            .rooms
            .iter()
            .zip(&seen)
            .find_map(|(room, reached)| (!reached).then_some(room))
        {
            return Err(WorldError::Unreachable(room.name.clone()));
        }

        debug!(rooms = self.rooms.len(), %root, "mansion map frozen");
        Ok(MansionMap {
            rooms: self.rooms,
            root,
        })
    }

    fn check_link(&self, parent: RoomId, child: RoomId) -> Result<(), WorldError> {
        if child == parent {
            return Err(WorldError::SelfLink(child));
        }
        if let Some(existing) = self.get(child)?.parent.filter(|&p| p != parent) {
            return Err(WorldError::AlreadyAttached {
                child,
                parent: existing,
            });
        }
        let mut ancestor = self.get(parent)?.parent;
        while let Some(id) = ancestor {
            if id == child {
                return Err(WorldError::Cycle { parent, child });
            }
            ancestor = self.get(id)?.parent;
        }
        Ok(())
    }

    fn get(&self, id: RoomId) -> Result<&Room, WorldError> {
        self.rooms.get(id.0).ok_or(WorldError::RoomNotFound(id))
    }

    fn get_mut(&mut self, id: RoomId) -> Result<&mut Room, WorldError> {
        self.rooms.get_mut(id.0).ok_or(WorldError::RoomNotFound(id))
    }
}

// ---------------------------------------------------------------------------
// Frozen map
// ---------------------------------------------------------------------------

/// The finished mansion. Read-only for its whole lifetime.
#[derive(Debug, Clone)]
pub struct MansionMap {
    rooms: Vec<Room>,
    root: RoomId,
}

impl MansionMap {
    /// The room where exploration starts.
    pub const fn root(&self) -> RoomId {
        self.root
    }

    /// Look up a room by id.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    /// Display name of a room.
    pub fn name(&self, id: RoomId) -> Option<&str> {
        self.room(id).map(Room::name)
    }

    /// Child of `id` in the given direction.
    pub fn child(&self, id: RoomId, direction: Direction) -> Option<RoomId> {
        self.room(id).and_then(|room| room.child(direction))
    }

    /// Left child of `id`.
    pub fn left(&self, id: RoomId) -> Option<RoomId> {
        self.child(id, Direction::Left)
    }

    /// Right child of `id`.
    pub fn right(&self, id: RoomId) -> Option<RoomId> {
        self.child(id, Direction::Right)
    }

    /// Whether `id` has no children. Unknown ids count as leaves.
    pub fn is_leaf(&self, id: RoomId) -> bool {
        self.room(id).is_none_or(Room::is_leaf)
    }

    /// First room carrying exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<RoomId> {
        self.rooms()
            .find(|(_, room)| room.name == name)
            .map(|(id, _)| id)
    }

    /// Iterate over every room with its id.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(index, room)| (RoomId(index), room))
    }

    /// Number of rooms.
    pub const fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the map has no rooms. A built map always holds its root.
    pub const fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
