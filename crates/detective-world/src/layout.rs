//! Declarative mansion layouts.
//!
//! A [`MansionLayout`] describes a mansion by room names so it can be read
//! from configuration. [`MansionLayout::build`] resolves the names and
//! replays them through a [`MansionBuilder`], so a layout gets exactly the
//! same tree checks as hand-written construction code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::WorldError;
use crate::mansion::{MansionBuilder, MansionMap, RoomId};

/// A whole mansion described by room names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MansionLayout {
    /// Name of the room where exploration starts.
    pub root: String,
    /// Every room, each listed once.
    pub rooms: Vec<RoomLayout>,
}

/// One room and the names of its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomLayout {
    /// Display name, unique within the layout.
    pub name: String,
    /// Name of the left child.
    #[serde(default)]
    pub left: Option<String>,
    /// Name of the right child.
    #[serde(default)]
    pub right: Option<String>,
}

impl MansionLayout {
    /// Build the frozen map this layout describes.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateRoomName`] or
    /// [`WorldError::UnknownRoomName`] for naming problems, and any tree
    /// violation reported by [`MansionBuilder`].
    pub fn build(&self) -> Result<MansionMap, WorldError> {
        let mut builder = MansionBuilder::new();
        let mut ids: BTreeMap<&str, RoomId> = BTreeMap::new();

        for room in &self.rooms {
            if ids.contains_key(room.name.as_str()) {
                return Err(WorldError::DuplicateRoomName(room.name.clone()));
            }
            let id = builder.create_room(room.name.as_str())?;
            ids.insert(room.name.as_str(), id);
        }

        for room in &self.rooms {
            let id = resolve(&ids, &room.name)?;
            let left = room.left.as_deref().map(|name| resolve(&ids, name)).transpose()?;
            let right = room.right.as_deref().map(|name| resolve(&ids, name)).transpose()?;
            builder.connect(id, left, right)?;
        }

        let root = resolve(&ids, &self.root)?;
        let map = builder.build(root)?;
        debug!(rooms = map.len(), root = %self.root, "mansion layout built");
        Ok(map)
    }
}

fn resolve(ids: &BTreeMap<&str, RoomId>, name: &str) -> Result<RoomId, WorldError> {
    ids.get(name)
        .copied()
        .ok_or_else(|| WorldError::UnknownRoomName(name.to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn room(name: &str, left: Option<&str>, right: Option<&str>) -> RoomLayout {
        RoomLayout {
            name: name.to_owned(),
            left: left.map(str::to_owned),
            right: right.map(str::to_owned),
        }
    }

    #[test]
    fn builds_named_tree() {
        let layout = MansionLayout {
            root: "Porch".to_owned(),
            rooms: vec![
                room("Porch", Some("Attic"), Some("Cellar")),
                room("Attic", None, None),
                room("Cellar", None, Some("Vault")),
                room("Vault", None, None),
            ],
        };
        let map = layout.build().unwrap();
        let porch = map.root();
        assert_eq!(map.name(porch), Some("Porch"));
        let cellar = map.right(porch).unwrap();
        assert_eq!(map.name(cellar), Some("Cellar"));
        assert_eq!(map.left(cellar), None);
        assert_eq!(map.right(cellar).and_then(|id| map.name(id)), Some("Vault"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let layout = MansionLayout {
            root: "Porch".to_owned(),
            rooms: vec![room("Porch", None, None), room("Porch", None, None)],
        };
        assert!(matches!(
            layout.build().unwrap_err(),
            WorldError::DuplicateRoomName(name) if name == "Porch"
        ));
    }

    #[test]
    fn unknown_child_is_rejected() {
        let layout = MansionLayout {
            root: "Porch".to_owned(),
            rooms: vec![room("Porch", Some("Ghost"), None)],
        };
        assert!(matches!(
            layout.build().unwrap_err(),
            WorldError::UnknownRoomName(name) if name == "Ghost"
        ));
    }

    #[test]
    fn unknown_root_is_rejected() {
        let layout = MansionLayout {
            root: "Nowhere".to_owned(),
            rooms: vec![room("Porch", None, None)],
        };
        assert!(matches!(layout.build().unwrap_err(), WorldError::UnknownRoomName(_)));
    }

    #[test]
    fn shared_child_is_rejected() {
        let layout = MansionLayout {
            root: "Porch".to_owned(),
            rooms: vec![
                room("Porch", Some("Attic"), Some("Cellar")),
                room("Attic", Some("Vault"), None),
                room("Cellar", Some("Vault"), None),
                room("Vault", None, None),
            ],
        };
        assert!(matches!(
            layout.build().unwrap_err(),
            WorldError::AlreadyAttached { .. }
        ));
    }
}
