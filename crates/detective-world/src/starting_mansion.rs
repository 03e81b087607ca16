//! Default mansion and case file for Detective Quest.
//!
//! Seven rooms in three levels: the entrance hall opens onto the living
//! room and the kitchen, and each of those opens onto two dead-end rooms.
//! The kitchen and three of the dead ends hold evidence.

use crate::case_file::{CaseFile, EvidenceEntry};
use crate::error::WorldError;
use crate::mansion::{MansionBuilder, MansionMap, RoomId};

/// Entrance hall, the root.
pub const ENTRANCE_HALL: &str = "Hall de Entrada";
/// Living room, left of the hall.
pub const LIVING_ROOM: &str = "Sala de Estar";
/// Kitchen, right of the hall.
pub const KITCHEN: &str = "Cozinha";
/// Library, left of the living room.
pub const LIBRARY: &str = "Biblioteca";
/// Garden, right of the living room.
pub const GARDEN: &str = "Jardim";
/// Pantry, left of the kitchen.
pub const PANTRY: &str = "Despensa";
/// Garage, right of the kitchen.
pub const GARAGE: &str = "Garagem";

/// Identifiers for every starting room, returned alongside the map so
/// callers can refer to specific rooms.
#[derive(Debug, Clone, Copy)]
pub struct StartingRoomIds {
    /// Entrance hall (root).
    pub entrance_hall: RoomId,
    /// Living room.
    pub living_room: RoomId,
    /// Kitchen.
    pub kitchen: RoomId,
    /// Library (dead end).
    pub library: RoomId,
    /// Garden (dead end).
    pub garden: RoomId,
    /// Pantry (dead end).
    pub pantry: RoomId,
    /// Garage (dead end).
    pub garage: RoomId,
}

/// Build the default seven-room mansion.
///
/// # Errors
///
/// Returns [`WorldError`] only if memory for the rooms cannot be reserved.
pub fn create_starting_mansion() -> Result<(MansionMap, StartingRoomIds), WorldError> {
    let mut builder = MansionBuilder::new();

    let ids = StartingRoomIds {
        entrance_hall: builder.create_room(ENTRANCE_HALL)?,
        living_room: builder.create_room(LIVING_ROOM)?,
        kitchen: builder.create_room(KITCHEN)?,
        library: builder.create_room(LIBRARY)?,
        garden: builder.create_room(GARDEN)?,
        pantry: builder.create_room(PANTRY)?,
        garage: builder.create_room(GARAGE)?,
    };

    builder.connect(ids.entrance_hall, Some(ids.living_room), Some(ids.kitchen))?;
    builder.connect(ids.living_room, Some(ids.library), Some(ids.garden))?;
    builder.connect(ids.kitchen, Some(ids.pantry), Some(ids.garage))?;

    let map = builder.build(ids.entrance_hall)?;
    Ok((map, ids))
}

/// Rows of the default case file.
pub fn starting_evidence() -> Vec<EvidenceEntry> {
    [
        (
            LIBRARY,
            "Paginas rasgadas de um diario na Biblioteca.",
            "Sr. Black",
        ),
        (KITCHEN, "Faca com manchas suspeitas na Cozinha.", "Sra. White"),
        (GARDEN, "Pegadas recentes no Jardim molhado.", "Coronel Mostarda"),
        (GARAGE, "Carro com motor quente na Garagem.", "Srta. Scarlet"),
    ]
    .into_iter()
    .map(|(room, clue, suspect)| EvidenceEntry {
        room: room.to_owned(),
        clue: clue.to_owned(),
        suspect: suspect.to_owned(),
    })
    .collect()
}

/// The default case file.
///
/// # Errors
///
/// Never fails for the built-in rows; the signature matches
/// [`CaseFile::from_entries`].
pub fn starting_case_file() -> Result<CaseFile, WorldError> {
    CaseFile::from_entries(starting_evidence())
}
