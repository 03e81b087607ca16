//! Player-facing text.
//!
//! Every line the game prints goes through this module, so the driver only
//! decides *what* to say. The wording is Portuguese, matching the room,
//! clue and suspect names of the built-in case.

use std::io::{self, Write};

use detective_ledger::{ClueIndex, SuspectLedger};
use detective_world::{Direction, MansionMap, RoomId};

use crate::command::{KEY_CLUES, KEY_EXIT, KEY_LEFT, KEY_RIGHT, KEY_SUSPECTS};
use crate::notebook::Notebook;

/// Notice for a move toward a missing left room.
pub const NO_ROOM_LEFT: &str = "Nao ha sala a esquerda daqui.";
/// Notice for a move toward a missing right room.
pub const NO_ROOM_RIGHT: &str = "Nao ha sala a direita daqui.";
/// Notice for an unrecognized key.
pub const INVALID_COMMAND: &str = "Comando invalido. Use e/d/p/u/s.";
/// First line of the dead-end notice.
pub const DEAD_END: &str = "Voce chegou a um comodo sem mais caminhos";
/// Printed when the player leaves.
pub const FAREWELL: &str = "Voce decidiu encerrar a exploracao.";
/// Printed by the clue review when nothing was found.
pub const NO_CLUES: &str = "Nenhuma pista coletada ate o momento.";
/// Printed by the suspect review when nobody was cited.
pub const NO_SUSPECTS: &str = "Nenhum suspeito associado a pistas ainda.";
/// Printed by the final summary when nobody was cited.
pub const NO_PRIME_SUSPECT: &str = "Nenhum suspeito foi associado a pistas.";
/// Prefix of the final verdict line.
pub const PRIME_SUSPECT: &str = ">>> SUSPEITO MAIS PROVAVEL:";

/// Title and command legend, printed once per session.
pub fn write_banner<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== DETECTIVE QUEST - EXPLORACAO DA MANSAO ===")?;
    writeln!(out, "Comandos:")?;
    writeln!(out, "  {KEY_LEFT} - ir para a esquerda")?;
    writeln!(out, "  {KEY_RIGHT} - ir para a direita")?;
    writeln!(out, "  {KEY_CLUES} - revisar pistas coletadas")?;
    writeln!(out, "  {KEY_SUSPECTS} - listar suspeitos e pistas")?;
    writeln!(out, "  {KEY_EXIT} - sair da mansao")?;
    writeln!(out)
}

/// "You are in" header for the current room.
pub fn write_location<W: Write + ?Sized>(
    out: &mut W,
    map: &MansionMap,
    room: RoomId,
) -> io::Result<()> {
    writeln!(out, "Voce esta em: {}", map.name(room).unwrap_or_default())
}

/// Notice that the room held evidence.
pub fn write_discovery<W: Write + ?Sized>(out: &mut W, room_name: &str) -> io::Result<()> {
    writeln!(out, "Voce encontrou uma pista em {room_name}!")
}

/// Available paths, other options, and the prompt.
pub fn write_menu<W: Write + ?Sized>(
    out: &mut W,
    map: &MansionMap,
    room: RoomId,
) -> io::Result<()> {
    writeln!(out, "Caminhos disponiveis:")?;
    for (key, direction, side) in [
        (KEY_LEFT, Direction::Left, "esquerda"),
        (KEY_RIGHT, Direction::Right, "direita"),
    ] {
        match map.child(room, direction).and_then(|child| map.name(child)) {
            Some(name) => writeln!(out, "  {key} - Ir para a {side} ({name})")?,
            None => writeln!(out, "  {key} - (nenhuma sala a {side})")?,
        }
    }
    writeln!(out, "Outras opcoes:")?;
    writeln!(out, "  {KEY_CLUES} - Revisar pistas coletadas")?;
    writeln!(out, "  {KEY_SUSPECTS} - Ver suspeitos e pistas")?;
    writeln!(out, "  {KEY_EXIT} - Sair da mansao")?;
    write!(
        out,
        "Escolha ({KEY_LEFT}/{KEY_RIGHT}/{KEY_CLUES}/{KEY_SUSPECTS}/{KEY_EXIT}): "
    )
}

/// Notice for a move toward a missing child.
pub fn write_no_path<W: Write + ?Sized>(out: &mut W, direction: Direction) -> io::Result<()> {
    let notice = match direction {
        Direction::Left => NO_ROOM_LEFT,
        Direction::Right => NO_ROOM_RIGHT,
    };
    writeln!(out, "{notice}")?;
    writeln!(out)
}

/// Notice for an unrecognized key.
pub fn write_invalid_command<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{INVALID_COMMAND}")?;
    writeln!(out)
}

/// Notice printed while standing in a room without children.
pub fn write_dead_end<W: Write + ?Sized>(out: &mut W, room_name: &str) -> io::Result<()> {
    writeln!(out, "{DEAD_END} ({room_name}).")?;
    writeln!(
        out,
        "Use '{KEY_CLUES}' para revisar as pistas, '{KEY_SUSPECTS}' para ver suspeitos ou '{KEY_EXIT}' para sair."
    )?;
    writeln!(out)
}

/// Goodbye line for an explicit exit.
pub fn write_farewell<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{FAREWELL}")
}

/// Every clue, in lexicographic order.
pub fn write_clues<W: Write + ?Sized>(out: &mut W, clues: &ClueIndex) -> io::Result<()> {
    writeln!(out, "--- PISTAS COLETADAS ---")?;
    if clues.is_empty() {
        writeln!(out, "{NO_CLUES}")?;
        return writeln!(out);
    }
    for clue in clues {
        writeln!(out, "- {clue}")?;
    }
    writeln!(out, "------------------------")?;
    writeln!(out)
}

/// Every suspect with its count and clues, in ledger order.
pub fn write_suspects<W: Write + ?Sized>(
    out: &mut W,
    suspects: &SuspectLedger,
) -> io::Result<()> {
    if suspects.is_empty() {
        writeln!(out, "{NO_SUSPECTS}")?;
        return writeln!(out);
    }
    for suspect in suspects {
        writeln!(
            out,
            "Suspeito: {} ({} pista(s))",
            suspect.name(),
            suspect.citation_count()
        )?;
        for clue in suspect.clues() {
            writeln!(out, "  - {clue}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// End-of-session recap: clues, suspects, and the prime suspect.
pub fn write_final_summary<W: Write + ?Sized>(
    out: &mut W,
    notebook: &Notebook,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== RESUMO DAS PISTAS COLETADAS ===")?;
    write_clues(out, notebook.clues())?;

    writeln!(out)?;
    writeln!(out, "=== SUSPEITOS E SUAS PISTAS ===")?;
    write_suspects(out, notebook.suspects())?;

    match notebook.suspects().most_implicated() {
        Some(suspect) => writeln!(
            out,
            "\n{PRIME_SUSPECT} {} ({} pista(s)) <<<",
            suspect.name(),
            suspect.citation_count()
        ),
        None => writeln!(out, "\n{NO_PRIME_SUSPECT}"),
    }
}
