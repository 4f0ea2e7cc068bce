//! Board Grid
//!
//! The logical field grid, the rooms carved out of it, the weapons, and a
//! sparse occupancy map of where suspects stand.
//!
//! The grid itself is never overwritten by suspect markers: the field under
//! a suspect is always `field_at(position)`. Only [`Board::cell_at`] and
//! [`Board::render`] overlay [`Field::Occupied`] on taken corridor cells.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Serialize, Deserialize};
use tracing::{debug, warn};

use crate::core::position::{Direction, Position};
use crate::core::rng::RandomSource;
use crate::error::{GameError, GameResult};
use crate::game::field::Field;
use crate::game::room::{Room, RoomId, Teleport};
use crate::game::suspect::{SuspectName, Weapon};

/// A secret passage as written in a board definition: from a teleport cell
/// to an arrival cell. Rooms are resolved from the grid.
pub type PassageSpec = (Position, Position);

/// Highest room id with a map token (`z`).
pub const MAX_ROOM_ID: u8 = 35;

/// The game board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Logical fields, row-major
    fields: Vec<Vec<Field>>,
    rows: usize,
    cols: usize,

    /// Rooms with their cells, occupants, passages and weapons
    rooms: Vec<Room>,

    /// Weapons in play
    weapons: Vec<Weapon>,

    /// Who stands where (BTreeMap for deterministic iteration)
    occupancy: BTreeMap<Position, BTreeSet<SuspectName>>,
}

impl Board {
    /// Build a board from a field grid, room definitions, passages and weapons.
    ///
    /// Room cells are assigned from the grid: interior cells by their id,
    /// doors to the room one step beyond them in their tag direction, and
    /// teleport cells to an orthogonally adjacent interior.
    pub fn new(
        fields: Vec<Vec<Field>>,
        rooms: Vec<Room>,
        passages: &[PassageSpec],
        weapons: Vec<Weapon>,
    ) -> GameResult<Self> {
        let rows = fields.len();
        let cols = fields.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidMap("board is empty".into()));
        }
        if let Some(row) = fields.iter().position(|r| r.len() != cols) {
            return Err(GameError::InvalidMap(format!(
                "row {} has {} columns, expected {}",
                row,
                fields[row].len(),
                cols
            )));
        }
        if fields.iter().flatten().any(|f| *f == Field::Occupied) {
            return Err(GameError::InvalidMap("occupied marker in logical grid".into()));
        }

        let mut ids = BTreeSet::new();
        for room in &rooms {
            if room.id.0 > MAX_ROOM_ID {
                return Err(GameError::InvalidMap(format!(
                    "{} has no map token (ids run up to {})",
                    room.id, MAX_ROOM_ID
                )));
            }
            if !ids.insert(room.id) {
                return Err(GameError::InvalidMap(format!("duplicate {}", room.id)));
            }
        }

        let mut board = Self {
            fields,
            rows,
            cols,
            rooms,
            weapons,
            occupancy: BTreeMap::new(),
        };
        board.assign_room_cells()?;
        board.link_passages(passages)?;
        Ok(board)
    }

    /// Build a board from map token rows (see [`Field::from_token`]).
    pub fn from_rows(
        rows: &[&str],
        rooms: Vec<Room>,
        passages: &[PassageSpec],
        weapons: Vec<Weapon>,
    ) -> GameResult<Self> {
        let mut fields = Vec::with_capacity(rows.len());
        for (row, line) in rows.iter().enumerate() {
            let parsed = line
                .chars()
                .enumerate()
                .map(|(col, token)| {
                    Field::from_token(token).ok_or_else(|| {
                        GameError::InvalidMap(format!("unknown token {token:?} at ({row}, {col})"))
                    })
                })
                .collect::<GameResult<Vec<Field>>>()?;
            fields.push(parsed);
        }
        Self::new(fields, rooms, passages, weapons)
    }

    // =========================================================================
    // GRID ACCESS
    // =========================================================================

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Logical field at a cell, `None` outside the grid.
    #[inline]
    pub fn field_at(&self, position: Position) -> Option<Field> {
        self.fields.get(position.row)?.get(position.col).copied()
    }

    /// Rendered field: taken corridor cells show as [`Field::Occupied`].
    pub fn cell_at(&self, position: Position) -> Option<Field> {
        let field = self.field_at(position)?;
        if field == Field::Corridor && self.is_taken(position) {
            Some(Field::Occupied)
        } else {
            Some(field)
        }
    }

    /// Overwrite a logical field and reassign room cells.
    ///
    /// Returns the previous field. Fails without changes if the new grid
    /// would be inconsistent, the cell is occupied, an occupied cell would
    /// change rooms, or a secret passage would no longer resolve.
    pub fn write_field_at(&mut self, position: Position, field: Field) -> GameResult<Field> {
        let previous = self.field_at(position).ok_or_else(|| {
            GameError::InvalidMap(format!("{position} is outside the board"))
        })?;
        if field == Field::Occupied {
            return Err(GameError::InvalidMap("occupied marker in logical grid".into()));
        }
        if self.occupants_at(position).next().is_some() {
            return Err(GameError::FieldTaken { position });
        }

        let owners: Vec<(Position, Option<RoomId>)> = self
            .occupancy
            .keys()
            .map(|&pos| (pos, self.room_at(pos).map(|r| r.id)))
            .collect();
        let passages: Vec<PassageSpec> = self
            .rooms
            .iter()
            .flat_map(|r| &r.teleports)
            .map(|t| (t.source_position, t.destination_position))
            .collect();
        let snapshot: Vec<(BTreeSet<Position>, Vec<Teleport>)> = self
            .rooms
            .iter()
            .map(|r| (r.positions.clone(), r.teleports.clone()))
            .collect();

        self.fields[position.row][position.col] = field;
        let result = self.assign_room_cells().and_then(|()| {
            self.check_owners(&owners)?;
            self.link_passages(&passages)
        });

        if let Err(err) = result {
            self.fields[position.row][position.col] = previous;
            for (room, (positions, teleports)) in self.rooms.iter_mut().zip(snapshot) {
                room.positions = positions;
                room.teleports = teleports;
            }
            return Err(err);
        }
        Ok(previous)
    }

    /// Token grid with occupied corridors as `P`, one line per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in 0..self.rows {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..self.cols {
                let cell = self.cell_at(Position::new(row, col)).unwrap_or(Field::Void);
                out.push(cell.token());
            }
        }
        out
    }

    // =========================================================================
    // ROOMS & WEAPONS
    // =========================================================================

    /// All rooms.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// All weapons in play.
    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    /// Room by id.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub(crate) fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == id)
    }

    /// Room owning a cell (interior, door or teleport).
    pub fn room_at(&self, position: Position) -> Option<&Room> {
        self.rooms.iter().find(|r| r.contains(position))
    }

    /// Room a weapon was placed in.
    pub fn weapon_room(&self, weapon: Weapon) -> Option<RoomId> {
        self.rooms
            .iter()
            .find(|r| r.weapons.contains(&weapon))
            .map(|r| r.id)
    }

    /// Place every weapon in its own uniformly chosen room.
    ///
    /// For each weapon, rooms are drawn until an empty one comes up, at most
    /// `max_attempts` draws per weapon. Fails without changes when weapons
    /// outnumber rooms or the draw budget runs out. Earlier placements are
    /// discarded on success.
    pub fn distribute_weapons<R: RandomSource>(
        &mut self,
        rng: &mut R,
        max_attempts: u32,
    ) -> GameResult<Vec<(Weapon, RoomId)>> {
        if self.rooms.is_empty() {
            return Err(GameError::Setup("no rooms to place weapons in".into()));
        }
        if self.weapons.len() > self.rooms.len() {
            return Err(GameError::Setup(format!(
                "{} weapons do not fit in {} rooms",
                self.weapons.len(),
                self.rooms.len()
            )));
        }

        let mut taken = vec![false; self.rooms.len()];
        let mut placements = Vec::with_capacity(self.weapons.len());

        for &weapon in &self.weapons {
            let mut attempts = 0;
            loop {
                if attempts >= max_attempts {
                    warn!("Gave up placing {} after {} draws", weapon, attempts);
                    return Err(GameError::Setup(format!(
                        "no free room found for {weapon} after {attempts} draws"
                    )));
                }
                attempts += 1;

                let idx = rng.uniform_int(0, self.rooms.len() - 1);
                if !taken[idx] {
                    taken[idx] = true;
                    placements.push((weapon, idx));
                    break;
                }
            }
        }

        for room in &mut self.rooms {
            room.weapons.clear();
        }
        let mut result = Vec::with_capacity(placements.len());
        for (weapon, idx) in placements {
            let room = &mut self.rooms[idx];
            room.weapons.push(weapon);
            debug!("Placed {} in {}", weapon, room.name);
            result.push((weapon, room.id));
        }
        Ok(result)
    }

    // =========================================================================
    // OCCUPANCY
    // =========================================================================

    /// Suspects standing on a cell.
    pub fn occupants_at(&self, position: Position) -> impl Iterator<Item = SuspectName> + '_ {
        self.occupancy.get(&position).into_iter().flatten().copied()
    }

    /// A corridor cell with someone on it. Room cells are shared and never taken.
    pub fn is_taken(&self, position: Position) -> bool {
        self.field_at(position) == Some(Field::Corridor)
            && self.occupancy.get(&position).is_some_and(|s| !s.is_empty())
    }

    /// All occupied cells in row-major order.
    pub fn occupancy(&self) -> impl Iterator<Item = (Position, SuspectName)> + '_ {
        self.occupancy
            .iter()
            .flat_map(|(pos, names)| names.iter().map(move |name| (*pos, *name)))
    }

    pub(crate) fn place(&mut self, suspect: SuspectName, position: Position) {
        self.occupancy.entry(position).or_default().insert(suspect);
    }

    pub(crate) fn vacate(&mut self, suspect: SuspectName, position: Position) {
        if let Some(names) = self.occupancy.get_mut(&position) {
            names.remove(&suspect);
            if names.is_empty() {
                self.occupancy.remove(&position);
            }
        }
    }

    // =========================================================================
    // CONSTRUCTION HELPERS
    // =========================================================================

    /// Recompute every room's cells from the grid.
    fn assign_room_cells(&mut self) -> GameResult<()> {
        let mut cells: BTreeMap<RoomId, BTreeSet<Position>> =
            self.rooms.iter().map(|r| (r.id, BTreeSet::new())).collect();

        for row in 0..self.rows {
            for col in 0..self.cols {
                let position = Position::new(row, col);
                let owner = match self.fields[row][col] {
                    Field::Room(id) => Some(id),
                    Field::Door(tag) => Some(self.door_room(position, tag)?),
                    Field::Teleport => Some(self.teleport_room(position)?),
                    Field::Corridor | Field::Void | Field::Occupied => None,
                };
                if let Some(id) = owner {
                    cells
                        .get_mut(&id)
                        .ok_or_else(|| {
                            GameError::InvalidMap(format!("{id} at {position} has no definition"))
                        })?
                        .insert(position);
                }
            }
        }

        for room in &mut self.rooms {
            room.positions = cells.remove(&room.id).unwrap_or_default();
        }
        Ok(())
    }

    /// Occupied cells must stay in the room their occupants are listed in.
    fn check_owners(&self, owners: &[(Position, Option<RoomId>)]) -> GameResult<()> {
        for &(position, before) in owners {
            let after = self.room_at(position).map(|r| r.id);
            if after != before {
                return Err(GameError::InvalidMap(format!(
                    "occupied cell {position} would change rooms"
                )));
            }
        }
        Ok(())
    }

    /// The room a door opens into: the interior one step past it.
    fn door_room(&self, door: Position, tag: Direction) -> GameResult<RoomId> {
        match door
            .step(tag, self.rows, self.cols)
            .and_then(|inner| self.field_at(inner))
        {
            Some(Field::Room(id)) => Ok(id),
            _ => Err(GameError::InvalidMap(format!(
                "door at {door} does not open {tag} into a room"
            ))),
        }
    }

    /// The single room whose interior touches a teleport cell.
    fn teleport_room(&self, teleport: Position) -> GameResult<RoomId> {
        let adjacent: BTreeSet<RoomId> = Direction::ALL
            .iter()
            .filter_map(|dir| teleport.step(*dir, self.rows, self.cols))
            .filter_map(|pos| match self.field_at(pos) {
                Some(Field::Room(id)) => Some(id),
                _ => None,
            })
            .collect();

        let mut ids = adjacent.into_iter();
        match (ids.next(), ids.next()) {
            (Some(id), None) => Ok(id),
            (None, _) => Err(GameError::InvalidMap(format!(
                "teleport at {teleport} is not inside a room"
            ))),
            (Some(first), Some(second)) => Err(GameError::InvalidMap(format!(
                "teleport at {teleport} touches both {first} and {second}"
            ))),
        }
    }

    fn link_passages(&mut self, passages: &[PassageSpec]) -> GameResult<()> {
        for room in &mut self.rooms {
            room.teleports.clear();
        }
        for &(source, destination) in passages {
            if self.field_at(source) != Some(Field::Teleport) {
                return Err(GameError::InvalidMap(format!(
                    "passage starts at {source}, which is not a teleport"
                )));
            }
            let source_room = self
                .room_at(source)
                .map(|r| r.id)
                .ok_or(GameError::RoomNotFound { position: source })?;
            let destination_room = self
                .room_at(destination)
                .map(|r| r.id)
                .ok_or(GameError::RoomNotFound { position: destination })?;

            if let Some(room) = self.room_mut(source_room) {
                room.teleports.push(Teleport {
                    source_room,
                    source_position: source,
                    destination_room,
                    destination_position: destination,
                });
            }
        }
        Ok(())
    }
}
