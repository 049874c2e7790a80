//! Fixed-width ASCII progress bar of the chase.
use crate::constants::{MAP_WIDTH, TOTAL_DISTANCE};
use crate::numbers::floor_f64_to_u32;
use crate::state::GameState;

const TRACK: char = '-';
const PLAYER: char = 'P';
const OFFICERS: char = 'O';
const COLLISION: char = 'X';

#[allow(clippy::cast_possible_truncation)]
const LAST_CELL: u32 = MAP_WIDTH as u32 - 1;

fn cell_for(km: f64) -> usize {
    let last = MAP_WIDTH - 1;
    let fraction = (km / f64::from(TOTAL_DISTANCE)).clamp(0.0, 1.0);
    let scaled = floor_f64_to_u32(fraction * f64::from(LAST_CELL));
    usize::try_from(scaled).map_or(last, |cell| cell.min(last))
}

/// Cells occupied by the player and the officers.
#[must_use]
pub fn marker_cells(state: &GameState) -> (usize, usize) {
    let player_km = f64::from(state.player.distance);
    let officers_km = player_km - state.officers.distance_behind;
    (cell_for(player_km), cell_for(officers_km))
}

/// Render `[----P---O---] 57/200 km`, or an `X` when both share a cell.
#[must_use]
pub fn progress_bar(state: &GameState) -> String {
    let mut bar = vec![TRACK; MAP_WIDTH];
    let (player_cell, officers_cell) = marker_cells(state);
    if player_cell == officers_cell {
        bar[player_cell] = COLLISION;
    } else {
        bar[player_cell] = PLAYER;
        bar[officers_cell] = OFFICERS;
    }
    let track: String = bar.into_iter().collect();
    format!("[{track}] {}/{TOTAL_DISTANCE} km", state.player.distance)
}
