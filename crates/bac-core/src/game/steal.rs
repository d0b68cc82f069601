use super::match_state::MatchState;
use crate::model::card::Card;
use crate::model::player::Seat;
use crate::model::table::TableError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StealError {
    EmptySelection,
    Table(TableError),
    IllegalSteal,
}

impl fmt::Display for StealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StealError::EmptySelection => write!(f, "steal needs at least one table card"),
            StealError::Table(err) => write!(f, "{err}"),
            StealError::IllegalSteal => {
                write!(f, "selection is neither a pair nor a run continuation")
            }
        }
    }
}

impl std::error::Error for StealError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StealKind {
    /// Two equal-rank cards left on the table.
    Pair,
    /// The run the previous collector stopped short of taking.
    RunContinuation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StealOutcome {
    pub kind: StealKind,
    pub captured: usize,
    pub cleared_table: bool,
}

fn is_pair(selection: &[Card]) -> bool {
    selection.len() == 2 && selection[0].rank == selection[1].rank
}

/// Run continuation: the lowest selected card sits exactly one run-value
/// above what the last collect took, and the selection itself is contiguous.
fn continues_run(selection: &[Card], anchor: u8) -> bool {
    let mut sorted = selection.to_vec();
    sorted.sort_by_key(|card| card.run_value());
    if sorted[0].run_value() != anchor + 1 {
        return false;
    }
    sorted
        .windows(2)
        .all(|pair| pair[1].run_value() == pair[0].run_value() + 1)
}

impl MatchState {
    /// Out-of-turn capture of abandoned table cards ("fallo"). Any seat may
    /// attempt it; success consumes no turn and leaves round memory alone,
    /// a failure changes nothing at all.
    pub fn submit_steal(
        &mut self,
        seat: Seat,
        table_indices: &[usize],
    ) -> Result<StealOutcome, StealError> {
        if table_indices.is_empty() {
            return Err(StealError::EmptySelection);
        }
        let selection = self.table.select(table_indices).map_err(StealError::Table)?;

        let kind = if is_pair(&selection) {
            StealKind::Pair
        } else if self
            .memory
            .steal_run_anchor()
            .is_some_and(|anchor| continues_run(&selection, anchor))
        {
            StealKind::RunContinuation
        } else {
            return Err(StealError::IllegalSteal);
        };

        let taken = self
            .table
            .take_at_indices(table_indices)
            .map_err(StealError::Table)?;
        let captured = taken.len();
        self.players[seat.index()].pile.extend(taken);

        // A steal that empties the table pays the clear bonus like any
        // other capture. The rules leave this open; this engine pays it.
        let cleared_table = self.table.is_empty();
        if cleared_table {
            self.scores.award(seat.team(), 1);
        }

        Ok(StealOutcome {
            kind,
            captured,
            cleared_table,
        })
    }
}
