use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Ready -> InProgress
/// - Ready -> Won
/// - Ready -> Lost
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// No move made yet
    Ready,
    InProgress,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal,
    ToggleFlag,
}

/// A player action aimed at a 0-indexed `(row, column)` cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub coords: Coord2,
    pub action: Action,
}

impl Move {
    pub const fn reveal(coords: Coord2) -> Self {
        Self {
            coords,
            action: Action::Reveal,
        }
    }

    pub const fn toggle_flag(coords: Coord2) -> Self {
        Self {
            coords,
            action: Action::ToggleFlag,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue,
    Won,
    Lost,
}

impl MoveOutcome {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Interprets moves against the truth board and the player board.
///
/// Mines are placed lazily on the first reveal, keeping that cell free.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayEngine {
    config: GameConfig,
    seed: u64,
    mine_layout: Option<MineLayout>,
    board: Array2<CellView>,
    state: EngineState,
    triggered_mine: Option<Coord2>,
}

impl PlayEngine {
    /// New game whose minefield is generated from `seed` on the first reveal.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            seed,
            mine_layout: None,
            board: Array2::default(config.size.to_nd_index()),
            state: Default::default(),
            triggered_mine: None,
        })
    }

    /// New game over a known minefield, the first reveal is not protected.
    pub fn from_layout(mine_layout: MineLayout) -> Result<Self> {
        let config = mine_layout.game_config().validate()?;
        Ok(Self {
            config,
            seed: 0,
            board: Array2::default(config.size.to_nd_index()),
            mine_layout: Some(mine_layout),
            state: Default::default(),
            triggered_mine: None,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    /// Truth board, `None` until the first reveal placed the mines.
    pub fn mine_layout(&self) -> Option<&MineLayout> {
        self.mine_layout.as_ref()
    }

    pub fn board(&self) -> &Array2<CellView> {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.board[coords.to_nd_index()]
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn revealed_count(&self) -> CellCount {
        revealed_count(&self.board)
    }

    pub fn flagged_count(&self) -> CellCount {
        flagged_count(&self.board)
    }

    /// Mines not accounted for by flags, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.flagged_count() as isize)
    }

    pub fn apply(&mut self, mv: Move) -> Result<MoveOutcome> {
        match mv.action {
            Action::Reveal => self.reveal(mv.coords),
            Action::ToggleFlag => self.toggle_flag(mv.coords),
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let cell = &mut self.board[coords.to_nd_index()];
        match *cell {
            CellView::Hidden => *cell = CellView::Flagged,
            CellView::Flagged => *cell = CellView::Hidden,
            CellView::Revealed(_) => log::debug!("Ignoring flag on revealed cell {:?}", coords),
        }

        Ok(self.finish_move())
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let view = self.board[coords.to_nd_index()];
        if view != CellView::Hidden {
            log::debug!("Ignoring reveal on {:?} cell {:?}", view, coords);
            return Ok(self.finish_move());
        }

        let layout = match self.mine_layout {
            Some(ref layout) => layout,
            None => {
                let layout = RandomMinefieldGenerator::new(self.seed, coords).generate(self.config)?;
                &*self.mine_layout.insert(layout)
            }
        };

        match layout[coords] {
            CellContent::Mine => {
                for mine in layout.mine_locations() {
                    self.board[mine.to_nd_index()] = CellView::Revealed(CellContent::Mine);
                }
                self.triggered_mine = Some(coords);
                self.state = EngineState::Lost;
                log::debug!("Stepped on mine at {:?}", coords);
                return Ok(MoveOutcome::Lost);
            }
            CellContent::Empty => {
                let opened = flood_reveal(layout, &mut self.board, coords);
                log::debug!("Flood fill from {:?} opened {} cells", coords, opened);
            }
            content @ CellContent::Hint(_) => {
                self.board[coords.to_nd_index()] = CellView::Revealed(content);
                log::debug!("Revealed {:?} at {:?}", content, coords);
            }
        }

        Ok(self.finish_move())
    }

    /// Re-evaluates the win condition after a move that did not hit a mine.
    fn finish_move(&mut self) -> MoveOutcome {
        if is_won(&self.board, self.config) {
            self.state = EngineState::Won;
            log::debug!("All {} safe cells revealed", self.config.safe_cell_count());
            MoveOutcome::Won
        } else {
            if self.state.is_ready() {
                self.state = EngineState::InProgress;
            }
            MoveOutcome::Continue
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
