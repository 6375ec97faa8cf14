//! Traits describing the external collaborators of the spell core.
//!
//! Oracles expose read-mostly services (board projection, presentation spawns,
//! spell lookup). The [`SpellEnv`] aggregate bundles them so components receive
//! their collaborators explicitly instead of looking them up globally. Mutable
//! unit state is passed separately through [`UnitProvider`].
mod board;
mod error;
mod presentation;
mod rng;
mod spells;
mod units;

pub use board::BoardOracle;
pub use error::OracleError;
pub use presentation::{EffectHandle, PresentationError, PresentationOracle};
pub use rng::{PcgRng, RandomSource};
pub use spells::SpellOracle;
pub use units::{UnitError, UnitProvider};

/// Aggregates the oracles required by the cast engine and the enchantment
/// controller.
#[derive(Clone, Copy)]
pub struct SpellEnv<'a> {
    board: Option<&'a dyn BoardOracle>,
    presentation: Option<&'a dyn PresentationOracle>,
    spells: Option<&'a dyn SpellOracle>,
}

impl<'a> SpellEnv<'a> {
    pub fn new(
        board: Option<&'a dyn BoardOracle>,
        presentation: Option<&'a dyn PresentationOracle>,
        spells: Option<&'a dyn SpellOracle>,
    ) -> Self {
        Self {
            board,
            presentation,
            spells,
        }
    }

    pub fn with_all(
        board: &'a dyn BoardOracle,
        presentation: &'a dyn PresentationOracle,
        spells: &'a dyn SpellOracle,
    ) -> Self {
        Self::new(Some(board), Some(presentation), Some(spells))
    }

    pub fn empty() -> Self {
        Self::new(None, None, None)
    }

    pub fn with_board(mut self, board: &'a dyn BoardOracle) -> Self {
        self.board = Some(board);
        self
    }

    pub fn with_presentation(mut self, presentation: &'a dyn PresentationOracle) -> Self {
        self.presentation = Some(presentation);
        self
    }

    pub fn with_spells(mut self, spells: &'a dyn SpellOracle) -> Self {
        self.spells = Some(spells);
        self
    }

    /// Returns the BoardOracle, or an error if not available.
    pub fn board(&self) -> Result<&'a dyn BoardOracle, OracleError> {
        self.board.ok_or(OracleError::BoardNotAvailable)
    }

    /// Returns the PresentationOracle, or an error if not available.
    ///
    /// Presentation is optional for every operation; callers that get an
    /// error here simply skip their side effects.
    pub fn presentation(&self) -> Result<&'a dyn PresentationOracle, OracleError> {
        self.presentation
            .ok_or(OracleError::PresentationNotAvailable)
    }

    /// Returns the SpellOracle, or an error if not available.
    pub fn spells(&self) -> Result<&'a dyn SpellOracle, OracleError> {
        self.spells.ok_or(OracleError::SpellsNotAvailable)
    }
}

impl core::fmt::Debug for SpellEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpellEnv")
            .field("board", &self.board.is_some())
            .field("presentation", &self.presentation.is_some())
            .field("spells", &self.spells.is_some())
            .finish()
    }
}
