use anyhow::anyhow;

use crate::{
    board::Board,
    common::{GameError, GameResult, InputError, PlayerId},
    config::{ConfigError, GameConfig},
    input::{parse_column, InputSource},
    render::{PlayerMarks, Renderer},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Absorbing: no further moves are accepted.
    Finished(GameResult),
}

/// Turn sequencing over an exclusively owned [`Board`].
#[derive(Debug, Clone)]
pub struct Game {
    marks: PlayerMarks,
    current_player: PlayerId,
    board: Board,
    status: GameStatus,
}

impl Game {
    /// Start a game on `board`. A board that is already won or full gives a
    /// game that is finished from the start.
    pub fn new(marks: PlayerMarks, first_player: PlayerId, board: Board) -> Self {
        let status = match board.outcome() {
            GameResult::InProgress => GameStatus::InProgress,
            result => GameStatus::Finished(result),
        };
        Self {
            marks,
            current_player: first_player,
            board,
            status,
        }
    }

    /// Build a game from validated construction parameters.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = match &config.grid {
            Some(notation) => {
                let board = Board::from_notation(config.height, notation)?;
                if board.width() != config.width {
                    log::warn!(
                        "seeded grid has {} columns, overriding width {}",
                        board.width(),
                        config.width
                    );
                }
                board
            }
            None => Board::new(config.width, config.height)?,
        };
        let first = PlayerId::new(config.first_player)
            .ok_or(ConfigError::InvalidPlayer(config.first_player))?;
        Ok(Self::new(config.player_marks()?, first, board))
    }

    pub fn marks(&self) -> &PlayerMarks {
        &self.marks
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Hand the turn to the other player.
    pub fn rotate_players(&mut self) {
        self.current_player = self.current_player.other();
    }

    /// Render the current board.
    pub fn display_board<R: Renderer + ?Sized>(&self, renderer: &mut R) -> anyhow::Result<()> {
        renderer.render(&self.board.display_rows(), &self.marks)
    }

    /// Prompt for a column and keep reading until a line names a playable
    /// column. Every rejected line is reported to `renderer`; there is no
    /// retry limit. End of input yields [`GameError::EndOfInput`].
    pub fn player_input<I, R>(&self, input: &mut I, renderer: &mut R) -> anyhow::Result<usize>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        renderer.prompt(self.current_player)?;
        loop {
            let line = input
                .read_line()?
                .ok_or_else(|| anyhow!(GameError::EndOfInput))?;
            let err = match parse_column(&line) {
                Ok(col) if !self.board.is_invalid_column(col) => return Ok(col),
                Ok(col) => InputError::InvalidColumn(col),
                Err(e) => e,
            };
            log::debug!("rejected input from player {}: {}", self.current_player, err);
            renderer.input_error(&err)?;
        }
    }

    /// Place a piece for the current player without any I/O. The turn
    /// passes only when the move does not end the game.
    pub fn apply_move(&mut self, col: usize) -> Result<GameStatus, GameError> {
        if matches!(self.status, GameStatus::Finished(_)) {
            return Err(GameError::GameOver);
        }
        if self.board.is_invalid_column(col) {
            return Err(GameError::InvalidColumn(col));
        }
        self.board.place(col, self.current_player);
        match self.board.outcome() {
            GameResult::InProgress => self.rotate_players(),
            result => {
                log::info!("game finished: {:?}", result);
                self.status = GameStatus::Finished(result);
            }
        }
        Ok(self.status)
    }

    /// One full turn: render, read a valid column, place, render again.
    pub fn play_turn<I, R>(&mut self, input: &mut I, renderer: &mut R) -> anyhow::Result<GameStatus>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        if matches!(self.status, GameStatus::Finished(_)) {
            return Err(anyhow!(GameError::GameOver));
        }
        self.display_board(renderer)?;
        let col = self.player_input(input, renderer)?;
        let status = self.apply_move(col).map_err(|e| anyhow!(e))?;
        self.display_board(renderer)?;
        Ok(status)
    }

    /// Play turns until the game finishes, then announce the result.
    pub fn run<I, R>(&mut self, input: &mut I, renderer: &mut R) -> anyhow::Result<GameResult>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        renderer.introduce()?;
        if matches!(self.status, GameStatus::Finished(_)) {
            self.display_board(renderer)?;
        }
        let result = loop {
            match self.status {
                GameStatus::Finished(result) => break result,
                GameStatus::InProgress => {
                    self.play_turn(input, renderer)?;
                }
            }
        };
        renderer.announce(result)?;
        Ok(result)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(PlayerMarks::default(), PlayerId::FIRST, Board::default())
    }
}
