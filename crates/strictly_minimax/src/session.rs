//! Per-client game sessions.
//!
//! Each session owns an independent `GameState`. Nothing is shared
//! between sessions, and the manager is driven one request at a time
//! through `&mut self`.

use super::controller;
use super::error::SessionError;
use super::{GameMode, GameState};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Manages all game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: HashMap<SessionId, GameState>,
}

impl SessionManager {
    /// Creates an empty session manager.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating session manager");
        Self::default()
    }

    /// Creates a new game session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyExists` if the id is taken.
    #[instrument(skip(self))]
    pub fn create(&mut self, id: &str, mode: GameMode) -> Result<&GameState, SessionError> {
        if self.sessions.contains_key(id) {
            warn!(session_id = id, "Session already exists");
            return Err(SessionError::AlreadyExists(id.to_string()));
        }

        info!(session_id = id, "Created new session");
        let state = self
            .sessions
            .entry(id.to_string())
            .or_insert_with(|| controller::new_game(mode));
        Ok(&*state)
    }

    /// Gets a session by ID.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` for an unknown id.
    pub fn get(&self, id: &str) -> Result<&GameState, SessionError> {
        self.sessions
            .get(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// Plays a move in the session at `(row, col)`.
    ///
    /// The stored state only changes when the move is accepted.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` for an unknown id and
    /// `SessionError::Move` when the game rejects the move.
    #[instrument(skip(self))]
    pub fn play(&mut self, id: &str, row: usize, col: usize) -> Result<&GameState, SessionError> {
        let state = self.state_mut(id)?;
        let next = controller::play(state, row, col).map_err(|e| {
            warn!(session_id = id, row, col, error = %e, "Invalid move");
            SessionError::from(e)
        })?;
        *state = next;

        debug!(session_id = id, status = ?state.status(), "Move completed");
        Ok(&*state)
    }

    /// Restarts the session's game, keeping its mode.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` for an unknown id.
    #[instrument(skip(self))]
    pub fn reset(&mut self, id: &str) -> Result<&GameState, SessionError> {
        let state = self.state_mut(id)?;
        *state = controller::reset(state.mode());
        info!(session_id = id, "Session reset");
        Ok(&*state)
    }

    /// Switches the session's mode, which restarts its game.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` for an unknown id.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, id: &str, mode: GameMode) -> Result<&GameState, SessionError> {
        let state = self.state_mut(id)?;
        *state = controller::set_mode(state, mode);
        Ok(&*state)
    }

    /// Removes a session, returning its final state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` for an unknown id.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: &str) -> Result<GameState, SessionError> {
        let state = self
            .sessions
            .remove(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        info!(session_id = id, "Session removed");
        Ok(state)
    }

    /// Lists all active session IDs, sorted.
    pub fn list(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.sessions.keys().cloned().collect();
        ids.sort();
        ids
    }

    fn state_mut(&mut self, id: &str) -> Result<&mut GameState, SessionError> {
        self.sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }
}
