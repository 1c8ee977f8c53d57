//! The game session state machine.
//!
//! A [`Session`] owns the board and both players. It is the only thing
//! that mutates the board: it checks the phase, places the mover's
//! symbol, evaluates the rules, and then tells its observers what
//! happened.

use crate::events::Observers;
use crate::rules;
use crate::{
    Board, GamePhase, MoveResult, Outcome, Player, SessionError, SessionEvent, SessionObserver,
    Snapshot, SubscriptionId, Symbol,
};
use tracing::{debug, info, instrument, warn};

/// One game between two players, replayable through [`Session::reset`].
#[derive(Debug, Default)]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) players: Option<[Player; 2]>,
    pub(crate) active: usize,
    pub(crate) turn_count: u32,
    pub(crate) phase: GamePhase,
    observers: Observers,
}

impl Session {
    /// Creates a session with an empty board and no players.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers both players and begins a fresh game.
    ///
    /// Whoever holds X moves first. Calling `start` on a session that
    /// already has players replaces them.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidPlayers`] if a name is blank or
    /// both players hold the same symbol. The session is unchanged.
    #[instrument(skip_all, fields(player1 = %player1, player2 = %player2))]
    pub fn start(&mut self, player1: Player, player2: Player) -> Result<(), SessionError> {
        validate_players(&player1, &player2).inspect_err(|e| {
            warn!(error = %e, "Rejected players");
        })?;

        self.players = Some([player1.clone(), player2.clone()]);
        self.begin();

        info!(observers = self.observers.len(), "Game started");
        self.observers.notify(&SessionEvent::Started {
            players: (player1, player2),
        });
        Ok(())
    }

    /// Places the active player's symbol at `(row, col)`.
    ///
    /// On success the turn count goes up by one and the phase reflects a
    /// win, a tie, or the next player's turn. A win leaves the winner as
    /// the active player.
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameNotInProgress`] outside of play.
    /// - [`SessionError::Board`] for out-of-range or occupied cells.
    ///
    /// Nothing changes when an error is returned.
    #[instrument(skip(self), fields(turn = self.turn_count))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveResult, SessionError> {
        if !self.phase.is_in_progress() {
            warn!(phase = ?self.phase, "Move attempted outside of play");
            return Err(SessionError::GameNotInProgress);
        }
        let Some(players) = &self.players else {
            return Err(SessionError::GameNotInProgress);
        };
        let mover = players[self.active].clone();

        self.board.set(row, col, mover.symbol()).inspect_err(|e| {
            warn!(error = %e, "Move rejected by board");
        })?;
        self.turn_count += 1;

        self.phase = if rules::completes_triple(&self.board, mover.symbol()) {
            GamePhase::Finished(Outcome::Win(mover.clone()))
        } else if rules::is_tie(self.turn_count) {
            GamePhase::Finished(Outcome::Tie)
        } else {
            self.active = 1 - self.active;
            GamePhase::InProgress
        };

        #[cfg(debug_assertions)]
        self.assert_invariants();

        let result = MoveResult {
            row,
            col,
            mover,
            phase: self.phase.clone(),
            turn_count: self.turn_count,
        };
        info!(
            player = %result.mover,
            phase = ?result.phase,
            "Move applied"
        );

        self.observers
            .notify(&SessionEvent::MoveApplied(result.clone()));
        if let GamePhase::Finished(outcome) = &self.phase {
            info!(%outcome, "Game finished");
            self.observers
                .notify(&SessionEvent::Finished(outcome.clone()));
        }
        Ok(result)
    }

    /// Clears the board and starts again with the same players.
    ///
    /// Without registered players the session stays not started.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if self.players.is_some() {
            self.begin();
            info!("Game reset");
        } else {
            self.board.reset();
            self.turn_count = 0;
            self.active = 0;
            self.phase = GamePhase::NotStarted;
            debug!("Reset before start; still waiting for players");
        }
        self.observers.notify(&SessionEvent::Reset);
    }

    /// Returns the outcome of a finished game.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameNotFinished`] unless the game is over.
    pub fn get_outcome(&self) -> Result<Outcome, SessionError> {
        self.phase
            .outcome()
            .cloned()
            .ok_or(SessionError::GameNotFinished)
    }

    /// Returns the outcome if the game is over.
    pub fn current_outcome(&self) -> Option<&Outcome> {
        self.phase.outcome()
    }

    /// Returns the current phase.
    pub fn current_phase(&self) -> &GamePhase {
        &self.phase
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns an owned copy of the board for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    /// Successful moves since the last start or reset.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Both players, in the order given to `start`.
    pub fn players(&self) -> Option<(&Player, &Player)> {
        self.players.as_ref().map(|[a, b]| (a, b))
    }

    /// The player whose turn it is, or the winner once the game is won.
    pub fn active_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[self.active])
    }

    /// Registers an observer for future events.
    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Removes an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn begin(&mut self) {
        self.board.reset();
        self.turn_count = 0;
        self.active = self
            .players
            .as_ref()
            .and_then(|players| players.iter().position(|p| p.symbol() == Symbol::X))
            .unwrap_or(0);
        self.phase = GamePhase::InProgress;
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use crate::invariants::{InvariantSet, SessionInvariants};

        if let Err(violations) = SessionInvariants::check_all(self) {
            tracing::error!(?violations, "Session invariants violated");
            panic!("session invariants violated: {violations:?}");
        }
    }
}

fn validate_players(player1: &Player, player2: &Player) -> Result<(), SessionError> {
    if player1.name().trim().is_empty() || player2.name().trim().is_empty() {
        return Err(SessionError::InvalidPlayers(
            "player names must not be empty".to_string(),
        ));
    }
    if player1.symbol() == player2.symbol() {
        return Err(SessionError::InvalidPlayers(format!(
            "both players hold {}",
            player1.symbol()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, ErrorKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn players() -> (Player, Player) {
        (Player::new("P1", Symbol::X), Player::new("P2", Symbol::O))
    }

    fn started() -> Session {
        let (p1, p2) = players();
        let mut session = Session::new();
        session.start(p1, p2).unwrap();
        session
    }

    #[test]
    fn test_new_session_not_started() {
        let session = Session::new();
        assert_eq!(session.current_phase(), &GamePhase::NotStarted);
        assert_eq!(session.turn_count(), 0);
        assert!(session.active_player().is_none());
        assert!(session.players().is_none());
    }

    #[test]
    fn test_move_before_start_rejected() {
        let mut session = Session::new();
        let err = session.apply_move(0, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::GameNotInProgress);
        assert_eq!(session.snapshot(), Snapshot::default());
    }

    #[test]
    fn test_start_activates_x_holder() {
        let mut session = Session::new();
        session
            .start(Player::new("Olive", Symbol::O), Player::new("Xavier", Symbol::X))
            .unwrap();
        assert_eq!(session.active_player().map(Player::name), Some("Xavier"));
        assert!(session.current_phase().is_in_progress());
    }

    #[test]
    fn test_start_rejects_same_symbol() {
        let mut session = Session::new();
        let err = session
            .start(Player::new("A", Symbol::X), Player::new("B", Symbol::X))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPlayers);
        assert_eq!(session.current_phase(), &GamePhase::NotStarted);
    }

    #[test]
    fn test_start_rejects_blank_name() {
        let mut session = Session::new();
        let err = session
            .start(Player::new("  ", Symbol::X), Player::new("B", Symbol::O))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPlayers);
        let err = session
            .start(Player::new("A", Symbol::X), Player::new("", Symbol::O))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPlayers);
        assert!(session.players().is_none());
    }

    #[test]
    fn test_move_switches_player() {
        let mut session = started();
        let result = session.apply_move(1, 1).unwrap();
        assert_eq!(result.symbol(), Symbol::X);
        assert_eq!(result.turn_count, 1);
        assert_eq!(result.phase, GamePhase::InProgress);
        assert_eq!(session.active_player().map(Player::symbol), Some(Symbol::O));
        assert_eq!(session.board().get(1, 1), Ok(Cell::Occupied(Symbol::X)));
    }

    #[test]
    fn test_win_keeps_winner_active() {
        let mut session = started();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
            session.apply_move(row, col).unwrap();
        }
        let result = session.apply_move(0, 2).unwrap();
        let (p1, _) = players();
        assert_eq!(result.outcome(), Some(&Outcome::Win(p1.clone())));
        assert_eq!(session.active_player(), Some(&p1));
        assert_eq!(session.turn_count(), 5);
    }

    #[test]
    fn test_move_after_finish_rejected() {
        let mut session = started();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            session.apply_move(row, col).unwrap();
        }
        let before = session.snapshot();
        let err = session.apply_move(2, 0).unwrap_err();
        assert_eq!(err, SessionError::GameNotInProgress);
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.turn_count(), 5);
    }

    #[test]
    fn test_outcome_before_finish() {
        let session = started();
        assert_eq!(session.get_outcome(), Err(SessionError::GameNotFinished));
        assert_eq!(session.current_outcome(), None);
    }

    #[test]
    fn test_reset_before_start_stays_not_started() {
        let mut session = Session::new();
        session.reset();
        assert_eq!(session.current_phase(), &GamePhase::NotStarted);
    }

    #[test]
    fn test_restart_replaces_players() {
        let mut session = started();
        session.apply_move(0, 0).unwrap();
        session
            .start(Player::new("Cy", Symbol::O), Player::new("Di", Symbol::X))
            .unwrap();
        assert_eq!(session.turn_count(), 0);
        assert_eq!(session.snapshot(), Snapshot::default());
        assert_eq!(session.active_player().map(Player::name), Some("Di"));
    }

    #[test]
    fn test_observers_see_events_in_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut session = Session::new();
        let sink = Rc::clone(&events);
        session.subscribe(Box::new(move |event: &SessionEvent| {
            sink.borrow_mut().push(event.clone())
        }));

        let (p1, p2) = players();
        session.start(p1.clone(), p2.clone()).unwrap();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            session.apply_move(row, col).unwrap();
        }
        // Rejected moves emit nothing.
        assert!(session.apply_move(0, 0).is_err());
        session.apply_move(0, 2).unwrap();
        session.reset();

        let events = events.borrow();
        assert_eq!(events.len(), 1 + 5 + 1 + 1);
        assert_eq!(events[0], SessionEvent::Started { players: (p1.clone(), p2) });
        assert!(matches!(events[5], SessionEvent::MoveApplied(ref r) if r.turn_count == 5));
        assert_eq!(events[6], SessionEvent::Finished(Outcome::Win(p1)));
        assert_eq!(events[7], SessionEvent::Reset);
    }

    #[test]
    fn test_rejected_start_keeps_running_game() {
        let count = Rc::new(RefCell::new(0));
        let mut session = started();
        session.apply_move(1, 1).unwrap();
        let counter = Rc::clone(&count);
        session.subscribe(Box::new(move |_: &SessionEvent| {
            *counter.borrow_mut() += 1
        }));

        let err = session
            .start(Player::new("Ann", Symbol::X), Player::new("Ben", Symbol::X))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPlayers);
        let err = session
            .start(Player::new(" ", Symbol::X), Player::new("Ben", Symbol::O))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPlayers);

        let (p1, p2) = players();
        assert_eq!(session.turn_count(), 1);
        assert_eq!(session.current_phase(), &GamePhase::InProgress);
        assert_eq!(session.players(), Some((&p1, &p2)));
        assert_eq!(session.active_player(), Some(&p2));
        assert_eq!(session.board().get(1, 1), Ok(Cell::Occupied(Symbol::X)));
        assert_eq!(*count.borrow(), 0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "session invariants violated")]
    fn test_corrupted_board_panics_after_move() {
        let mut session = started();
        // Marks placed behind the session's back break the turn count.
        session.board.set(2, 0, Symbol::X).unwrap();
        session.board.set(2, 1, Symbol::X).unwrap();
        let _ = session.apply_move(0, 0);
    }

    #[test]
    fn test_unsubscribed_observer_is_silent() {
        let count = Rc::new(RefCell::new(0));
        let mut session = started();
        let counter = Rc::clone(&count);
        let id = session.subscribe(Box::new(move |_: &SessionEvent| {
            *counter.borrow_mut() += 1
        }));
        session.apply_move(0, 0).unwrap();
        assert!(session.unsubscribe(id));
        session.apply_move(1, 1).unwrap();
        assert_eq!(*count.borrow(), 1);
    }
}
