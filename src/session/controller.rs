//! Game session controller.

use std::time::Duration;

use thiserror::Error;

use crate::cards::{build_round, Alphabet, CardPosition};
use crate::core::{ConfigError, GameConfig, GameRng};
use crate::events::{GameEvent, Outcome, RenderSurface, View};
use crate::round::{IgnoreReason, Round, RoundId, RoundPhase, SelectOutcome};
use crate::schedule::{ManualScheduler, Scheduler, TaskHandle, Timeout, TimeoutKind};
use crate::streak::{KeyValueStore, StreakStore};
use crate::timer::{Countdown, TickOutcome};

/// Errors returned by session requests.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("a round is already in progress; restart first")]
    RoundInProgress,
    #[error("no difficulty named {0:?}")]
    UnknownDifficulty(String),
}

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No round allocated, no timer running.
    Idle,
    /// Cards on display before play starts.
    Previewing,
    /// Accepting card selections.
    Active,
    /// Round over; grid frozen until restart.
    Finished(Outcome),
}

/// Everything owned by the round in play.
#[derive(Debug)]
struct Game {
    round: Round,
    countdown: Countdown,
    preview: Option<TaskHandle>,
    revert: Option<TaskHandle>,
    outcome: Option<Outcome>,
}

/// One player's session: at most one round at a time, plus the streak.
///
/// All input and timer callbacks are `&mut self` calls, so handlers never
/// overlap. Each handler checks that the callback still belongs to the
/// current round before touching state.
pub struct Session<S, K> {
    config: GameConfig,
    alphabet: Alphabet,
    scheduler: S,
    streak: StreakStore<K>,
    rng: GameRng,
    game: Option<Game>,
    next_round: RoundId,
    events: Vec<GameEvent>,
}

impl<S: Scheduler, K: KeyValueStore> Session<S, K> {
    /// Validate the configuration and load the persisted streak.
    ///
    /// Queues `StreakChanged` and `ViewChanged(Setup)` so the presentation
    /// can draw its initial state.
    pub fn new(config: GameConfig, scheduler: S, store: K, rng: GameRng) -> Result<Self, SessionError> {
        config.validate()?;
        let alphabet = config.alphabet()?;
        let streak = StreakStore::open(store);

        let mut session = Self {
            config,
            alphabet,
            scheduler,
            streak,
            rng,
            game: None,
            next_round: RoundId::new(1),
            events: Vec::new(),
        };
        session.emit(GameEvent::StreakChanged {
            streak: session.streak.current(),
        });
        session.emit(GameEvent::ViewChanged { view: View::Setup });
        Ok(session)
    }

    /// Deal a new round with `budget_secs` on the clock.
    ///
    /// Only legal from idle. The clock starts when the preview ends.
    pub fn start(&mut self, budget_secs: u32) -> Result<RoundId, SessionError> {
        if self.game.is_some() {
            return Err(SessionError::RoundInProgress);
        }
        if budget_secs == 0 {
            return Err(ConfigError::ZeroBudget.into());
        }

        let id = self.next_round;
        self.next_round = id.next();

        let cards = build_round(&self.alphabet, &mut self.rng);
        let layout: Vec<_> = cards.iter().map(|c| c.symbol).collect();
        let round = Round::new(id, cards);
        let preview = self
            .scheduler
            .after(self.config.preview(), Timeout::new(id, TimeoutKind::PreviewEnd));

        self.game = Some(Game {
            round,
            countdown: Countdown::new(budget_secs),
            preview: Some(preview),
            revert: None,
            outcome: None,
        });

        tracing::info!(round = %id, budget_secs, pairs = self.alphabet.len(), "round started");
        self.emit(GameEvent::ViewChanged { view: View::Board });
        self.emit(GameEvent::RoundStarted {
            round: id,
            layout,
            glyphs: self.alphabet.glyphs().to_vec(),
        });
        self.emit(GameEvent::ScoreChanged { score: 0 });
        self.emit(GameEvent::TimerChanged {
            remaining: budget_secs,
        });
        Ok(id)
    }

    /// Start a round using a configured difficulty preset.
    pub fn start_difficulty(&mut self, name: &str) -> Result<RoundId, SessionError> {
        let budget = self
            .config
            .difficulty(name)
            .map(|d| d.budget_secs)
            .ok_or_else(|| SessionError::UnknownDifficulty(name.to_string()))?;
        self.start(budget)
    }

    /// Handle a click on a card.
    ///
    /// Invalid clicks are dropped silently and reported as `Ignored`.
    pub fn select(&mut self, position: CardPosition) -> SelectOutcome {
        let Some(game) = self.game.as_mut() else {
            return SelectOutcome::Ignored(IgnoreReason::NotActive);
        };

        let outcome = game.round.select(position);
        let mut finished = None;

        match outcome {
            SelectOutcome::Ignored(reason) => {
                tracing::debug!(position, ?reason, "selection ignored");
            }
            SelectOutcome::Revealed(position) => {
                self.events.push(GameEvent::CardRevealed { position });
            }
            SelectOutcome::Matched {
                first,
                second,
                matches,
            } => {
                tracing::debug!(first, second, matches, "pair matched");
                self.events.push(GameEvent::CardRevealed { position: second });
                self.events.push(GameEvent::CardsMatched { first, second });
                self.events.push(GameEvent::ScoreChanged { score: matches });
            }
            SelectOutcome::Mismatched { first, second } => {
                tracing::debug!(first, second, "pair mismatched");
                self.events.push(GameEvent::CardRevealed { position: second });
                self.events.push(GameEvent::CardsMismatched { first, second });
                let timeout = Timeout::new(game.round.id(), TimeoutKind::MismatchRevert);
                game.revert = Some(self.scheduler.after(self.config.mismatch(), timeout));
            }
            SelectOutcome::Won {
                first,
                second,
                score,
            } => {
                self.events.push(GameEvent::CardRevealed { position: second });
                self.events.push(GameEvent::CardsMatched { first, second });
                self.events.push(GameEvent::ScoreChanged { score });
                finished = Some(Outcome::Won { score });
            }
        }

        if let Some(result) = finished {
            self.finish(result);
        }
        outcome
    }

    /// Deliver a timeout previously handed to the scheduler.
    ///
    /// Timeouts for a round other than the current one are dropped.
    pub fn handle_timeout(&mut self, timeout: Timeout) {
        let Some(game) = self.game.as_mut() else {
            tracing::debug!(?timeout, "timeout with no round in play dropped");
            return;
        };
        let id = game.round.id();
        if timeout.round != id {
            tracing::debug!(?timeout, current = %id, "stale timeout dropped");
            return;
        }

        let mut finished = None;

        match timeout.kind {
            TimeoutKind::PreviewEnd => {
                game.preview = None;
                if game.round.end_preview() {
                    self.events.push(GameEvent::PreviewEnded);
                    game.countdown.start(id, self.config.tick(), &mut self.scheduler);
                }
            }
            TimeoutKind::MismatchRevert => {
                game.revert = None;
                if let Some((first, second)) = game.round.resolve_mismatch() {
                    self.events.push(GameEvent::CardsHidden { first, second });
                }
            }
            TimeoutKind::Tick => match game.countdown.tick(&mut self.scheduler) {
                TickOutcome::Running(remaining) => {
                    self.events.push(GameEvent::TimerChanged { remaining });
                }
                TickOutcome::Expired => {
                    self.events.push(GameEvent::TimerChanged { remaining: 0 });
                    if let Some(score) = game.round.lose() {
                        finished = Some(Outcome::Lost { score });
                    }
                }
                TickOutcome::Stopped => {
                    tracing::debug!(round = %id, "tick after countdown stopped dropped");
                }
            },
        }

        if let Some(result) = finished {
            self.finish(result);
        }
    }

    /// Tear down the current round (if any) and return to idle.
    ///
    /// Cancels every outstanding timeout. The streak is not affected.
    pub fn restart(&mut self) {
        if let Some(mut game) = self.game.take() {
            game.countdown.stop(&mut self.scheduler);
            for handle in [game.preview.take(), game.revert.take()].into_iter().flatten() {
                self.scheduler.cancel(handle);
            }
            tracing::info!(round = %game.round.id(), phase = ?game.round.phase(), "round discarded");
        }
        self.emit(GameEvent::ViewChanged { view: View::Setup });
    }

    /// Take every queued event.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hand every queued event to `surface`, in order.
    pub fn flush<R: RenderSurface + ?Sized>(&mut self, surface: &mut R) {
        for event in self.events.drain(..) {
            surface.apply(&event);
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match &self.game {
            None => SessionPhase::Idle,
            Some(game) => match (game.outcome, game.round.phase()) {
                (Some(outcome), _) => SessionPhase::Finished(outcome),
                (None, RoundPhase::Previewing) => SessionPhase::Previewing,
                (None, _) => SessionPhase::Active,
            },
        }
    }

    /// The round in play or on the summary screen.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.game.as_ref().map(|g| &g.round)
    }

    /// Pairs found in the current round.
    #[must_use]
    pub fn score(&self) -> usize {
        self.round().map_or(0, Round::matches)
    }

    /// Seconds left on the clock.
    #[must_use]
    pub fn time_left(&self) -> Option<u32> {
        self.game.as_ref().map(|g| g.countdown.remaining())
    }

    /// Whether the countdown is ticking.
    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.game.as_ref().is_some_and(|g| g.countdown.is_running())
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak.current()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[must_use]
    pub fn store(&self) -> &K {
        self.streak.store()
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Enter a terminal state: stop the clock, publish the result, update
    /// the streak.
    fn finish(&mut self, outcome: Outcome) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if game.outcome.is_some() {
            return;
        }

        game.countdown.stop(&mut self.scheduler);
        if let Some(handle) = game.revert.take() {
            self.scheduler.cancel(handle);
        }
        game.outcome = Some(outcome);
        let round = game.round.id();

        let streak = match outcome {
            Outcome::Won { score } => {
                self.events.push(GameEvent::RoundWon { score });
                self.streak.record_win()
            }
            Outcome::Lost { score } => {
                self.events.push(GameEvent::RoundLost { score });
                self.streak.record_loss()
            }
        };
        tracing::info!(%round, ?outcome, streak, "round finished");

        self.emit(GameEvent::StreakChanged { streak });
        self.emit(GameEvent::ViewChanged {
            view: View::Summary(outcome),
        });
    }
}

impl<K: KeyValueStore> Session<ManualScheduler, K> {
    /// Move virtual time forward by `by`, firing every timeout that falls due
    /// in order. The clock stops at `Duration::MAX`.
    pub fn advance(&mut self, by: Duration) {
        let deadline = self.scheduler.now().saturating_add(by);
        while let Some(timeout) = self.scheduler.next_due(deadline) {
            self.handle_timeout(timeout);
        }
        self.scheduler.advance_clock(deadline);
    }
}

impl<S, K: KeyValueStore> std::fmt::Debug for Session<S, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("round", &self.game.as_ref().map(|g| g.round.id()))
            .field("streak", &self.streak.current())
            .field("queued_events", &self.events.len())
            .finish_non_exhaustive()
    }
}
