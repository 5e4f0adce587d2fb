//! Session lifecycle: idle -> playing -> ended -> playing ...
//!
//! The session owns the round state and both periodic tasks. All mutation
//! happens inside a command handler or a timer callback run by `advance`,
//! on one timeline. Leaving a phase stops that phase's timer before the
//! next one starts, so the clock and the reveal never run together.

use rand_pcg::Pcg32;

use super::input::{Command, Direction, step_player};
use super::reveal::reveal_step;
use super::rng::{SpawnRng, seeded};
use super::scoring::{motif_bonus, sentence};
use super::snapshot::Snapshot;
use super::state::{GamePhase, GameState};
use super::tick::{GameEvent, tick};
use super::timer::PeriodicTimer;
use crate::consts::{REVEAL_MS, TICK_MS};
use crate::tuning::Tuning;

pub struct Session<R: SpawnRng = Pcg32> {
    state: GameState,
    tuning: Tuning,
    rng: R,
    /// Game clock, running only while playing
    clock: PeriodicTimer,
    /// Result reveal, running only while ended
    reveal: PeriodicTimer,
    rounds_started: u32,
}

impl Session<Pcg32> {
    /// Session with the standard odds and a seeded generator
    pub fn new(seed: u64) -> Self {
        Self::with_rng(seeded(seed), Tuning::default())
    }
}

impl<R: SpawnRng> Session<R> {
    pub fn with_rng(rng: R, tuning: Tuning) -> Self {
        Self {
            state: GameState::new(),
            tuning,
            rng,
            clock: PeriodicTimer::new(TICK_MS),
            reveal: PeriodicTimer::new(REVEAL_MS),
            rounds_started: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn reveal_running(&self) -> bool {
        self.reveal.is_running()
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Move(dir) => self.move_player(dir),
        }
    }

    /// Begin a fresh round from any phase
    pub fn start(&mut self) {
        // Tear down whatever was scheduled for the old round first
        self.reveal.stop();
        self.clock.stop();

        self.state.reset_round();
        self.state.phase = GamePhase::Playing;
        self.clock.start(self.state.now_ms);
        self.rounds_started += 1;
        log::info!(
            "Round {} started at t={}ms",
            self.rounds_started,
            self.state.now_ms
        );
    }

    /// Step the collector; ignored unless playing
    pub fn move_player(&mut self, dir: Direction) {
        if self.state.phase == GamePhase::Playing {
            step_player(&mut self.state.player, dir);
        }
    }

    /// Let `elapsed_ms` of virtual time pass, firing every due timer in order
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<GameEvent> {
        let target = self.state.now_ms + elapsed_ms;
        let mut events = Vec::new();

        loop {
            let due = [self.clock.next_due(), self.reveal.next_due()]
                .into_iter()
                .flatten()
                .min();
            let Some(at) = due.filter(|&at| at <= target) else {
                break;
            };

            self.state.now_ms = at;
            if self.clock.fire_if_due(at) {
                events.extend(self.on_clock_tick());
            } else if self.reveal.fire_if_due(at) {
                self.on_reveal_tick();
            }
        }

        self.state.now_ms = target;
        events
    }

    fn on_clock_tick(&mut self) -> Vec<GameEvent> {
        let events = tick(&mut self.state, &self.tuning, &mut self.rng);
        if events.contains(&GameEvent::RoundEnded) {
            self.end_round();
        }
        events
    }

    fn end_round(&mut self) {
        self.clock.stop();

        // Nothing falls or pops once the clock is gone
        self.state.glyphs.clear();
        self.state.popups.clear();

        self.state.result_sentence = sentence(&self.state.caught);
        self.state.bonus_points = motif_bonus(&self.state.result_sentence);
        self.state.score += self.state.bonus_points;
        self.state.revealed_len = 0;
        self.state.phase = GamePhase::Ended;

        if !self.state.fully_revealed() {
            self.reveal.start(self.state.now_ms);
        }
        log::info!(
            "Round {} over: score {} (bonus {}), {} caught",
            self.rounds_started,
            self.state.score,
            self.state.bonus_points,
            self.state.caught.len()
        );
    }

    fn on_reveal_tick(&mut self) {
        if !reveal_step(&mut self.state) {
            self.reveal.stop();
        }
    }
}
