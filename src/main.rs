//! Kanji Catch entry point
//!
//! Headless native driver: plays rounds against the simulation, optionally
//! steered by the autopilot, and prints the final snapshot of each round.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use kanji_catch::Settings;
use kanji_catch::consts::REVEAL_MS;
use kanji_catch::sim::{Command, GameEvent, GamePhase, Session, autopilot};

/// Game instance driving one session
struct Game {
    session: Session,
    settings: Settings,
    last_frame: Instant,
}

impl Game {
    fn new(seed: u64, settings: Settings) -> Self {
        Self {
            session: Session::new(seed),
            settings,
            last_frame: Instant::now(),
        }
    }

    /// Elapsed virtual time for the next frame
    fn frame_elapsed(&mut self) -> u64 {
        if !self.settings.realtime {
            return self.settings.frame_ms;
        }
        std::thread::sleep(Duration::from_millis(self.settings.frame_ms));
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_millis() as u64;
        self.last_frame = now;
        elapsed.min(self.settings.max_frame_ms)
    }

    fn play_round(&mut self) {
        self.session.handle(Command::Start);
        self.last_frame = Instant::now();

        while self.session.phase() == GamePhase::Playing {
            if self.settings.autopilot {
                if let Some(dir) = autopilot::steer(self.session.state()) {
                    self.session.handle(Command::Move(dir));
                }
            }

            let elapsed = self.frame_elapsed();
            for event in self.session.advance(elapsed) {
                if let GameEvent::Caught { glyph, points, .. } = event {
                    log::debug!("+{} ({})", points, glyph.as_char());
                }
            }
        }

        // Let the result finish revealing
        while self.session.reveal_running() {
            self.session.advance(REVEAL_MS);
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    log::info!("Kanji Catch (native) starting...");

    let settings = Settings::resolve(std::env::args().nth(1));
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Game initialized with seed: {}", seed);

    let rounds = settings.rounds;
    let mut game = Game::new(seed, settings);
    for _ in 0..rounds {
        game.play_round();
        match game.session.snapshot().to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Could not serialize snapshot: {}", e),
        }
    }
}
