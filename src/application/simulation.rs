use super::{Command, SimulationConfig};
use crate::domain::{Engine, EngineError};
use macroquad::logging::info;
use rand::{SeedableRng, rngs::StdRng};

/// Upper bound on generations run by a single `tick`, so a long frame
/// does not stall the caller catching up.
pub const MAX_STEPS_PER_TICK: u32 = 4;

/// Simulation drives an engine from frame time and input commands.
/// Pause and tick-rate policy live here, not in the engine.
pub struct Simulation {
    engine: Engine,
    density: u8,
    rng: StdRng,
    update_timer: f32,
}

impl Simulation {
    /// Build the engine described by `config` and, for a non-zero density,
    /// seed it with a random field.
    pub fn new(config: &SimulationConfig) -> Result<Self, EngineError> {
        let engine = config.build_engine()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        info!("simulation seed {}", seed);

        let mut simulation = Self {
            engine,
            density: config.density,
            rng: StdRng::seed_from_u64(seed),
            update_timer: 0.0,
        };
        if config.density > 0 {
            simulation.apply(Command::Randomize)?;
        }
        Ok(simulation)
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Advance by `delta_seconds` of wall time.
    /// Runs one step per elapsed `1 / tick_rate` interval and returns how many ran.
    /// While paused nothing runs and no time accumulates.
    pub fn tick(&mut self, delta_seconds: f32) -> u32 {
        if self.engine.is_paused() {
            return 0;
        }

        self.update_timer += delta_seconds;
        let update_interval = 1.0 / self.engine.tick_rate() as f32;

        let mut steps = 0;
        while self.update_timer >= update_interval && steps < MAX_STEPS_PER_TICK {
            self.engine.step();
            self.update_timer -= update_interval;
            steps += 1;
        }
        if self.update_timer >= update_interval {
            self.update_timer = 0.0;
        }
        steps
    }

    /// Dispatch one command to the engine
    pub fn apply(&mut self, command: Command) -> Result<(), EngineError> {
        match command {
            Command::TogglePause => self.engine.toggle_paused(),
            Command::IncreaseRate => self.engine.adjust_tick_rate(1),
            Command::DecreaseRate => self.engine.adjust_tick_rate(-1),
            Command::ResetRate => self.engine.reset_tick_rate(),
            Command::Randomize => self.engine.randomize_with(self.density, &mut self.rng)?,
            Command::Clear => self.engine.clear(),
            Command::ToggleBoundary => self.engine.toggle_boundary_mode(),
            Command::SetBoundary(mode) => self.engine.set_boundary_mode(mode),
            Command::ToggleCell { x, y } => self.engine.toggle_cell(x, y),
            Command::PaintCell { x, y, alive } => self.engine.set_cell(x, y, alive),
            Command::StampPattern { pattern, x, y } => {
                self.engine.stamp_pattern(pattern, x, y);
            }
            Command::Step => self.engine.step(),
        }
        Ok(())
    }

    /// Apply a batch of commands in order, stopping at the first error
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = Command>) -> Result<(), EngineError> {
        commands.into_iter().try_for_each(|c| self.apply(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoundaryMode, DEFAULT_TICK_RATE, presets};

    fn empty(rate: u32) -> Simulation {
        let config = SimulationConfig::default()
            .with_size(20, 20)
            .with_density(0)
            .with_tick_rate(rate)
            .with_seed(Some(1));
        Simulation::new(&config).unwrap()
    }

    #[test]
    fn test_tick_runs_one_step_per_interval() {
        let mut sim = empty(4);
        assert_eq!(sim.tick(0.5), 2);
        assert_eq!(sim.tick(0.125), 0);
        assert_eq!(sim.tick(0.125), 1);
        assert_eq!(sim.engine().generation(), 3);
    }

    #[test]
    fn test_tick_caps_steps_and_drops_backlog() {
        let mut sim = empty(60);
        assert_eq!(sim.tick(1.0), MAX_STEPS_PER_TICK);
        assert_eq!(sim.tick(0.0), 0);
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let mut sim = empty(4);
        sim.apply(Command::TogglePause).unwrap();
        assert_eq!(sim.tick(10.0), 0);
        assert_eq!(sim.engine().generation(), 0);

        sim.apply(Command::TogglePause).unwrap();
        assert_eq!(sim.tick(0.25), 1);
    }

    #[test]
    fn test_step_command_works_while_paused() {
        let mut sim = empty(4);
        sim.apply(Command::TogglePause).unwrap();
        sim.apply(Command::Step).unwrap();
        assert_eq!(sim.engine().generation(), 1);
    }

    #[test]
    fn test_rate_commands() {
        let mut sim = empty(DEFAULT_TICK_RATE);
        sim.apply_all([Command::IncreaseRate, Command::IncreaseRate, Command::DecreaseRate])
            .unwrap();
        assert_eq!(sim.engine().tick_rate(), DEFAULT_TICK_RATE + 1);
        sim.apply(Command::ResetRate).unwrap();
        assert_eq!(sim.engine().tick_rate(), DEFAULT_TICK_RATE);
    }

    #[test]
    fn test_editing_commands() {
        let mut sim = empty(4);
        sim.apply_all([
            Command::ToggleCell { x: 1, y: 1 },
            Command::PaintCell { x: 2, y: 2, alive: true },
            Command::PaintCell { x: -3, y: 2, alive: true },
            Command::SetBoundary(BoundaryMode::Clamped),
        ])
        .unwrap();
        assert!(sim.engine().get_cell(1, 1));
        assert!(sim.engine().get_cell(2, 2));
        assert_eq!(sim.engine().population(), 2);
        assert_eq!(sim.engine().boundary_mode(), BoundaryMode::Clamped);

        sim.apply(Command::Clear).unwrap();
        assert_eq!(sim.engine().population(), 0);
    }

    #[test]
    fn test_stamp_command() {
        let mut sim = empty(4);
        let blinker = &presets::BLINKER;
        sim.apply(Command::StampPattern { pattern: blinker, x: 5, y: 5 }).unwrap();
        assert_eq!(sim.engine().population(), 3);

        // Off the edge: rejected, not an error
        sim.apply(Command::StampPattern { pattern: blinker, x: 19, y: 5 }).unwrap();
        assert_eq!(sim.engine().population(), 3);
    }

    #[test]
    fn test_seeded_start_is_deterministic() {
        let config = SimulationConfig::default().with_seed(Some(42));
        let a = Simulation::new(&config).unwrap();
        let b = Simulation::new(&config).unwrap();
        assert_eq!(a.engine().grid(), b.engine().grid());
        assert!(a.engine().population() > 0);
    }
}
