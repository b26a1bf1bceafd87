use crate::domain::{
    BoundaryMode, DEFAULT_DENSITY, DEFAULT_TICK_RATE, Engine, EngineError, MAX_DENSITY,
    StepStrategy,
};

/// Startup configuration for a simulation.
/// Defaults match the classic 75x75 board at 20 ticks per second.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub tick_rate: u32,
    /// Alive probability in percent used by randomize
    pub density: u8,
    pub boundary: BoundaryMode,
    pub strategy: StepStrategy,
    /// Seed for the randomize source; None draws one from the thread RNG
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 75,
            height: 75,
            tick_rate: DEFAULT_TICK_RATE,
            density: DEFAULT_DENSITY,
            boundary: BoundaryMode::default(),
            strategy: StepStrategy::default(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_density(mut self, density: u8) -> Self {
        self.density = density;
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_strategy(mut self, strategy: StepStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Check the values the engine would reject
    pub fn validate(&self) -> Result<(), EngineError> {
        self.build_engine().map(|_| ())
    }

    /// Build an empty engine carrying this configuration's settings
    pub fn build_engine(&self) -> Result<Engine, EngineError> {
        if self.density > MAX_DENSITY {
            return Err(EngineError::parameter(
                "density",
                i64::from(self.density),
                0..=i64::from(MAX_DENSITY),
            ));
        }
        let mut engine = Engine::new(self.width, self.height)?;
        engine.set_tick_rate(self.tick_rate)?;
        engine.set_boundary_mode(self.boundary);
        engine.set_step_strategy(self.strategy);
        Ok(engine)
    }
}
