mod config;
use crate::{
    blank_frame, canvas_to_frame, Clock, DinoAct, DinoDriver, DinoObs, Frame, FrameStack,
    Renderer, SystemClock, WebDriverDinoGame,
};
use anyhow::Result;
use border_core::{
    record::{Record, RecordValue},
    BoxSpace, DiscreteSpace, Env, Info, Shape, Step,
};
pub use config::ChromeDinoEnvConfig;
use log::{info, trace};
use std::time::Duration;

/// Name of the runner parameter controlling the speed-up of the game.
pub const ACCELERATION: &str = "config.ACCELERATION";

/// Empty struct.
pub struct DinoInfo;

impl Info for DinoInfo {}

/// The Chrome dino runner as an environment.
///
/// Observations are the last four canvas snapshots, each resized to 80x80 and
/// converted to grayscale. Action 0 waits for a tick and action 1 jumps. Every
/// step gives the gametime reward until the dino crashes, which gives the
/// gameover penalty and terminates the episode.
///
/// The [`Record`] of the last step of an episode holds `score` and
/// `episode_length`; it is empty otherwise.
pub struct ChromeDinoEnv<D: DinoDriver = WebDriverDinoGame> {
    driver: D,

    // Last four frames
    frames: FrameStack,

    // Newest frame, shown by render()
    current_frame: Frame,

    clock: Box<dyn Clock>,

    renderer: Box<dyn Renderer>,

    gametime_reward: f32,

    gameover_penalty: f32,

    noop_wait: Duration,

    jump_wait: Duration,

    max_steps: Option<usize>,

    autoscale: bool,

    // Shape of the observation taken when the environment was built
    image_size: Vec<usize>,

    // Steps in the current episode
    n_steps: usize,
}

impl<D: DinoDriver> ChromeDinoEnv<D> {
    /// Constructs the environment on a running driver.
    ///
    /// The acceleration setting is applied and one observation is taken to check
    /// the observation shape. The frame buffer is cleared afterwards, so the
    /// first episode starts from [`Env::reset`].
    pub fn from_driver(config: &ChromeDinoEnvConfig<D::Config>, driver: D) -> Result<Self> {
        let mut env = Self {
            driver,
            frames: FrameStack::Empty,
            current_frame: blank_frame(),
            clock: Box::new(SystemClock),
            renderer: config.render_mode.build(),
            gametime_reward: config.gametime_reward,
            gameover_penalty: config.gameover_penalty,
            noop_wait: Duration::from_millis(config.noop_wait_ms),
            jump_wait: Duration::from_millis(config.jump_wait_ms),
            max_steps: config.max_steps,
            autoscale: config.autoscale,
            image_size: vec![],
            n_steps: 0,
        };

        env.set_acceleration(config.accelerate)?;
        let obs = env.observe()?;
        let shape = obs.frames().shape();
        Self::observation_space().check_shape(&shape[1..])?;
        env.image_size = shape.to_vec();
        env.frames.clear();
        info!("ChromeDinoEnv is ready, observation shape = {:?}", env.image_size);

        Ok(env)
    }

    /// Replaces the clock used to wait between an action and the next observation.
    pub fn set_clock(&mut self, clock: Box<dyn Clock>) {
        self.clock = clock;
    }

    /// Replaces the renderer used by [`Env::render`].
    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.renderer = renderer;
    }

    /// Observation space, 80x80x4 values in `[0, 255]`.
    pub fn observation_space() -> BoxSpace<u8> {
        BoxSpace::new(0, 255, DinoObs::shape())
    }

    /// Action space, no-op (0) and jump (1).
    pub fn action_space() -> DiscreteSpace {
        DiscreteSpace::new(DinoAct::N)
    }

    /// Shape of the observation taken when the environment was built.
    pub fn image_size(&self) -> &[usize] {
        &self.image_size
    }

    /// The autoscale flag of the configuration.
    pub fn autoscale(&self) -> bool {
        self.autoscale
    }

    /// Returns the score displayed by the game.
    pub fn get_score(&mut self) -> Result<i64> {
        self.driver.get_score()
    }

    /// Restores the default acceleration of the game if `enable`, pins it to zero otherwise.
    pub fn set_acceleration(&mut self, enable: bool) -> Result<()> {
        trace!("ChromeDinoEnv::set_acceleration({})", enable);
        if enable {
            self.driver.restore_parameter(ACCELERATION)
        } else {
            self.driver.set_parameter(ACCELERATION, 0.0)
        }
    }

    /// Returns the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Returns the driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Returns the frame buffer.
    pub fn frame_stack(&self) -> &FrameStack {
        &self.frames
    }

    /// Returns the newest frame.
    pub fn current_frame(&self) -> &Frame {
        &self.current_frame
    }

    fn observe(&mut self) -> Result<DinoObs> {
        let canvas = self.driver.get_canvas()?;
        let frame = canvas_to_frame(&canvas)?;
        let frames = self.frames.push(frame.clone())?;
        self.current_frame = frame;
        Ok(frames.into())
    }
}

impl<D: DinoDriver> Env for ChromeDinoEnv<D> {
    type Config = ChromeDinoEnvConfig<D::Config>;
    type Obs = DinoObs;
    type Act = DinoAct;
    type Info = DinoInfo;

    /// The seed is not used, the game has its own random number generator.
    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        let driver = D::build(&config.driver_config)?;
        Self::from_driver(config, driver)
    }

    fn step(&mut self, act: &DinoAct) -> Result<(Step<Self>, Record)> {
        trace!("ChromeDinoEnv::step({:?})", act);

        match act {
            DinoAct::Noop => self.clock.sleep(self.noop_wait),
            DinoAct::Jump => {
                self.driver.press_up()?;
                self.clock.sleep(self.jump_wait);
            }
        }

        let obs = self.observe()?;
        self.n_steps += 1;

        let is_terminated = self.driver.is_crashed()?;
        let reward = if is_terminated {
            self.gameover_penalty
        } else {
            self.gametime_reward
        };
        let is_truncated = !is_terminated && self.max_steps.map_or(false, |n| self.n_steps >= n);

        let record = if is_terminated || is_truncated {
            let score = self.driver.get_score()?;
            info!(
                "Episode ended, steps = {}, score = {}, crashed = {}",
                self.n_steps, score, is_terminated
            );
            let mut record = Record::from_scalar("score", score as f32);
            record.insert("episode_length", RecordValue::Scalar(self.n_steps as f32));
            record
        } else {
            Record::empty()
        };

        let step = Step::new(obs, *act, reward, is_terminated, is_truncated, DinoInfo);

        Ok((step, record))
    }

    fn reset(&mut self) -> Result<DinoObs> {
        trace!("ChromeDinoEnv::reset()");
        self.driver.restart()?;
        self.frames.clear();
        self.n_steps = 0;
        self.observe()
    }

    fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.current_frame)
    }

    fn close(&mut self) -> Result<()> {
        self.driver.close()
    }
}
