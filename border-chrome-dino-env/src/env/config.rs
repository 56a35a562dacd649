//! Configuration of [ChromeDinoEnv](super::ChromeDinoEnv).
use crate::RenderMode;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`ChromeDinoEnv`](super::ChromeDinoEnv).
///
/// `C` is the configuration of the driver, see
/// [`DinoDriver::Config`](crate::DinoDriver::Config).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChromeDinoEnvConfig<C> {
    pub(super) driver_config: C,
    pub(super) accelerate: bool,
    pub(super) autoscale: bool,
    pub(super) gametime_reward: f32,
    pub(super) gameover_penalty: f32,
    pub(super) noop_wait_ms: u64,
    pub(super) jump_wait_ms: u64,
    pub(super) max_steps: Option<usize>,
    pub(super) render_mode: RenderMode,
}

impl<C: Default> Default for ChromeDinoEnvConfig<C> {
    fn default() -> Self {
        Self {
            driver_config: C::default(),
            accelerate: true,
            autoscale: false,
            gametime_reward: 1.0,
            gameover_penalty: -5.0,
            noop_wait_ms: 100,
            jump_wait_ms: 550,
            max_steps: None,
            render_mode: RenderMode::Null,
        }
    }
}

impl<C> ChromeDinoEnvConfig<C> {
    /// Sets the configuration of the driver.
    pub fn driver_config(mut self, driver_config: C) -> Self {
        self.driver_config = driver_config;
        self
    }

    /// Keeps the game's speed-up over time if `true`, pins the speed otherwise.
    pub fn accelerate(mut self, v: bool) -> Self {
        self.accelerate = v;
        self
    }

    /// Stored for compatibility, it does not change the behavior.
    pub fn autoscale(mut self, v: bool) -> Self {
        self.autoscale = v;
        self
    }

    /// Sets the reward of a step without crash.
    pub fn gametime_reward(mut self, v: f32) -> Self {
        self.gametime_reward = v;
        self
    }

    /// Sets the reward of a step ending with crash.
    pub fn gameover_penalty(mut self, v: f32) -> Self {
        self.gameover_penalty = v;
        self
    }

    /// Sets waits after no-op and jump actions in milliseconds.
    pub fn wait_ms(mut self, noop: u64, jump: u64) -> Self {
        self.noop_wait_ms = noop;
        self.jump_wait_ms = jump;
        self
    }

    /// Truncates episodes after the given number of steps.
    pub fn max_steps(mut self, v: Option<usize>) -> Self {
        self.max_steps = v;
        self
    }

    /// Sets how [`Env::render`](border_core::Env::render) displays frames.
    pub fn render_mode(mut self, v: RenderMode) -> Self {
        self.render_mode = v;
        self
    }
}

impl<C> ChromeDinoEnvConfig<C>
where
    C: Serialize + for<'de> Deserialize<'de>,
{
    /// Constructs [`ChromeDinoEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(config)
    }

    /// Saves [`ChromeDinoEnvConfig`] as YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
