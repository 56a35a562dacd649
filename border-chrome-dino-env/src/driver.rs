//! Drivers controlling a running game.
mod webdriver;
use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
pub use webdriver::{WebDriverConfig, WebDriverDinoGame};

/// Controls and queries a running instance of the game.
///
/// Every method is a blocking round-trip to the process hosting the game.
/// Failures of that process are returned as errors and not retried.
pub trait DinoDriver {
    /// Configuration.
    type Config: Clone + Default + Serialize + DeserializeOwned;

    /// Starts or connects to a game.
    fn build(config: &Self::Config) -> Result<Self>
    where
        Self: Sized;

    /// Returns the current canvas as a base64 encoded PNG.
    fn get_canvas(&mut self) -> Result<String>;

    /// Presses the up key, making the dino jump.
    fn press_up(&mut self) -> Result<()>;

    /// Starts a new run.
    fn restart(&mut self) -> Result<()>;

    /// Returns `true` if the dino has hit an obstacle.
    fn is_crashed(&mut self) -> Result<bool>;

    /// Returns the score displayed by the game.
    fn get_score(&mut self) -> Result<i64>;

    /// Sets a runner parameter, e.g. `config.ACCELERATION`.
    ///
    /// The value before the first overwrite of `name` is remembered as its default.
    fn set_parameter(&mut self, name: &str, value: f64) -> Result<()>;

    /// Writes back the remembered default of a runner parameter.
    ///
    /// Does nothing if the parameter has never been overwritten.
    fn restore_parameter(&mut self, name: &str) -> Result<()>;

    /// Shuts the game down.
    fn close(&mut self) -> Result<()>;
}
