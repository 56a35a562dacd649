//! The Chrome dino runner as an environment for [`Border`](https://crates.io/crates/border).
//!
//! The game runs in a browser controlled by a [`DinoDriver`]. The built-in
//! [`WebDriverDinoGame`] talks to a W3C WebDriver server, e.g. `chromedriver`:
//!
//! ```bash
//! chromedriver --port=9515
//! export DINO_WEBDRIVER_URL=http://localhost:9515
//! ```
//!
//! At every step, a snapshot of the game canvas is resized to 80x80, composited
//! onto a white background and converted to grayscale. The last four frames are
//! stacked into a [`DinoObs`] of shape `(1, 80, 80, 4)`.
//!
//! Here is an example of running an episode with random actions.
//!
//! ```no_run
//! use anyhow::Result;
//! use border_chrome_dino_env::{ChromeDinoEnv, ChromeDinoEnvConfig, DinoAct, WebDriverConfig};
//! use border_core::Env as _;
//! use std::convert::TryFrom;
//!
//! fn main() -> Result<()> {
//!     let config = ChromeDinoEnvConfig::default()
//!         .driver_config(WebDriverConfig::default().render(true))
//!         .accelerate(false);
//!     let mut env: ChromeDinoEnv = ChromeDinoEnv::build(&config, 0)?;
//!
//!     let _obs = env.reset()?;
//!     loop {
//!         let act = DinoAct::try_from(<ChromeDinoEnv>::action_space().sample() as u8)?;
//!         let (step, _) = env.step(&act)?;
//!         if step.is_done() {
//!             break;
//!         }
//!     }
//!     println!("score = {}", env.get_score()?);
//!     env.close()
//! }
//! ```
mod act;
mod clock;
mod driver;
mod env;
mod error;
mod frame;
mod frame_stack;
mod obs;
mod render;
pub mod util;
pub use act::DinoAct;
pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::{DinoDriver, WebDriverConfig, WebDriverDinoGame};
pub use env::{ChromeDinoEnv, ChromeDinoEnvConfig, DinoInfo, ACCELERATION};
pub use error::DinoEnvError;
pub use frame::{
    blank_frame, canvas_to_frame, grayscale, rgba2rgb, Frame, FRAME_HEIGHT, FRAME_WIDTH, N_STACK,
};
pub use frame_stack::FrameStack;
pub use obs::DinoObs;
pub use render::{NullRenderer, RenderMode, Renderer, TerminalRenderer};
