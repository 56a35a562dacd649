//! Configuration of [WebDriverDinoGame](super::WebDriverDinoGame).
//!
//! If environment variable `DINO_WEBDRIVER_URL` exists, it is used as the
//! default endpoint of the WebDriver server.
use serde::{Deserialize, Serialize};
use std::{default::Default, env};

/// Configuration of [WebDriverDinoGame](super::WebDriverDinoGame).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WebDriverConfig {
    pub(super) webdriver_url: String,
    pub(super) game_url: String,
    pub(super) render: bool,
    pub(super) window_width: u32,
    pub(super) window_height: u32,
    pub(super) chrome_args: Vec<String>,
}

impl Default for WebDriverConfig {
    fn default() -> Self {
        let webdriver_url = if let Ok(var) = env::var("DINO_WEBDRIVER_URL") {
            var
        } else {
            "http://localhost:9515".to_string()
        };

        Self {
            webdriver_url,
            game_url: "chrome://dino".to_string(),
            render: false,
            window_width: 800,
            window_height: 600,
            chrome_args: vec!["--mute-audio".to_string()],
        }
    }
}

impl WebDriverConfig {
    /// Sets the URL of the WebDriver server, e.g. a running `chromedriver`.
    pub fn webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.webdriver_url = url.into();
        self
    }

    /// Sets the URL of the page hosting the game.
    pub fn game_url(mut self, url: impl Into<String>) -> Self {
        self.game_url = url.into();
        self
    }

    /// Shows the browser window if `true`, runs headless otherwise.
    pub fn render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    /// Sets the size of the browser window.
    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Adds a command line argument of Chrome.
    pub fn chrome_arg(mut self, arg: impl Into<String>) -> Self {
        self.chrome_args.push(arg.into());
        self
    }

    /// Command line arguments passed to Chrome.
    pub(super) fn args(&self) -> Vec<String> {
        let mut args = self.chrome_args.clone();
        if !self.render {
            args.push("--headless".to_string());
        }
        args.push(format!(
            "--window-size={},{}",
            self.window_width, self.window_height
        ));
        args
    }
}
