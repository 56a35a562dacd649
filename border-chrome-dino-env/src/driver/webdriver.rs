//! A driver running the game in Chrome via the W3C WebDriver protocol.
mod config;
use super::DinoDriver;
use crate::DinoEnvError;
use anyhow::Result;
pub use config::WebDriverConfig;
use log::{debug, info, trace, warn};
use reqwest::blocking::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Hides the offline message and gives the canvas an id.
///
/// Returns `false` if the page does not host a runner.
const SCRIPT_SETUP: &str = "\
var message = document.getElementById('main-message');
if (message) { message.style.display = 'none'; }
var canvas = document.getElementsByClassName('runner-canvas')[0];
if (canvas) { canvas.id = 'runner-canvas'; }
return typeof Runner !== 'undefined' && Runner.instance_ != null && canvas != null;";
const SCRIPT_CANVAS: &str =
    "return document.getElementById('runner-canvas').toDataURL().substring(22);";
const SCRIPT_CRASHED: &str = "return Runner.instance_.crashed;";
const SCRIPT_RESTART: &str = "Runner.instance_.restart();";
const SCRIPT_SCORE: &str = "return Runner.instance_.distanceMeter.digits;";

/// WebDriver key code of the up arrow.
const KEY_ARROW_UP: &str = "\u{E013}";

#[derive(Debug, Deserialize)]
/// Every WebDriver response wraps its payload in `value`.
struct WebDriverResponse {
    value: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewSession {
    session_id: String,
}

/// Runs the game in Chrome controlled by a WebDriver server such as `chromedriver`.
///
/// The value of a parameter is read from the page right before it is first
/// overwritten and used by [`DinoDriver::restore_parameter`].
pub struct WebDriverDinoGame {
    client: Client,

    /// Base URL of the WebDriver server.
    base_url: String,

    /// `None` after the session is closed.
    session_id: Option<String>,

    /// Values before the first overwrite, keyed like `config.ACCELERATION`.
    defaults: HashMap<String, Value>,
}

impl WebDriverDinoGame {
    fn session_url(&self, command: &str) -> Result<String> {
        match self.session_id.as_ref() {
            Some(id) => Ok(format!("{}/session/{}/{}", self.base_url, id, command)),
            None => Err(DinoEnvError::WebDriver("session is closed".to_string()).into()),
        }
    }

    fn send(req: RequestBuilder) -> Result<Value> {
        let resp = req
            .send()
            .map_err(|e| DinoEnvError::WebDriver(e.to_string()))?;
        let status = resp.status();
        let body: WebDriverResponse = resp
            .json()
            .map_err(|e| DinoEnvError::WebDriver(e.to_string()))?;

        if status.is_success() {
            Ok(body.value)
        } else {
            let message = body
                .value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("no message");
            Err(DinoEnvError::WebDriver(format!("{}: {}", status, message)).into())
        }
    }

    fn post(&self, command: &str, params: &impl Serialize) -> Result<Value> {
        let url = self.session_url(command)?;
        debug!("POST {}", url);
        Self::send(self.client.post(url).json(params))
    }

    fn execute(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        trace!("execute: {}", script);
        self.post("execute/sync", &execute_params(script, args))
    }
}

impl DinoDriver for WebDriverDinoGame {
    type Config = WebDriverConfig;

    fn build(config: &Self::Config) -> Result<Self> {
        let client = Client::new();
        let value = Self::send(
            client
                .post(format!("{}/session", config.webdriver_url))
                .json(&new_session_params(config)),
        )?;
        let session: NewSession = serde_json::from_value(value)?;
        info!(
            "Started WebDriver session {} on {}",
            session.session_id, config.webdriver_url
        );

        let game = Self {
            client,
            base_url: config.webdriver_url.clone(),
            session_id: Some(session.session_id),
            defaults: HashMap::new(),
        };
        game.post("url", &json!({ "url": config.game_url }))?;
        if game.execute(SCRIPT_SETUP, vec![])? != Value::Bool(true) {
            return Err(DinoEnvError::WebDriver(format!(
                "no runner found on {}",
                config.game_url
            ))
            .into());
        }
        info!("Loaded {}", config.game_url);

        Ok(game)
    }

    fn get_canvas(&mut self) -> Result<String> {
        parse_canvas(self.execute(SCRIPT_CANVAS, vec![])?)
    }

    fn press_up(&mut self) -> Result<()> {
        self.post("actions", &key_press_actions(KEY_ARROW_UP))?;
        Ok(())
    }

    fn restart(&mut self) -> Result<()> {
        self.execute(SCRIPT_RESTART, vec![])?;
        Ok(())
    }

    fn is_crashed(&mut self) -> Result<bool> {
        parse_crashed(&self.execute(SCRIPT_CRASHED, vec![])?)
    }

    fn get_score(&mut self) -> Result<i64> {
        parse_score(&self.execute(SCRIPT_SCORE, vec![])?)
    }

    fn set_parameter(&mut self, name: &str, value: f64) -> Result<()> {
        check_parameter_name(name)?;
        if !self.defaults.contains_key(name) {
            let default = self.execute(&read_script(name), vec![])?;
            debug!("Default of {} is {}", name, default);
            self.defaults.insert(name.to_string(), default);
        }
        self.execute(&assign_script(name), vec![json!(value)])?;
        Ok(())
    }

    fn restore_parameter(&mut self, name: &str) -> Result<()> {
        check_parameter_name(name)?;
        match self.defaults.get(name) {
            Some(value) => {
                self.execute(&assign_script(name), vec![value.clone()])?;
            }
            None => debug!("{} has never been overwritten", name),
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(id) = self.session_id.take() {
            let url = format!("{}/session/{}", self.base_url, id);
            debug!("DELETE {}", url);
            Self::send(self.client.delete(url))?;
            info!("Closed WebDriver session {}", id);
        }
        Ok(())
    }
}

impl Drop for WebDriverDinoGame {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to close WebDriver session: {}", e);
        }
    }
}

fn new_session_params(config: &WebDriverConfig) -> Value {
    json!({
        "capabilities": {
            "alwaysMatch": {
                "browserName": "chrome",
                "goog:chromeOptions": { "args": config.args() }
            }
        }
    })
}

fn execute_params(script: &str, args: Vec<Value>) -> Value {
    json!({ "script": script, "args": args })
}

/// A key action pressing and releasing `key`.
fn key_press_actions(key: &str) -> Value {
    json!({
        "actions": [{
            "type": "key",
            "id": "keyboard",
            "actions": [
                { "type": "keyDown", "value": key },
                { "type": "keyUp", "value": key }
            ]
        }]
    })
}

fn read_script(name: &str) -> String {
    format!("return Runner.{};", name)
}

fn assign_script(name: &str) -> String {
    format!("Runner.{} = arguments[0];", name)
}

/// The canvas script returns the data URL without its `data:image/png;base64,` prefix.
fn parse_canvas(value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        v => Err(DinoEnvError::CanvasDecode(format!("canvas is not a string: {}", v)).into()),
    }
}

fn parse_crashed(value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| DinoEnvError::WebDriver(format!("crashed is not a bool: {}", value)).into())
}

/// The distance meter holds the score as an array of digit strings.
fn parse_score(digits: &Value) -> Result<i64> {
    let digits: String = match digits {
        Value::Array(ds) => ds.iter().filter_map(Value::as_str).collect(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    };
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse()
        .map_err(|_| DinoEnvError::WebDriver(format!("Invalid score: {}", digits)).into())
}

/// Parameter names are spliced into scripts, so only dotted identifiers are accepted.
fn check_parameter_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .split('.')
            .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    if valid {
        Ok(())
    } else {
        Err(DinoEnvError::InvalidParameter(name.to_string()).into())
    }
}
