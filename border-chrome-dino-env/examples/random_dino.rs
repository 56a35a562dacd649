use anyhow::Result;
use border_chrome_dino_env::{
    ChromeDinoEnv, ChromeDinoEnvConfig, DinoAct, RenderMode, WebDriverConfig,
};
use border_core::Env as _;
use clap::Parser;
use std::convert::TryFrom;

type Env = ChromeDinoEnv;
type EnvConfig = ChromeDinoEnvConfig<WebDriverConfig>;

/// Plays the Chrome dino runner with random actions
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// URL of the WebDriver server, `DINO_WEBDRIVER_URL` or `http://localhost:9515` if not given
    #[arg(long)]
    webdriver_url: Option<String>,

    /// Shows the browser window
    #[arg(long, default_value_t = false)]
    render: bool,

    /// Keeps the speed-up of the game
    #[arg(long, default_value_t = false)]
    accelerate: bool,

    /// Prints the newest frame to the terminal at every step
    #[arg(long, default_value_t = false)]
    show_frames: bool,

    /// Number of episodes
    #[arg(long, default_value_t = 3)]
    n_episodes: usize,
}

fn env_config(args: &Args) -> EnvConfig {
    let render_mode = if args.show_frames {
        RenderMode::Terminal
    } else {
        RenderMode::Null
    };

    let mut driver_config = WebDriverConfig::default().render(args.render);
    if let Some(url) = args.webdriver_url.as_ref() {
        driver_config = driver_config.webdriver_url(url.clone());
    }

    EnvConfig::default()
        .driver_config(driver_config)
        .accelerate(args.accelerate)
        .render_mode(render_mode)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    fastrand::seed(42);

    let args = Args::parse();
    let mut env = Env::build(&env_config(&args), 42)?;

    for ix in 0..args.n_episodes {
        let _ = env.reset()?;
        let mut r_total = 0f32;

        loop {
            let act = DinoAct::try_from(Env::action_space().sample() as u8)?;
            let (step, _) = env.step(&act)?;
            r_total += step.reward;
            if args.show_frames {
                env.render()?;
            }
            if step.is_done() {
                break;
            }
        }

        println!(
            "Episode {}: return = {}, score = {}",
            ix,
            r_total,
            env.get_score()?
        );
    }

    env.close()
}
