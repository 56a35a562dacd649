use anyhow::Result;
use border_chrome_dino_env::{
    util::test::{env_config, Env, MockDriver, RecordingRenderer},
    DinoAct, DinoDriver, DinoEnvError, DinoObs, ManualClock, ACCELERATION,
};
use border_core::Env as _;
use std::time::Duration;

fn build_env() -> Result<(Env, ManualClock)> {
    let mut env = Env::build(&env_config(), 42)?;
    let clock = ManualClock::new();
    env.set_clock(Box::new(clock.clone()));
    Ok((env, clock))
}

/// Values of the top-left pixel in each channel, from the oldest frame to the newest.
fn left_pixels(obs: &DinoObs) -> Vec<u8> {
    (0..4).map(|k| obs.frames()[[0, 0, 0, k]]).collect()
}

fn right_pixels(obs: &DinoObs) -> Vec<u8> {
    (0..4).map(|k| obs.frames()[[0, 79, 79, k]]).collect()
}

#[test]
fn test_build() -> Result<()> {
    let (env, _) = build_env()?;
    assert_eq!(env.image_size(), &[1, 80, 80, 4]);
    assert!(env.frame_stack().is_empty());
    assert_eq!(env.driver().n_canvas(), 1);
    assert_eq!(env.driver().parameter(ACCELERATION), Some(0.001));
    assert!(!env.autoscale());

    assert_eq!(Env::observation_space().shape, vec![80, 80, 4]);
    assert_eq!(Env::action_space().n, 2);

    let env = Env::build(&env_config().accelerate(false).autoscale(true), 0)?;
    assert_eq!(env.driver().parameter(ACCELERATION), Some(0.0));
    assert!(env.autoscale());
    Ok(())
}

#[test]
fn test_reset_replicates_first_frame() -> Result<()> {
    let (mut env, _) = build_env()?;
    let obs = env.reset()?;
    let level = MockDriver::level(1);

    assert_eq!(env.driver().n_restart(), 1);
    assert_eq!(obs.frames().shape(), &[1, 80, 80, 4]);
    assert_eq!(left_pixels(&obs), vec![level; 4]);
    assert_eq!(right_pixels(&obs), vec![255; 4]);
    assert_eq!(env.frame_stack().len(), 4);
    let first = env.frame_stack().newest().cloned();
    assert!(env.frame_stack().iter().all(|f| Some(f) == first.as_ref()));
    Ok(())
}

#[test]
fn test_noop_steps() -> Result<()> {
    let (mut env, clock) = build_env()?;
    env.reset()?;

    for _ in 0..5 {
        let (step, record) = env.step(&DinoAct::Noop)?;
        assert_eq!(step.reward, 1.0);
        assert!(!step.is_done());
        assert_eq!(step.obs.frames().shape(), &[1, 80, 80, 4]);
        assert!(Env::observation_space().contains(&step.obs.frames().shape()[1..], step.obs.frames().iter()));
        assert!(record.is_empty());
        assert_eq!(env.frame_stack().len(), 4);
    }

    assert_eq!(env.driver().n_press_up(), 0);
    assert_eq!(clock.sleeps(), vec![Duration::from_millis(100); 5]);
    Ok(())
}

#[test]
fn test_jump_then_crash() -> Result<()> {
    let (mut env, clock) = build_env()?;
    env.reset()?;
    env.driver_mut().set_crashed(true);

    let (step, record) = env.step(&DinoAct::Jump)?;
    assert_eq!(step.reward, -5.0);
    assert!(step.is_terminated);
    assert!(!step.is_truncated);
    assert!(step.is_done());
    assert_eq!(env.driver().n_press_up(), 1);
    assert_eq!(clock.sleeps(), vec![Duration::from_millis(550)]);
    assert_eq!(record.get_scalar("score")?, 1.0);
    assert_eq!(record.get_scalar("episode_length")?, 1.0);
    Ok(())
}

#[test]
fn test_each_jump_presses_once() -> Result<()> {
    let (mut env, clock) = build_env()?;
    env.reset()?;

    let acts = [DinoAct::Jump, DinoAct::Noop, DinoAct::Jump, DinoAct::Jump, DinoAct::Noop];
    for (i, act) in acts.iter().enumerate() {
        env.step(act)?;
        let n_jumps = acts[..=i].iter().filter(|&&a| a == DinoAct::Jump).count();
        assert_eq!(env.driver().n_press_up(), n_jumps);
    }
    assert_eq!(clock.elapsed(), Duration::from_millis(3 * 550 + 2 * 100));
    Ok(())
}

#[test]
fn test_frames_shift() -> Result<()> {
    let (mut env, _) = build_env()?;
    let l = MockDriver::level;
    env.reset()?;

    let (step, _) = env.step(&DinoAct::Noop)?;
    assert_eq!(left_pixels(&step.obs), vec![l(1), l(1), l(1), l(2)]);

    let (step, _) = env.step(&DinoAct::Noop)?;
    assert_eq!(left_pixels(&step.obs), vec![l(1), l(1), l(2), l(3)]);

    for _ in 0..3 {
        env.step(&DinoAct::Noop)?;
    }
    let (step, _) = env.step(&DinoAct::Noop)?;
    assert_eq!(left_pixels(&step.obs), vec![l(4), l(5), l(6), l(7)]);
    assert_eq!(env.frame_stack().len(), 4);

    // No stale frames after reset
    let obs = env.reset()?;
    assert_eq!(left_pixels(&obs), vec![l(8); 4]);
    Ok(())
}

#[test]
fn test_set_acceleration() -> Result<()> {
    let (mut env, _) = build_env()?;

    env.set_acceleration(false)?;
    assert_eq!(env.driver().parameter(ACCELERATION), Some(0.0));

    env.set_acceleration(true)?;
    assert_eq!(env.driver().parameter(ACCELERATION), Some(0.001));

    // The default is the value before the first overwrite
    env.set_acceleration(false)?;
    env.set_acceleration(false)?;
    env.set_acceleration(true)?;
    assert_eq!(env.driver().parameter(ACCELERATION), Some(0.001));
    Ok(())
}

#[test]
fn test_restore_parameter() -> Result<()> {
    let (mut env, _) = build_env()?;
    let driver = env.driver_mut();

    // Never overwritten
    driver.restore_parameter("config.GRAVITY")?;
    assert_eq!(driver.parameter("config.GRAVITY"), None);

    driver.set_parameter("config.GRAVITY", 0.6)?;
    driver.set_parameter("config.GRAVITY", 0.9)?;
    assert_eq!(driver.parameter("config.GRAVITY"), Some(0.9));
    driver.restore_parameter("config.GRAVITY")?;
    assert_eq!(driver.parameter("config.GRAVITY"), None);

    let env = Env::build(&env_config().accelerate(true), 0)?;
    assert_eq!(env.driver().parameter(ACCELERATION), Some(0.001));
    Ok(())
}

#[test]
fn test_render() -> Result<()> {
    let (mut env, _) = build_env()?;
    let renderer = RecordingRenderer::default();
    env.set_renderer(Box::new(renderer.clone()));

    env.reset()?;
    env.step(&DinoAct::Noop)?;
    env.render()?;

    let frames = renderer.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(Some(&frames[0]), env.frame_stack().newest());
    assert_eq!(&frames[0], env.current_frame());
    Ok(())
}

#[test]
fn test_get_score() -> Result<()> {
    let (mut env, _) = build_env()?;
    env.reset()?;
    for _ in 0..3 {
        env.step(&DinoAct::Noop)?;
    }
    assert_eq!(env.get_score()?, 4);
    Ok(())
}

#[test]
fn test_max_steps() -> Result<()> {
    let mut env = Env::build(&env_config().max_steps(Some(3)), 0)?;
    env.set_clock(Box::new(ManualClock::new()));
    env.reset()?;

    let (step, _) = env.step(&DinoAct::Noop)?;
    assert!(!step.is_done());
    let (step, _) = env.step(&DinoAct::Noop)?;
    assert!(!step.is_done());
    let (step, record) = env.step(&DinoAct::Noop)?;
    assert!(step.is_truncated);
    assert!(!step.is_terminated);
    assert_eq!(step.reward, 1.0);
    assert_eq!(record.get_scalar("score")?, 4.0);
    assert_eq!(record.get_scalar("episode_length")?, 3.0);
    Ok(())
}

#[test]
fn test_step_with_reset() -> Result<()> {
    let (mut env, _) = build_env()?;
    env.reset()?;

    let (step, _) = env.step_with_reset(&DinoAct::Noop)?;
    assert!(step.init_obs.is_none());

    env.driver_mut().set_crashed(true);
    let (step, _) = env.step_with_reset(&DinoAct::Jump)?;
    assert!(step.is_terminated);
    let init_obs = step.init_obs.expect("observation after reset");
    assert_eq!(env.driver().n_restart(), 2);
    assert_eq!(left_pixels(&init_obs), vec![MockDriver::level(4); 4]);
    Ok(())
}

#[test]
fn test_malformed_canvas() -> Result<()> {
    let (mut env, _) = build_env()?;
    env.reset()?;
    env.driver_mut().set_canvas(Some("not a canvas".to_string()));

    let err = env.step(&DinoAct::Noop).err().expect("decode error");
    assert!(matches!(
        err.downcast_ref::<DinoEnvError>(),
        Some(DinoEnvError::CanvasDecode(_))
    ));
    Ok(())
}

#[test]
fn test_close() -> Result<()> {
    let (mut env, _) = build_env()?;
    env.reset()?;
    env.close()?;
    assert!(env.driver().is_closed());
    assert!(env.step(&DinoAct::Noop).is_err());
    Ok(())
}
