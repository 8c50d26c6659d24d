use anyhow::Result;
use py_gym_bridge::{GymEnv, GymEnvConfig};
use pyo3::prelude::*;
use serde::Serialize;
use std::fs::File;

#[derive(Debug, Serialize)]
struct CartpoleRecord {
    episode: usize,
    step: usize,
    reward: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GymEnvConfig::default().seed(Some(42));
    let (mut env, reset) = GymEnv::make(b"CartPole-v1", &config)?;
    println!("Action space = {}", reset.action_space);

    let mut wtr = csv::Writer::from_writer(File::create("random_cartpole_eval.csv")?);

    for episode in 0..5 {
        let mut step = 0;
        loop {
            let act = env.action_space_sample()?;
            let ret = env.step(act)?;
            let (reward, done) = Python::with_gil(|py| -> Result<(f64, bool)> {
                let ret = ret.bind(py);
                let reward: f64 = ret.get_item(1)?.extract()?;
                let terminated: bool = ret.get_item(2)?.extract()?;
                let truncated: bool = ret.get_item(3)?.extract()?;
                Ok((reward, terminated || truncated))
            })?;
            wtr.serialize(CartpoleRecord {
                episode,
                step,
                reward,
            })?;
            step += 1;
            if done {
                break;
            }
        }
        env.reset()?;
    }
    wtr.flush()?;

    Ok(())
}
