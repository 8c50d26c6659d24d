//! Wrapper of gym environments implemented in Python.
use crate::{util, GymEnvConfig};
use anyhow::Result;
use log::{info, trace};
use pyo3::{prelude::*, types::IntoPyDict};

/// Values returned when an environment (re)starts an episode.
///
/// Returned by [`GymEnv::make`] and [`GymEnv::reset`].
pub struct Reset {
    /// Initial observation, exactly as the Python library produced it.
    pub obs: PyObject,

    /// Textual description of the action space, e.g. `"Discrete(2)"`,
    /// with surrounding whitespace trimmed.
    pub action_space: String,
}

/// An environment in [Gymnasium](https://gymnasium.farama.org).
///
/// The Python side owns the environment instance for its lifetime; this
/// handle only holds the reference and forwards calls through it. It is a
/// single-environment handle, not safe for concurrent use.
#[derive(Debug)]
pub struct GymEnv {
    env: PyObject,

    /// Initial seed.
    ///
    /// This value will be used at the first call of the reset method.
    initial_seed: Option<i64>,
}

impl GymEnv {
    /// Constructs an environment by its byte-encoded registry id.
    ///
    /// The id is decoded as ASCII (non-ASCII input is an error, before any
    /// Python call), passed to `gymnasium.make` together with the
    /// `render_mode` from `config` when set, and the fresh environment is
    /// reset once. Returns the handle together with the initial observation
    /// and the normalized action-space text.
    ///
    /// An id unknown to the Gymnasium registry fails with the Python
    /// exception propagated unchanged.
    pub fn make(name: &[u8], config: &GymEnvConfig) -> Result<(Self, Reset)> {
        let name = util::decode_ascii(name)?;
        info!("Importing Gymnasium environment {}", name);

        let env = Python::with_gil(|py| -> Result<PyObject> {
            let ver = py.import_bound("sys")?.getattr("version")?;
            info!("Python version = {}", ver);

            let gym = py.import_bound("gymnasium")?;
            let kwargs = config
                .render_mode
                .as_ref()
                .map(|mode| [("render_mode", mode.as_str())].into_py_dict_bound(py));
            let env = gym.getattr("make")?.call((name.as_str(),), kwargs.as_ref())?;
            Ok(env.unbind())
        })?;

        let mut env = GymEnv {
            env,
            initial_seed: config.seed,
        };
        let reset = env.reset()?;
        Ok((env, reset))
    }

    /// Runs a step of the environment's dynamics.
    ///
    /// `act` is forwarded to `env.step` unchanged and the raw result tuple
    /// (observation, reward, terminated, truncated, info) is returned as the
    /// Python library produced it.
    pub fn step(&mut self, act: PyObject) -> Result<PyObject> {
        trace!("GymEnv::step()");
        Python::with_gil(|py| {
            let ret = self.env.bind(py).call_method1("step", (act,))?;
            Ok(ret.unbind())
        })
    }

    /// Restarts the episode.
    ///
    /// The seed from the configuration, if any, is consumed by the first
    /// call; later resets are unseeded. Gymnasium's reset returns
    /// `(obs, info)` and only the observation is kept.
    pub fn reset(&mut self) -> Result<Reset> {
        trace!("GymEnv::reset()");
        Python::with_gil(|py| {
            let env = self.env.bind(py);
            let kwargs = self
                .initial_seed
                .take()
                .map(|seed| [("seed", seed)].into_py_dict_bound(py));
            let ret = env.call_method("reset", (), kwargs.as_ref())?;
            let obs = ret.get_item(0)?.unbind();

            let repr = env.getattr("action_space")?.str()?.to_cow()?.into_owned();
            Ok(Reset {
                obs,
                action_space: util::normalize_space_repr(&repr),
            })
        })
    }

    /// Triggers the environment's rendering side effect.
    ///
    /// Whatever `env.render` returns is discarded.
    pub fn render(&self) -> Result<()> {
        Python::with_gil(|py| {
            self.env.bind(py).call_method0("render")?;
            Ok(())
        })
    }

    /// Draws one random action from the environment's action space, per the
    /// Python library's sampling policy.
    pub fn action_space_sample(&self) -> Result<PyObject> {
        Python::with_gil(|py| {
            let sample = self
                .env
                .bind(py)
                .getattr("action_space")?
                .call_method0("sample")?;
            Ok(sample.unbind())
        })
    }
}
