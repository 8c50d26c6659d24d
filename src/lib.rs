//! A thin wrapper of [Gymnasium](https://gymnasium.farama.org) environments on Python.
//!
//! [`GymEnv`] holds an environment instance created by `gymnasium.make` and
//! forwards `step`, `reset`, `render` and `action_space.sample` through
//! [`PyO3`](https://github.com/PyO3/pyo3). Observations and actions cross the
//! language boundary as opaque [`PyObject`]s and are never interpreted on the
//! Rust side; the step result keeps the exact tuple shape the Python library
//! produced.
//!
//! The only local transformations are decoding the byte-encoded environment
//! id to text (ASCII only) and trimming the textual action-space description
//! returned alongside the initial observation. Everything else, including
//! errors, passes through unchanged: a Python exception raised by the wrapped
//! library surfaces as the error of the corresponding call.
//!
//! All calls are synchronous and take the GIL for their duration. A [`GymEnv`]
//! is a single-environment handle and is not meant to be shared across
//! threads.
//!
//! [`PyObject`]: pyo3::PyObject
mod base;
mod config;
pub mod util;

pub use base::{GymEnv, Reset};
pub use config::GymEnvConfig;
