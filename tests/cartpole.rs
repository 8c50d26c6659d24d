//! Pass-through tests against real Gymnasium environments.
//!
//! Tests touching Python are ignored by default; run them with
//! `cargo test -- --ignored` in an environment where `gymnasium` is
//! installed.
use py_gym_bridge::{GymEnv, GymEnvConfig};
use pyo3::prelude::*;

#[test]
fn non_ascii_name_fails_before_python() {
    let ret = GymEnv::make("CartPole-🔥".as_bytes(), &GymEnvConfig::default());
    assert!(ret.is_err());
}

#[test]
#[ignore = "requires a Python runtime with gymnasium installed"]
fn make_returns_action_space_text() {
    let (_env, reset) =
        GymEnv::make(b"CartPole-v1", &GymEnvConfig::default().seed(Some(0))).unwrap();
    assert_eq!(reset.action_space, "Discrete(2)");
}

#[test]
#[ignore = "requires a Python runtime with gymnasium installed"]
fn sampled_action_is_accepted_by_step() {
    let (mut env, _) =
        GymEnv::make(b"CartPole-v1", &GymEnvConfig::default().seed(Some(0))).unwrap();

    let act = env.action_space_sample().unwrap();
    let ret = env.step(act).unwrap();

    // CartPole rewards every step with 1.0; the raw tuple is
    // (obs, reward, terminated, truncated, info).
    Python::with_gil(|py| {
        let ret = ret.bind(py);
        let reward: f64 = ret.get_item(1).unwrap().extract().unwrap();
        assert_eq!(reward, 1.0);
    });
}

#[test]
#[ignore = "requires a Python runtime with gymnasium installed"]
fn reset_after_step_matches_observation_shape() {
    let (mut env, _) =
        GymEnv::make(b"CartPole-v1", &GymEnvConfig::default().seed(Some(0))).unwrap();

    let act = env.action_space_sample().unwrap();
    env.step(act).unwrap();
    let reset = env.reset().unwrap();

    Python::with_gil(|py| {
        let shape: Vec<usize> = reset
            .obs
            .bind(py)
            .getattr("shape")
            .unwrap()
            .extract()
            .unwrap();
        assert_eq!(shape, vec![4]);
    });
}

#[test]
#[ignore = "requires a Python runtime with gymnasium installed"]
fn unknown_id_propagates_python_error() {
    let ret = GymEnv::make(b"NoSuchEnv-v0", &GymEnvConfig::default());
    assert!(ret.is_err());
}

#[test]
#[ignore = "requires a Python runtime with gymnasium installed"]
fn render_is_callable_without_render_mode() {
    let (env, _) = GymEnv::make(b"CartPole-v1", &GymEnvConfig::default()).unwrap();
    env.render().unwrap();
}
