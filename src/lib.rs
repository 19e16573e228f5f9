extern crate rand;
extern crate serde;
extern crate serde_json;

pub mod common;
pub mod envs;
pub mod mdps;

use rand::Rng;
use serde_json::Value;
use std::collections::HashMap;

pub type Discrete = i32;
pub type Continous = f64;

pub trait Space {
    type Item;

    fn contains(&self, item: &Self::Item) -> bool;
}

/// Refer: https://www.gymlibrary.dev/api/spaces/#discrete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscreteSpace {
    pub n: Discrete,
}

impl DiscreteSpace {
    pub fn sample(&self, rng: &mut impl Rng) -> Discrete {
        rng.gen_range(0..self.n)
    }
}

impl Space for DiscreteSpace {
    type Item = Discrete;

    fn contains(&self, item: &Discrete) -> bool {
        (0..self.n).contains(item)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub next_state: Discrete,
    pub probability: Continous,
    pub reward: f64,
    pub done: bool,
}

pub type Transitions = HashMap<(Discrete, Discrete), Vec<Transition>>;

#[derive(Debug)]
pub struct StepInfo {
    pub observation: Discrete,
    pub reward: f64,
    pub truncated: bool,
    pub terminated: bool,
    pub info: Value,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct EpisodeEvent {
    pub s: Vec<Discrete>,
    pub r: f64,
}
