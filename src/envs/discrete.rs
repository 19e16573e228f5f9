use crate::*;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use serde_json::json;
use std::rc::Rc;

/// Generic discrete-MDP runtime: owns the per-episode state and samples
/// the episode loop out of a transition table and an initial-state
/// distribution supplied at construction.
#[derive(Debug)]
pub struct DiscreteEnv {
    n_s: Discrete,
    n_a: Discrete,
    transitions: Rc<Transitions>,
    isd: Vec<Continous>,
    max_episode_steps: Option<Discrete>,
    rng: StdRng,
    s: Discrete,
    last_action: Option<Discrete>,
    elapsed_steps: Discrete,
}

impl DiscreteEnv {
    pub fn new(
        n_s: Discrete,
        n_a: Discrete,
        transitions: Transitions,
        isd: Vec<Continous>,
        max_episode_steps: Option<Discrete>,
    ) -> Self {
        if isd.len() != n_s as usize {
            panic!(
                "Initial state distribution has {} entries for {} states.",
                isd.len(),
                n_s
            );
        }
        if isd.iter().any(|&p| p < 0.) {
            panic!("Initial state distribution has negative entries.");
        }
        let total: Continous = isd.iter().sum();
        if (total - 1.).abs() > 1e-9 {
            panic!("Initial state distribution sums to {total}, expected 1.");
        }

        let mut rng = StdRng::from_entropy();
        let s = Self::sample_initial(&isd, &mut rng);

        Self {
            n_s,
            n_a,
            transitions: Rc::new(transitions),
            isd,
            max_episode_steps,
            rng,
            s,
            last_action: None,
            elapsed_steps: 0,
        }
    }

    pub fn n_s(&self) -> Discrete {
        self.n_s
    }

    pub fn n_a(&self) -> Discrete {
        self.n_a
    }

    pub fn observation_space(&self) -> DiscreteSpace {
        DiscreteSpace { n: self.n_s }
    }

    pub fn action_space(&self) -> DiscreteSpace {
        DiscreteSpace { n: self.n_a }
    }

    pub fn transitions(&self) -> Rc<Transitions> {
        Rc::clone(&self.transitions)
    }

    pub fn initial_state_distribution(&self) -> &[Continous] {
        &self.isd
    }

    pub fn state(&self) -> Discrete {
        self.s
    }

    pub fn set_state(&mut self, s: Discrete) {
        assert!(
            self.observation_space().contains(&s),
            "State {} is not in the observation space.",
            s
        );
        self.s = s;
    }

    pub fn last_action(&self) -> Option<Discrete> {
        self.last_action
    }

    pub fn reset(&mut self, seed: Option<u64>) -> Discrete {
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        self.s = Self::sample_initial(&self.isd, &mut self.rng);
        self.last_action = None;
        self.elapsed_steps = 0;
        tracing::debug!("reset to state {}", self.s);

        self.s
    }

    pub fn step(&mut self, action: Discrete) -> StepInfo {
        assert!(
            self.action_space().contains(&action),
            "Action {} is not in the action space.",
            action
        );

        let ts = &self.transitions[&(self.s, action)];
        let dist = WeightedIndex::new(ts.iter().map(|t| t.probability)).unwrap();
        let t = &ts[dist.sample(&mut self.rng)];

        self.s = t.next_state;
        self.last_action = Some(action);
        self.elapsed_steps += 1;
        let truncated = self
            .max_episode_steps
            .map_or(false, |n| self.elapsed_steps >= n);

        StepInfo {
            observation: t.next_state,
            reward: t.reward,
            truncated,
            terminated: t.done,
            info: json!({ "prob": t.probability }),
        }
    }

    /// Rolls `count` episodes to termination or truncation under uniformly
    /// random actions. The first event of each episode is the start state
    /// with zero reward.
    pub fn episode_samples(&mut self, count: usize, seed: Option<u64>) -> Vec<Vec<EpisodeEvent>> {
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        let mut eps = Vec::with_capacity(count);
        for _ in 0..count {
            let mut ep = vec![];
            let s = self.reset(None);
            ep.push(EpisodeEvent { s: vec![s], r: 0. });
            loop {
                let action = self.action_space().sample(&mut self.rng);
                let si = self.step(action);
                ep.push(EpisodeEvent {
                    s: vec![si.observation],
                    r: si.reward,
                });
                if si.terminated || si.truncated {
                    break;
                }
            }

            eps.push(ep);
        }

        eps
    }

    fn sample_initial(isd: &[Continous], rng: &mut StdRng) -> Discrete {
        let dist = WeightedIndex::new(isd).unwrap();
        dist.sample(rng) as Discrete
    }
}
