use crate::common::defs::*;
use crate::*;
use rand::prelude::*;
use std::cell::RefCell;

pub struct RandomPolicy {
    action_space: DiscreteSpace,
    rng: RefCell<StdRng>,
}

impl RandomPolicy {
    pub fn new(action_space: DiscreteSpace, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            action_space,
            rng: RefCell::new(rng),
        }
    }
}

impl Policy<DiscreteSpace, DiscreteSpace> for RandomPolicy {
    fn policy(&self, _s: &Discrete) -> Discrete {
        self.action_space.sample(&mut *self.rng.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_policy_stays_in_action_space() {
        let space = DiscreteSpace { n: 4 };
        let policy = RandomPolicy::new(space, Some(2718));
        for s in 0..100 {
            let a = policy.policy(&s);
            assert!(space.contains(&a));
        }
    }

    #[test]
    fn test_random_policy_seeded_is_reproducible() {
        let space = DiscreteSpace { n: 4 };
        let p1 = RandomPolicy::new(space, Some(42));
        let p2 = RandomPolicy::new(space, Some(42));
        let a1 = (0..20).map(|s| p1.policy(&s)).collect::<Vec<_>>();
        let a2 = (0..20).map(|s| p2.policy(&s)).collect::<Vec<_>>();
        assert_eq!(a1, a2);
    }
}
