extern crate gym_parking_lot;
extern crate tracing_subscriber;

use gym_parking_lot::common::defs::Policy;
use gym_parking_lot::envs::parking_lot::ParkingLotEnv;
use gym_parking_lot::mdps::RandomPolicy;

fn main() {
    tracing_subscriber::fmt::init();

    let env = &mut ParkingLotEnv::new(Some(100));
    let policy = RandomPolicy::new(env.action_space(), None);

    for ep in 0..10 {
        let mut s = env.reset(None);
        let mut tot_reward = 0.;
        loop {
            let action = policy.policy(&s);
            let state = env.step(action);
            print!("{esc}[2J{esc}[1;1H", esc = 27 as char);
            println!("{}", env.render());
            tot_reward += state.reward;
            s = state.observation;

            if state.truncated || state.terminated {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(50));
        }
        println!("Finished episode {} with total reward {}", ep, tot_reward);
    }
}
