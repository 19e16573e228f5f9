extern crate gym_parking_lot;
extern crate serde_json;
extern crate tracing_subscriber;

use gym_parking_lot::envs::parking_lot::ParkingLotEnv;

fn main() {
    tracing_subscriber::fmt::init();

    let env = &mut ParkingLotEnv::new(Some(200));
    let episodes = env.episode_samples(5, Some(2718));
    println!("{}", serde_json::to_string_pretty(&episodes).unwrap());
}
