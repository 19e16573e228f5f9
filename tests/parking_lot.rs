extern crate float_eq;
extern crate gym_parking_lot;

use float_eq::*;
use gym_parking_lot::envs::parking_lot::*;

#[test]
fn parking_lot_drive_to_owner_e2e() {
    let env = &mut ParkingLotEnv::new(None);
    assert_eq!(env.n_s(), 100);
    assert_eq!(env.n_a(), 4);
    assert_eq!(env.observation_space().n, 100);
    assert_eq!(env.action_space().n, 4);
    assert_eq!(env.transitions().len(), 400);
    assert_float_eq!(
        env.initial_state_distribution().iter().sum::<f64>(),
        1.,
        abs <= 1e-12
    );

    env.reset(Some(2718));
    env.set_state(encode(9, 4));
    assert_eq!(
        env.render(),
        concat!(
            "+-------------------+\n",
            "| :C:C:C: :C: : :C: |\n",
            "| :P: : : : : :P: :P|\n",
            "| :C:C: :C:C: : : :C|\n",
            "| : : : : : :C:C: :C|\n",
            "|C:P:P:C: :P: : : : |\n",
            "| : : :C: : :C:C:C: |\n",
            "| :C:C:C:P: :C:C:P: |\n",
            "| : : :P:C: :P: : : |\n",
            "|C:P: : : : : : : :C|\n",
            "|P:C: :C:\u{1b}[41mC\u{1b}[0m:X: :C: :P|\n",
            "+-------------------+\n",
            "\n"
        )
    );

    let si = env.step(Action::East as i32);
    assert_eq!(si.observation, encode(9, 5));
    assert_eq!(format!("terminated: {}", si.terminated), "terminated: true");
    assert_eq!(format!("truncated: {}", si.truncated), "truncated: false");
    assert_float_eq!(si.reward, 500., rmax <= 1e-16);
    assert_float_eq!(si.info["prob"].as_f64().unwrap(), 1., rmax <= 1e-16);

    assert_eq!(
        env.render(),
        concat!(
            "+-------------------+\n",
            "| :C:C:C: :C: : :C: |\n",
            "| :P: : : : : :P: :P|\n",
            "| :C:C: :C:C: : : :C|\n",
            "| : : : : : :C:C: :C|\n",
            "|C:P:P:C: :P: : : : |\n",
            "| : : :C: : :C:C:C: |\n",
            "| :C:C:C:P: :C:C:P: |\n",
            "| : : :P:C: :P: : : |\n",
            "|C:P: : : : : : : :C|\n",
            "|P:C: :C:C:\u{1b}[42mX\u{1b}[0m: :C: :P|\n",
            "+-------------------+\n",
            "  (East)\n"
        )
    );
}

#[test]
fn parking_lot_penalized_moves_do_not_end_the_episode() {
    let env = &mut ParkingLotEnv::new(None);
    env.reset(Some(42));

    // Onto a parked car, then onto a pedestrian; the car occupies both.
    env.set_state(encode(0, 0));
    let si = env.step(Action::East as i32);
    assert_eq!(si.observation, encode(0, 1));
    assert_float_eq!(si.reward, -100., rmax <= 1e-16);
    assert!(!si.terminated);

    let si = env.step(Action::South as i32);
    assert_eq!(si.observation, encode(1, 1));
    assert_float_eq!(si.reward, -1000., rmax <= 1e-16);
    assert!(!si.terminated);
    assert_eq!(env.state(), encode(1, 1));
}

#[test]
fn parking_lot_seeded_reset_is_reproducible() {
    let env = &mut ParkingLotEnv::new(None);
    let first = env.reset(Some(2718));
    let env2 = &mut ParkingLotEnv::new(None);
    assert_eq!(env2.reset(Some(2718)), first);
    assert_eq!(env.reset(Some(2718)), first);
}

#[test]
fn parking_lot_never_starts_at_the_owner() {
    let env = &mut ParkingLotEnv::new(None);
    let target = encode(9, 5);
    assert_float_eq!(
        env.initial_state_distribution()[target as usize],
        0.,
        abs <= 0.
    );
    for seed in 0..100 {
        assert_ne!(env.reset(Some(seed)), target);
    }
}
