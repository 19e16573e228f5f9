use super::discrete::DiscreteEnv;
use crate::*;
use itertools::Itertools;
use std::rc::Rc;

pub const ROWS: Discrete = 10;
pub const COLUMNS: Discrete = 10;
pub const STATES: Discrete = ROWS * COLUMNS;
pub const ACTIONS: Discrete = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    ParkedCar,
    Pedestrian,
    Target,
}

impl CellKind {
    pub fn glyph(&self) -> char {
        match self {
            CellKind::Empty => ' ',
            CellKind::ParkedCar => 'C',
            CellKind::Pedestrian => 'P',
            CellKind::Target => 'X',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Action {
    South = 0,
    North = 1,
    East = 2,
    West = 3,
}

impl Action {
    pub const ALL: [Action; ACTIONS as usize] =
        [Action::South, Action::North, Action::East, Action::West];

    pub fn name(&self) -> &'static str {
        match self {
            Action::South => "South",
            Action::North => "North",
            Action::East => "East",
            Action::West => "West",
        }
    }

    /// Destination of a move from (row, col), clamped at the lot boundary:
    /// driving off the edge leaves the car in place.
    pub fn destination(&self, row: Discrete, col: Discrete) -> (Discrete, Discrete) {
        match self {
            Action::South => ((row + 1).min(ROWS - 1), col),
            Action::North => ((row - 1).max(0), col),
            Action::East => (row, (col + 1).min(COLUMNS - 1)),
            Action::West => (row, (col - 1).max(0)),
        }
    }
}

impl TryFrom<Discrete> for Action {
    type Error = String;

    fn try_from(v: Discrete) -> Result<Self, Self::Error> {
        Ok(match v {
            0 => Action::South,
            1 => Action::North,
            2 => Action::East,
            3 => Action::West,
            _ => return Err(format!("Invalid action index {v} (expected 0..{ACTIONS}).")),
        })
    }
}

const E: CellKind = CellKind::Empty;
const C: CellKind = CellKind::ParkedCar;
const P: CellKind = CellKind::Pedestrian;
const X: CellKind = CellKind::Target;

/// The fixed lot: parked cars, pedestrians and the owner's spot (the
/// single target cell at row 9, column 5).
pub const PARKING_LOT: [[CellKind; COLUMNS as usize]; ROWS as usize] = [
    [E, C, C, C, E, C, E, E, C, E],
    [E, P, E, E, E, E, E, P, E, P],
    [E, C, C, E, C, C, E, E, E, C],
    [E, E, E, E, E, E, C, C, E, C],
    [C, P, P, C, E, P, E, E, E, E],
    [E, E, E, C, E, E, C, C, C, E],
    [E, C, C, C, P, E, C, C, P, E],
    [E, E, E, P, C, E, P, E, E, E],
    [C, P, E, E, E, E, E, E, E, C],
    [P, C, E, C, C, X, E, C, E, P],
];

/// Encodes a lot position as a flat state index. Total for row in
/// [0, ROWS) and col in [0, COLUMNS); anything outside is a caller
/// contract violation.
pub fn encode(row: Discrete, col: Discrete) -> Discrete {
    debug_assert!((0..ROWS).contains(&row), "Row {row} is outside the lot.");
    debug_assert!(
        (0..COLUMNS).contains(&col),
        "Column {col} is outside the lot."
    );

    row * COLUMNS + col
}

/// Inverse of [`encode`] for state in [0, STATES).
pub fn decode(state: Discrete) -> (Discrete, Discrete) {
    let col = state % COLUMNS;
    let row = state / COLUMNS;
    assert!(
        (0..ROWS).contains(&row),
        "State {state} decodes to row {row}, outside the lot."
    );

    (row, col)
}

fn destination_outcome(kind: CellKind) -> (f64, bool) {
    match kind {
        CellKind::ParkedCar => (-100., false),
        CellKind::Pedestrian => (-1000., false),
        CellKind::Target => (500., true),
        CellKind::Empty => (100., false),
    }
}

/// Builds the complete deterministic transition table and the
/// initial-state distribution (uniform over all non-target cells) for a
/// lot. Collisions penalize the move but neither block it nor end the
/// episode; only reaching the target terminates.
// TODO: Should the transitions out of the target state be removed.
pub fn build_transition_tables(
    lot: &[[CellKind; COLUMNS as usize]; ROWS as usize],
) -> (Transitions, Vec<Continous>) {
    let mut transitions = Transitions::new();
    let mut spawn_weights = vec![0.; STATES as usize];

    for (row, col) in (0..ROWS).cartesian_product(0..COLUMNS) {
        let state = encode(row, col);
        if lot[row as usize][col as usize] != CellKind::Target {
            spawn_weights[state as usize] += 1.;
        }

        for action in Action::ALL {
            let (new_row, new_col) = action.destination(row, col);
            let (reward, done) = destination_outcome(lot[new_row as usize][new_col as usize]);
            transitions.insert(
                (state, action as Discrete),
                vec![Transition {
                    next_state: encode(new_row, new_col),
                    probability: 1.,
                    reward,
                    done,
                }],
            );
        }
    }

    let total: Continous = spawn_weights.iter().sum();
    for w in &mut spawn_weights {
        *w /= total;
    }
    tracing::debug!(
        "built {} transition entries over {} states",
        transitions.len(),
        STATES
    );

    (transitions, spawn_weights)
}

/// The parking lot environment: a car must drive to its owner's spot
/// across a lot of parked cars and pedestrians.
#[derive(Debug)]
pub struct ParkingLotEnv {
    env: DiscreteEnv,
    lot: &'static [[CellKind; COLUMNS as usize]; ROWS as usize],
}

impl ParkingLotEnv {
    pub fn new(max_episode_steps: Option<Discrete>) -> Self {
        let (transitions, isd) = build_transition_tables(&PARKING_LOT);
        let env = DiscreteEnv::new(STATES, ACTIONS, transitions, isd, max_episode_steps);

        Self {
            env,
            lot: &PARKING_LOT,
        }
    }

    pub fn n_s(&self) -> Discrete {
        self.env.n_s()
    }

    pub fn n_a(&self) -> Discrete {
        self.env.n_a()
    }

    pub fn observation_space(&self) -> DiscreteSpace {
        self.env.observation_space()
    }

    pub fn action_space(&self) -> DiscreteSpace {
        self.env.action_space()
    }

    pub fn transitions(&self) -> Rc<Transitions> {
        self.env.transitions()
    }

    pub fn initial_state_distribution(&self) -> &[Continous] {
        self.env.initial_state_distribution()
    }

    pub fn state(&self) -> Discrete {
        self.env.state()
    }

    pub fn set_state(&mut self, s: Discrete) {
        self.env.set_state(s)
    }

    pub fn last_action(&self) -> Option<Discrete> {
        self.env.last_action()
    }

    pub fn reset(&mut self, seed: Option<u64>) -> Discrete {
        self.env.reset(seed)
    }

    pub fn step(&mut self, action: Discrete) -> StepInfo {
        self.env.step(action)
    }

    pub fn episode_samples(&mut self, count: usize, seed: Option<u64>) -> Vec<Vec<EpisodeEvent>> {
        self.env.episode_samples(count, seed)
    }

    /// Renders the lot as bordered ANSI text with the car's cell
    /// highlighted red, or green once it has reached its owner, followed
    /// by the last action's name (a blank line right after a reset).
    pub fn render(&self) -> String {
        let (car_row, car_col) = decode(self.env.state());

        let border = format!("+{}+", "-".repeat((2 * COLUMNS - 1) as usize));
        let mut lines = vec![border.clone()];
        for row in 0..ROWS {
            let cells = (0..COLUMNS)
                .map(|col| {
                    let glyph = self.lot[row as usize][col as usize].glyph();
                    if (row, col) == (car_row, car_col) {
                        let highlight = if self.lot[row as usize][col as usize] == CellKind::Target
                        {
                            "\x1b[42m"
                        } else {
                            "\x1b[41m"
                        };
                        format!("{highlight}{glyph}\x1b[0m")
                    } else {
                        glyph.to_string()
                    }
                })
                .join(":");
            lines.push(format!("|{cells}|"));
        }
        lines.push(border);

        let last_action = match self.env.last_action() {
            Some(a) => {
                let action = Action::try_from(a).unwrap();
                format!("  ({})\n", action.name())
            }
            None => "\n".to_string(),
        };

        format!("{}\n{}", lines.join("\n"), last_action)
    }
}
