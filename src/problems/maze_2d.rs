use derive_more::Display;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::float_cost::FloatCost;
use crate::problem::Problem;
use crate::result::SearchResult;
use crate::space::Action;
use crate::space::Actions;
use crate::space::State;

pub(crate) type CoordIntrinsic = u32;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display("({x},{y})")]
pub struct Maze2DState {
    pub(crate) x: CoordIntrinsic,
    pub(crate) y: CoordIntrinsic,
}

impl Maze2DState {
    pub fn new(x: CoordIntrinsic, y: CoordIntrinsic) -> Maze2DState {
        Maze2DState { x, y }
    }
    pub fn new_from_usize(x: usize, y: usize) -> Option<Maze2DState> {
        Some(Maze2DState {
            x: CoordIntrinsic::try_from(x).ok()?,
            y: CoordIntrinsic::try_from(y).ok()?,
        })
    }

    pub fn x(&self) -> usize {
        self.x as usize
    }
    pub fn y(&self) -> usize {
        self.y as usize
    }
}
impl State for Maze2DState {}

/// Moves on the grid. `y` grows downwards, so `Up` decrements it.
///
/// Actions are generated in declaration order.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum Maze2DAction {
    #[display("↑")]
    Up = 0, // y--
    #[display("↓")]
    Down = 1, // y++
    #[display("→")]
    Right = 2, // x++
    #[display("←")]
    Left = 3, // x--
}
impl Action for Maze2DAction {}

impl Maze2DAction {
    pub const ALL: [Maze2DAction; 4] = [
        Maze2DAction::Up,
        Maze2DAction::Down,
        Maze2DAction::Right,
        Maze2DAction::Left,
    ];
}

pub type Maze2DCost = FloatCost<f64>;

/// Cost of each action, owned by the problem instance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Maze2DCosts {
    costs: [f64; 4],
}

impl Default for Maze2DCosts {
    fn default() -> Self {
        Self { costs: [1.0; 4] }
    }
}

impl Maze2DCosts {
    pub fn with_cost(mut self, action: Maze2DAction, cost: f64) -> Self {
        self.costs[action as usize] = cost;
        self
    }

    #[inline(always)]
    pub fn get(&self, action: Maze2DAction) -> Maze2DCost {
        Maze2DCost::new(self.costs[action as usize])
    }

    /// The cheapest action cost, used to scale distance heuristics.
    pub fn cheapest(&self) -> f64 {
        self.costs.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

impl std::fmt::Display for Maze2DCosts {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut sep = "";
        for a in Maze2DAction::ALL {
            write!(f, "{sep}{a}:{}", self.get(a))?;
            sep = " ";
        }
        Ok(())
    }
}

/// Estimate of the remaining cost to the goal.
///
/// Distances are measured in cells and scaled by the cheapest action, which
/// keeps `Manhattan`, `Euclidean` and `Chebyshev` admissible on 4-connected
/// grids.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq)]
pub enum Maze2DHeuristic {
    #[default]
    #[display("zero")]
    Zero,
    /// The same estimate everywhere. Uninformed searches don't look at it.
    #[display("constant({_0})")]
    Constant(f64),
    #[display("manhattan")]
    Manhattan,
    #[display("euclidean")]
    Euclidean,
    #[display("chebyshev")]
    Chebyshev,
}

impl Maze2DHeuristic {
    #[inline(always)]
    pub fn h(&self, s: &Maze2DState, goal: &Maze2DState, scale: f64) -> f64 {
        let dx = s.x.abs_diff(goal.x) as f64;
        let dy = s.y.abs_diff(goal.y) as f64;

        match self {
            Maze2DHeuristic::Zero => 0.0,
            Maze2DHeuristic::Constant(c) => *c,
            Maze2DHeuristic::Manhattan => (dx + dy) * scale,
            Maze2DHeuristic::Euclidean => dx.hypot(dy) * scale,
            Maze2DHeuristic::Chebyshev => dx.max(dy) * scale,
        }
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Maze2DCell {
    #[display(" ")]
    Empty,
    #[display("#")]
    Wall,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Maze2DCellParseError {
    #[error("Invalid character '{0}' found.")]
    InvalidCharacter(char),
}

impl std::convert::TryFrom<char> for Maze2DCell {
    type Error = Maze2DCellParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            ' ' | '.' => Ok(Maze2DCell::Empty),
            '#' | '█' => Ok(Maze2DCell::Wall),
            ch => Err(Maze2DCellParseError::InvalidCharacter(ch)),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Maze2DSpace {
    pub(crate) map: Vec<Vec<Maze2DCell>>,
}

impl Maze2DSpace {
    pub fn new_from_map(map: Vec<Vec<Maze2DCell>>) -> Self {
        Self { map }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        match self.map.first() {
            Some(row) => (row.len(), self.map.len()),
            None => (0, 0),
        }
    }

    #[inline(always)]
    pub fn at(&self, state: &Maze2DState) -> Option<Maze2DCell> {
        self.map.get(state.y())?.get(state.x()).copied()
    }

    #[inline(always)]
    pub fn is_open(&self, state: &Maze2DState) -> bool {
        self.at(state) == Some(Maze2DCell::Empty)
    }

    /// Moves `state` by `action`, as long as it stays on the map.
    ///
    /// Walls are not checked here.
    #[inline(always)]
    pub fn apply(&self, state: &Maze2DState, action: &Maze2DAction) -> Option<Maze2DState> {
        let (max_x, max_y) = self.dimensions();
        let (x, y) = (state.x, state.y);

        #[rustfmt::skip]
        let (x, y) = match action {
            Maze2DAction::Up    => (x,                  y.checked_sub(1)?),
            Maze2DAction::Down  => (x,                  y.checked_add(1)?),
            Maze2DAction::Right => (x.checked_add(1)?,  y                ),
            Maze2DAction::Left  => (x.checked_sub(1)?,  y                ),
        };

        let s = Maze2DState { x, y };
        (s.x() < max_x && s.y() < max_y).then_some(s)
    }

    pub fn open_cells(&self) -> usize {
        self.map
            .iter()
            .flatten()
            .filter(|c| **c == Maze2DCell::Empty)
            .count()
    }
}

impl std::fmt::Display for Maze2DSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in &self.map {
            for cell in line {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Maze2DSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Maze2D{:?}", self.dimensions())
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Maze2DProblemCell {
    Cell(Maze2DCell),
    #[display("T")]
    Start,
    #[display("P")]
    Goal,
}

impl std::convert::TryFrom<char> for Maze2DProblemCell {
    type Error = Maze2DCellParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'T' | 't' => Ok(Maze2DProblemCell::Start),
            'P' | 'p' => Ok(Maze2DProblemCell::Goal),
            ch => Ok(Maze2DProblemCell::Cell(Maze2DCell::try_from(ch)?)),
        }
    }
}

#[derive(Debug, Error)]
pub enum Maze2DProblemParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Row {y} is {found} cells wide, expected {expected}")]
    RaggedRow {
        y: usize,
        expected: usize,
        found: usize,
    },
    #[error("Invalid cell found at ({x},{y}): {e}")]
    InvalidCell {
        e: Maze2DCellParseError,
        x: usize,
        y: usize,
    },
    #[error("Map too large")]
    TooLarge,
    #[error("No start ('T') found")]
    MissingStart,
    #[error("No goal ('P') found")]
    MissingGoal,
    #[error("Found a second start at {0}")]
    MultipleStarts(Maze2DState),
    #[error("Found a second goal at {0}")]
    MultipleGoals(Maze2DState),
    #[error("I/O error when loading '{p}': {e}")]
    IOError {
        p: std::path::PathBuf,
        e: std::io::Error,
    },
}

/// Walking from `T` to `P` on a grid of walls.
#[derive(Clone)]
pub struct Maze2DProblem {
    space: Maze2DSpace,
    start: Maze2DState,
    goal: Maze2DState,
    costs: Maze2DCosts,
    heuristic: Maze2DHeuristic,
}

impl Maze2DProblem {
    pub fn with_costs(mut self, costs: Maze2DCosts) -> Self {
        self.costs = costs;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Maze2DHeuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Moves the goal, as long as the new one is an open cell.
    pub fn with_goal_at(mut self, x: usize, y: usize) -> Option<Self> {
        let goal = Maze2DState::new_from_usize(x, y)?;
        if !self.space.is_open(&goal) {
            return None;
        }
        self.goal = goal;
        Some(self)
    }

    pub fn space(&self) -> &Maze2DSpace {
        &self.space
    }
    pub fn start(&self) -> Maze2DState {
        self.start
    }
    pub fn goal(&self) -> Maze2DState {
        self.goal
    }
    pub fn costs(&self) -> &Maze2DCosts {
        &self.costs
    }
    pub fn heuristic_kind(&self) -> Maze2DHeuristic {
        self.heuristic
    }

    /// Number of cells that aren't walls.
    pub fn open_cells(&self) -> usize {
        self.space.open_cells()
    }

    /// Draws the map with `·` over the cells on the path.
    ///
    /// `T` and `P` always show, even when there's no path.
    pub fn render_path(&self, result: &SearchResult<Maze2DState, Maze2DAction, Maze2DCost>) -> String {
        let path: FxHashSet<Maze2DState> = result.states().collect();

        let mut out = String::new();
        for (y, line) in self.space.map.iter().enumerate() {
            for (x, cell) in line.iter().enumerate() {
                let s = Maze2DState::new(x as CoordIntrinsic, y as CoordIntrinsic);
                if s == self.start {
                    out.push('T');
                } else if s == self.goal {
                    out.push('P');
                } else if path.contains(&s) {
                    out.push('·');
                } else {
                    out.push_str(&cell.to_string());
                }
            }
            out.push('\n');
        }
        out
    }
}

impl Problem<Maze2DState, Maze2DAction, Maze2DCost> for Maze2DProblem {
    fn initial_state(&self) -> Maze2DState {
        self.start
    }

    /// Moves that stay on the map and don't hit a wall.
    fn actions(&self, s: &Maze2DState) -> Actions<Maze2DAction> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("StateExpansion");

        Maze2DAction::ALL
            .into_iter()
            .filter(|a| {
                self.space
                    .apply(s, a)
                    .is_some_and(|next| self.space.is_open(&next))
            })
            .collect()
    }

    /// Moving off the map leaves the state unchanged.
    #[inline(always)]
    fn result(&self, s: &Maze2DState, a: &Maze2DAction) -> Maze2DState {
        self.space.apply(s, a).unwrap_or(*s)
    }

    #[inline(always)]
    fn is_goal(&self, s: &Maze2DState) -> bool {
        *s == self.goal
    }

    #[inline(always)]
    fn cost(&self, _s: &Maze2DState, a: &Maze2DAction, _next: &Maze2DState) -> Maze2DCost {
        self.costs.get(*a)
    }

    #[inline(always)]
    fn heuristic(&self, s: &Maze2DState) -> Maze2DCost {
        Maze2DCost::new(self.heuristic.h(s, &self.goal, self.costs.cheapest()))
    }
}

impl std::convert::TryFrom<&str> for Maze2DProblem {
    type Error = Maze2DProblemParseError;

    /// Parses a map of `#` walls and open cells, with one `T` start and one
    /// `P` goal.
    ///
    /// Blank lines are ignored. The map is as wide as its widest row without
    /// trailing whitespace. Past that width whitespace is dropped, and up to it
    /// whitespace is open floor, so the right edge doesn't need walls.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let lines: Vec<&str> = s.lines().filter(|l| !l.trim_end().is_empty()).collect();

        let Some(max_x) = lines.iter().map(|l| l.trim_end().chars().count()).max() else {
            return Err(Maze2DProblemParseError::EmptyInput);
        };
        if Maze2DState::new_from_usize(max_x, lines.len()).is_none() {
            return Err(Maze2DProblemParseError::TooLarge);
        }

        let mut map = Vec::with_capacity(lines.len());
        let mut start = None;
        let mut goal = None;

        for (y, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(max_x);
            for (x, ch) in line.chars().take(max_x).enumerate() {
                let cell = Maze2DProblemCell::try_from(ch)
                    .map_err(|e| Maze2DProblemParseError::InvalidCell { e, x, y })?;
                let s = Maze2DState::new(x as CoordIntrinsic, y as CoordIntrinsic);

                row.push(match cell {
                    Maze2DProblemCell::Start => {
                        if start.replace(s).is_some() {
                            return Err(Maze2DProblemParseError::MultipleStarts(s));
                        }
                        Maze2DCell::Empty
                    }
                    Maze2DProblemCell::Goal => {
                        if goal.replace(s).is_some() {
                            return Err(Maze2DProblemParseError::MultipleGoals(s));
                        }
                        Maze2DCell::Empty
                    }
                    Maze2DProblemCell::Cell(c) => c,
                });
            }

            if row.len() != max_x {
                return Err(Maze2DProblemParseError::RaggedRow {
                    y,
                    expected: max_x,
                    found: row.len(),
                });
            }
            map.push(row);
        }

        Ok(Maze2DProblem {
            space: Maze2DSpace::new_from_map(map),
            start: start.ok_or(Maze2DProblemParseError::MissingStart)?,
            goal: goal.ok_or(Maze2DProblemParseError::MissingGoal)?,
            costs: Maze2DCosts::default(),
            heuristic: Maze2DHeuristic::default(),
        })
    }
}

impl std::convert::TryFrom<&std::path::Path> for Maze2DProblem {
    type Error = Maze2DProblemParseError;

    fn try_from(p: &std::path::Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(p).map_err(|e| Maze2DProblemParseError::IOError {
            p: p.to_path_buf(),
            e,
        })?;
        Maze2DProblem::try_from(text.as_str())
    }
}

impl std::fmt::Display for Maze2DProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (max_x, max_y) = self.space.dimensions();
        writeln!(
            f,
            "Maze2DProblem({max_x}x{max_y}) (s:{}, g:{}, h:{}, costs:[{}]):",
            self.start, self.goal, self.heuristic, self.costs
        )?;
        for (y, line) in self.space.map.iter().enumerate() {
            for (x, cell) in line.iter().enumerate() {
                let s = Maze2DState::new(x as CoordIntrinsic, y as CoordIntrinsic);
                match (s == self.start, s == self.goal) {
                    (true, true) => write!(f, "!")?,
                    (true, false) => write!(f, "T")?,
                    (false, true) => write!(f, "P")?,
                    (false, false) => write!(f, "{cell}")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for Maze2DProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Maze2DProblem{:?}({}->{}, {})",
            self.space.dimensions(),
            self.start,
            self.goal,
            self.heuristic
        )
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::algorithms::astar::astar;
    use crate::algorithms::breadth_first::breadth_first;

    const BASE: &str = indoc! {"
        ########
        #    T #
        # #### #
        #   P# #
        # ##   #
        #      #
        ########
    "};

    fn state(x: CoordIntrinsic, y: CoordIntrinsic) -> Maze2DState {
        Maze2DState::new(x, y)
    }

    #[test]
    fn parse() {
        let problem = Maze2DProblem::try_from(BASE).unwrap();
        assert_eq!(problem.space().dimensions(), (8, 7));
        assert_eq!(problem.start(), state(5, 1));
        assert_eq!(problem.goal(), state(4, 3));
        assert_eq!(problem.open_cells(), 23);
        assert_eq!(problem.heuristic_kind(), Maze2DHeuristic::Zero);
        assert_eq!(problem.costs(), &Maze2DCosts::default());
    }

    #[test]
    fn parse_lowercase_markers() {
        let problem = Maze2DProblem::try_from("#####\n#t p#\n#####").unwrap();
        assert_eq!(problem.start(), state(1, 1));
        assert_eq!(problem.goal(), state(3, 1));
    }

    #[test]
    fn open_right_edge() {
        let problem = Maze2DProblem::try_from("#####\n#T P \n#####   \n").unwrap();
        assert_eq!(problem.open_cells(), 4);
        assert_eq!(problem.start(), state(1, 1));
        assert_eq!(
            problem.actions(&state(4, 1)).as_slice(),
            &[Maze2DAction::Left]
        );

        let result = breadth_first(&problem).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            Maze2DProblem::try_from("\n  \n"),
            Err(Maze2DProblemParseError::EmptyInput)
        ));
        assert!(matches!(
            Maze2DProblem::try_from("#####\n#T P#\n###"),
            Err(Maze2DProblemParseError::RaggedRow {
                y: 2,
                expected: 5,
                found: 3
            })
        ));
        assert!(matches!(
            Maze2DProblem::try_from("#####\n#TxP#\n#####"),
            Err(Maze2DProblemParseError::InvalidCell {
                e: Maze2DCellParseError::InvalidCharacter('x'),
                x: 2,
                y: 1
            })
        ));
        assert!(matches!(
            Maze2DProblem::try_from("#####\n#  P#\n#####"),
            Err(Maze2DProblemParseError::MissingStart)
        ));
        assert!(matches!(
            Maze2DProblem::try_from("#####\n#T  #\n#####"),
            Err(Maze2DProblemParseError::MissingGoal)
        ));
        assert!(matches!(
            Maze2DProblem::try_from("#####\n#TTP#\n#####"),
            Err(Maze2DProblemParseError::MultipleStarts(s)) if s == state(2, 1)
        ));
        assert!(matches!(
            Maze2DProblem::try_from("#####\n#TPp#\n#####"),
            Err(Maze2DProblemParseError::MultipleGoals(s)) if s == state(3, 1)
        ));
    }

    #[test]
    fn parse_missing_file() {
        let p = std::path::Path::new("/nonexistent/maze.txt");
        assert!(matches!(
            Maze2DProblem::try_from(p),
            Err(Maze2DProblemParseError::IOError { .. })
        ));
    }

    #[test]
    fn actions_skip_walls_and_edges() {
        let problem = Maze2DProblem::try_from(BASE).unwrap();

        assert_eq!(
            problem.actions(&state(6, 1)).as_slice(),
            &[Maze2DAction::Down, Maze2DAction::Left]
        );
        assert_eq!(
            problem.actions(&state(1, 3)).as_slice(),
            &[
                Maze2DAction::Up,
                Maze2DAction::Down,
                Maze2DAction::Right
            ]
        );

        // An open bottom row has no way down.
        let problem = Maze2DProblem::try_from("#T#\n# #\n#P#").unwrap();
        assert_eq!(
            problem.actions(&state(1, 2)).as_slice(),
            &[Maze2DAction::Up]
        );
        assert_eq!(problem.result(&state(1, 2), &Maze2DAction::Down), state(1, 2));
    }

    #[test]
    fn result_moves_one_cell() {
        let problem = Maze2DProblem::try_from(BASE).unwrap();
        let s = state(3, 3);
        assert_eq!(problem.result(&s, &Maze2DAction::Up), state(3, 2));
        assert_eq!(problem.result(&s, &Maze2DAction::Down), state(3, 4));
        assert_eq!(problem.result(&s, &Maze2DAction::Right), state(4, 3));
        assert_eq!(problem.result(&s, &Maze2DAction::Left), state(2, 3));
    }

    #[test]
    fn costs_are_per_instance() {
        let cheap = Maze2DProblem::try_from(BASE).unwrap();
        let steep = cheap
            .clone()
            .with_costs(Maze2DCosts::default().with_cost(Maze2DAction::Up, 5.0));

        let (s, a) = (state(1, 3), Maze2DAction::Up);
        let next = cheap.result(&s, &a);
        assert_eq!(cheap.cost(&s, &a, &next), Maze2DCost::new(1.0));
        assert_eq!(steep.cost(&s, &a, &next), Maze2DCost::new(5.0));
        assert_eq!(
            steep.cost(&s, &Maze2DAction::Down, &state(1, 4)),
            Maze2DCost::new(1.0)
        );
        assert_eq!(steep.costs().to_string(), "↑:5 ↓:1 →:1 ←:1");
    }

    #[test]
    fn heuristics() {
        let (s, g) = (state(1, 1), state(4, 5));

        assert_eq!(Maze2DHeuristic::Zero.h(&s, &g, 1.0), 0.0);
        assert_eq!(Maze2DHeuristic::Constant(1.0).h(&s, &g, 1.0), 1.0);
        assert_eq!(Maze2DHeuristic::Manhattan.h(&s, &g, 1.0), 7.0);
        assert_eq!(Maze2DHeuristic::Euclidean.h(&s, &g, 1.0), 5.0);
        assert_eq!(Maze2DHeuristic::Chebyshev.h(&s, &g, 1.0), 4.0);
        assert_eq!(Maze2DHeuristic::Manhattan.h(&g, &s, 0.5), 3.5);
        assert_eq!(Maze2DHeuristic::Euclidean.h(&g, &g, 1.0), 0.0);
    }

    #[test]
    fn heuristic_scales_with_cheapest_action() {
        let costs = Maze2DCosts::default()
            .with_cost(Maze2DAction::Up, 5.0)
            .with_cost(Maze2DAction::Left, 0.5);
        assert_eq!(costs.cheapest(), 0.5);

        let problem = Maze2DProblem::try_from(BASE)
            .unwrap()
            .with_heuristic(Maze2DHeuristic::Manhattan)
            .with_costs(costs);
        // 1 column and 2 rows away from the goal
        assert_eq!(problem.heuristic(&problem.start()), Maze2DCost::new(1.5));
    }

    #[test]
    fn with_goal_at_needs_an_open_cell() {
        let problem = Maze2DProblem::try_from(BASE).unwrap();
        assert!(problem.clone().with_goal_at(0, 0).is_none());
        assert!(problem.clone().with_goal_at(100, 1).is_none());
        let moved = problem.with_goal_at(1, 5).unwrap();
        assert_eq!(moved.goal(), state(1, 5));
        assert!(moved.is_goal(&state(1, 5)));
        assert!(!moved.is_goal(&state(4, 3)));
    }

    #[test]
    fn render_path() {
        let problem = Maze2DProblem::try_from(BASE).unwrap();
        let result = breadth_first(&problem).unwrap();
        assert_eq!(result.len(), 7);

        assert_eq!(
            problem.render_path(&result),
            indoc! {"
                ########
                #    T·#
                # ####·#
                #   P#·#
                # ##···#
                #      #
                ########
            "}
        );
    }

    #[test]
    fn render_without_path() {
        let problem = Maze2DProblem::try_from("#####\n#T#P#\n#####").unwrap();
        let result = astar(&problem).unwrap();
        assert!(!result.found());
        assert_eq!(problem.render_path(&result), "#####\n#T#P#\n#####\n");
    }

    #[test]
    fn display() {
        let problem = Maze2DProblem::try_from("#####\n#T P#\n#####")
            .unwrap()
            .with_heuristic(Maze2DHeuristic::Manhattan);
        assert_eq!(
            problem.to_string(),
            "Maze2DProblem(5x3) (s:(1,1), g:(3,1), h:manhattan, costs:[↑:1 ↓:1 →:1 ←:1]):\n\
             #####\n\
             #T P#\n\
             #####\n"
        );
        assert_eq!(format!("{problem:?}"), "Maze2DProblem(5, 3)((1,1)->(3,1), manhattan)");
    }

    #[test]
    fn expensive_up_changes_the_best_path() {
        let costs = Maze2DCosts::default().with_cost(Maze2DAction::Up, 5.0);
        let problem = Maze2DProblem::try_from(BASE)
            .unwrap()
            .with_heuristic(Maze2DHeuristic::Manhattan)
            .with_costs(costs);

        let bfs = breadth_first(&problem).unwrap();
        assert_eq!(bfs.len(), 7);
        assert_eq!(bfs.cost(), Maze2DCost::new(11.0));

        // Around the right side, never going up.
        let astar = astar(&problem).unwrap();
        assert_eq!(astar.len(), 9);
        assert_eq!(astar.cost(), Maze2DCost::new(9.0));
        assert!(astar.actions().all(|a| a != Maze2DAction::Up));
    }
}
