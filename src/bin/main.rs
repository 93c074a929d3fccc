use std::path::PathBuf;

use anstream::println;
use clap::Parser;
use indoc::indoc;
use owo_colors::OwoColorize;

use walk_search::algorithms::graph_search::GraphSearch;
use walk_search::config::HeuristicPolicy;
use walk_search::config::SearchConfig;
use walk_search::config::Strategy;
use walk_search::error::Result;
use walk_search::frontier::FifoFrontier;
use walk_search::frontier::Frontier;
use walk_search::frontier::LifoFrontier;
use walk_search::frontier::PriorityFrontier;
use walk_search::problems::maze_2d::Maze2DAction;
use walk_search::problems::maze_2d::Maze2DCost;
use walk_search::problems::maze_2d::Maze2DCosts;
use walk_search::problems::maze_2d::Maze2DHeuristic;
use walk_search::problems::maze_2d::Maze2DProblem;
use walk_search::problems::maze_2d::Maze2DState;
use walk_search::result::SearchResult;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const MAP_BASE: &str = indoc! {"
    ########
    #    T #
    # #### #
    #   P# #
    # ##   #
    #      #
    ########
"};

const MAP_5B: &str = indoc! {"
    ########
    #  P   #
    # #### #
    #    # #
    # ##   #
    #   T  #
    ########
"};

const MAP_5D: &str = indoc! {"
    ###########
    #       P #
    # ####### #
    #T      # #
    #         #
    ###########
"};

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(long_version = walk_search::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Map files to solve instead of the built-in scenarios.
    #[arg()]
    pub problems: Vec<PathBuf>,

    /// Search strategies to run. Defaults to every experiment.
    #[arg(short, long, value_enum)]
    pub strategy: Vec<Strategy>,

    /// Expand states again every time they are reached.
    #[arg(long)]
    pub tree_search: bool,

    #[arg(long, env = "WALK_SEARCH_STEP_LIMIT")]
    pub step_limit: Option<usize>,
    #[arg(long, env = "WALK_SEARCH_DEPTH_LIMIT")]
    pub depth_limit: Option<usize>,

    #[arg(long, value_enum, default_value_t = HeuristicPolicy::Clamp)]
    pub heuristic_policy: HeuristicPolicy,

    /// Let A* expand states again when it finds a cheaper way in.
    #[arg(long)]
    pub reopen_cheaper: bool,

    /// Action costs used for map files.
    #[arg(long, default_value_t = 1.0)]
    pub up: f64,
    #[arg(long, default_value_t = 1.0)]
    pub down: f64,
    #[arg(long, default_value_t = 1.0)]
    pub right: f64,
    #[arg(long, default_value_t = 1.0)]
    pub left: f64,

    /// Print the memory used by each search.
    #[arg(long)]
    pub memory_stats: bool,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

impl Args {
    fn config(&self, strategy: Strategy) -> SearchConfig {
        let mut config = SearchConfig::new(strategy)
            .with_graph_search(!self.tree_search)
            .with_heuristic_policy(self.heuristic_policy)
            .with_reopen_cheaper(self.reopen_cheaper);
        if let Some(limit) = self.step_limit {
            config = config.with_step_limit(limit);
        }
        if let Some(limit) = self.depth_limit {
            config = config.with_depth_limit(limit);
        }
        config
    }

    fn costs(&self) -> Maze2DCosts {
        Maze2DCosts::default()
            .with_cost(Maze2DAction::Up, self.up)
            .with_cost(Maze2DAction::Down, self.down)
            .with_cost(Maze2DAction::Right, self.right)
            .with_cost(Maze2DAction::Left, self.left)
    }
}

struct Scenario {
    name: String,
    problem: Maze2DProblem,
}

struct Experiment {
    name: &'static str,
    strategy: Strategy,
    heuristic: Maze2DHeuristic,
}

/// Uninformed searches get a constant heuristic, which they never look at.
const EXPERIMENTS: [Experiment; 4] = [
    Experiment {
        name: "Breadth-first",
        strategy: Strategy::BreadthFirst,
        heuristic: Maze2DHeuristic::Constant(1.0),
    },
    Experiment {
        name: "Depth-first",
        strategy: Strategy::DepthFirst,
        heuristic: Maze2DHeuristic::Constant(1.0),
    },
    Experiment {
        name: "A* Manhattan",
        strategy: Strategy::AStar,
        heuristic: Maze2DHeuristic::Manhattan,
    },
    Experiment {
        name: "A* Euclidean",
        strategy: Strategy::AStar,
        heuristic: Maze2DHeuristic::Euclidean,
    },
];

fn builtin_scenarios() -> Vec<Scenario> {
    let steep = Maze2DCosts::default().with_cost(Maze2DAction::Up, 5.0);

    [
        ("Base", MAP_BASE, Maze2DCosts::default()),
        ("5b", MAP_5B, Maze2DCosts::default()),
        ("5c", MAP_BASE, steep),
        ("5d", MAP_5D, Maze2DCosts::default()),
    ]
    .into_iter()
    .filter_map(|(name, map, costs)| match Maze2DProblem::try_from(map) {
        Ok(problem) => Some(Scenario {
            name: name.to_string(),
            problem: problem.with_costs(costs),
        }),
        Err(e) => {
            log::error!("Failed to parse scenario {name}: {e}");
            None
        }
    })
    .collect()
}

fn file_scenarios(args: &Args) -> Vec<Scenario> {
    args.problems
        .iter()
        .filter_map(|p| match Maze2DProblem::try_from(p.as_path()) {
            Ok(problem) => Some(Scenario {
                name: p.display().to_string(),
                problem: problem.with_costs(args.costs()),
            }),
            Err(e) => {
                log::error!("Skipping {p:?}: {e}");
                None
            }
        })
        .collect()
}

fn run<F>(
    problem: &Maze2DProblem,
    config: SearchConfig,
    memory_stats: bool,
) -> Result<SearchResult<Maze2DState, Maze2DAction, Maze2DCost>>
where
    F: Frontier<Maze2DCost>,
{
    let mut search = GraphSearch::<Maze2DProblem, F, Maze2DState, Maze2DAction, Maze2DCost>::new(
        problem, config,
    )?;
    let result = search.run();
    if memory_stats {
        if let Err(e) = search.write_memory_stats(anstream::stdout()) {
            log::warn!("Failed to write memory stats: {e}");
        }
    }
    result
}

fn solve(
    problem: &Maze2DProblem,
    config: SearchConfig,
    memory_stats: bool,
) -> Result<SearchResult<Maze2DState, Maze2DAction, Maze2DCost>> {
    match config.strategy {
        Strategy::BreadthFirst => run::<FifoFrontier>(problem, config, memory_stats),
        Strategy::DepthFirst => run::<LifoFrontier>(problem, config, memory_stats),
        Strategy::AStar => run::<PriorityFrontier<Maze2DCost>>(problem, config, memory_stats),
    }
}

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    args.color.write_global();

    let scenarios = if args.problems.is_empty() {
        builtin_scenarios()
    } else {
        file_scenarios(&args)
    };
    log::info!("Running {} scenarios", scenarios.len());

    for scenario in &scenarios {
        println!(
            "{} {}",
            "Scenario".bold(),
            scenario.name.bold().bright_blue()
        );
        println!("Costs: {}", scenario.problem.costs());

        for experiment in EXPERIMENTS
            .iter()
            .filter(|e| args.strategy.is_empty() || args.strategy.contains(&e.strategy))
        {
            println!("{}", experiment.name.green());
            let problem = scenario.problem.clone().with_heuristic(experiment.heuristic);

            match solve(&problem, args.config(experiment.strategy), args.memory_stats) {
                Ok(result) => {
                    println!("{}", problem.render_path(&result));
                    println!("{}", result.summary());
                }
                Err(e) => {
                    log::error!("{} failed on {}: {e}", experiment.name, scenario.name);
                }
            }
            println!("{}", format!("End {}", experiment.name).green());
            println!();
        }
    }

    Ok(())
}
