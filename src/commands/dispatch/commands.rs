//! Command implementations for all roadnet commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use roadnet_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::{
        BoundedPathArgs, CyclesArgs, ExactTourArgs, PairArgs, SampleArgs, StartArgs, TreeArgs,
    };
    use crate::commands::dispatch::trace_command;
    use crate::commands::tree::TreeAlgorithm;
    use crate::commands::{cities, cycles, path, sample, tour, traverse, tree};

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        let result = match cmd {
            Commands::Cities => execute_cities(ctx),
            Commands::Roads => execute_roads(ctx),
            Commands::Bfs(args) => execute_traverse(ctx, args, traverse::Order::Breadth),
            Commands::Dfs(args) => execute_traverse(ctx, args, traverse::Order::Depth),
            Commands::Dijkstra(args) => execute_dijkstra(ctx, args),
            Commands::ShortestPath(args) => execute_shortest_path(ctx, args),
            Commands::BoundedPath(args) => execute_bounded_path(ctx, args),
            Commands::Prim(args) => execute_tree(ctx, args, TreeAlgorithm::Prim),
            Commands::Kruskal(args) => execute_tree(ctx, args, TreeAlgorithm::Kruskal),
            Commands::GreedyTour(args) => execute_greedy_tour(ctx, args),
            Commands::ExactTour(args) => execute_exact_tour(ctx, args),
            Commands::Cycles(args) => execute_cycles(ctx, args),
            Commands::SortDistance(args) => execute_sort_distance(ctx, args),
            Commands::Sample(args) => execute_sample(ctx, args),
        };
        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }

    fn execute_cities(ctx: &CommandContext) -> Result<()> {
        cities::execute_names(ctx.cli, &ctx.load_graph()?)
    }

    fn execute_roads(ctx: &CommandContext) -> Result<()> {
        cities::execute_roads(ctx.cli, &ctx.load_graph()?)
    }

    fn execute_traverse(ctx: &CommandContext, args: &StartArgs, order: traverse::Order) -> Result<()> {
        traverse::execute(ctx.cli, &ctx.load_graph()?, &args.start, order)
    }

    fn execute_dijkstra(ctx: &CommandContext, args: &PairArgs) -> Result<()> {
        path::execute_dijkstra(ctx.cli, &ctx.load_graph()?, &args.from, &args.to)
    }

    fn execute_shortest_path(ctx: &CommandContext, args: &PairArgs) -> Result<()> {
        path::execute_shortest_path(ctx.cli, &ctx.load_graph()?, &args.from, &args.to)
    }

    fn execute_bounded_path(ctx: &CommandContext, args: &BoundedPathArgs) -> Result<()> {
        let max_nodes = args
            .max_nodes
            .unwrap_or(ctx.config.search.default_max_nodes);
        path::execute_bounded(ctx.cli, &ctx.load_graph()?, &args.from, &args.to, max_nodes)
    }

    fn execute_tree(ctx: &CommandContext, args: &TreeArgs, algorithm: TreeAlgorithm) -> Result<()> {
        tree::execute(ctx.cli, &ctx.load_graph()?, algorithm, args.allow_partial)
    }

    fn execute_greedy_tour(ctx: &CommandContext, args: &StartArgs) -> Result<()> {
        tour::execute_greedy(ctx.cli, &ctx.load_graph()?, &args.start)
    }

    fn execute_exact_tour(ctx: &CommandContext, args: &ExactTourArgs) -> Result<()> {
        tour::check_city_limit(args.cities.len(), ctx.config.limits.max_tour_cities)?;
        tour::execute_exact(ctx.cli, &ctx.load_graph()?, &args.cities)
    }

    fn execute_cycles(ctx: &CommandContext, args: &CyclesArgs) -> Result<()> {
        let max_nodes = args
            .max_nodes
            .unwrap_or(ctx.config.search.default_max_nodes);
        cycles::check_node_limit(max_nodes, ctx.config.limits.max_cycle_nodes)?;
        cycles::execute(ctx.cli, &ctx.load_graph()?, &args.start, max_nodes)
    }

    fn execute_sort_distance(ctx: &CommandContext, args: &StartArgs) -> Result<()> {
        cities::execute_by_distance(ctx.cli, &ctx.load_graph()?, &args.start)
    }

    fn execute_sample(ctx: &CommandContext, args: &SampleArgs) -> Result<()> {
        sample::execute(ctx.cli, args.output.as_deref())
    }
}
