use maze_dfs::{app, Config, GeneratorKind};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    app::run(Config::DEFAULT, GeneratorKind::Backtracker)
}
