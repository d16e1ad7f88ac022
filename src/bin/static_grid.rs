//! Redraws a blank, fully walled grid every frame without carving anything.

use maze_dfs::{app, Config, GeneratorKind};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::DEFAULT.with_fps(60)?;
    app::run(config, GeneratorKind::FreshGrid)
}
