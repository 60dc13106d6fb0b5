use bikeshare_explorer::{Console, ExplorerConfig, Result, Session};
use std::io;

fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());

    Session::new(ExplorerConfig::default(), console).run()
}
