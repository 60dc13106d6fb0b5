use crate::collector::get_filters;
use crate::config::ExplorerConfig;
use crate::console::Console;
use crate::error::Result;
use crate::loader::load_data;
use crate::pager::display_raw_data;
use crate::reports;
use log::info;
use std::io::{BufRead, Write};

const RESTART_QUESTION: &str = "Would you like to restart? Enter yes or no.";
pub const FAREWELL: &str =
    "That's okay, see you next time you wanna explore some more bikesharing stats.";

/// The interactive loop: filters, load, raw pages, reports, restart.
pub struct Session<R, W> {
    config: ExplorerConfig,
    console: Console<R, W>,
    iterations: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: ExplorerConfig, console: Console<R, W>) -> Self {
        Self {
            config,
            console,
            iterations: 0,
        }
    }

    /// Completed iterations so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// One pass over a freshly loaded table. The table is dropped on return.
    pub fn run_once(&mut self) -> Result<()> {
        let selection = get_filters(&mut self.console)?;
        info!("iteration {}: {}", self.iterations + 1, selection);

        let dataset = load_data(&self.config, &selection)?;
        display_raw_data(&mut self.console, &dataset, self.config.page_size)?;
        reports::run_all(&mut self.console, &dataset)?;

        self.iterations += 1;
        Ok(())
    }

    /// Loop until the restart answer is anything but "yes".
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.run_once()?;

            let restart = self.console.ask(RESTART_QUESTION)?;
            if restart != "yes" {
                self.console.say(FAREWELL)?;
                info!("session ended after {} iteration(s)", self.iterations);
                return Ok(());
            }
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
