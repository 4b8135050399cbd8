//! Spinner that reports exploration progress on the terminal

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Error, Result, graph::StateGraph, identifiers::StateId, ports::ExploreObserver,
    puzzle::Configuration,
};

/// Progress spinner observer - shows discovered state count and current level
pub struct ProgressObserver {
    spinner: Option<ProgressBar>,
    levels: usize,
    level: usize,
    discovered: u64,
}

impl ProgressObserver {
    /// Spinner redraws are throttled to one per this many states.
    const TICK_EVERY: u64 = 256;

    pub fn new() -> Self {
        Self {
            spinner: None,
            levels: 0,
            level: 0,
            discovered: 0,
        }
    }

    fn message(&self) -> String {
        format!("level {}/{}", self.level + 1, self.levels)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressObserver {
    // A run that failed before `on_explore_end` leaves the spinner ticking.
    fn drop(&mut self) {
        let Some(spinner) = self.spinner.take() else {
            return;
        };
        if !spinner.is_finished() {
            spinner.abandon_with_message(format!("aborted at level {}", self.level + 1));
        }
    }
}

impl ExploreObserver for ProgressObserver {
    fn on_explore_start(&mut self, levels: usize) -> Result<()> {
        self.levels = levels;
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} states ({msg})")
                .map_err(|e| Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?,
        );
        spinner.set_message(self.message());
        spinner.enable_steady_tick(Duration::from_millis(120));
        self.spinner = Some(spinner);
        Ok(())
    }

    fn on_level_entered(&mut self, level: usize) -> Result<()> {
        self.level = level;
        if let Some(spinner) = &self.spinner {
            spinner.set_message(self.message());
        }
        Ok(())
    }

    fn on_state_discovered(&mut self, _id: StateId, _configuration: &Configuration) -> Result<()> {
        self.discovered += 1;
        if !self.discovered.is_multiple_of(Self::TICK_EVERY) {
            return Ok(());
        }
        if let Some(spinner) = &self.spinner {
            spinner.set_position(self.discovered);
        }
        Ok(())
    }

    fn on_explore_end(&mut self, graph: &StateGraph) -> Result<()> {
        if let Some(spinner) = &self.spinner {
            spinner.set_position(graph.len() as u64);
            spinner.finish_with_message(format!("{} levels", self.levels));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error,
        graph::{ExploreConfig, explore_observed},
        puzzle::Campaign,
    };

    #[test]
    fn failed_run_abandons_the_spinner() {
        let campaign = Campaign::builtin().unwrap();
        let mut observer = ProgressObserver::new();
        let err = explore_observed(
            &campaign,
            &ExploreConfig::new().with_max_states(10),
            &mut observer,
        )
        .unwrap_err();
        assert!(matches!(err, Error::StateSpaceExceeded { .. }));

        let spinner = observer.spinner.clone().unwrap();
        assert!(!spinner.is_finished());
        drop(observer);
        assert!(spinner.is_finished());
    }

    #[test]
    fn finished_run_keeps_its_final_message() {
        let campaign = Campaign::builtin().unwrap();
        let mut observer = ProgressObserver::new();
        explore_observed(&campaign, &ExploreConfig::default(), &mut observer).unwrap();
        let spinner = observer.spinner.clone().unwrap();
        assert!(spinner.is_finished());
        drop(observer);
        assert_eq!(spinner.message(), "8 levels");
    }
}
