use std::path::PathBuf;

/// Runtime settings resolved from the command line and environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where exports and snapshots are written.
    pub data_dir: PathBuf,
    /// Fixed seed for the guessing game; random when absent.
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            seed: None,
            verbose: false,
        }
    }
}

impl Settings {
    pub fn notes_export_path(&self) -> PathBuf {
        self.data_dir.join("notas_exportadas.txt")
    }

    pub fn expenses_path(&self) -> PathBuf {
        self.data_dir.join("expenses.json")
    }

    /// Filter directive for the tracing subscriber when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "aula=debug"
        } else {
            "warn"
        }
    }
}
