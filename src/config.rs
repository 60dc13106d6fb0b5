use crate::date_utils::TimestampOptions;
use std::path::{Path, PathBuf};

/// Rows shown per raw-data page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Runtime settings for an exploration session.
///
/// The binary always uses [`ExplorerConfig::default`]. The builders are for
/// callers that construct a [`Session`](crate::session::Session) themselves.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Directory holding the per-city CSV files.
    pub data_dir: PathBuf,
    pub page_size: usize,
    pub timestamp: TimestampOptions,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            page_size: DEFAULT_PAGE_SIZE,
            timestamp: TimestampOptions::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// A page size of zero is bumped to one so paging always makes progress.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_timestamp_options(mut self, options: TimestampOptions) -> Self {
        self.timestamp = options;
        self
    }

    pub fn resolve(&self, file_name: &str) -> PathBuf {
        Path::new(&self.data_dir).join(file_name)
    }
}
