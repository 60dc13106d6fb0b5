use crate::console::Console;
use crate::dataset::Dataset;
use crate::error::Result;
use log::debug;
use std::io::{BufRead, Write};

const MORE_QUESTION: &str = "Would you like to see some (more) lines of raw data? Enter yes or no.";
const STOPPED: &str = "Okay, stopping data display.";
const INVALID: &str = "Invalid input. Please answer with 'yes' or 'no'.";
const EXHAUSTED: &str = "No more data to display.";

/// Walks a dataset in contiguous, non-overlapping pages.
pub struct RawDataPager<'a> {
    dataset: &'a Dataset,
    page_size: usize,
    offset: usize,
    total: usize,
}

impl<'a> RawDataPager<'a> {
    pub fn new(dataset: &'a Dataset, page_size: usize) -> Self {
        Self {
            dataset,
            page_size: page_size.max(1),
            offset: 0,
            total: dataset.num_rows(),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.total
    }

    /// Next page and the position of its first row. The last page may be
    /// short; once exhausted this returns `None`.
    pub fn next_page(&mut self) -> Option<(usize, Dataset)> {
        if self.is_exhausted() {
            return None;
        }
        let start = self.offset;
        let page = self.dataset.slice(start, self.page_size);
        self.offset += page.num_rows();
        Some((start, page))
    }
}

/// Offer raw rows page by page until the user declines or the data runs out.
/// Returns how many rows were shown.
pub fn display_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dataset: &Dataset,
    page_size: usize,
) -> Result<usize> {
    let mut pager = RawDataPager::new(dataset, page_size);

    while !pager.is_exhausted() {
        match console.ask(MORE_QUESTION)?.as_str() {
            "yes" => {
                if let Some((start, page)) = pager.next_page() {
                    debug!("showing rows {}..{}", start, start + page.num_rows());
                    console.say(page.display(start))?;
                }
            }
            "no" => {
                console.say(format!("\n{}", STOPPED))?;
                break;
            }
            _ => console.say(format!("\n{}", INVALID))?,
        }
    }

    if pager.is_exhausted() {
        console.say(format!("\n{}", EXHAUSTED))?;
    }
    Ok(pager.offset())
}
