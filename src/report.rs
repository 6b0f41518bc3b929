//! # Report Builder Module
//!
//! Sorts the probed records two ways and lays them out as text.
//!
//! ## Views:
//! - by resolution: ascending width, files without a width first
//! - by name: ascending path, byte-wise comparison
//!
//! ## Renderings:
//! - `host_lines()`: console output with the table column header. A single
//!   record skips both "Ordered by" sections.
//! - `log_lines()`: the `.log` file, always both sections, no column header

use crate::record::VideoRecord;

pub const RESOLUTION_HEADER: [&str; 3] = ["", "Ordered by resolution:", "----------------------"];
pub const NAME_HEADER: [&str; 3] = ["", "Ordered by name:", "----------------"];
pub const RESULTS_HEADER: [&str; 3] = ["", "Resolution  Size (Mb)   File", "----------  ---------   ----"];
pub const FINISHED_BANNER: [&str; 2] = ["", "Finished! Here are the results:"];

/// Text views over the records of one run
pub struct Report<'a> {
    records: &'a [VideoRecord],
}

impl<'a> Report<'a> {
    pub fn new(records: &'a [VideoRecord]) -> Self {
        Self { records }
    }

    /// Records in ascending width order (stable)
    pub fn by_resolution(&self) -> Vec<&'a VideoRecord> {
        let mut sorted: Vec<&VideoRecord> = self.records.iter().collect();
        sorted.sort_by_key(|r| r.width);
        sorted
    }

    /// Records in ordinal path order (stable)
    pub fn by_name(&self) -> Vec<&'a VideoRecord> {
        let mut sorted: Vec<&VideoRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.file.cmp(&b.file));
        sorted
    }

    /// Lines written to the console
    pub fn host_lines(&self) -> Vec<String> {
        let mut output = to_lines(&FINISHED_BANNER);

        if let [record] = self.records {
            output.extend(to_lines(&RESULTS_HEADER));
            output.push(record.result_line());
            output.push(String::new());
            return output;
        }

        output.extend(to_lines(&RESOLUTION_HEADER));
        output.extend(to_lines(&RESULTS_HEADER));
        output.extend(self.by_resolution().iter().map(|r| r.result_line()));

        output.extend(to_lines(&NAME_HEADER));
        output.extend(to_lines(&RESULTS_HEADER));
        output.extend(self.by_name().iter().map(|r| r.result_line()));

        output.push(String::new());
        output
    }

    /// Lines written to the `.log` file
    pub fn log_lines(&self) -> Vec<String> {
        let mut output = to_lines(&RESOLUTION_HEADER);
        output.extend(self.by_resolution().iter().map(|r| r.result_line()));
        output.extend(to_lines(&NAME_HEADER));
        output.extend(self.by_name().iter().map(|r| r.result_line()));
        output
    }
}

fn to_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}
