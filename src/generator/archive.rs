//! Yearly archive page.
//!
//! ```markdown
//! | 年份 | 文章总数 |
//! |------|----------|
//! | [2024年](/blog/archive/2024/) | 12 |
//! | 未知年份 | 1 |
//! ```

use super::render_header;
use crate::{
    config::{ArchiveConfig, PageConfig},
    data::ArchiveYear,
};
use anyhow::Result;
use std::fmt::Write;

/// Render the archive table. Rows keep the order of `years`.
pub fn render_archive(
    years: &[(ArchiveYear, usize)],
    config: &ArchiveConfig,
    page: &PageConfig,
) -> Result<String> {
    let mut markdown = render_header(&config.title, page)?;

    writeln!(markdown, "| {} | {} |", config.year_column, config.count_column)?;
    markdown.push_str("|------|----------|\n");

    let prefix = config.link_prefix.trim_end_matches('/');
    for (year, count) in years {
        match year {
            ArchiveYear::Year(year) => writeln!(
                markdown,
                "| [{year}{}]({prefix}/{year}/) | {count} |",
                config.year_suffix
            )?,
            ArchiveYear::Unknown => writeln!(markdown, "| {} | {count} |", config.unknown_year)?,
        }
    }

    Ok(markdown)
}
