//! Category and tag index pages: a bucket navigation line, then one table per bucket.

use super::{escape_markdown, render_header};
use crate::{
    config::{PageConfig, TaxonomyConfig},
    data::Taxonomy,
};
use anyhow::Result;
use std::fmt::Write;

pub fn render_index(
    taxonomy: &Taxonomy,
    config: &TaxonomyConfig,
    page: &PageConfig,
) -> Result<String> {
    let groups = taxonomy.grouped();
    let catch_all = taxonomy.catch_all();
    let mut markdown = render_header(&config.title, page)?;

    writeln!(markdown, "## {}", config.nav_title)?;
    let nav = groups
        .iter()
        .map(|group| {
            format!(
                "[{}](#{})",
                escape_markdown(&group.bucket.label(catch_all)),
                group.bucket.anchor(catch_all)
            )
        })
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(markdown, "{nav}\n")?;

    for group in &groups {
        writeln!(
            markdown,
            "### <a id='{}'>{}</a>\n",
            group.bucket.anchor(catch_all),
            escape_markdown(&group.bucket.label(catch_all))
        )?;
        writeln!(markdown, "| {} | {} |", config.term_column, config.count_column)?;
        markdown.push_str("|------|----------|\n");

        for term in &group.terms {
            writeln!(
                markdown,
                "| [{}]({}) | {} |",
                escape_markdown(&term.name),
                term.url.as_str(),
                term.count()
            )?;
        }
        markdown.push('\n');
    }

    Ok(markdown)
}
