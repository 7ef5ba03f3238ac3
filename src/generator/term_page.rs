//! One page per term, listing its documents newest first.

use super::{escape_markdown, render_header};
use crate::{
    config::{PageConfig, TaxonomyConfig},
    data::Term,
    utils::date::is_unknown,
};
use anyhow::Result;
use std::fmt::Write;

pub fn render_term_page(
    term: &Term,
    config: &TaxonomyConfig,
    page: &PageConfig,
) -> Result<String> {
    let title = format!("{}{}", config.page_title_prefix, term.name);
    let mut markdown = render_header(&title, page)?;

    writeln!(markdown, "### [{}]({})\n", config.index_label, config.index_url)?;

    for entry in term.pages_by_date() {
        let date = if is_unknown(entry.date) {
            page.unknown_date.clone()
        } else {
            entry.date.format("%Y-%m-%d").to_string()
        };
        writeln!(
            markdown,
            "#### [{date}] [{}]({})",
            escape_markdown(&entry.title),
            entry.url
        )?;
        markdown.push_str("---\n\n");
    }

    Ok(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::TaxonomyKind,
        content::parse_front_matter,
        data::{PageRef, Taxonomy},
        utils::date::UNKNOWN_DATE,
    };
    use chrono::NaiveDate;

    fn page(url: &str, title: &str, date: NaiveDate) -> PageRef {
        PageRef {
            url: url.into(),
            title: title.into(),
            date,
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_term_page_entries_newest_first() {
        let config = TaxonomyConfig::defaults_for(TaxonomyKind::Tags);
        let mut tags = Taxonomy::new(TaxonomyKind::Tags, &config);
        tags.add_membership(&page("/blog/old/", "Old", ymd(2023, 2, 1)), "日志", None);
        tags.add_membership(&page("/blog/undated/", "Undated", UNKNOWN_DATE), "日志", None);
        tags.add_membership(&page("/blog/new/", "New [draft]", ymd(2024, 6, 9)), "日志", None);

        let term = tags.term("日志").unwrap();
        let markdown = render_term_page(term, &config, &PageConfig::default()).unwrap();

        let front_matter = parse_front_matter(&markdown).unwrap();
        assert_eq!(front_matter.text("title"), Some("🏷️日志"));
        assert!(markdown.contains("### [全部标签](/tags)\n\n"));

        let body = markdown.split("### [全部标签](/tags)\n\n").nth(1).unwrap();
        assert_eq!(
            body,
            "#### [2024-06-09] [New \\[draft\\]](/blog/new/)\n---\n\n\
             #### [2023-02-01] [Old](/blog/old/)\n---\n\n\
             #### [未知日期] [Undated](/blog/undated/)\n---\n\n"
        );
    }
}
