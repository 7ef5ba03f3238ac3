//! Post list page: every admitted post in the order it is given.
//!
//! ```markdown
//! # 博客文章列表
//!
//! ## [Hello](/blog/hello/)
//! **发布日期**：2024-05-01
//!
//! A short summary.
//!
//! ---
//! ```

use super::{escape_markdown, render_header};
use crate::{
    config::{PageConfig, PostsConfig},
    content::Document,
    utils::date::is_unknown,
};
use anyhow::Result;
use std::fmt::Write;

pub fn render_posts(
    posts: &[&Document],
    config: &PostsConfig,
    page: &PageConfig,
) -> Result<String> {
    let mut markdown = render_header(&config.title, page)?;

    writeln!(markdown, "# {}\n", config.title)?;
    if !config.intro.is_empty() {
        writeln!(markdown, "{}\n", config.intro)?;
    }

    for post in posts {
        let date = if is_unknown(post.date) {
            page.unknown_date.clone()
        } else {
            post.date.format("%Y-%m-%d").to_string()
        };

        writeln!(markdown, "## [{}]({})", escape_markdown(&post.title), post.url)?;
        writeln!(markdown, "**{}**：{date}\n", config.date_label)?;
        writeln!(markdown, "{}\n", post.summary)?;
        markdown.push_str("---\n\n");
    }

    Ok(markdown)
}
