use std::path::PathBuf;

use anyhow::{Context, Result};
use spdlog::{debug, info};

use crate::config::Config;
use crate::post::load_feed;
use crate::view::templates::TemplateSources;
use crate::view::{RenderContext, Views};
use crate::writer::{SiteWriter, INDEX_FILE_NAME};

#[derive(Debug)]
pub struct GenerationSummary {
    pub post_count: usize,
    pub written: Vec<PathBuf>,
}

/// Runs one generation: loads the cached posts, renders a page per post plus
/// the index and writes them out in input order.
pub fn generate(config: &Config) -> Result<GenerationSummary> {
    info!("Generating blog pages from {}", config.paths.data_file.display());
    let feed = load_feed(&config.paths.data_file)?;
    feed.report_inconsistencies();

    let sources = TemplateSources::load(config.paths.template_dir.as_deref())
        .context("Loading templates")?;
    let views = Views::new(&sources, &config.site)?;
    let ctx = RenderContext {
        site: &config.site,
        agent: feed.agent.as_deref().unwrap_or(config.site.author.as_str()),
        excerpt_length: config.defaults.excerpt_length,
    };

    let writer = SiteWriter::create(&config.paths.output_dir)?;
    let mut written = Vec::with_capacity(feed.posts.len() + 1);

    for post in &feed.posts {
        debug!("Rendering post {}", post);
        let html = views.render_post(post, &ctx);
        written.push(writer.write(&post.file_name(), html.as_bytes())?);
    }

    let index = views.render_index(&feed.posts, &ctx);
    written.push(writer.write(INDEX_FILE_NAME, index.as_bytes())?);

    info!("Complete! Generated {} blog pages.", feed.posts.len());

    Ok(GenerationSummary {
        post_count: feed.posts.len(),
        written,
    })
}
