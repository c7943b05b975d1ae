use std::io;

use crate::config::Site;
use crate::post::Post;
use crate::view::layout::Layout;
use crate::view::list_renderer::ListRenderer;
use crate::view::post_renderer::PostRenderer;
use crate::view::templates::TemplateSources;

pub mod layout;
pub mod list_renderer;
pub mod post_renderer;
pub mod templates;

/// Values shared by every page of a generation run.
pub struct RenderContext<'a> {
    pub site: &'a Site,
    pub agent: &'a str,
    pub excerpt_length: usize,
}

/// Post and index renderers wrapped in the shared layout. Rendering is a pure
/// function of the posts and the context.
pub struct Views<'a> {
    layout: Layout<'a>,
    post: PostRenderer<'a>,
    list: ListRenderer<'a>,
}

impl<'a> Views<'a> {
    pub fn new(sources: &'a TemplateSources, site: &Site) -> io::Result<Views<'a>> {
        Ok(Views {
            layout: Layout::new(&sources.layout, site)?,
            post: PostRenderer::new(&sources.post)?,
            list: ListRenderer::new(&sources.index)?,
        })
    }

    pub fn render_post(&self, post: &Post, ctx: &RenderContext) -> String {
        let body = self.post.render(post, ctx);
        self.layout.render(ctx.site, &post.title, &body)
    }

    pub fn render_index(&self, posts: &[Post], ctx: &RenderContext) -> String {
        let body = self.list.render(posts, ctx);
        self.layout.render(ctx.site, "Blog", &body)
    }
}
