use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::post::Post;
use crate::text_utils::{display_date, excerpt, pluralize};
use crate::view::RenderContext;

#[derive(ramhorns::Content)]
struct ListPage<'a> {
    heading: &'a str,
    description: &'a str,
    cards: Vec<PostCard<'a>>,
}

#[derive(ramhorns::Content)]
struct PostCard<'a> {
    link: String,
    date: String,
    title: &'a str,
    excerpt: String,
    upvotes: u64,
    comment_label: String,
}

pub struct ListRenderer<'a> {
    pub template: Template<'a>,
}

impl ListRenderer<'_> {
    pub fn new(list_tpl_src: &str) -> io::Result<ListRenderer> {
        let template = match Template::new(list_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing list template: {}", e)));
            }
        };

        Ok(ListRenderer {
            template,
        })
    }

    /// Renders every post as a card, in input order. The comment count shown
    /// is the stored `comment_count`.
    pub fn render(&self, posts: &[Post], ctx: &RenderContext) -> String {
        let mut cards = Vec::with_capacity(posts.len());
        for post in posts {
            cards.push(PostCard {
                link: post.file_name(),
                date: display_date(&post.created_at),
                title: post.title.as_str(),
                excerpt: excerpt(&post.content, ctx.excerpt_length),
                upvotes: post.upvotes,
                comment_label: pluralize(post.comment_count, "comment"),
            });
        }

        self.template.render(&ListPage {
            heading: "Blog",
            description: ctx.site.description.as_str(),
            cards,
        })
    }
}
