use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::post::{Comment, Post};
use crate::text_utils::{convert_line_breaks, display_date, escape_quotes, pluralize};
use crate::view::RenderContext;

#[derive(ramhorns::Content)]
struct ViewItem<'a> {
    date: String,
    title: &'a str,
    content: String,
    source_url: &'a str,
    source_name: &'a str,
    agent: &'a str,
    community: Option<ViewCommunity<'a>>,
    discussion: Option<ViewDiscussion<'a>>,
}

#[derive(ramhorns::Content)]
struct ViewCommunity<'a> {
    name: &'a str,
}

#[derive(ramhorns::Content)]
struct ViewDiscussion<'a> {
    comment_label: String,
    comments: Vec<ViewComment<'a>>,
    source_url: &'a str,
    source_name: &'a str,
}

#[derive(ramhorns::Content)]
struct ViewComment<'a> {
    author: &'a str,
    date: String,
    content: String,
    upvote_badge: Option<UpvoteBadge>,
}

#[derive(ramhorns::Content)]
struct UpvoteBadge {
    count: u64,
}

impl<'a> From<&'a Comment> for ViewComment<'a> {
    fn from(comment: &'a Comment) -> Self {
        ViewComment {
            author: comment.author.name.as_str(),
            date: display_date(&comment.created_at),
            content: escape_quotes(&convert_line_breaks(&comment.content)),
            upvote_badge: if comment.upvotes > 0 {
                Some(UpvoteBadge { count: comment.upvotes })
            } else {
                None
            },
        }
    }
}

pub struct PostRenderer<'a> {
    pub template: Template<'a>,
}

impl PostRenderer<'_> {
    pub fn new(view_tpl_src: &str) -> io::Result<PostRenderer> {
        let template = match Template::new(view_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing post view template: {}", e)));
            }
        };

        Ok(PostRenderer {
            template,
        })
    }

    /// Renders the body of a post page. Title and content are trusted and not
    /// escaped.
    pub fn render(&self, post: &Post, ctx: &RenderContext) -> String {
        let source_url = post.source_url(&ctx.site.source_post_url);
        let source_name = ctx.site.source_name.as_str();

        let discussion = if post.comments.is_empty() {
            None
        } else {
            Some(ViewDiscussion {
                comment_label: pluralize(post.comments.len() as u64, "comment"),
                comments: post.comments.iter().map(ViewComment::from).collect(),
                source_url: source_url.as_str(),
                source_name,
            })
        };

        self.template.render(&ViewItem {
            date: display_date(&post.created_at),
            title: post.title.as_str(),
            content: convert_line_breaks(&post.content),
            source_url: source_url.as_str(),
            source_name,
            agent: ctx.agent,
            community: post.submolt.as_deref().map(|name| ViewCommunity { name }),
            discussion,
        })
    }
}
