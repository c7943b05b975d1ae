use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::io::ErrorKind;
use std::path::Path;
use std::{fs, io};

use serde::{Deserialize, Deserializer};
use spdlog::warn;

/// Root of the cached data file: `{ "posts": [...] }`.
#[derive(Deserialize, Debug, Clone)]
pub struct PostFeed {
    pub posts: Vec<Post>,
    #[serde(default)]
    pub generated_at: Option<String>,
    /// Account the posts were published under.
    #[serde(default)]
    pub agent: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub content: String,
    #[serde(default)]
    pub upvotes: u64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub submolt: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Comment {
    #[serde(default)]
    pub id: Option<String>,
    pub author: Author,
    pub created_at: String,
    pub content: String,
    #[serde(default)]
    pub upvotes: u64,
    #[serde(default)]
    pub replies: Option<u64>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub karma: Option<i64>,
}

/// `null` is treated the same as a missing list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "id={}, date={}, upvotes={}, comments={}/{}, title={}",
               self.id,
               self.created_at,
               self.upvotes,
               self.comments.len(),
               self.comment_count,
               self.title,
        )
    }
}

impl Post {
    /// Canonical URL of the post on the site it was originally published on.
    pub fn source_url(&self, source_post_url: &str) -> String {
        match self.url {
            Some(ref url) if !url.is_empty() => url.clone(),
            _ => format!("{}{}", source_post_url, self.id),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.html", self.id)
    }
}

impl PostFeed {
    pub fn parse(data: &str) -> serde_json::Result<PostFeed> {
        serde_json::from_str(data)
    }

    /// Logs the inconsistencies the generator tolerates: duplicate ids, which
    /// silently overwrite each other on disk, and stored comment counts that
    /// disagree with the comment list.
    pub fn report_inconsistencies(&self) {
        let mut seen = HashSet::new();
        for post in &self.posts {
            if !seen.insert(post.id.as_str()) {
                warn!("Duplicate post id {}: {} will be overwritten", post.id, post.file_name());
            }
            if post.comment_count != post.comments.len() as u64 {
                warn!("Post {} declares comment_count={} but carries {} comments",
                      post.id, post.comment_count, post.comments.len());
            }
        }
    }
}

pub fn load_feed(data_file: &Path) -> io::Result<PostFeed> {
    let data = match fs::read_to_string(data_file) {
        Ok(data) => data,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error reading post data {}: {}", data_file.display(), e))),
    };

    match PostFeed::parse(&data) {
        Ok(feed) => Ok(feed),
        Err(e) => Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing post data {}: {}", data_file.display(), e))),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::test_data::{FEED_DATA, MINIMAL_FEED, NULL_COMMENTS};

    use super::*;

    #[test]
    fn test_parse_feed() {
        let feed = PostFeed::parse(FEED_DATA).unwrap();
        assert_eq!(feed.agent.as_deref(), Some("GenysisAIQ"));
        assert_eq!(feed.posts.len(), 2);

        let post = &feed.posts[0];
        assert_eq!(post.id, "23c8e1b4-eda9-4d5c-9ab1-580e3e39df1a");
        assert_eq!(post.upvotes, 12);
        assert_eq!(post.comment_count, 2);
        assert_eq!(post.submolt.as_deref(), Some("security"));
        assert_eq!(post.comments.len(), 2);
        assert_eq!(post.comments[0].author.name, "eudaemon_0");
        assert_eq!(post.comments[0].upvotes, 3);
        assert_eq!(post.comments[1].upvotes, 0);
        assert!(post.content.contains("\\n"));
    }

    #[test]
    fn test_missing_optional_fields() {
        let feed = PostFeed::parse(MINIMAL_FEED).unwrap();
        let post = &feed.posts[0];
        assert!(post.comments.is_empty());
        assert_eq!(post.upvotes, 0);
        assert_eq!(post.comment_count, 0);
        assert!(post.url.is_none());
        assert!(feed.agent.is_none());
    }

    #[test]
    fn test_null_comments() {
        let feed = PostFeed::parse(NULL_COMMENTS).unwrap();
        let post = &feed.posts[0];
        assert!(post.comments.is_empty());
        assert_eq!(post.comment_count, 0);
        assert!(post.url.is_none());
    }

    #[test]
    fn test_display() {
        let feed = PostFeed::parse(FEED_DATA).unwrap();
        assert_eq!(feed.posts[1].to_string(),
                   "id=p2, date=2026-02-02T08:00:00Z, upvotes=1, comments=0/0, title=Second post");
    }

    #[test]
    fn test_source_url() {
        let feed = PostFeed::parse(FEED_DATA).unwrap();
        let base = "https://www.moltbook.com/post/";
        assert_eq!(feed.posts[0].source_url(base),
                   "https://www.moltbook.com/post/23c8e1b4-eda9-4d5c-9ab1-580e3e39df1a");
        assert_eq!(feed.posts[1].source_url(base), "https://www.moltbook.com/post/p2");
    }

    #[test]
    fn test_load_feed_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_feed(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_load_feed_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ \"posts\": [ { \"id\": ").unwrap();
        let err = load_feed(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("Error parsing post data"));
    }

    #[test]
    fn test_load_feed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FEED_DATA.as_bytes()).unwrap();
        let feed = load_feed(file.path()).unwrap();
        assert_eq!(feed.posts.len(), 2);
        assert_eq!(feed.posts[1].title, "Second post");
    }
}
