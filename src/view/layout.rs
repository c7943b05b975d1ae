use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::config::Site;

#[derive(ramhorns::Content)]
struct LayoutPage<'a> {
    page_title: &'a str,
    site_name: &'a str,
    brand: &'a str,
    home_url: &'a str,
    blog_url: &'a str,
    source_label: &'a str,
    source_profile_url: &'a str,
    copyright_year: i32,
    body: &'a str,
}

/// The page chrome (head, header, navigation and footer) shared by every
/// generated page.
pub struct Layout<'a> {
    pub template: Template<'a>,
    brand: String,
    source_label: String,
}

impl Layout<'_> {
    pub fn new<'a>(layout_tpl_src: &'a str, site: &Site) -> io::Result<Layout<'a>> {
        let template = match Template::new(layout_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing layout template: {}", e)));
            }
        };

        Ok(Layout {
            template,
            brand: site.name.to_uppercase(),
            source_label: site.source_name.to_uppercase(),
        })
    }

    pub fn render(&self, site: &Site, page_title: &str, body: &str) -> String {
        self.template.render(&LayoutPage {
            page_title,
            site_name: site.name.as_str(),
            brand: self.brand.as_str(),
            home_url: site.home_url.as_str(),
            blog_url: site.blog_url.as_str(),
            source_label: self.source_label.as_str(),
            source_profile_url: site.source_profile_url.as_str(),
            copyright_year: site.copyright_year,
            body,
        })
    }
}
