use std::path::Path;
use std::{fs, io};

use spdlog::{debug, info};

pub const LAYOUT_TPL_NAME: &str = "layout.tpl";
pub const POST_TPL_NAME: &str = "post.tpl";
pub const INDEX_TPL_NAME: &str = "index.tpl";

// Braces in the inline CSS/JS never appear doubled so they don't clash with
// mustache tags.
pub const LAYOUT_TPL: &str = r##"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{{page_title}}} | {{{site_name}}}</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <link href="https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;500;700&display=swap" rel="stylesheet">
  <script>
    tailwind.config = {
      theme: {
        fontFamily: { mono: ['"JetBrains Mono"', 'monospace'] },
        extend: {
          colors: { void: '#050505', phosphor: '#00FF00', amber: '#FFAA00', offwhite: '#E0E0E0', terminal: '#1a1a1a' }
        }
      }
    }
  </script>
  <style>
    body { font-family: 'JetBrains Mono', monospace; background: #050505; color: #E0E0E0; }
    ::selection { background: #00FF00; color: #050505; }
    a { color: #00FF00; }
    a:hover { text-shadow: 0 0 8px rgba(0,255,0,0.4); }
    .terminal-box { border: 1px solid rgba(0, 255, 0, 0.2); background: #1a1a1a; }
    .glow-text { text-shadow: 0 0 10px rgba(0, 255, 0, 0.5); }
    @keyframes blink { 0%, 100% { opacity: 1; } 50% { opacity: 0; } }
  </style>
</head>
<body>
  <header class="border-b border-phosphor/20 bg-void/95">
    <div class="max-w-4xl mx-auto px-6 py-4 flex items-center justify-between">
      <a href="{{{home_url}}}" class="text-phosphor font-bold text-sm tracking-wider no-underline">
        &gt; {{{brand}}}<span style="animation: blink 1s step-end infinite">_</span>
      </a>
      <nav class="flex items-center gap-4">
        <a href="{{{blog_url}}}" class="text-phosphor/70 text-xs hover:text-phosphor no-underline">// BLOG</a>
        <a href="{{{source_profile_url}}}" target="_blank" class="text-phosphor/70 text-xs hover:text-phosphor no-underline">// {{{source_label}}}</a>
      </nav>
    </div>
  </header>
  <main class="max-w-4xl mx-auto px-6 py-12">
{{{body}}}
  </main>
  <footer class="border-t border-phosphor/10 mt-20">
    <div class="max-w-4xl mx-auto px-6 py-8">
      <div class="text-center text-xs text-offwhite/30">
        <p>&copy; {{copyright_year}} {{{site_name}}}</p>
      </div>
    </div>
  </footer>
</body>
</html>
"##;

pub const POST_TPL: &str = r##"    <article>
      <header class="mb-12">
        <div class="text-xs text-amber mb-4">{{{date}}}</div>
        <h1 class="text-3xl sm:text-4xl font-bold mb-6 text-phosphor glow-text leading-tight">{{{title}}}</h1>
        <div class="text-xs text-offwhite/50 mb-4">
          Originally posted on <a href="{{{source_url}}}" target="_blank" class="text-phosphor">{{{source_name}}}</a> by {{{agent}}}{{#community}} in <span class="text-amber">m/{{{name}}}</span>{{/community}}
        </div>
      </header>
      <section class="mb-12">
        <div class="text-offwhite/70 text-sm leading-relaxed">{{{content}}}</div>
      </section>
{{#discussion}}
      <section class="mb-12">
        <div class="flex items-center gap-3 mb-6">
          <h2 class="text-xl font-bold text-phosphor">Discussion</h2>
          <span class="text-xs text-offwhite/50">{{comment_label}}</span>
        </div>
        <div class="space-y-3">
{{#comments}}
          <div class="terminal-box p-4 mb-3">
            <div class="flex items-start gap-3 mb-2">
              <span class="text-phosphor font-bold text-sm">{{{author}}}</span>
              <span class="text-offwhite/40 text-xs">{{{date}}}</span>
            </div>
            <p class="text-sm text-offwhite/70">{{{content}}}</p>
{{#upvote_badge}}
            <div class="text-xs text-phosphor/60 mt-2">&#8593; {{count}}</div>
{{/upvote_badge}}
          </div>
{{/comments}}
        </div>
        <div class="terminal-box p-4 mt-6 text-center">
          <p class="text-sm text-offwhite/70 mb-3">Join the discussion on {{{source_name}}}</p>
          <a href="{{{source_url}}}" target="_blank"
             class="inline-block bg-phosphor hover:bg-transparent text-void hover:text-phosphor border border-phosphor px-6 py-2 font-bold text-xs uppercase tracking-wider transition-colors no-underline">
            View on {{{source_name}}}
          </a>
        </div>
      </section>
{{/discussion}}
    </article>
"##;

pub const INDEX_TPL: &str = r##"    <h1 class="text-4xl font-bold mb-8 text-phosphor glow-text">{{{heading}}}</h1>
    <p class="text-sm text-offwhite/70 mb-12">{{{description}}}</p>
    <div class="space-y-6">
{{#cards}}
      <a href="{{{link}}}" class="block terminal-box p-6 hover:border-phosphor/40 transition-colors no-underline">
        <div class="text-xs text-amber mb-2">{{{date}}}</div>
        <h2 class="text-xl font-bold text-phosphor mb-3">{{{title}}}</h2>
        <p class="text-sm text-offwhite/60 mb-4">{{{excerpt}}}</p>
        <div class="flex items-center gap-4 text-xs text-offwhite/40">
          <span>&#8593; {{upvotes}} upvotes</span>
          <span>&#128172; {{comment_label}}</span>
        </div>
      </a>
{{/cards}}
    </div>
"##;

/// Template sources for one generation run. Files found in the template
/// directory replace the built-in templates.
pub struct TemplateSources {
    pub layout: String,
    pub post: String,
    pub index: String,
}

impl TemplateSources {
    pub fn built_in() -> TemplateSources {
        TemplateSources {
            layout: LAYOUT_TPL.to_string(),
            post: POST_TPL.to_string(),
            index: INDEX_TPL.to_string(),
        }
    }

    pub fn load(template_dir: Option<&Path>) -> io::Result<TemplateSources> {
        let Some(template_dir) = template_dir else {
            return Ok(Self::built_in());
        };

        Ok(TemplateSources {
            layout: read_or_default(template_dir, LAYOUT_TPL_NAME, LAYOUT_TPL)?,
            post: read_or_default(template_dir, POST_TPL_NAME, POST_TPL)?,
            index: read_or_default(template_dir, INDEX_TPL_NAME, INDEX_TPL)?,
        })
    }
}

fn read_or_default(template_dir: &Path, name: &str, built_in: &str) -> io::Result<String> {
    let path = template_dir.join(name);
    if !path.exists() {
        debug!("Template {} not found, using the built-in one", path.display());
        return Ok(built_in.to_string());
    }

    info!("Using template {}", path.display());
    match fs::read_to_string(&path) {
        Ok(src) => Ok(src),
        Err(e) => Err(io::Error::new(e.kind(), format!("Error reading template {}: {}", path.display(), e))),
    }
}
