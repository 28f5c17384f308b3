//! Fixed page templates.
//!
//! Templates are compiled into the binary so they never ship as public files
//! on the site. Placeholders are `{{NAME}}` markers replaced textually.

pub const POST_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en" class="blog-page">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta name="description" content="{{EXCERPT}}" />
  <meta property="og:title" content="{{TITLE}} — VantageCTO Blog" />
  <meta property="og:description" content="{{EXCERPT}}" />
  <meta property="og:type" content="article" />
  <meta property="og:url" content="{{SITE_URL}}/blog/{{SLUG}}.html" />
  <meta name="twitter:card" content="summary" />
  <title>{{TITLE}} — VantageCTO Blog</title>
  <link rel="preconnect" href="https://fonts.googleapis.com" />
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
  <link href="https://fonts.googleapis.com/css2?family=DM+Serif+Display:ital@0;1&family=Outfit:wght@400;500;700;800&family=IBM+Plex+Mono:wght@300;400&display=swap" rel="stylesheet" />
  <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
  <link rel="stylesheet" href="/styles.css" />
  <link rel="canonical" href="{{SITE_URL}}/blog/{{SLUG}}.html" />
</head>
<body>

<nav id="navbar" class="scrolled" aria-label="Main navigation">
  <a class="logo" href="/">Vantage<span>CTO</span></a>
  <a class="nav-cta" href="/blog/">Blog</a>
</nav>

<main id="main-content">
  <div class="blog-header">
    <a href="/blog/" class="blog-back">&larr; BACK TO BLOG</a>
    <h1 class="blog-title">{{TITLE}}</h1>
    <div class="blog-meta">
      <span>{{AUTHOR}}</span>
      <span>{{DATE}}</span>
    </div>
  </div>
  <article class="blog-content">
    {{CONTENT}}
  </article>
</main>

<footer role="contentinfo">
  <p>&copy; 2026 <a href="/">VantageCTO</a> — All rights reserved.</p>
  <p>Built with conviction. <span style="color:var(--accent)">// blog</span></p>
</footer>

</body>
</html>
"#;

pub const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en" class="blog-page">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta name="description" content="Insights for non-technical founders on startup strategy, technology decisions, and runway protection." />
  <meta property="og:title" content="Blog — VantageCTO" />
  <meta property="og:description" content="Insights for non-technical founders on startup strategy, technology decisions, and runway protection." />
  <meta property="og:type" content="website" />
  <meta property="og:url" content="{{SITE_URL}}/blog/" />
  <title>Blog — VantageCTO</title>
  <link rel="preconnect" href="https://fonts.googleapis.com" />
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
  <link href="https://fonts.googleapis.com/css2?family=DM+Serif+Display:ital@0;1&family=Outfit:wght@400;500;700;800&family=IBM+Plex+Mono:wght@300;400&display=swap" rel="stylesheet" />
  <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
  <link rel="stylesheet" href="/styles.css" />
  <link rel="canonical" href="{{SITE_URL}}/blog/" />
</head>
<body>

<nav id="navbar" class="scrolled" aria-label="Main navigation">
  <a class="logo" href="/">Vantage<span>CTO</span></a>
  <a class="nav-cta" href="/#waitlist">Join Waitlist</a>
</nav>

<main id="main-content">
  <div class="blog-index-header">
    <p class="section-label">// VantageCTO Blog</p>
    <h1 class="blog-index-title">Insights for Founders</h1>
    <p class="blog-index-sub">Strategic thinking before the spend. {{POST_COUNT}} articles.</p>
  </div>
  <div class="blog-list">
    {{POSTS}}
  </div>
</main>

<footer role="contentinfo">
  <p>&copy; 2026 <a href="/">VantageCTO</a> — All rights reserved.</p>
  <p>Built with conviction. <span style="color:var(--accent)">// blog</span></p>
</footer>

</body>
</html>
"##;

pub const EMPTY_LISTING: &str = r#"<p class="blog-empty">No posts yet. Check back soon.</p>"#;

/// Replace each placeholder in order. Every occurrence is replaced, and a
/// placeholder that shows up inside an earlier value is replaced too.
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |html, (placeholder, value)| {
            html.replace(placeholder, value)
        })
}

/// One entry of the blog listing. Values are inserted as-is.
pub fn post_card(slug: &str, title: &str, author: &str, date: &str, excerpt: &str) -> String {
    format!(
        r#"    <article class="blog-card">
      <a href="/blog/{slug}.html">
        <h2 class="blog-card-title">{title}</h2>
      </a>
      <div class="blog-card-meta">
        <span>{author}</span>
        <span>{date}</span>
      </div>
      <p class="blog-card-excerpt">{excerpt}</p>
      <a href="/blog/{slug}.html" class="blog-card-link">Read more &rarr;</a>
    </article>
"#
    )
}
