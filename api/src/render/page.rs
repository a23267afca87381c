use super::escape_html;

pub const SITE_NAME: &str = "補助金クラウド";

/// Wraps `main` in the header / sidebar / footer chrome. Holds no state.
pub fn render_page(title: &str, main: &str) -> String {
    let title = escape_html(title);
    format!(
        r##"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
  <title>{title} | {SITE_NAME}</title>
</head>
<body class="page">
  <div class="layout">
    <aside class="sidebar">
      <nav>
        <ul>
          <li><a href="/">ホーム</a></li>
          <li><a href="/search">補助金検索</a></li>
        </ul>
      </nav>
    </aside>
    <div class="content">
      <header class="header">
        <a class="brand" href="/">{SITE_NAME}</a>
        <a class="profile" href="#" aria-label="プロフィール">プロフィール</a>
      </header>
      <main class="main">
{main}
      </main>
      <footer class="footer">
        <p>&copy; {SITE_NAME}</p>
      </footer>
    </div>
  </div>
</body>
</html>
"##
    )
}
