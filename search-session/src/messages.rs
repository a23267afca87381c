//! User-facing strings. Causes of failures are logged, never shown.

pub const SEARCH_FAILED: &str = "検索中にエラーが発生しました。もう一度お試しください。";
pub const DETAIL_FAILED: &str = "詳細情報の取得に失敗しました。";
pub const NO_RESULTS: &str = "検索結果がありません。別の条件で試してみてください！";

pub const SEARCHING: &str = "検索中...";
pub const DETAIL_LOADING: &str = "詳細情報を読み込み中...";

pub const RESULTS_TITLE: &str = "🎉 補助金発見！ 🎉";
pub const RESULTS_DESCRIPTION: &str = "あなたにピッタリの補助金が見つかりました！";

pub const KEYWORD_BLANK: &str = "キーワードを入力してください。";
pub const KEYWORD_TOO_SHORT: &str = "キーワードは2文字以上で入力してください。";
pub const KEYWORD_TOO_LONG: &str = "キーワードは255文字以内で入力してください。";
