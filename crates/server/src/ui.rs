/// Single-page browser UI served at `/`. It only talks to the JSON API.
pub const INDEX_HTML: &str = include_str!("../assets/index.html");
