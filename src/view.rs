use serde::Serialize;

use crate::session::state::SessionState;

pub mod selectors {
    pub const ENGLISH_WORD: &str = "english-word";
    pub const GERMAN_WORD: &str = "german-word";
    pub const NEW_WORD_BUTTON: &str = "new-word-button";
    pub const SHOW_ANSWER_BUTTON: &str = "show-answer-button";
    pub const ERROR_MESSAGE: &str = "error-message";
    pub const LOADING_MESSAGE: &str = "loading-message";
}

pub const LOADING_TEXT: &str = "Loading word...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub loading: bool,
    pub english: Option<String>,
    pub german: Option<String>,
    pub english_visible: bool,
    pub german_visible: bool,
    pub error: Option<String>,
}

impl ViewModel {
    pub fn from_state(state: &SessionState) -> Self {
        match state {
            SessionState::Loading => Self {
                loading: true,
                english: None,
                german: None,
                english_visible: false,
                german_visible: false,
                error: None,
            },
            SessionState::Loaded { pair, revealed } => Self {
                loading: false,
                english: Some(pair.english().to_string()),
                german: Some(pair.german().to_string()),
                english_visible: true,
                german_visible: *revealed,
                error: None,
            },
            SessionState::Empty | SessionState::Error { .. } => Self {
                loading: false,
                english: None,
                german: None,
                english_visible: false,
                german_visible: false,
                error: state.failure_message().map(str::to_string),
            },
        }
    }

    pub fn can_reveal(&self) -> bool {
        self.english_visible && !self.german_visible
    }
}

pub fn render_page(title: &str, view: &ViewModel) -> String {
    let title = escape_html(title);
    let mut body = String::new();

    if view.loading {
        body.push_str(&format!(
            r#"<div data-testid="{}" class="loading-message">{LOADING_TEXT}</div>"#,
            selectors::LOADING_MESSAGE
        ));
    }

    if let (true, Some(english)) = (view.english_visible, view.english.as_deref()) {
        let german = view.german.as_deref().unwrap_or_default();
        let german_style = if view.german_visible {
            "visibility: visible"
        } else {
            "visibility: hidden"
        };
        body.push_str(&format!(
            concat!(
                r#"<div class="word-pair">"#,
                r#"<p class="english-word" data-testid="{english_id}">{english}</p>"#,
                r#"<p class="german-word" data-testid="{german_id}" style="{german_style}">{german}</p>"#,
                "</div>"
            ),
            english_id = selectors::ENGLISH_WORD,
            english = escape_html(english),
            german_id = selectors::GERMAN_WORD,
            german_style = german_style,
            german = escape_html(german),
        ));
    }

    if let Some(error) = view.error.as_deref() {
        body.push_str(&format!(
            r#"<div data-testid="{}" class="error-message">{}</div>"#,
            selectors::ERROR_MESSAGE,
            escape_html(error)
        ));
    }

    let previous = view
        .english
        .as_deref()
        .map(|english| {
            format!(
                r#"<input type="hidden" name="previous" value="{}">"#,
                escape_html(english)
            )
        })
        .unwrap_or_default();
    let reveal_disabled = if view.can_reveal() { "" } else { " disabled" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>{title}</h1>
<div id="word-container">{body}</div>
<form method="get" action="/">{previous}<button type="submit" data-testid="{new_word_id}">Next Word</button></form>
<button type="button" data-testid="{show_id}"{reveal_disabled} onclick="document.querySelector('[data-testid={german_id}]').style.visibility = 'visible'">Show Answer</button>
</body>
</html>
"#,
        new_word_id = selectors::NEW_WORD_BUTTON,
        show_id = selectors::SHOW_ANSWER_BUTTON,
        german_id = selectors::GERMAN_WORD,
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
