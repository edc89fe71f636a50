use crate::models::Article;
use serde_json::Value;
use thiserror::Error;

/// Minimum number of times the city must appear in description + content
/// for an article without a title match to be kept
pub const RELEVANCE_THRESHOLD: usize = 5;

/// Errors raised when the upstream body does not have the expected shape
#[derive(Debug, Error, PartialEq)]
pub enum ResponseShapeError {
    #[error("Expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("Expected `articles` to be an array, found {0}")]
    ArticlesNotArray(&'static str),

    #[error("Expected article {index} to be an object, found {found}")]
    ArticleNotObject { index: usize, found: &'static str },
}

/// Count non-overlapping occurrences of `needle` in `haystack`
#[inline]
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Check whether an article is about the given (already lower-cased) city
///
/// Rule A: the city appears anywhere in the title.
/// Rule B: the city appears at least [`RELEVANCE_THRESHOLD`] times in the
/// description and content joined by a single space.
///
/// Both rules use plain substring matching, so an empty city matches every
/// title.
#[inline]
pub fn is_relevant(article: &Article, city_lower: &str) -> bool {
    let title = article.title().to_lowercase();
    if title.contains(city_lower) {
        return true;
    }

    let description = article.description().to_lowercase();
    let content = article.content().to_lowercase();
    let text = format!("{} {}", description, content);

    count_occurrences(&text, city_lower) >= RELEVANCE_THRESHOLD
}

/// Keep the articles relevant to `city`, in their original order
pub fn filter_articles(articles: Vec<Article>, city: &str) -> Vec<Article> {
    let city_lower = city.to_lowercase();

    articles
        .into_iter()
        .filter(|article| is_relevant(article, &city_lower))
        .collect()
}

/// Apply the relevance filter to a raw upstream response body
///
/// Only the `articles` member is rewritten. A body without `articles` is
/// returned unchanged.
pub fn filter_response(mut body: Value, city: &str) -> Result<Value, ResponseShapeError> {
    let found = json_type(&body);
    let object = body
        .as_object_mut()
        .ok_or(ResponseShapeError::NotAnObject(found))?;

    if let Some(articles) = object.get_mut("articles") {
        let article_set = into_article_set(articles.take())?;
        let total = article_set.len();

        let kept: Vec<Value> = filter_articles(article_set, city)
            .into_iter()
            .map(|article| Value::Object(article.into_fields()))
            .collect();

        tracing::debug!("Relevance filter kept {} of {} articles for {}", kept.len(), total, city);

        *articles = Value::Array(kept);
    }

    Ok(body)
}

fn into_article_set(value: Value) -> Result<Vec<Article>, ResponseShapeError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(fields) => Ok(Article::new(fields)),
                other => Err(ResponseShapeError::ArticleNotObject {
                    index,
                    found: json_type(&other),
                }),
            })
            .collect(),
        other => Err(ResponseShapeError::ArticlesNotArray(json_type(&other))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
