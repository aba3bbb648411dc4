//! Request and response records for the NOSTOS API
//!
//! Records are lenient on input: unknown fields are ignored, optional fields
//! default, and money amounts are accepted both as JSON numbers and as the
//! decimal strings the backend emits for fixed-point columns.

mod ai;
mod analytics;
mod auth;
mod campaigns;
mod donations;

pub use ai::*;
pub use analytics::*;
pub use auth::*;
pub use campaigns::*;
pub use donations::*;

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, Same};
use url::form_urlencoded;

/// Money amount: a JSON number, or a decimal string such as `"1500.00"`
pub(crate) type Amount = PickFirst<(Same, DisplayFromStr)>;

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// List payload as sent by the server: paginated envelope or bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListResponse<T> {
    Paginated(Page<T>),
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    pub(crate) fn into_page(self) -> Page<T> {
        match self {
            Self::Paginated(page) => page,
            Self::Plain(results) => Page {
                count: results.len() as u64,
                next: None,
                previous: None,
                results,
            },
        }
    }
}

/// Plain `{"message": ...}` acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Append `pairs` to `path` as a URL-encoded query string, or return the path
/// unchanged when there are none.
pub(crate) fn with_query<'a, I>(path: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (name, value) in pairs {
        serializer.append_pair(name, &value);
        any = true;
    }

    if any {
        format!("{path}?{}", serializer.finish())
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_omits_empty_query() {
        let none: Vec<(&str, String)> = Vec::new();
        assert_eq!(with_query("/campaigns/", none), "/campaigns/");
    }

    #[test]
    fn test_with_query_encodes_values() {
        let path = with_query("/campaigns/", [("search", "clean water & more".to_string())]);
        assert_eq!(path, "/campaigns/?search=clean+water+%26+more");
    }

    #[test]
    fn test_list_response_accepts_both_shapes() {
        let plain: ListResponse<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        let page = plain.into_page();
        assert_eq!(page.count, 3);
        assert!(!page.has_next());

        let paged: ListResponse<u32> = serde_json::from_str(
            r#"{"count": 40, "next": "http://x/?page=3", "previous": null, "results": [4]}"#,
        )
        .unwrap();
        let page = paged.into_page();
        assert_eq!(page.count, 40);
        assert_eq!(page.results, vec![4]);
        assert!(page.has_next());
    }
}
