//! Search results parser for TVMaze
//!
//! Parses the `/search/shows` JSON body and projects every hit onto a
//! [`Show`], keeping the order the API returned.

use crate::error::Result;
use crate::parser::api::SearchHit;
use crate::types::Show;
use crate::url::PLACEHOLDER_IMAGE_URL;

/// Parses a search response body and returns the shows in API order
///
/// # Arguments
/// * `json` - Raw JSON body of the search endpoint
///
/// # Returns
/// Vector of `Show` records, empty if the API found nothing
///
/// # Errors
/// Returns `ParseError` if the body is not a list of search hits
pub fn parse_search_results(json: &str) -> Result<Vec<Show>> {
    let hits: Vec<SearchHit> = serde_json::from_str(json)?;
    Ok(hits.into_iter().map(show_from_hit).collect())
}

/// Projects a single search hit onto a `Show`
///
/// Falls back to the placeholder image when the hit has no medium artwork.
pub fn show_from_hit(hit: SearchHit) -> Show {
    let show = hit.show;
    let image = show
        .image
        .and_then(|image| image.medium)
        .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());

    Show {
        id: show.id,
        name: show.name,
        summary: show.summary.unwrap_or_default(),
        image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShowfinderError;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_parse_empty_results() {
        let results = parse_search_results("[]").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_single_show_with_image() {
        let body = r#"[
            {
                "score": 0.91,
                "show": {
                    "id": 975,
                    "name": "Batman",
                    "type": "Scripted",
                    "summary": "<p>Wealthy entrepreneur Bruce Wayne...</p>",
                    "image": {
                        "medium": "https://static.tvmaze.com/uploads/images/medium_portrait/6/16463.jpg",
                        "original": "https://static.tvmaze.com/uploads/images/original_untouched/6/16463.jpg"
                    }
                }
            }
        ]"#;

        let results = parse_search_results(body).unwrap();
        assert_eq!(results.len(), 1);

        let show = &results[0];
        assert_eq!(show.id, 975);
        assert_eq!(show.name, "Batman");
        assert_eq!(show.summary, "<p>Wealthy entrepreneur Bruce Wayne...</p>");
        assert_eq!(
            show.image,
            "https://static.tvmaze.com/uploads/images/medium_portrait/6/16463.jpg"
        );
    }

    #[test]
    fn test_parse_null_image_uses_placeholder() {
        let body = r#"[{"show": {"id": 1, "name": "No Art", "summary": null, "image": null}}]"#;

        let results = parse_search_results(body).unwrap();
        assert_eq!(results[0].image, PLACEHOLDER_IMAGE_URL);
        assert_eq!(results[0].summary, "");
    }

    #[test]
    fn test_parse_missing_image_fields_use_placeholder() {
        let body = r#"[
            {"show": {"id": 1, "name": "Absent"}},
            {"show": {"id": 2, "name": "Original only", "image": {"original": "https://x/o.jpg"}}}
        ]"#;

        let results = parse_search_results(body).unwrap();
        assert_eq!(results[0].image, PLACEHOLDER_IMAGE_URL);
        assert_eq!(results[1].image, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn test_parse_rejects_non_list_body() {
        let result = parse_search_results(r#"{"name": "Not Found", "status": 404}"#);
        match result {
            Err(ShowfinderError::ParseError(_)) => {}
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_hit_without_show() {
        let result = parse_search_results(r#"[{"score": 1.0}]"#);
        assert!(matches!(result, Err(ShowfinderError::ParseError(_))));
    }

    proptest! {
        #[test]
        fn prop_search_preserves_length_order_and_images(
            entries in proptest::collection::vec(
                (any::<u64>(), "[a-zA-Z0-9 ]{0,20}", proptest::option::of("https://[a-z]{1,10}\\.jpg")),
                0..20,
            )
        ) {
            let body: Vec<_> = entries
                .iter()
                .map(|(id, name, medium)| {
                    let image = match medium {
                        Some(url) => json!({ "medium": url }),
                        None => serde_json::Value::Null,
                    };
                    json!({ "show": { "id": id, "name": name, "summary": null, "image": image } })
                })
                .collect();

            let shows = parse_search_results(&serde_json::to_string(&body).unwrap()).unwrap();

            prop_assert_eq!(shows.len(), entries.len());
            for (show, (id, name, medium)) in shows.iter().zip(entries.iter()) {
                prop_assert_eq!(show.id, *id);
                prop_assert_eq!(&show.name, name);
                let expected = medium.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());
                prop_assert_eq!(&show.image, &expected);
            }
        }
    }
}
