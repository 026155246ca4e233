use tracing::instrument;

use crate::error::Result;
use crate::search::{LegacySearchArgs, SearchQuery, SearchResult, SearchResult2, SearchResult3};

impl super::SubsonicApi {
    /// Legacy field search. Deprecated since protocol 1.4.0.
    #[instrument(skip(self))]
    pub async fn search(&self, args: LegacySearchArgs) -> Result<SearchResult> {
        self.fetch("search", "searchResult", args.into_params())
            .await
    }

    /// Search artists, albums and songs (file-based model).
    #[instrument(skip(self))]
    pub async fn search2(&self, query: SearchQuery) -> Result<SearchResult2> {
        self.fetch("search2", "searchResult2", query.into_params())
            .await
    }

    /// Search artists, albums and songs (tag-based model).
    #[instrument(skip(self))]
    pub async fn search3(&self, query: SearchQuery) -> Result<SearchResult3> {
        self.fetch("search3", "searchResult3", query.into_params())
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::*;
    use crate::search::{LegacySearchArgs, SearchQuery};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_search3() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/search3.view"))
            .and(query_param("query", "love"))
            .and(query_param("songCount", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::json!({
                "searchResult3": {
                    "artist": [{"id": "ar-1", "name": "Love", "albumCount": 2}],
                    "song": [{"id": "tr-9", "title": "Love Song", "isDir": false}]
                }
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let result = api_for(&server)
            .search3(SearchQuery::new("love").songs_only(20, 0))
            .await
            .unwrap();
        assert_eq!(result.artist[0].name, "Love");
        assert!(result.album.is_empty());
        assert_eq!(result.song[0].id, "tr-9");
    }

    #[tokio::test]
    async fn test_legacy_search_uses_search_method() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/search.view"))
            .and(query_param("any", "jazz"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::json!({
                "searchResult": {"offset": 0, "totalHits": 1, "match": [
                    {"id": "tr-1", "title": "So What", "isDir": false}
                ]}
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let result = api_for(&server)
            .search(LegacySearchArgs {
                any: Some("jazz".to_string()),
                ..LegacySearchArgs::default()
            })
            .await
            .unwrap();
        assert_eq!(result.total_hits, 1);
        assert_eq!(result.matches[0].title, "So What");
    }
}
