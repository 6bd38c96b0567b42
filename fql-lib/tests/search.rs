//! Integration tests for the search builder over an in-memory transport.

use std::sync::Mutex;

use async_trait::async_trait;
use fql_lib::error::QueryError;
use fql_lib::error::TransportError;
use fql_lib::model::SearchResults;
use fql_lib::query::Direction;
use fql_lib::query::Filter;
use fql_lib::query::FqlQuery;
use fql_lib::Error;
use fql_lib::FqlResponse;
use fql_lib::FqlTransport;
use fql_lib::SearchConfig;
use serde_json::json;
use serde_json::Value as JsonValue;

/// Records every query and answers with a fixed JSON body.
struct RecordingTransport {
    body: JsonValue,
    sent: Mutex<Vec<FqlQuery>>,
}

impl RecordingTransport {
    fn new(body: JsonValue) -> Self {
        Self {
            body,
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<FqlQuery> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    fn sent_params(&self) -> Vec<String> {
        self.sent()
            .iter()
            .map(|query| query.to_param().expect("rendered query"))
            .collect()
    }
}

#[async_trait]
impl FqlTransport for RecordingTransport {
    async fn query(&self, query: &FqlQuery) -> Result<FqlResponse, Error> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(query.clone());
        }
        Ok(FqlResponse::from_json(query, self.body.clone())?)
    }
}

// =============================================================================
// Single statements
// =============================================================================

mod single {
    use super::*;

    #[tokio::test]
    async fn test_full_statement() {
        let transport = RecordingTransport::new(json!({"data": [{"uid": 4, "name": "Mark"}]}));

        let response = transport
            .search()
            .set_table("user")
            .set_columns(["uid", "name"])
            .add_filter(Filter::new("uid IN %s").arg(vec![4i64, 5]))
            .filter_by("is_app_user", true)
            .add_sort("name", "DESC")
            .add_sort("uid", Direction::Asc)
            .set_range(10)
            .set_page(3)
            .get_rows("last")
            .await
            .unwrap();

        assert_eq!(response.row_count(), 1);
        assert_eq!(
            transport.sent_params(),
            vec![
                "SELECT uid, name FROM user WHERE uid IN (4, 5) AND is_app_user=1 \
                 ORDER BY name DESC, uid ASC LIMIT 20, 10"
            ]
        );
    }

    #[tokio::test]
    async fn test_string_arguments_are_quoted() {
        let transport = RecordingTransport::new(json!({"data": []}));

        transport
            .search()
            .set_table("page")
            .filter_by("username", "o'reilly")
            .get_rows("last")
            .await
            .unwrap();

        assert_eq!(
            transport.sent_params(),
            vec![r"SELECT * FROM page WHERE username='o\'reilly'"]
        );
    }

    #[tokio::test]
    async fn test_no_table_skips_transport() {
        let transport = RecordingTransport::new(json!({"data": [{"uid": 1}]}));

        let mut search = transport.search().set_columns(["uid"]);
        let response = search.get_rows("last").await.unwrap();

        assert!(response.is_empty());
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_single_collection() {
        let transport = RecordingTransport::new(json!({"data": [{"uid": 1}, {"uid": 2}]}));

        let results = transport
            .search()
            .set_table("user")
            .get_collection("last")
            .await
            .unwrap();

        let collection = results.into_single().unwrap();
        assert_eq!(collection.column("uid"), vec![&json!(1), &json!(2)]);
    }

    #[tokio::test]
    async fn test_filter_error_stops_before_transport() {
        let transport = RecordingTransport::new(json!({"data": []}));

        let err = transport
            .search()
            .set_table("user")
            .add_filter(Filter::new("uid = %s"))
            .add_filter(Filter::new("a = %s AND b = %s").arg(1))
            .get_rows("last")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Query(QueryError::MissingArgument { index: 1, .. })
        ));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_api_error_surfaces() {
        let transport = RecordingTransport::new(json!({"error": {
            "message": "Calls to stream have exceeded the rate",
            "type": "OAuthException",
            "code": 613
        }}));

        let err = transport
            .search()
            .set_table("stream")
            .get_rows("last")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Transport(TransportError::Api(_))));
        assert!(err.is_retryable());
    }
}

// =============================================================================
// Pagination
// =============================================================================

mod pagination {
    use super::*;

    #[test]
    fn test_clamping() {
        let transport = RecordingTransport::new(json!({"data": []}));

        let search = transport.search().set_start(-5).set_range(-1);
        assert_eq!(search.start(), 0);
        assert_eq!(search.range(), 25);

        let search = search.set_page(0);
        assert_eq!(search.start(), 0);

        let search = search.set_page(4);
        assert_eq!(search.start(), 75);
    }

    #[test]
    fn test_page_uses_range_at_call_time() {
        let transport = RecordingTransport::new(json!({"data": []}));

        let search = transport.search().set_page(3).set_range(10);
        assert_eq!(search.start(), 0);

        let search = search.set_page(3);
        assert_eq!(search.start(), 20);
    }

    #[test]
    fn test_configured_fallback_range() {
        let transport = RecordingTransport::new(json!({"data": []}));

        let search = transport
            .search_with(SearchConfig::default().with_fallback_range(100))
            .set_range(-3);
        assert_eq!(search.range(), 100);
    }

    #[tokio::test]
    async fn test_start_without_range_has_no_limit() {
        let transport = RecordingTransport::new(json!({"data": []}));

        transport
            .search()
            .set_table("user")
            .set_start(40)
            .get_rows("last")
            .await
            .unwrap();

        assert_eq!(transport.sent_params(), vec!["SELECT * FROM user"]);
    }
}

// =============================================================================
// Groups and multiqueries
// =============================================================================

mod groups {
    use super::*;

    fn multi_body() -> JsonValue {
        json!({"data": [
            {"name": "me", "fql_result_set": [{"uid": 4}]},
            {"name": "friends", "fql_result_set": [{"uid2": 5}, {"uid2": 6}]}
        ]})
    }

    #[test]
    fn test_group_resets_working_state() {
        let transport = RecordingTransport::new(json!({"data": []}));

        let search = transport
            .search()
            .set_table("user")
            .set_columns(["uid"])
            .filter_by("uid", 4)
            .add_sort("uid", "asc")
            .set_range(5)
            .set_start(10)
            .group("me");

        assert_eq!(search.group_keys(), vec!["me"]);
        assert_eq!(search.table(), None);
        assert!(search.columns().is_empty());
        assert!(search.filters().is_empty());
        assert!(search.sort().is_empty());
        assert_eq!(search.start(), 0);
        assert_eq!(search.range(), 0);
    }

    #[test]
    fn test_group_without_table_is_noop() {
        let transport = RecordingTransport::new(json!({"data": []}));

        let search = transport.search().set_columns(["uid"]).group("nothing");

        assert!(search.group_keys().is_empty());
        assert_eq!(search.columns(), ["uid".to_string()]);
    }

    #[tokio::test]
    async fn test_multiquery() {
        let transport = RecordingTransport::new(multi_body());

        let results = transport
            .search()
            .set_table("user")
            .set_columns(["uid"])
            .add_filter("uid = me()")
            .group("me")
            .set_table("friend")
            .set_columns(["uid2"])
            .add_filter("uid1 = me()")
            .get_collection("friends")
            .await
            .unwrap();

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].names(), vec!["me", "friends"]);
        assert_eq!(
            transport.sent_params(),
            vec![
                r#"{"me":"SELECT uid FROM user WHERE uid = me()","friends":"SELECT uid2 FROM friend WHERE uid1 = me()"}"#
            ]
        );

        match &results {
            SearchResults::Grouped(groups) => assert_eq!(groups.len(), 2),
            SearchResults::Single(_) => panic!("expected grouped results"),
        }
        assert_eq!(results.get("me").map(|c| c.len()), Some(1));
        assert_eq!(results.get("friends").map(|c| c.len()), Some(2));
    }

    #[tokio::test]
    async fn test_regrouping_replaces_in_place() {
        let transport = RecordingTransport::new(multi_body());

        let mut search = transport
            .search()
            .set_table("user")
            .group("me")
            .set_table("friend")
            .group("friends")
            .set_table("page")
            .group("me");

        assert_eq!(search.group_keys(), vec!["me", "friends"]);

        let query = search.build("unused").unwrap();
        assert_eq!(
            query.to_param().unwrap(),
            r#"{"me":"SELECT * FROM page","friends":"SELECT * FROM friend"}"#
        );
    }

    #[tokio::test]
    async fn test_groups_persist_between_runs() {
        let transport = RecordingTransport::new(json!({"data": []}));

        let mut search = transport.search().set_table("user");
        search.get_rows("last").await.unwrap();
        search.get_rows("last").await.unwrap();

        assert_eq!(
            transport.sent_params(),
            vec!["SELECT * FROM user", "SELECT * FROM user"]
        );
    }

    #[tokio::test]
    async fn test_default_group_key() {
        let transport = RecordingTransport::new(json!({"data": []}));

        let mut search = transport
            .search_with(SearchConfig::default().with_default_group("main"))
            .set_table("user");
        search.get_rows_default().await.unwrap();

        assert_eq!(search.group_keys(), vec!["main"]);
    }
}

// =============================================================================
// Totals
// =============================================================================

mod total {
    use super::*;

    #[tokio::test]
    async fn test_count_value() {
        let transport = RecordingTransport::new(json!({"data": [{"count": 128}]}));

        let total = transport
            .search()
            .set_table("friend")
            .add_filter("uid1 = me()")
            .add_sort("uid2", "desc")
            .set_range(10)
            .get_total()
            .await
            .unwrap();

        assert_eq!(total, 128);
        assert_eq!(
            transport.sent_params(),
            vec!["SELECT COUNT(*) FROM friend WHERE uid1 = me()"]
        );
    }

    #[tokio::test]
    async fn test_total_after_rows_counts_last_group() {
        let transport = RecordingTransport::new(json!({"data": [{"count": 3}]}));

        let mut search = transport
            .search()
            .set_table("friend")
            .add_filter("uid1 = me()")
            .set_range(10);
        search.get_rows("last").await.unwrap();
        let total = search.get_total().await.unwrap();

        assert_eq!(total, 3);
        assert_eq!(search.table(), Some("friend"));
        assert_eq!(search.range(), 10);
        assert_eq!(
            transport.sent_params(),
            vec![
                "SELECT * FROM friend WHERE uid1 = me() LIMIT 0, 10",
                "SELECT COUNT(*) FROM friend WHERE uid1 = me()",
            ]
        );
    }

    #[tokio::test]
    async fn test_total_after_multiquery_counts_last_group() {
        let transport = RecordingTransport::new(json!({"data": []}));

        let mut search = transport
            .search()
            .set_table("user")
            .add_filter("uid = me()")
            .group("me")
            .set_table("page")
            .filter_by("page_id", 20531316728u64);
        assert!(search.build("pages").is_some_and(|query| query.is_multi()));
        search.get_total().await.unwrap();

        assert_eq!(
            transport.sent_params(),
            vec!["SELECT COUNT(*) FROM page WHERE page_id=20531316728"]
        );
    }

    #[tokio::test]
    async fn test_row_count_fallback() {
        let transport = RecordingTransport::new(json!({"data": [{"uid": 1}, {"uid": 2}, {"uid": 3}]}));

        let total = transport.search().set_table("user").get_total().await.unwrap();

        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn test_missing_table() {
        let transport = RecordingTransport::new(json!({"data": []}));

        let err = transport.search().get_total().await.unwrap_err();

        assert!(matches!(err, Error::Query(QueryError::MissingTable)));
        assert!(transport.sent().is_empty());
    }
}
