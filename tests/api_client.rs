mod error {
    pub use mailfeed::error::*;
}

mod endpoints {
    pub use mailfeed::api::endpoints::*;
}

mod models {
    pub use mailfeed::api::models::*;
}

mod pipeline {
    pub mod feed {
        pub use mailfeed::pipeline::feed::*;
    }
}

mod client_under_test {
    #![allow(dead_code)]

    include!("../src/api/client.rs");

    fn transport_parts(error: AppError) -> (Option<u16>, String) {
        match error {
            AppError::Transport { status, message } => (status, message),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn maps_detail_message_from_error_body() {
        let error = map_api_error(
            StatusCode::BAD_GATEWAY,
            r#"{"detail":"<HttpError 403 when requesting gmail>"}"#,
        );

        let (status, message) = transport_parts(error);
        assert_eq!(status, Some(502));
        assert_eq!(message, "<HttpError 403 when requesting gmail>");
    }

    #[test]
    fn maps_validation_detail_as_json_text() {
        let error = map_api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":[{"loc":["query","days"],"msg":"ensure this value is less than or equal to 30"}]}"#,
        );

        let (status, message) = transport_parts(error);
        assert_eq!(status, Some(422));
        assert!(message.contains("less than or equal to 30"));
    }

    #[test]
    fn falls_back_to_raw_body_then_reason() {
        let (_, message) = transport_parts(map_api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "upstream exploded",
        ));
        assert_eq!(message, "upstream exploded");

        let (status, message) =
            transport_parts(map_api_error(StatusCode::INTERNAL_SERVER_ERROR, "  "));
        assert_eq!(status, Some(500));
        assert_eq!(message, "Internal Server Error");
    }

    #[test]
    fn keeps_base_url_without_trailing_slash() {
        let client = EmailClient::new("http://localhost:8000", None).expect("client builds");
        let url = client.endpoint_url(endpoints::list_endpoint());
        assert_eq!(url.as_str(), "http://localhost:8000/emails/");
    }
}
