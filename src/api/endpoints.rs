use super::models::RetrievalParams;

pub fn list_endpoint() -> &'static str {
    "/emails/"
}

pub fn list_query(params: &RetrievalParams) -> Vec<(String, String)> {
    vec![
        ("days".to_string(), params.days().to_string()),
        ("max_results".to_string(), params.max_results().to_string()),
    ]
}
