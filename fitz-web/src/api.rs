use crate::config::FrontendConfig;
use once_cell::unsync::OnceCell;
use shared::FitzClient;

thread_local! {
    static SHARED_CLIENT: OnceCell<FitzClient> = const { OnceCell::new() };
}

/// The unauthenticated client every screen derives its requests from.
pub fn shared_client() -> FitzClient {
    SHARED_CLIENT.with(|cell| {
        cell.get_or_init(|| FitzClient::new(FrontendConfig::new().api_base_url()))
            .clone()
    })
}

/// Client carrying `token`, or the bare client when logged out.
pub fn client_for(token: Option<&str>) -> FitzClient {
    let client = shared_client();
    match token {
        Some(token) => client.with_token(token),
        None => client,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_for_token() {
        assert!(client_for(None).token().is_none());
        assert_eq!(client_for(Some("t1")).token(), Some("t1"));
        assert_eq!(shared_client().base_url(), client_for(None).base_url());
    }
}
