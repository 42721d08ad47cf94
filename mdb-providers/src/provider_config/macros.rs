#[macro_export]
macro_rules! api_config {
    ($provider:expr, $search_url:expr, $base_url:expr, $requires_key:expr) => {
        ApiConfig {
            name: String::from($provider.as_str()),
            pretty_name: String::from($provider.pretty_name()),
            provider: $provider,
            search_url: String::from($search_url),
            base_url: String::from($base_url),
            api_key: None,
            requires_key: $requires_key,
            user_agent: $provider.user_agent(),
            enabled: true,
        }
    };
}
