/// Builds a `reqwest::Client` carrying the given user agent.
///
/// Expands to the `Result` of the builder, so callers decide how to surface a TLS
/// backend failure.
#[macro_export]
macro_rules! client {
    ($x:expr) => {{
        $crate::reqwest::Client::builder().user_agent($x).build()
    }};
}

/// Collects the `name` field of a list of provider sub-objects into a `Vec<String>`.
#[macro_export]
macro_rules! names {
    ($x:expr) => {{
        $x.iter()
            .map(|item| item.name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect::<Vec<String>>()
    }};
}
