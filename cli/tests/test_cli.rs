#[cfg(test)]
mod tests {
    use clap::Parser;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };
    use wtp_cli::{
        cli::{CardArg, Cli, Commands},
        commands,
    };
    use wtp_shared::{config::DEFAULT_API_BASE, FallbackPolicy};

    const DEAD_BACKEND: &str = "http://127.0.0.1:9/api";

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wtp-cli").chain(args.iter().copied())).expect("valid args")
    }

    #[test]
    fn defaults_point_at_local_backend_with_samples() {
        std::env::remove_var("WTP_API_BASE");
        let cli = parse(&["recent"]);

        assert_eq!(cli.global.api_base, DEFAULT_API_BASE);
        assert_eq!(cli.global.fallback, FallbackPolicy::StaticSample);
        assert!(matches!(cli.command, Commands::Recent { limit: 3 }));
    }

    #[test]
    fn global_flags_flow_into_site_config() {
        let cli = parse(&["blogs", "--api-base", "https://api.example.org/api/", "--fallback", "none"]);

        let config = commands::site_config(&cli.global);

        assert_eq!(config.api_base_url, "https://api.example.org/api");
        assert_eq!(config.recent_fallback, FallbackPolicy::None);
        assert_eq!(config.stories_fallback, FallbackPolicy::None);
        assert_eq!(config.page_size, 9);
    }

    #[test]
    fn blog_lookup_needs_exactly_one_key() {
        assert!(Cli::try_parse_from(["wtp-cli", "blog"]).is_err());
        assert!(Cli::try_parse_from(["wtp-cli", "blog", "--id", "a", "--slug", "b"]).is_err());

        let Commands::Blog(lookup) = parse(&["blog", "--slug", "ward-sabhas"]).command else {
            panic!("expected blog command");
        };
        assert_eq!(lookup.slug.as_deref(), Some("ward-sabhas"));
        assert_eq!(lookup.id, None);
    }

    #[test]
    fn unknown_fallback_policy_is_rejected() {
        assert!(Cli::try_parse_from(["wtp-cli", "recent", "--fallback", "cache"]).is_err());
    }

    #[test]
    fn card_context_is_a_value_enum() {
        let cli = parse(&["cards", "--context", "related", "--page", "2"]);

        assert!(matches!(
            cli.command,
            Commands::Cards {
                context: CardArg::Related,
                page: 2
            }
        ));
    }

    #[tokio::test]
    async fn blogs_command_queries_the_backend() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/blogs"))
            .and(query_param("page", "2"))
            .and(query_param("search", "water"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": { "blogs": [] },
                "pagination": { "current": 2, "pages": 2, "total": 10, "limit": 9 }
            })))
            .expect(1)
            .mount(&server)
            .await;
        let base = format!("{}/api", server.uri());

        let cli = parse(&["blogs", "--api-base", &base, "--page", "2", "--search", "water"]);
        commands::run(cli).await.expect("blogs listed");
    }

    #[tokio::test]
    async fn zero_page_is_refused_before_any_request() {
        let cli = parse(&["blogs", "--api-base", DEAD_BACKEND, "--page", "0"]);

        let err = commands::run(cli).await.expect_err("page 0");

        assert!(err.to_string().contains("1-based"));
    }

    #[tokio::test]
    async fn stories_fall_back_to_samples_when_allowed() {
        let cli = parse(&["stories", "--api-base", DEAD_BACKEND]);
        commands::run(cli).await.expect("samples printed");

        let cli = parse(&["story", "3", "--api-base", DEAD_BACKEND]);
        commands::run(cli).await.expect("sample story printed");
    }

    #[tokio::test]
    async fn dead_backend_fails_without_fallback() {
        let cli = parse(&["stories", "--api-base", DEAD_BACKEND, "--fallback", "none"]);
        assert!(commands::run(cli).await.is_err());

        let cli = parse(&["recent", "--api-base", DEAD_BACKEND, "--fallback", "none"]);
        assert!(commands::run(cli).await.is_err());
    }
}
