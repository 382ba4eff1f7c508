use super::*;

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(4000);
    raw.logging.level = Some("info".to_string());

    let overrides = ServeOverrides {
        server_port: Some(4321),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.server.public_addr.port(), 4321);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn defaults_resolve_without_any_source() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.server.public_addr.to_string(), "127.0.0.1:3000");
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
    assert_eq!(settings.site.theme, Theme::System);
    assert_eq!(settings.site.brand_title, DEFAULT_BRAND_TITLE);
    assert!(settings.catalog.path.is_none());
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = ServeOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn zero_port_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(0);

    let err = Settings::from_raw(raw).expect_err("port zero must fail");
    assert!(matches!(err, LoadError::Invalid { key: "server.port", .. }));
}

#[test]
fn invalid_host_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.host = Some("not a host".to_string());

    let err = Settings::from_raw(raw).expect_err("bad host must fail");
    assert!(matches!(err, LoadError::Invalid { key: "server.host", .. }));
}

#[test]
fn unknown_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("chatty".to_string());

    let err = Settings::from_raw(raw).expect_err("bad level must fail");
    assert!(matches!(err, LoadError::Invalid { key: "logging.level", .. }));
}

#[test]
fn theme_parses_case_insensitively() {
    let mut raw = RawSettings::default();
    raw.site.theme = Some("Dark".to_string());
    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.site.theme, Theme::Dark);
    assert_eq!(settings.site.theme.as_str(), "dark");

    let mut raw = RawSettings::default();
    raw.site.theme = Some("sepia".to_string());
    let err = Settings::from_raw(raw).expect_err("unknown theme must fail");
    assert!(matches!(err, LoadError::Invalid { key: "site.theme", .. }));
}

#[test]
fn blank_brand_title_is_rejected() {
    let mut raw = RawSettings::default();
    raw.site.brand_title = Some("   ".to_string());

    let err = Settings::from_raw(raw).expect_err("blank title must fail");
    assert!(matches!(err, LoadError::Invalid { key: "site.brand_title", .. }));
}

#[test]
fn catalog_path_override_applies_to_check_command() {
    let mut raw = RawSettings::default();
    raw.catalog.path = Some(PathBuf::from("from-file.toml"));

    raw.apply_catalog_override(&CatalogOverride {
        catalog_path: Some(PathBuf::from("/srv/posts.toml")),
    });
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(
        settings.catalog.path.as_deref(),
        Some(std::path::Path::new("/srv/posts.toml"))
    );
}

#[test]
fn default_to_serve_command() {
    let args = CliArgs::parse_from(["folio"]);
    let command = args
        .command
        .unwrap_or(Command::Serve(Box::<ServeArgs>::default()));
    assert!(matches!(command, Command::Serve(_)));
}

#[test]
fn parse_serve_overrides() {
    let args = CliArgs::parse_from([
        "folio",
        "serve",
        "--server-host",
        "0.0.0.0",
        "--server-port",
        "8080",
        "--theme",
        "light",
        "--catalog-path",
        "/tmp/posts.toml",
    ]);

    match args.command.expect("serve command") {
        Command::Serve(serve) => {
            assert_eq!(serve.overrides.server_host.as_deref(), Some("0.0.0.0"));
            assert_eq!(serve.overrides.server_port, Some(8080));
            assert_eq!(serve.overrides.theme.as_deref(), Some("light"));
            assert_eq!(
                serve.overrides.catalog.catalog_path.as_deref(),
                Some(std::path::Path::new("/tmp/posts.toml"))
            );
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parse_check_catalog_arguments() {
    let args = CliArgs::parse_from(["folio", "check-catalog", "--catalog-path", "posts.toml"]);

    match args.command.expect("check-catalog command") {
        Command::CheckCatalog(check) => {
            assert_eq!(
                check.catalog.catalog_path.as_deref(),
                Some(std::path::Path::new("posts.toml"))
            );
        }
        _ => panic!("wrong command parsed"),
    }
}
