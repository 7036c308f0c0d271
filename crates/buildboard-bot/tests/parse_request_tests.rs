use buildboard_bot::commands::CommandRequest;
use buildboard_bot::discord::parse_request;

#[test]
fn test_missing_options_parse_as_empty() {
    match parse_request("add", &[]) {
        Some(CommandRequest::Add(args)) => {
            assert_eq!(args.name, "");
            assert_eq!(args.code, "");
            assert_eq!(args.description, "");
        }
        other => panic!("expected add request, got {:?}", other),
    }
}

#[test]
fn test_known_commands_parse() {
    assert_eq!(parse_request("view", &[]).map(|r| r.name()), Some("view"));
    assert_eq!(parse_request("delete", &[]).map(|r| r.name()), Some("delete"));
}

#[test]
fn test_unknown_command_is_none() {
    assert!(parse_request("purge", &[]).is_none());
}
