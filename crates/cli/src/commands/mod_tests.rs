use super::*;

fn parse(line: &str) -> Option<Command> {
    parse_line(line).expect("line should parse")
}

#[test]
fn blank_lines_are_ignored() {
    for line in ["", "   ", "\n", "\t \r\n"] {
        assert_eq!(parse(line), None, "{line:?}");
    }
}

#[test]
fn parses_each_command() {
    let cases: &[(&str, Command)] = &[
        (
            "create a.txt",
            Command::Create {
                name: "a.txt".into(),
                content: String::new(),
            },
        ),
        (
            "create a.txt hello   big world\n",
            Command::Create {
                name: "a.txt".into(),
                content: "hello big world".into(),
            },
        ),
        ("read a.txt", Command::Read { name: "a.txt".into() }),
        ("delete a.txt", Command::Delete { name: "a.txt".into() }),
        ("info a.txt", Command::Info { name: "a.txt".into() }),
        ("list", Command::List),
        ("server", Command::Server { port: None }),
        ("server 8080", Command::Server { port: Some(8080) }),
        ("help", Command::Help),
        ("exit", Command::Exit),
    ];

    for (line, expected) in cases {
        assert_eq!(parse(line).as_ref(), Some(expected), "line {line:?}");
    }
}

#[test]
fn command_word_is_case_insensitive() {
    assert_eq!(parse("LIST"), Some(Command::List));
    assert_eq!(
        parse("  Read Notes.TXT  "),
        Some(Command::Read {
            name: "Notes.TXT".into()
        })
    );
}

#[test]
fn missing_arguments_report_usage() {
    let cases = [
        ("create", CREATE_USAGE),
        ("read", READ_USAGE),
        ("delete ", DELETE_USAGE),
        ("info", INFO_USAGE),
    ];

    for (line, usage) in cases {
        let err = parse_line(line).expect_err("should fail");
        assert_eq!(err, CommandError::MissingArgument { usage });
        assert_eq!(err.to_string(), format!("Usage: {usage}"));
    }
}

#[test]
fn unknown_command_is_reported_lowercased() {
    let err = parse_line("FrobNicate now").expect_err("unknown");
    assert_eq!(
        err.to_string(),
        "Unknown command: frobnicate. Type 'help' for available commands."
    );
}

#[test]
fn invalid_port_is_rejected() {
    for raw in ["abc", "-1", "70000"] {
        let err = parse_line(&format!("server {raw}")).expect_err("bad port");
        assert_eq!(
            err,
            CommandError::InvalidPort {
                value: raw.to_owned()
            }
        );
    }
}
