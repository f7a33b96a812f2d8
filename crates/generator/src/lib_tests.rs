use super::*;

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[test]
fn help_short_circuits() {
    assert_eq!(parse_args(&strings(&["--help"])).unwrap(), Command::Help);
    assert_eq!(parse_args(&strings(&["-h"])).unwrap(), Command::Help);
}

#[test]
fn pairs_parse_in_order() {
    let Command::Run(requests) =
        parse_args(&strings(&["basic.conf", "2", "deep.conf", "1"])).unwrap()
    else {
        panic!("expected a run command");
    };
    assert_eq!(
        requests,
        vec![
            Request {
                config_file: "basic.conf".to_string(),
                count: 2,
            },
            Request {
                config_file: "deep.conf".to_string(),
                count: 1,
            },
        ]
    );
}

#[test]
fn odd_or_empty_argument_lists_are_rejected() {
    assert!(parse_args(&strings(&[])).is_err());
    assert!(parse_args(&strings(&["basic.conf"])).is_err());
    assert!(parse_args(&strings(&["basic.conf", "2", "deep.conf"])).is_err());
}

#[test]
fn counts_must_be_positive_integers() {
    assert!(parse_args(&strings(&["basic.conf", "zero"])).is_err());
    assert!(parse_args(&strings(&["basic.conf", "0"])).is_err());
    assert!(parse_args(&strings(&["basic.conf", "-3"])).is_err());
}

#[test]
fn output_names_strip_conf_suffix() {
    assert_eq!(output_filename("basic.conf", 1), "basic_1.nn");
    assert_eq!(output_filename("nets/deep.conf", 3), "nets/deep_3.nn");
    assert_eq!(output_filename("plain", 2), "plain_2.nn");
}
