//! The JSON serve loop.

use cruck_eval::RunConfig;
use cruckc::commands::serve;
use cruckc::{Response, RunWorker};
use pretty_assertions::assert_eq;

fn serve_lines(input: &str) -> Vec<Response> {
    let worker = RunWorker::spawn(RunConfig::default()).unwrap();
    let mut output = Vec::new();
    serve(input.as_bytes(), &mut output, &worker).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn one_response_per_request() {
    let input = concat!(
        r#"{"kind":"run","sourceText":"print \"Hello\";"}"#,
        "\n",
        r#"{"kind":"run","sourceText":"func main() {\n    print \"v=\" + v;\n}"}"#,
        "\n",
    );
    assert_eq!(
        serve_lines(input),
        vec![
            Response::Output {
                lines: vec!["Hello".to_owned()]
            },
            Response::Error {
                message: "undeclared variable `v`".to_owned(),
                line: 1,
                col: 17,
            },
        ]
    );
}

#[test]
fn malformed_request_does_not_stop_the_loop() {
    let input = concat!(
        "{not json\n",
        "\n",
        r#"{"kind":"run","sourceText":"print \"still here\";"}"#,
        "\n",
    );
    let responses = serve_lines(input);
    assert_eq!(responses.len(), 2);
    let Response::Error { message, line, col } = &responses[0] else {
        panic!("expected an error response");
    };
    assert!(message.starts_with("malformed request"));
    assert_eq!((*line, *col), (0, 0));
    assert_eq!(
        responses[1],
        Response::Output {
            lines: vec!["still here".to_owned()]
        }
    );
}

#[test]
fn brace_errors_use_zero_based_coordinates() {
    let input = r#"{"kind":"run","sourceText":"func main() {\n    print \"a\";"}"#;
    assert_eq!(
        serve_lines(input),
        vec![Response::Error {
            message: "missing closing brace".to_owned(),
            line: 1,
            col: 14,
        }]
    );
}
