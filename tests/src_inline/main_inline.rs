use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["entropy-scatter"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_cli_defaults() {
    let cli = parse(&["base.csv", "approx.csv"]);
    assert_eq!(cli.base_csv, PathBuf::from("base.csv"));
    assert_eq!(cli.approx_csv, PathBuf::from("approx.csv"));
    assert!(!cli.show);
    assert_eq!(cli.output, "");
    assert_eq!(cli.column, "Entropy");
    assert!(cli.style.is_none());
}

#[test]
fn test_cli_show_and_output() {
    let cli = parse(&["-s", "-o", "plots/corr.pdf", "base.csv", "approx.csv"]);
    assert!(cli.show);
    assert_eq!(cli.output, "plots/corr.pdf");

    let request = cli.request();
    assert!(request.show);
    assert_eq!(
        request.inputs,
        [PathBuf::from("base.csv"), PathBuf::from("approx.csv")]
    );
}

#[test]
fn test_cli_requires_two_inputs() {
    assert!(Cli::try_parse_from(["entropy-scatter", "base.csv"]).is_err());
    assert!(Cli::try_parse_from(["entropy-scatter", "a.csv", "b.csv", "c.csv"]).is_err());
}

#[test]
fn test_cli_custom_column() {
    let cli = parse(&["--column", "Upper", "base.csv", "approx.csv"]);
    assert_eq!(cli.request().column, "Upper");
}

#[test]
fn test_load_style_default_without_flag() {
    let cli = parse(&["base.csv", "approx.csv"]);
    assert_eq!(cli.load_style().unwrap(), PlotStyle::default());
}

#[test]
fn test_load_style_missing_file_is_error() {
    let cli = parse(&["--style", "/nonexistent/style.json", "base.csv", "approx.csv"]);
    assert!(matches!(cli.load_style(), Err(AppError::Style(_))));
}

#[test]
fn test_run_failure_message_names_the_input() {
    let cli = parse(&["/nonexistent/base.csv", "/nonexistent/approx.csv"]);
    let err = run(cli).unwrap_err();
    assert!(matches!(err, AppError::Input(_)));
    assert!(err.to_string().contains("/nonexistent/base.csv"));
}
