use super::*;

#[test]
fn test_empty_output_writes_nothing() {
    assert_eq!(output_paths(""), None);
}

#[test]
fn test_extension_is_replaced() {
    let paths = output_paths("foo.xyz").unwrap();
    assert_eq!(paths.pdf, PathBuf::from("foo.pdf"));
    assert_eq!(paths.png, PathBuf::from("foo.png"));
}

#[test]
fn test_bare_stem() {
    let paths = output_paths("out").unwrap();
    assert_eq!(paths.pdf, PathBuf::from("out.pdf"));
    assert_eq!(paths.png, PathBuf::from("out.png"));
}

#[test]
fn test_only_last_extension_stripped() {
    let paths = output_paths("plots/run.v2.pdf").unwrap();
    assert_eq!(paths.pdf, PathBuf::from("plots/run.v2.pdf"));
    assert_eq!(paths.png, PathBuf::from("plots/run.v2.png"));
}

#[test]
fn test_dotted_directory_is_kept() {
    let paths = output_paths("out.d/corr").unwrap();
    assert_eq!(paths.pdf, PathBuf::from("out.d/corr.pdf"));
    assert_eq!(paths.png, PathBuf::from("out.d/corr.png"));
}

#[test]
fn test_paths_iterate_pdf_then_png() {
    let paths = output_paths("a.b").unwrap();
    let all = paths.iter().collect::<Vec<_>>();
    assert_eq!(all, vec![Path::new("a.pdf"), Path::new("a.png")]);
}
