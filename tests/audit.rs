use ios_image_audit::report::render_text;
use ios_image_audit::{Finding, ScanFilter, audit};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample-app")
}

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn report(root: &Path) -> String {
    let result = audit(root, &ScanFilter::default()).unwrap();
    render_text(&result.findings)
}

#[test]
fn sample_app_report() {
    insta::assert_snapshot!(report(&fixture_root()), @r"
    Missing iPhone version: Images/background@2x~ipad.png
    Missing references: Images/button@2x.png
    Missing non-Retina version: Images/button@2x.png
    Potentially duplicate files: Images/star.png, Images/star@2x.png, Legacy/star.png
    Missing iPad version: Images/tab@2x~iphone.png
    Missing image files: missing-arrow (references: Classes/ViewController.m)
    ");
}

#[test]
fn complete_image_produces_no_report() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Images/logo.png", "");
    write(dir.path(), "Images/logo@2x.png", "");
    write(
        dir.path(),
        "Classes/AppDelegate.m",
        r#"UIImage *logo = [UIImage imageNamed:@"logo"];"#,
    );

    assert_eq!(report(dir.path()), "");
}

#[test]
fn unreferenced_retina_only_image() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Images/button@2x.png", "");

    let result = audit(dir.path(), &ScanFilter::default()).unwrap();
    assert_eq!(
        result.findings,
        vec![
            Finding::MissingReferences {
                image: "Images/button@2x.png".to_string(),
            },
            Finding::MissingNonRetina {
                image: "Images/button@2x.png".to_string(),
            },
        ]
    );
    assert!(
        !result
            .findings
            .iter()
            .any(|f| matches!(f, Finding::MissingImageFiles { .. }))
    );
}

#[test]
fn reference_with_directory_and_extension_matches_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Art/arrow.png", "");
    write(dir.path(), "Art/arrow@2x.png", "");
    write(
        dir.path(),
        "Base.lproj/Main.storyboard",
        r#"<imageView image="Art/arrow.png" id="a"/>"#,
    );

    assert_eq!(report(dir.path()), "");
}

#[test]
fn every_reference_is_listed_for_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "A.m", r#"[UIImage imageNamed:@"ghost"];"#);
    write(dir.path(), "B.mm", r#"[UIImage imageNamed:@"ghost@2x.png"];"#);

    assert_eq!(
        report(dir.path()),
        "Missing image files: ghost (references: A.m, B.mm)\n"
    );
}

#[test]
fn hidden_directories_are_not_audited() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), ".git/logo.png", "");
    write(dir.path(), ".build/Stale.m", r#"[UIImage imageNamed:@"stale"];"#);

    let result = audit(dir.path(), &ScanFilter::default()).unwrap();
    assert!(result.findings.is_empty());
    assert_eq!(result.diagnostics.image_files, 0);
    assert_eq!(result.diagnostics.source_files_scanned, 0);
}

#[cfg(unix)]
#[test]
fn symlinked_image_satisfies_its_reference() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Shared/icon.png", "");
    fs::create_dir_all(dir.path().join("App")).unwrap();
    std::os::unix::fs::symlink("../Shared/icon.png", dir.path().join("App/logo.png")).unwrap();
    write(dir.path(), "App/Menu.m", r#"[UIImage imageNamed:@"logo"];"#);

    let result = audit(dir.path(), &ScanFilter::default()).unwrap();
    assert_eq!(result.diagnostics.image_files, 2);
    assert_eq!(
        render_text(&result.findings),
        "Missing Retina version: App/logo.png\n\
         Missing references: Shared/icon.png\n\
         Missing Retina version: Shared/icon.png\n"
    );
}

#[test]
fn missing_root_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(audit(&dir.path().join("missing"), &ScanFilter::default()).is_err());
}
