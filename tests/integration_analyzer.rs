use std::fs;
use std::path::Path;
use umlscan::core::{ExtractionConfig, ProjectAnalyzer};
use umlscan::formatters::MermaidFormatter;

fn write<P: AsRef<Path>>(p: P, content: &str) {
    let p = p.as_ref();
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, content).unwrap();
}

#[test]
fn analyzer_end_to_end_on_small_project() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();

    write(
        root.join("src/a_store.ts"),
        r#"
export class Store {}
export const createStore = () => {
  const store = new Store();
  return { store };
};
"#,
    );
    write(
        root.join("src/b_view.tsx"),
        r#"
export const View = ({ title }) => {
  return <div>{title}</div>;
};
"#,
    );
    write(root.join("src/Store.test.ts"), "export class ShouldNotAppear {}");
    write(root.join("node_modules/pkg/index.js"), "function hidden() {}");

    let project = ProjectAnalyzer::new().analyze(root).unwrap();

    let names: Vec<&str> = project.entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Store", "createStore", "View"]);
    // direct mention plus the `store` alias Store carries from the same file
    assert_eq!(project.entities[1].dependencies, vec!["Store", "Store"]);
    assert_eq!(project.entities[2].params, vec!["title"]);

    let out = root.join("diagram.mmd");
    MermaidFormatter::new()
        .format_to_file(&project, &out)
        .unwrap();
    let s = fs::read_to_string(&out).unwrap();

    assert!(s.starts_with("classDiagram\n"));
    assert!(s.contains("class createStore {"));
    assert!(s.contains("createStore --> Store"));
    assert!(!s.contains("ShouldNotAppear"));
    assert!(!s.contains("hidden"));
}

#[test]
fn dependencies_never_cross_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();

    write(root.join("a.ts"), "export class Engine {}");
    write(
        root.join("b.ts"),
        "export class Car { engine = new Engine(); }",
    );

    let project = ProjectAnalyzer::new().analyze(root).unwrap();
    assert_eq!(project.entities.len(), 2);
    assert!(project.entities.iter().all(|e| e.dependencies.is_empty()));
}

#[test]
fn custom_skip_marker_is_honoured() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();

    write(root.join("api.spec.ts"), "export class Spec {}");
    write(root.join("api.test.ts"), "export class Tested {}");

    let config = ExtractionConfig::default().with_skip_file_marker(".spec.");
    let project = ProjectAnalyzer::with_config(config).analyze(root).unwrap();

    let names: Vec<&str> = project.entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Tested"]);
}

#[test]
fn unreadable_source_aborts_the_run() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();

    write(root.join("ok.ts"), "export class Ok {}");
    fs::write(root.join("bad.ts"), [0xff, 0xfe, 0x00, 0x41]).unwrap();

    assert!(ProjectAnalyzer::new().analyze(root).is_err());
}
