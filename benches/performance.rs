use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::Path;
use umlscan::core::ProjectAnalyzer;
use umlscan::formatters::MermaidFormatter;

fn write_sample_project(root: &Path) {
    std::fs::create_dir_all(root.join("services")).unwrap();
    std::fs::create_dir_all(root.join("components")).unwrap();

    for i in 0..10 {
        let content = format!(
            r#"
export class Repository{i} {{
    items: Item[];

    find(id: string): Item {{
        return this.items.find((item) => item.id === id);
    }}

    save(item: Item) {{
        validate(item);
        this.items.push(item);
    }}
}}

export const createService{i} = (api, {{ logger }}) => {{
    const repository = new Repository{i}();
    const refresh = () => {{
        logger.info("refresh");
        return api.load();
    }};
    return {{ repository, refresh }};
}};

export function useService{i}() {{
    const {{ repository }} = createService{i}(client, {{ logger: console }});
    return repository.find("root");
}}
"#
        );
        std::fs::write(root.join("services").join(format!("service_{i}.ts")), content).unwrap();
    }

    for i in 0..10 {
        let content = format!(
            r#"
export const Panel{i} = ({{ title, onClose }}) => {{
    const [open, setOpen] = useState(false);
    useEffect(() => {{ subscribe(); }}, []);
    return <section onClick={{onClose}}>{{title}}</section>;
}};
"#
        );
        std::fs::write(root.join("components").join(format!("Panel{i}.tsx")), content).unwrap();
    }
}

fn benchmark_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_analysis");

    let test_dir = std::env::temp_dir().join("umlscan_bench");
    write_sample_project(&test_dir);

    group.bench_function("analyze_project", |b| {
        b.iter(|| {
            let project = ProjectAnalyzer::new().analyze(black_box(&test_dir)).unwrap();
            black_box(project)
        })
    });

    let project = ProjectAnalyzer::new().analyze(&test_dir).unwrap();
    group.bench_function("render_mermaid", |b| {
        b.iter(|| black_box(MermaidFormatter::new().format_project(black_box(&project))))
    });

    group.finish();
    let _ = std::fs::remove_dir_all(&test_dir);
}

criterion_group!(benches, benchmark_analysis);
criterion_main!(benches);
