// Criterion benchmarks for Scholar Match

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use scholar_match::core::{Catalog, ClassRule, LevelSet, Matcher, normalize_value};
use scholar_match::models::{Profile, Program, Requirements};
use serde_json::json;

const CATEGORIES: [&str; 7] = ["General", "All", "Women", "SC", "OBC", "Minority", "SC/ST/OBC"];
const LEVELS: [&str; 5] = ["School", "UG", "UG/PG", "School/UG/PG", "UG (Technical)"];

fn create_program(id: usize) -> Program {
    let mut program = Program::new(
        format!("Program {}", id),
        CATEGORIES[id % CATEGORIES.len()],
        LEVELS[id % LEVELS.len()],
    );

    // Every other program declares explicit requirements
    if id % 2 == 0 {
        let requirements: Requirements = serde_json::from_value(json!({
            "income": (200_000 + (id % 8) * 100_000),
            "percentage": (40 + (id % 5) * 10),
            "class": (if id % 3 == 0 { "9-12" } else { "11+" })
        }))
        .unwrap();
        program.requirements = Some(requirements);
    }
    program
}

fn create_profile() -> Profile {
    normalize_value(&json!({
        "gender": "female",
        "caste": "OBC",
        "religion": "Sikh",
        "currentClass": "UG",
        "percentage": 72,
        "familyIncome": 350000,
        "age": 19
    }))
    .unwrap()
}

fn bench_class_rule_parse(c: &mut Criterion) {
    c.bench_function("class_rule_parse", |b| {
        b.iter(|| ClassRule::parse(black_box("12-UG")));
    });
}

fn bench_level_set(c: &mut Criterion) {
    let set = LevelSet::parse("School/UG (Technical)/PG");
    c.bench_function("level_set_admits", |b| {
        b.iter(|| set.admits(black_box(scholar_match::core::EducationLevel::PG)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_policy();
    let profile = create_profile();

    let mut group = c.benchmark_group("matching");

    for program_count in [10, 50, 100, 500, 1000].iter() {
        let catalog = Catalog::new((0..*program_count).map(create_program).collect());

        group.bench_with_input(
            BenchmarkId::from_parameter(program_count),
            &catalog,
            |b, catalog| {
                b.iter(|| matcher.find_eligible(black_box(catalog), black_box(&profile)));
            },
        );
    }

    group.finish();
}

fn bench_catalog_prepare(c: &mut Criterion) {
    let programs: Vec<Program> = (0..500).map(create_program).collect();
    c.bench_function("catalog_prepare_500", |b| {
        b.iter(|| Catalog::new(black_box(programs.clone())));
    });
}

criterion_group!(
    benches,
    bench_class_rule_parse,
    bench_level_set,
    bench_matching,
    bench_catalog_prepare
);
criterion_main!(benches);
