// Criterion benchmarks for the SkillSwap API

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use skillswap_api::core::{authorize_transition, classify, title_overlaps};
use skillswap_api::models::{Exchange, ExchangeStatus, Skill, SkillCategory, SkillLevel};

fn create_candidate(id: usize) -> Skill {
    let teaches = id % 2 == 0;
    Skill {
        id: id as i32,
        title: if id % 3 == 0 {
            format!("Guitar lessons {}", id)
        } else {
            format!("Photography basics {}", id)
        },
        description: "Weekly sessions".to_string(),
        category: SkillCategory::Music,
        category_id: Some(1),
        level: SkillLevel::Intermediate,
        can_teach: teaches,
        want_learn: !teaches,
        created_at: Utc::now(),
        updated_at: None,
    }
}

fn create_source() -> Skill {
    Skill {
        id: 9999,
        title: "Guitar".to_string(),
        description: "Looking for a tutor".to_string(),
        category: SkillCategory::Music,
        category_id: Some(1),
        level: SkillLevel::Beginner,
        can_teach: false,
        want_learn: true,
        created_at: Utc::now(),
        updated_at: None,
    }
}

fn create_exchange() -> Exchange {
    Exchange {
        id: 1,
        sender_id: 1,
        receiver_id: 2,
        skill_id: 10,
        message: None,
        status: ExchangeStatus::Pending,
        hours_proposed: 3,
        created_at: Utc::now(),
        updated_at: None,
    }
}

fn bench_title_overlaps(c: &mut Criterion) {
    c.bench_function("title_overlaps", |b| {
        b.iter(|| {
            title_overlaps(
                black_box("Guitar"),
                black_box("Classical guitar for beginners"),
            )
        });
    });
}

fn bench_transition_check(c: &mut Criterion) {
    let exchange = create_exchange();

    c.bench_function("authorize_transition", |b| {
        b.iter(|| {
            authorize_transition(
                black_box(&exchange),
                black_box(ExchangeStatus::Accepted),
                black_box(2),
            )
        });
    });
}

fn bench_matching(c: &mut Criterion) {
    let source = create_source();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Skill> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("classify_candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    candidates
                        .iter()
                        .filter(|s| title_overlaps(black_box(&source.title), &s.title))
                        .filter_map(|s| classify(black_box(&source), s).map(|role| (s.id, role)))
                        .collect::<Vec<_>>()
                });
            },
        );
    }

    group.finish();
}

fn bench_matching_pipeline(c: &mut Criterion) {
    let source = create_source();
    let candidates: Vec<Skill> = (0..100).map(create_candidate).collect();

    c.bench_function("matching_pipeline_100_candidates", |b| {
        b.iter(|| {
            let matches: Vec<_> = candidates
                .iter()
                .filter(|s| title_overlaps(&source.title, &s.title))
                .filter_map(|s| classify(&source, s).map(|role| (s.id, role)))
                .collect();

            black_box(matches)
        });
    });
}

criterion_group!(
    benches,
    bench_title_overlaps,
    bench_transition_check,
    bench_matching,
    bench_matching_pipeline
);

criterion_main!(benches);
