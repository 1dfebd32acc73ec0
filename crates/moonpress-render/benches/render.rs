//! Renderer benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use moonpress_render::{
    BinaryOp, Chunk, Clause, Expr, FunctionDecl, Identifier, Stmt, TableField,
};

/// Build a synthetic program: `count` functions, each declaring locals,
/// looping, and building a table.
fn sample_chunk(count: usize) -> Chunk {
    let mut body = Vec::with_capacity(count);
    for i in 0..count {
        let var = format!("value{i}");
        body.push(Stmt::Function(FunctionDecl {
            identifier: Some(Box::new(Expr::Identifier(Identifier::global(format!(
                "handler{i}"
            ))))),
            is_local: false,
            parameters: vec![Expr::Identifier(Identifier::local(var.clone()))],
            body: vec![
                Stmt::Local {
                    variables: vec![Identifier::local(format!("acc{i}"))],
                    init: vec![Expr::Table {
                        fields: vec![TableField::KeyString {
                            key: Identifier::global("seed"),
                            value: Expr::Identifier(Identifier::local(var.clone())),
                        }],
                    }],
                },
                Stmt::If {
                    clauses: vec![
                        Clause::If {
                            condition: Expr::Binary {
                                operator: BinaryOp::Greater,
                                left: Box::new(Expr::Identifier(Identifier::local(var.clone()))),
                                right: Box::new(Expr::Numeric { raw: "0".into() }),
                            },
                            body: vec![Stmt::Return {
                                arguments: vec![Expr::Identifier(Identifier::local(var))],
                            }],
                        },
                        Clause::Else {
                            body: vec![Stmt::Return {
                                arguments: vec![Expr::Nil { raw: "nil".into() }],
                            }],
                        },
                    ],
                },
            ],
        }));
    }
    Chunk::new(body)
}

fn bench_render(c: &mut Criterion) {
    let chunk = sample_chunk(256);
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(256));

    group.bench_function("synthetic", |b| {
        b.iter(|| moonpress_render::render(black_box(&chunk)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
