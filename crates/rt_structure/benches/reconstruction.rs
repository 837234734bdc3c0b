
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;

use rt_structure::Rna;
use rt_structure::SecondaryStructure;
use rt_structure::StructureConfig;

/// A cloverleaf-like fold repeated a few times: nested stems, multiloops and
/// hairpins, no pseudoknots.
fn cloverleaf(copies: usize) -> (String, String) {
    let unit = "(((((..((((....))))..((((....))))..((((....))))..)))))....";
    let bn = unit.repeat(copies);
    let seq = "GCAU".chars().cycle().take(bn.len()).collect();
    (seq, bn)
}

pub fn reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reconstruction");

    let (seq, bn) = cloverleaf(20);
    let rna = Rna::try_from(seq.as_str()).unwrap();
    let config = StructureConfig::default();

    group.bench_function("Cloverleaf x20 from dot-bracket.", |b| {
        b.iter(|| {
            let _ = SecondaryStructure::from_dot_bracket(rna.clone(), &bn, &config);
        });
    });

    let mut ss = SecondaryStructure::from_dot_bracket(rna.clone(), &bn, &config);
    group.bench_function("Cloverleaf x20 junction search.", |b| {
        b.iter(|| ss.find_junctions());
    });
}

criterion_group!(benches, reconstruct);
criterion_main!(benches);
