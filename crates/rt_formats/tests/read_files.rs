use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use rt_formats::read_input;
use rt_formats::Format;
use rt_formats::FormatError;
use rt_formats::StructureInput;
use rt_structure::JunctionType;
use rt_structure::StructureConfig;

const INNER_LOOP_VIENNA: &str = ">inner\nGGAAGGAAACCAACC\n((..((...))..)) (-2.10)\n";

const INNER_LOOP_BPSEQ: &str = "\
# inner loop
1 G 15
2 G 14
3 A 0
4 A 0
5 G 11
6 G 10
7 A 0
8 A 0
9 A 0
10 C 6
11 C 5
12 A 0
13 A 0
14 C 2
15 C 1
";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_vienna_and_bpseq_agree() {
    let dir = TempDir::new().unwrap();
    let vienna = write(&dir, "inner.dbn", INNER_LOOP_VIENNA);
    let bpseq = write(&dir, "inner.bpseq", INNER_LOOP_BPSEQ);
    let config = StructureConfig::default();

    let a = read_input(&vienna, None).unwrap();
    assert!(matches!(a, StructureInput::Bracket { .. }));
    assert_eq!(a.rna().name(), Some("inner"));
    let a = a.into_structure(&config);

    let b = read_input(&bpseq, None).unwrap().into_structure(&config);

    assert_eq!(a.bn(), "((..((...))..))");
    assert_eq!(a.bn(), b.bn());
    assert_eq!(a.rna().seq(), b.rna().seq());
    assert_eq!(a.helices().len(), 2);
    assert_eq!(b.helices().len(), 2);

    let types: Vec<JunctionType> = b.junctions().iter().map(|j| j.junction_type()).collect();
    assert_eq!(types, vec![JunctionType::InnerLoop, JunctionType::ApicalLoop]);
}

#[test]
fn test_fasta_gives_an_open_chain() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "seqs.txt", ">one\nGGGAAACCC\n>two\nAAAA\n");

    assert!(matches!(read_input(&path, None), Err(FormatError::UnknownFormat(_))));

    let ss = read_input(&path, Some(Format::Fasta))
        .unwrap()
        .into_structure(&StructureConfig::default());
    assert_eq!(ss.rna().name(), Some("one"));
    assert_eq!(ss.bn(), ".........");
    assert!(ss.helices().is_empty());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.ct");
    assert!(matches!(read_input(&path, None), Err(FormatError::Io(_))));
}
