use std::{
    collections::HashSet,
    fs,
    path::Path,
    process::{Command, Output},
};

fn rand_cnf(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rand_cnf"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run rand_cnf")
}

mod cli {
    use super::*;

    #[test]
    fn defaults() {
        let dir = tempfile::tempdir().unwrap();

        let output = rand_cnf(dir.path(), &[]);
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8_lossy(&output.stdout).trim(),
            "CNF file written to random.cnf"
        );

        let dimacs = fs::read_to_string(dir.path().join("random.cnf")).unwrap();
        assert_eq!(dimacs.lines().count(), 31);
        assert_eq!(dimacs.lines().next(), Some("p cnf 30 30"));
        assert!(dimacs
            .lines()
            .skip(1)
            .all(|line| line.split_whitespace().count() == 4 && line.ends_with(" 0")));
    }

    #[test]
    fn seeded_runs_identical() {
        let dir = tempfile::tempdir().unwrap();
        let args = ["--vars", "20", "--clauses", "50", "--lits", "4", "--seed", "31"];

        let first = rand_cnf(dir.path(), &[&args[..], &["--out", "first.cnf"]].concat());
        let second = rand_cnf(dir.path(), &[&args[..], &["--out", "second.cnf"]].concat());
        assert!(first.status.success());
        assert!(second.status.success());

        let first = fs::read(dir.path().join("first.cnf")).unwrap();
        let second = fs::read(dir.path().join("second.cnf")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn clause_too_long() {
        let dir = tempfile::tempdir().unwrap();

        let output = rand_cnf(dir.path(), &["--vars", "2", "--lits", "3", "--out", "long.cnf"]);
        assert!(!output.status.success());
        assert!(!dir.path().join("long.cnf").exists());
    }

    #[test]
    fn signed_sampling() {
        let dir = tempfile::tempdir().unwrap();

        let output = rand_cnf(
            dir.path(),
            &["--vars", "2", "--lits", "4", "--sampling", "signed", "--out", "signed.cnf"],
        );
        assert!(output.status.success());

        let dimacs = fs::read_to_string(dir.path().join("signed.cnf")).unwrap();
        assert_eq!(dimacs.lines().count(), 31);

        for line in dimacs.lines().skip(1) {
            let tokens = line.split_whitespace().collect::<Vec<_>>();
            assert_eq!(tokens.len(), 5);
            assert_eq!(tokens[4], "0");

            let literals = tokens[..4].iter().collect::<HashSet<_>>();
            assert_eq!(literals.len(), 4);
            assert!(tokens[..4].iter().all(|t| ["1", "-1", "2", "-2"].contains(t)));
        }
    }

    #[test]
    fn non_numeric() {
        let dir = tempfile::tempdir().unwrap();

        let output = rand_cnf(dir.path(), &["--clauses", "some"]);
        assert!(!output.status.success());
        assert!(!dir.path().join("random.cnf").exists());
    }

    #[test]
    fn unwritable_path() {
        let dir = tempfile::tempdir().unwrap();

        let output = rand_cnf(dir.path(), &["--out", "missing/out.cnf"]);
        assert!(!output.status.success());
        assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
    }
}
