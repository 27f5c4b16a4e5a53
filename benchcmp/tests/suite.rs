//!
//! The revision resolution and suite build tests.
//!

mod common;

use chrono::Utc;

use benchcmp::refs;
use benchcmp::BenchSuite;
use benchcmp::BinaryCache;
use benchcmp::BuildEnvironment;
use benchcmp::CheckoutGuard;
use benchcmp::Error;
use benchcmp::PackageScope;

use self::common::FakeRevisionControl;
use self::common::FakeToolchain;
use self::common::BRANCH;
use self::common::GRANDPARENT;
use self::common::HEAD;
use self::common::PARENT;

fn scope() -> PackageScope {
    PackageScope::new(vec!["./pkg/sql".to_owned(), "./pkg/kv".to_owned()])
}

fn environment<'a>(
    revision_control: &'a FakeRevisionControl,
    toolchain: &'a FakeToolchain,
    cache: &'a BinaryCache,
) -> BuildEnvironment<'a> {
    BuildEnvironment {
        revision_control,
        toolchain,
        cache,
        post_checkout: Some("make gen"),
    }
}

#[test]
fn refs_default_to_head_and_its_parent() {
    let revision_control = FakeRevisionControl::default();

    let resolved = refs::resolve(&revision_control, None, None).unwrap();
    assert_eq!(resolved, (PARENT.to_owned(), HEAD.to_owned()));

    let resolved = refs::resolve(&revision_control, Some(""), Some("")).unwrap();
    assert_eq!(resolved, (PARENT.to_owned(), HEAD.to_owned()));
}

#[test]
fn old_ref_defaults_to_parent_of_explicit_new_ref() {
    let revision_control = FakeRevisionControl::default();

    let resolved = refs::resolve(&revision_control, None, Some(PARENT)).unwrap();
    assert_eq!(resolved, (GRANDPARENT.to_owned(), PARENT.to_owned()));

    let resolved = refs::resolve(
        &revision_control,
        Some(common::full(GRANDPARENT).as_str()),
        Some(common::full(HEAD).as_str()),
    )
    .unwrap();
    assert_eq!(resolved, (GRANDPARENT.to_owned(), HEAD.to_owned()));
}

#[test]
fn invalid_refs_are_rejected() {
    let revision_control = FakeRevisionControl::default();

    let error = refs::resolve(&revision_control, Some("nope"), None).unwrap_err();
    assert!(matches!(error, Error::InvalidRef { reference } if reference == "nope"));

    let error = refs::resolve(&revision_control, None, Some("nope")).unwrap_err();
    assert!(matches!(error, Error::InvalidRef { reference } if reference == "nope"));

    let error = refs::resolve(&revision_control, None, Some(GRANDPARENT)).unwrap_err();
    assert!(matches!(error, Error::RevisionControl(_)));

    assert!(revision_control.checkouts().is_empty());
}

#[test]
fn build_checks_out_and_builds_every_package() {
    let root = tempfile::tempdir().unwrap();
    let cache = BinaryCache::new(root.path());
    let revision_control = FakeRevisionControl::default();
    let mut toolchain =
        FakeToolchain::new(&["example.com/kv", "example.com/sql", "example.com/doc"]);
    toolchain.without_benchmarks = vec!["example.com/doc".to_owned()];

    let mut suite = BenchSuite::new(HEAD.to_owned());
    suite
        .build(
            &environment(&revision_control, &toolchain, &cache),
            &scope(),
            Utc::now(),
        )
        .unwrap();

    assert_eq!(
        revision_control.checkouts(),
        vec![(HEAD.to_owned(), Some("make gen".to_owned()))]
    );
    assert_eq!(
        toolchain.expansions.borrow().clone(),
        vec![vec!["./pkg/kv".to_owned(), "./pkg/sql".to_owned()]]
    );
    assert_eq!(
        suite.test_files().sorted(),
        vec!["example.com_kv.test", "example.com_sql.test"]
    );

    let binary_directory = suite.binary_directory().unwrap();
    assert_eq!(binary_directory, cache.binary_directory(HEAD, &scope()));
    assert!(binary_directory.join("example.com_kv.test").is_file());

    let output_path = suite.output_path().unwrap();
    assert!(output_path.starts_with(root.path().join(HEAD).join("artifacts")));
    assert!(output_path
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("out."));
    assert!(output_path.is_file());
}

#[test]
fn second_build_is_a_cache_hit() {
    let root = tempfile::tempdir().unwrap();
    let cache = BinaryCache::new(root.path());
    let revision_control = FakeRevisionControl::default();
    let toolchain = FakeToolchain::new(&["example.com/kv", "example.com/sql"]);
    let environment = environment(&revision_control, &toolchain, &cache);

    let mut first = BenchSuite::new(HEAD.to_owned());
    first.build(&environment, &scope(), Utc::now()).unwrap();
    let checkouts = revision_control.checkouts().len();
    let builds = toolchain.builds().len();

    let reordered = PackageScope::new(vec!["./pkg/kv".to_owned(), "./pkg/sql".to_owned()]);
    let mut second = BenchSuite::new(HEAD.to_owned());
    second.build(&environment, &reordered, Utc::now()).unwrap();

    assert_eq!(revision_control.checkouts().len(), checkouts);
    assert_eq!(toolchain.builds().len(), builds);
    assert_eq!(second.test_files(), first.test_files());
    assert_eq!(second.binary_directory(), first.binary_directory());
}

#[test]
fn different_scope_is_a_cache_miss() {
    let root = tempfile::tempdir().unwrap();
    let cache = BinaryCache::new(root.path());
    let revision_control = FakeRevisionControl::default();
    let toolchain = FakeToolchain::new(&["example.com/kv"]);
    let environment = environment(&revision_control, &toolchain, &cache);

    let mut first = BenchSuite::new(HEAD.to_owned());
    first.build(&environment, &scope(), Utc::now()).unwrap();

    let narrow = PackageScope::new(vec!["./pkg/kv".to_owned()]);
    let mut second = BenchSuite::new(HEAD.to_owned());
    second.build(&environment, &narrow, Utc::now()).unwrap();

    assert_eq!(revision_control.checkouts().len(), 2);
    assert_ne!(second.binary_directory(), first.binary_directory());
}

#[test]
fn suite_is_built_only_once() {
    let root = tempfile::tempdir().unwrap();
    let cache = BinaryCache::new(root.path());
    let revision_control = FakeRevisionControl::default();
    let toolchain = FakeToolchain::new(&["example.com/kv"]);
    let environment = environment(&revision_control, &toolchain, &cache);

    let mut suite = BenchSuite::new(HEAD.to_owned());
    suite.build(&environment, &scope(), Utc::now()).unwrap();

    let error = suite.build(&environment, &scope(), Utc::now()).unwrap_err();
    assert!(matches!(error, Error::AlreadyBuilt { reference } if reference == HEAD));
    assert_eq!(revision_control.checkouts().len(), 1);
}

#[test]
fn failed_package_build_rolls_back_the_binary_directory() {
    let root = tempfile::tempdir().unwrap();
    let cache = BinaryCache::new(root.path());
    let revision_control = FakeRevisionControl::default();
    let mut toolchain =
        FakeToolchain::new(&["example.com/a", "example.com/b", "example.com/c"]);
    toolchain.failing = Some("example.com/b".to_owned());

    let mut suite = BenchSuite::new(HEAD.to_owned());
    let error = suite
        .build(
            &environment(&revision_control, &toolchain, &cache),
            &scope(),
            Utc::now(),
        )
        .unwrap_err();

    assert!(matches!(error, Error::Build { ref reference, .. } if reference == HEAD));
    assert!(error.to_string().contains("example.com/b"));
    assert_eq!(toolchain.builds(), vec!["example.com/a", "example.com/b"]);
    assert!(!cache.binary_directory(HEAD, &scope()).exists());
    assert!(cache.artifacts_directory(HEAD).is_dir());

    let toolchain = FakeToolchain::new(&["example.com/a", "example.com/b", "example.com/c"]);
    let mut retry = BenchSuite::new(HEAD.to_owned());
    retry
        .build(
            &environment(&revision_control, &toolchain, &cache),
            &scope(),
            Utc::now(),
        )
        .unwrap();
    assert_eq!(revision_control.checkouts().len(), 2);
    assert_eq!(retry.test_files().len(), 3);
}

#[test]
fn failed_checkout_rolls_back_the_binary_directory() {
    let root = tempfile::tempdir().unwrap();
    let cache = BinaryCache::new(root.path());
    let revision_control = FakeRevisionControl {
        failing_checkout: Some(HEAD.to_owned()),
        ..FakeRevisionControl::default()
    };
    let toolchain = FakeToolchain::new(&["example.com/kv"]);

    let mut suite = BenchSuite::new(HEAD.to_owned());
    let error = suite
        .build(
            &environment(&revision_control, &toolchain, &cache),
            &scope(),
            Utc::now(),
        )
        .unwrap_err();

    assert!(matches!(error, Error::Build { .. }));
    assert!(toolchain.builds().is_empty());
    assert!(!cache.binary_directory(HEAD, &scope()).exists());
}

#[test]
fn nested_cache_directory_is_rejected() {
    let root = tempfile::tempdir().unwrap();
    let cache = BinaryCache::new(root.path());
    let revision_control = FakeRevisionControl::default();
    let toolchain = FakeToolchain::new(&["example.com/kv"]);
    let directory = common::seed_cache(&cache, HEAD, &scope(), &["kv.test"]);
    std::fs::create_dir(directory.join("nested")).unwrap();

    let mut suite = BenchSuite::new(HEAD.to_owned());
    let error = suite
        .build(
            &environment(&revision_control, &toolchain, &cache),
            &scope(),
            Utc::now(),
        )
        .unwrap_err();

    assert!(matches!(error, Error::UnexpectedDirectory { .. }));
    assert!(revision_control.checkouts().is_empty());
}

#[test]
fn unbuilt_suite_has_no_output() {
    let suite = BenchSuite::new(HEAD.to_owned());

    assert!(matches!(suite.output(), Err(Error::NotBuilt { .. })));
    assert!(matches!(
        suite.test_binary("kv.test"),
        Err(Error::NotBuilt { .. })
    ));
}

#[test]
fn guard_restores_branch_once_on_drop() {
    let revision_control = FakeRevisionControl::default();
    {
        let guard = CheckoutGuard::capture(&revision_control).unwrap();
        assert_eq!(guard.original(), Some(BRANCH));
        assert!(revision_control.checkouts().is_empty());
    }
    assert_eq!(revision_control.checkouts(), vec![(BRANCH.to_owned(), None)]);

    let detached = FakeRevisionControl::detached();
    {
        let guard = CheckoutGuard::capture(&detached).unwrap();
        assert_eq!(guard.original(), None);
    }
    assert!(detached.checkouts().is_empty());
}

#[test]
fn clashing_binary_names_fail_the_build() {
    let root = tempfile::tempdir().unwrap();
    let cache = BinaryCache::new(root.path());
    let revision_control = FakeRevisionControl::default();
    let toolchain = FakeToolchain::new(&["example.com/kv", "example.com/kv"]);

    let mut suite = BenchSuite::new(HEAD.to_owned());
    let error = suite
        .build(
            &environment(&revision_control, &toolchain, &cache),
            &scope(),
            Utc::now(),
        )
        .unwrap_err();

    assert!(matches!(error, Error::Build { .. }));
    assert!(error.to_string().contains("overwrote"));
    assert!(!cache.binary_directory(HEAD, &scope()).exists());
}

#[test]
fn underscored_and_nested_packages_get_separate_binaries() {
    let root = tempfile::tempdir().unwrap();
    let cache = BinaryCache::new(root.path());
    let revision_control = FakeRevisionControl::default();
    let toolchain = FakeToolchain::new(&["example.com/x/a_b", "example.com/x/a/b"]);

    let mut suite = BenchSuite::new(HEAD.to_owned());
    suite
        .build(
            &environment(&revision_control, &toolchain, &cache),
            &scope(),
            Utc::now(),
        )
        .unwrap();

    assert_eq!(suite.test_files().len(), 2);
}
