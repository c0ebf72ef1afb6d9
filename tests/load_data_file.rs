use std::io::Write;

use gaussian_distribution::{Distribution, DomainError, Error, Gaussian, Parameters, StdevKind};
use rand::distributions::Distribution as _;
use rand::SeedableRng;
use tempfile::NamedTempFile;

fn data_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_file_and_estimates_parameters() {
    let file = data_file("1\n2\n3\n4\n5\n");
    let mut gaussian = Gaussian::new(10.0, 10.0);
    gaussian.load_data_file(file.path()).unwrap();
    assert_eq!(gaussian.data(), &[1, 2, 3, 4, 5]);
    assert!((gaussian.mean() - 3.0).abs() < 1e-12);
    assert!((gaussian.std() - 1.5811).abs() < 1e-4);
}

#[test]
fn population_load_of_single_value() {
    let file = data_file("17\n");
    let mut gaussian = Gaussian::default();
    gaussian
        .load_data_file_with(file.path(), StdevKind::Population)
        .unwrap();
    assert!((gaussian.mean() - 17.0).abs() < 1e-12);
    assert!(gaussian.std().abs() < 1e-12);
}

#[test]
fn sample_load_of_single_value_fails() {
    let file = data_file("17\n");
    let mut gaussian = Gaussian::default();
    let err = gaussian.load_data_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Domain(DomainError::TooFewSamples { .. })
    ));
    assert!(gaussian.data().is_empty());
}

#[test]
fn parse_error_leaves_distribution_untouched() {
    let mut gaussian = Gaussian::default();
    gaussian
        .load_data_file(data_file("3\n5\n7\n").path())
        .unwrap();
    let before = gaussian.clone();

    let err = gaussian
        .load_data_file(data_file("1\n2\n3.0\n").path())
        .unwrap_err();
    assert_eq!(err.to_string(), "line 3: \"3.0\" is not an integer literal");
    assert_eq!(gaussian, before);
}

#[test]
fn missing_file_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let mut gaussian = Gaussian::default();
    gaussian
        .load_data_file(data_file("2\n4\n6\n").path())
        .unwrap();
    let before = gaussian.clone();

    match gaussian.load_data_file(&path).unwrap_err() {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(gaussian, before);
}

#[test]
fn unreadable_line_is_reported_with_path_and_line() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"1\n2\n\xff\n4\n").unwrap();
    file.flush().unwrap();

    let mut gaussian = Gaussian::default();
    gaussian
        .load_data_file(data_file("10\n20\n").path())
        .unwrap();
    let before = gaussian.clone();

    let err = gaussian.load_data_file(file.path()).unwrap_err();
    match &err {
        Error::Read { path, line, .. } => {
            assert_eq!(path.as_deref(), Some(file.path()));
            assert_eq!(*line, 3);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains(&file.path().display().to_string()));
    assert_eq!(gaussian, before);
}

#[test]
fn base_parameters_only_replace_data() {
    let file = data_file("4\n8\n");
    let mut params = Parameters::new(1.0, 2.0);
    params.load_data_file(file.path()).unwrap();
    assert_eq!(params.data(), &[4, 8]);
    assert!((params.mean() - 1.0).abs() < 1e-12);
    assert!((params.std() - 2.0).abs() < 1e-12);
}

#[test]
fn estimates_recover_generating_distribution() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(2024);
    let normal = rand_distr::Normal::<f64>::new(50.0, 10.0).unwrap();
    let contents: String = (0..5_000)
        .map(|_| format!("{}\n", normal.sample(&mut rng).round() as i64))
        .collect();
    let file = data_file(&contents);

    let mut gaussian = Gaussian::default();
    gaussian.load_data_file(file.path()).unwrap();
    assert_eq!(gaussian.data().len(), 5_000);
    assert!((gaussian.mean() - 50.0).abs() < 1.0);
    assert!((gaussian.std() - 10.0).abs() < 1.0);

    let curve = gaussian.density_curve(Gaussian::DEFAULT_SPACES).unwrap();
    let (peak_x, _) = curve
        .points()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();
    assert!((peak_x - gaussian.mean()).abs() < 5.0);
}
