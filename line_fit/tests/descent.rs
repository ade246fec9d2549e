use line_fit::{
    Dataset, FitError, InitPolicy, IterationLimit, LineRegression, Tick, Trainer, XScale,
    source::{Synthetic, read_table},
};

fn line(slope: f64, intercept: f64, xs: impl IntoIterator<Item = f64>) -> Dataset {
    let x: Vec<f64> = xs.into_iter().collect();
    let y = x.iter().map(|x| slope * x + intercept).collect();
    Dataset::new(x, y).unwrap()
}

fn run(trainer: &mut Trainer<line_fit::GradientDescent>) -> line_fit::FitReport {
    loop {
        if let Tick::Finished(report) = trainer.tick() {
            return report;
        }
    }
}

#[test]
fn converges_on_collinear_points() {
    let dataset = line(2.0, 1.0, (0..10).map(f64::from));
    let regression = LineRegression::new(dataset, 0.01, InitPolicy::Zero, XScale::Raw).unwrap();
    let mut trainer = Trainer::new(regression, IterationLimit::Limited(20_000));

    let report = run(&mut trainer);

    assert_eq!(report.iterations(), 20_000);
    assert!((report.slope() - 2.0).abs() < 1e-6, "m = {}", report.slope());
    assert!((report.intercept() - 1.0).abs() < 1e-6, "b = {}", report.intercept());
    assert!(report.loss() < 1e-10, "loss = {}", report.loss());
}

#[test]
fn converges_in_shifted_coordinates() {
    let dataset = line(3.0, -5000.0, (2000..2010).map(f64::from));
    let regression =
        LineRegression::new(dataset, 0.01, InitPolicy::MinY, XScale::ShiftToMin).unwrap();
    let mut trainer = Trainer::new(regression, IterationLimit::Limited(20_000));

    let report = run(&mut trainer);

    assert!((report.slope() - 3.0).abs() < 1e-6);
    assert!((report.intercept_original() + 5000.0).abs() < 1e-6);
    assert!((trainer.regression().predict(2020.0) - 1060.0).abs() < 1e-4);
}

#[test]
fn loss_decreases_with_a_small_learning_rate() {
    let dataset = Synthetic::new(30, Some(3)).generate().unwrap();
    let mut regression =
        LineRegression::new(dataset, 0.001, InitPolicy::MinY, XScale::ShiftToMin).unwrap();

    let mut previous = regression.loss();
    for _ in 0..200 {
        let loss = regression.step();
        assert!(loss <= previous, "{loss} > {previous}");
        previous = loss;
    }
}

#[test]
fn loss_is_never_negative() {
    let dataset = read_table("x,y\n-3,7\n0,0.5\n2,-4\n9,11\n".as_bytes()).unwrap();

    for slope in [-100.0, -1.5, 0.0, 0.25, 42.0] {
        for intercept in [-1e6, -2.0, 0.0, 3.5, 1e6] {
            let init = InitPolicy::Explicit { slope, intercept };
            let regression =
                LineRegression::new(dataset.clone(), 0.1, init, XScale::Raw).unwrap();
            assert!(regression.compute_loss() >= 0.0);
        }
    }
}

#[test]
fn identical_runs_are_identical() {
    let dataset = Synthetic::new(40, Some(11)).generate().unwrap();
    let build = || {
        LineRegression::new(dataset.clone(), 0.0005, InitPolicy::MinY, XScale::Raw).unwrap()
    };

    let mut a = build();
    let mut b = build();
    for _ in 0..500 {
        a.step();
        b.step();
    }

    assert_eq!(a.slope().to_bits(), b.slope().to_bits());
    assert_eq!(a.intercept().to_bits(), b.intercept().to_bits());
    assert_eq!(a.loss().to_bits(), b.loss().to_bits());
}

#[test]
fn zero_limit_reports_the_initialization() {
    let dataset = read_table("Year,GDP\n1999,9.63\n2000,10.25\n2001,10.58\n".as_bytes()).unwrap();
    let regression =
        LineRegression::new(dataset, 0.001, InitPolicy::MinY, XScale::ShiftToMin).unwrap();
    let initial_loss = regression.loss();
    let mut trainer = Trainer::new(regression, IterationLimit::Limited(0));

    let report = run(&mut trainer);

    assert_eq!(report.iterations(), 0);
    assert_eq!(report.slope(), 0.0);
    assert_eq!(report.intercept(), 9.63);
    assert_eq!(report.intercept_original(), 9.63);
    assert_eq!(report.loss(), initial_loss);
}

#[test]
fn oversized_learning_rate_diverges_without_panicking() {
    let dataset = line(1.0, 0.0, (0..4).map(f64::from));
    let mut regression =
        LineRegression::new(dataset, 10.0, InitPolicy::Zero, XScale::Raw).unwrap();

    for _ in 0..2_000 {
        regression.step();
    }

    assert!(!regression.loss().is_finite());
    assert!(!regression.slope().is_finite());
}

#[test]
fn invalid_inputs_are_rejected_up_front() {
    assert!(matches!(
        Dataset::new(vec![], vec![]),
        Err(FitError::InvalidInput(_))
    ));
    assert!(matches!(
        Dataset::new(vec![1.0, 2.0], vec![1.0]),
        Err(FitError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        read_table("x,y\n1,abc\n".as_bytes()),
        Err(FitError::MalformedCell { .. })
    ));
}
