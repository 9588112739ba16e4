use dgm::prelude::*;
use graph_models::inferences::mock;

fn expect_kind<T, F: Fn(&ErrorKind) -> bool>(res: Result<T>, is_expected: F) {
    match res {
        Ok(_) => panic!("expected an error"),
        Err(err) => assert!(is_expected(err.kind()), "unexpected error: {}", err)
    }
}

#[test]
pub fn test_binary_pair() {
    let (a, b, fg) = mock::binary_pair();
    let mut exact = ExactInf::new(fg, &mock::verbose(0)).unwrap();
    assert_eq!(exact.run().unwrap(), 0.0);

    assert!((exact.log_z() - 6.0f64.ln()).abs() < 1e-12);
    ::assert_all_close(exact.belief(&a).unwrap().values(), &[0.5, 0.5]);
    ::assert_all_close(exact.belief(&b).unwrap().values(), &[0.5, 0.5]);

    let joint = exact.belief_set(&VarSet::from_pair(a, b)).unwrap();
    assert_eq!(joint.vars(), &VarSet::from_pair(a, b));
    ::assert_all_close(joint.values(), &[1.0 / 3.0, 1.0 / 6.0, 1.0 / 6.0, 1.0 / 3.0]);
    ::assert_all_close(exact.belief_f(0).values(), joint.values());
}

#[test]
pub fn test_matches_product_of_factors() {
    for fg in mock::get_models() {
        let joint = mock::joint(&fg);
        let mut exact = ExactInf::new(fg.clone(), &mock::verbose(0)).unwrap();
        exact.run().unwrap();

        // sum of all joint weights is the partition sum
        assert!((exact.log_z() - joint.sum().ln()).abs() < 1e-9);

        let beliefs = exact.beliefs();
        assert_eq!(beliefs.len(), fg.nr_vars());
        for (i, var) in fg.variables().iter().enumerate() {
            let expected = joint.marginal(&VarSet::from(*var), true).unwrap();
            assert_eq!(beliefs[i].vars(), &VarSet::from(*var));
            ::assert_all_close(beliefs[i].values(), expected.values());
            ::assert_all_close(exact.belief(var).unwrap().values(), expected.values());
            assert!((beliefs[i].sum() - 1.0).abs() < 1e-9);
        }

        for (i, factor) in fg.factors().iter().enumerate() {
            let expected = joint.marginal(factor.vars(), true).unwrap();
            ::assert_all_close(exact.belief_f(i).values(), expected.values());
            ::assert_all_close(exact.belief_set(factor.vars()).unwrap().values(), expected.values());
        }
    }
}

#[test]
pub fn test_belief_of_subset_of_factor_scope() {
    let fg = mock::get_models().pop().unwrap();
    let joint = mock::joint(&fg);
    let scope = fg.factor(0).vars().clone();
    let sub = VarSet::from_pair(scope.vars()[1], scope.vars()[3]);

    let mut exact = ExactInf::new(fg, &mock::verbose(0)).unwrap();
    exact.run().unwrap();

    let belief = exact.belief_set(&sub).unwrap();
    assert_eq!(belief.vars(), &sub);
    ::assert_all_close(belief.values(), joint.marginal(&sub, true).unwrap().values());
}

#[test]
pub fn test_belief_not_covered_by_a_factor() {
    let fg = mock::get_models().remove(1);
    let (first, last) = (*fg.var(0), *fg.var(3));
    let mut exact = ExactInf::new(fg, &mock::verbose(0)).unwrap();
    exact.run().unwrap();

    expect_kind(exact.belief_set(&VarSet::from_pair(first, last)), |k| match *k {
        ErrorKind::BeliefNotAvailable(_) => true,
        _ => false
    });
}

#[test]
pub fn test_unknown_variable() {
    let (_, _, fg) = mock::binary_pair();
    let exact = ExactInf::new(fg, &mock::verbose(0)).unwrap();

    expect_kind(exact.belief(&Var::new(42, 2)), |k| match *k {
        ErrorKind::UnknownVariable(_) => true,
        _ => false
    });
}

#[test]
pub fn test_zero_partition_sum() {
    let a = Var::new(0, 2);
    let b = Var::new(1, 3);
    let fg = FactorGraph::new(vec![
        Factor::from_values(VarSet::from(a), vec![1.0, 2.0]).unwrap(),
        Factor::zeros(VarSet::from(b)),
    ]).unwrap();

    let mut exact = ExactInf::new(fg, &mock::verbose(0)).unwrap();
    expect_kind(exact.run(), |k| match *k {
        ErrorKind::InvalidModel(_) => true,
        _ => false
    });

    // nothing from the failed run is published
    assert_eq!(exact.log_z(), 0.0);
    for belief in exact.beliefs() {
        assert!(belief.values().iter().all(|&v| v == 0.0));
    }
}

#[test]
pub fn test_init_resets_results() {
    let (a, _, fg) = mock::binary_pair();
    let mut exact = ExactInf::new(fg, &mock::verbose(0)).unwrap();
    exact.run().unwrap();

    exact.init();
    exact.init();
    assert_eq!(exact.log_z(), 0.0);
    ::assert_all_close(exact.belief(&a).unwrap().values(), &[0.0, 0.0]);
    ::assert_all_close(exact.belief_f(0).values(), &[0.0; 4]);

    exact.run().unwrap();
    ::assert_all_close(exact.belief(&a).unwrap().values(), &[0.5, 0.5]);
    assert!((exact.log_z() - 6.0f64.ln()).abs() < 1e-12);
}

#[test]
pub fn test_unsupported_methods() {
    let (a, _, fg) = mock::binary_pair();
    let mut exact = ExactInf::new(fg, &mock::verbose(0)).unwrap();
    exact.run().unwrap();

    let caps = exact.capabilities();
    assert!(!caps.selective_init);
    assert!(!caps.convergence);

    let is_not_implemented = |k: &ErrorKind| match *k {
        ErrorKind::NotImplemented(_) => true,
        _ => false
    };
    expect_kind(exact.max_diff(), is_not_implemented);
    expect_kind(exact.iterations(), is_not_implemented);
    expect_kind(exact.init_subset(&VarSet::from(a)), is_not_implemented);
}

#[test]
pub fn test_properties() {
    let (_, _, fg) = mock::binary_pair();

    expect_kind(ExactInf::new(fg.clone(), &PropertySet::new()), |k| match *k {
        ErrorKind::UnknownProperty(_) => true,
        _ => false
    });
    let bad: PropertySet = "[verbose=loud]".parse().unwrap();
    expect_kind(ExactInf::new(fg.clone(), &bad), |k| match *k {
        ErrorKind::UnknownProperty(_) => true,
        _ => false
    });

    let parsed: PropertySet = "[verbose=2]".parse().unwrap();
    let mut exact = ExactInf::new(fg, &parsed).unwrap();
    assert_eq!(exact.props().verbose, 2);
    assert_eq!(exact.print_properties(), "[verbose=2]");
    assert_eq!(exact.identify(), "EXACT[verbose=2]");

    exact.set_properties(&mock::verbose(0)).unwrap();
    assert_eq!(exact.get_properties(), mock::verbose(0));
    assert_eq!(exact.name(), "EXACT");
}

#[test]
pub fn test_clone_and_create() {
    let (a, _, fg) = mock::binary_pair();
    let mut alg = new_inf_alg("EXACT", fg, &mock::verbose(0)).unwrap();
    alg.run().unwrap();

    let copy = alg.clone();
    assert_eq!(copy.log_z(), alg.log_z());
    assert_eq!(copy.belief(&a).unwrap(), alg.belief(&a).unwrap());
    assert_eq!(copy.fg().nr_vars(), 2);

    let fresh = alg.create();
    assert_eq!(fresh.name(), "EXACT");
    assert_eq!(fresh.fg().nr_vars(), 0);
    assert!(fresh.beliefs().is_empty());
}

#[test]
pub fn test_unknown_algorithm() {
    let (_, _, fg) = mock::binary_pair();
    expect_kind(new_inf_alg("BP", fg, &mock::verbose(0)), |k| match *k {
        ErrorKind::UnknownAlgorithm(_) => true,
        _ => false
    });
}

#[test]
pub fn test_empty_graph() {
    let mut exact = ExactInf::new(FactorGraph::new(Vec::new()).unwrap(), &mock::verbose(0)).unwrap();
    exact.run().unwrap();
    assert_eq!(exact.log_z(), 0.0);
    assert!(exact.beliefs().is_empty());
}

#[test]
pub fn test_too_many_joint_states() {
    let factors = (0..70)
        .map(|i| Factor::new(VarSet::from(Var::new(i, 2))))
        .collect();
    let fg = FactorGraph::new(factors).unwrap();

    let mut exact = ExactInf::new(fg, &mock::verbose(0)).unwrap();
    expect_kind(exact.run(), |k| match *k {
        ErrorKind::InvalidModel(_) => true,
        _ => false
    });
}

#[test]
pub fn test_distance_to_exact_beliefs() {
    let (a, b, fg) = mock::binary_pair();
    let mut exact = ExactInf::new(fg, &mock::verbose(0)).unwrap();
    exact.run().unwrap();

    let joint = exact.belief_set(&VarSet::from_pair(a, b)).unwrap();
    let uniform = Factor::new(joint.vars().clone()).normalized().unwrap();
    assert!((joint.dist(&uniform, DistKind::LInf).unwrap() - 1.0 / 12.0).abs() < 1e-12);
    assert!((exact.belief(&a).unwrap().entropy() - 2.0f64.ln()).abs() < 1e-12);
    assert_eq!(joint.argmax(), (0, joint.get(0)));
}
