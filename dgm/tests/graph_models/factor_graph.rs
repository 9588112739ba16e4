use dgm::prelude::*;

fn chain() -> FactorGraph {
    let (x0, x1, x2) = (Var::new(0, 2), Var::new(1, 3), Var::new(2, 2));
    FactorGraph::new(vec![
        Factor::new(VarSet::from_pair(x2, x1)),
        Factor::new(VarSet::from_pair(x0, x1)),
        Factor::new(VarSet::from(x2)),
    ]).unwrap()
}

#[test]
pub fn test_variables_are_union_of_scopes() {
    let fg = chain();
    assert_eq!(fg.nr_vars(), 3);
    assert_eq!(fg.nr_factors(), 3);
    assert_eq!(fg.variables().iter().map(|v| v.label()).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(fg.var(1).states(), 3);
    assert_eq!(fg.all_vars().nr_states(), 12);
}

#[test]
pub fn test_neighbors() {
    let fg = chain();
    assert_eq!(fg.nb_v(0), &[1]);
    assert_eq!(fg.nb_v(1), &[0, 1]);
    assert_eq!(fg.nb_v(2), &[0, 2]);
    assert_eq!(fg.nb_f(0), &[1, 2]);
    assert_eq!(fg.nb_f(2), &[2]);
}

#[test]
pub fn test_find_var() {
    let fg = chain();
    assert_eq!(fg.find_var(&Var::new(2, 2)), Some(2));
    assert_eq!(fg.find_var(&Var::new(5, 2)), None);
}

#[test]
pub fn test_conflicting_number_of_states() {
    let res = FactorGraph::new(vec![
        Factor::new(VarSet::from(Var::new(0, 2))),
        Factor::new(VarSet::from(Var::new(0, 3))),
    ]);

    match *res.unwrap_err().kind() {
        ErrorKind::InvalidModel(_) => (),
        ref kind => panic!("unexpected error: {}", kind)
    }
}

#[test]
pub fn test_json() {
    let fg = FactorGraph::from_json(r#"{"factors": [
        {"vars": [{"label": 0, "states": 2}, {"label": 1, "states": 2}], "values": [2, 1, 1, 2]},
        {"vars": [{"label": 1, "states": 2}], "values": [0.5, 1.5]}
    ]}"#).unwrap();
    assert_eq!(fg.nr_vars(), 2);
    assert_eq!(fg.factor(1).values(), &[0.5, 1.5]);

    let back = FactorGraph::from_json(&fg.to_json().unwrap()).unwrap();
    assert_eq!(back.variables(), fg.variables());
    assert_eq!(back.factors(), fg.factors());

    let bad = FactorGraph::from_json(r#"{"factors": [{"vars": [{"label": 0, "states": 2}], "values": [1, 2, 3]}]}"#);
    assert!(bad.is_err());
}
