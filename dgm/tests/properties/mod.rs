use dgm::prelude::*;

fn assert_malformed(text: &str) {
    match *text.parse::<PropertySet>().unwrap_err().kind() {
        ErrorKind::MalformedProperty(_) => (),
        ref kind => panic!("unexpected error for {}: {}", text, kind)
    }
}

fn assert_unknown<T: ::std::fmt::Debug>(res: Result<T>) {
    match *res.unwrap_err().kind() {
        ErrorKind::UnknownProperty(_) => (),
        ref kind => panic!("unexpected error: {}", kind)
    }
}

#[test]
pub fn test_parse_nested_value() {
    let ps: PropertySet = "[a=1,b=[2,3]]".parse().unwrap();
    assert_eq!(ps.keys(), vec!["a", "b"]);
    assert_eq!(ps.get("a").unwrap(), &PropertyValue::Text("1".to_owned()));
    assert_eq!(ps.get("b").unwrap(), &PropertyValue::Text("[2,3]".to_owned()));
    assert_eq!(ps.get_as::<String>("b").unwrap(), "[2,3]");
}

#[test]
pub fn test_parse_malformed() {
    assert_malformed("[a=1,b=[2,3]");
    assert_malformed("a=1,b=2");
    assert_malformed("[a=1");
    assert_malformed("[a]");
    assert_malformed("[=1]");
    assert_malformed("[a=1]]");
    assert_malformed("[");
}

#[test]
pub fn test_parse_empty() {
    let ps: PropertySet = "[]".parse().unwrap();
    assert!(ps.is_empty());
}

#[test]
pub fn test_typed_get() {
    let ps: PropertySet = "[verbose=3,tol=1e-9,damped=1,name=exact,inner=[maxiter=10]]".parse().unwrap();
    assert_eq!(ps.get_as::<usize>("verbose").unwrap(), 3);
    assert_eq!(ps.get_as::<f64>("tol").unwrap(), 1e-9);
    assert_eq!(ps.get_as::<bool>("damped").unwrap(), true);
    assert_eq!(ps.get_as::<String>("name").unwrap(), "exact");

    let inner = ps.get_as::<PropertySet>("inner").unwrap();
    assert_eq!(inner.get_as::<usize>("maxiter").unwrap(), 10);

    assert_unknown(ps.get_as::<usize>("maxiter"));
    assert_unknown(ps.get_as::<usize>("name"));
    assert_unknown(ps.get_as::<bool>("tol"));
}

#[test]
pub fn test_typed_values() {
    let ps = PropertySet::new()
        .with("n", 4usize)
        .with("x", 0.5)
        .with("flag", false)
        .with("nested", PropertySet::new().with("verbose", 1usize));

    assert_eq!(ps.get_as::<usize>("n").unwrap(), 4);
    assert_eq!(ps.get_as::<f64>("n").unwrap(), 4.0);
    assert_eq!(ps.get_as::<f64>("x").unwrap(), 0.5);
    assert_eq!(ps.get_as::<bool>("flag").unwrap(), false);
    assert_eq!(ps.get_as::<String>("x").unwrap(), "0.5");
    assert_unknown(ps.get_as::<usize>("x"));
    assert_unknown(ps.get_as::<PropertySet>("n"));
}

#[test]
pub fn test_display_and_parse_again() {
    let ps = PropertySet::new()
        .with("verbose", 1usize)
        .with("damping", 0.25)
        .with("logdomain", true)
        .with("inner", PropertySet::new().with("b", "x").with("a", 2usize));

    let text = ps.to_string();
    assert_eq!(text, "[damping=0.25,inner=[a=2,b=x],logdomain=1,verbose=1]");

    let parsed: PropertySet = text.parse().unwrap();
    assert_eq!(parsed.get_as::<usize>("verbose").unwrap(), 1);
    assert_eq!(parsed.get_as::<f64>("damping").unwrap(), 0.25);
    assert_eq!(parsed.get_as::<bool>("logdomain").unwrap(), true);
    assert_eq!(parsed.get_as::<PropertySet>("inner").unwrap().to_string(), "[a=2,b=x]");
}
