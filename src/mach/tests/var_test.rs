use super::*;

#[test]
fn test_set_infers_kind() {
    let mut var = Var::new();
    var.set("a", "5").unwrap();
    var.set("b", "2.5f").unwrap();
    var.set("c", "'five'").unwrap();
    assert_eq!(var.fetch("a"), Ok(&Val::Integer(5)));
    assert_eq!(var.fetch("b"), Ok(&Val::Real(2.5)));
    assert_eq!(var.fetch("c"), Ok(&Val::Text("five".to_string())));
    assert_eq!(var.len(), 3);
    assert!(var.set("d", "five").is_err());
    assert!(!var.contains("d"));
}

#[test]
fn test_store_replaces_kind() {
    let mut var = Var::new();
    var.store("x", Val::Integer(1));
    var.store("x", Val::Text("one".to_string()));
    assert_eq!(var.fetch("x"), Ok(&Val::Text("one".to_string())));
    assert_eq!(var.len(), 1);
}

#[test]
fn test_undefined() {
    let mut var = Var::new();
    let e = var.fetch("y").unwrap_err();
    assert_eq!(e.code(), ErrorCode::UndefinedBinding);
    assert_eq!(e.to_string(), "UNDEFINED BINDING; y DOES NOT EXIST");
    assert!(var.clear("y").is_err());
    assert!(var.snapshot("y").is_err());
}

#[test]
fn test_clear() {
    let mut var = Var::new();
    var.store("x", Val::Integer(1));
    var.clear("x").unwrap();
    assert!(var.is_empty());
    assert!(var.fetch("x").is_err());
}

#[test]
fn test_snapshot() {
    let mut var = Var::new();
    var.store("x", Val::Integer(1));
    let binding = var.snapshot("x").unwrap();
    var.store("x", Val::Integer(2));
    assert_eq!(&*binding.name, "x");
    assert_eq!(binding.val, Val::Integer(1));
}

#[test]
fn test_stack() {
    let mut stack: Stack<Binding> = Stack::new(ErrorCode::EmptyStack, "THE STACK IS EMPTY");
    assert_eq!(stack.check().unwrap_err().code(), ErrorCode::EmptyStack);
    stack.push(Binding {
        name: "x".into(),
        val: Val::Integer(1),
    });
    assert!(stack.check().is_ok());
    assert_eq!(stack.pop().unwrap().val, Val::Integer(1));
    assert_eq!(
        stack.pop().unwrap_err().to_string(),
        "EMPTY STACK; THE STACK IS EMPTY"
    );
}
